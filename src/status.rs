//! Resource status vocabulary.
//!
//! [`Status`] is the enumerated state a tracked resource can be in, with a
//! canonical PascalCase string form that is part of the stable line format.
//! [`ResourceStatus`] is the per-resource record the collector keeps: the
//! latest status together with the message that arrived with it.

use std::fmt;

/// Computed status of a tracked resource.
///
/// The canonical string forms (`as_str`) appear verbatim in rendered output
/// lines and must stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Reconciliation is still in progress.
    InProgress,
    /// The resource failed to reach its desired state.
    Failed,
    /// The resource matches its desired state.
    Current,
    /// The resource is being deleted.
    Terminating,
    /// The resource does not exist.
    NotFound,
    /// No status has been observed yet.
    Unknown,
}

impl Status {
    /// Returns the canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "InProgress",
            Status::Failed => "Failed",
            Status::Current => "Current",
            Status::Terminating => "Terminating",
            Status::NotFound => "NotFound",
            Status::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latest observed state of one tracked resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceStatus {
    /// Most recent status delivered for the resource.
    pub status: Status,
    /// Free-text message that accompanied the status.
    pub message: String,
}

impl ResourceStatus {
    /// Record for a resource nothing has been observed about yet.
    pub fn unknown() -> Self {
        Self {
            status: Status::Unknown,
            message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_strings() {
        assert_eq!(Status::InProgress.as_str(), "InProgress");
        assert_eq!(Status::Failed.as_str(), "Failed");
        assert_eq!(Status::Current.as_str(), "Current");
        assert_eq!(Status::Terminating.as_str(), "Terminating");
        assert_eq!(Status::NotFound.as_str(), "NotFound");
        assert_eq!(Status::Unknown.as_str(), "Unknown");
    }

    #[test]
    fn test_display_matches_canonical_form() {
        assert_eq!(Status::InProgress.to_string(), "InProgress");
    }

    #[test]
    fn test_unknown_record_is_empty() {
        let record = ResourceStatus::unknown();
        assert_eq!(record.status, Status::Unknown);
        assert!(record.message.is_empty());
    }
}
