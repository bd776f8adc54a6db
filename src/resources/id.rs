//! # Resource identity and the canonical display form.
//!
//! [`ResourceId`] is the `(group, kind, name, namespace)` tuple identifying a
//! tracked resource. Its `Display` implementation is the stable text form used
//! in every rendered line, so downstream tooling can scrape it:
//!
//! ```text
//! <group-kind token, lowercased>/<name>
//! ```
//!
//! The group-kind token is `kind` when the group is empty and `kind.group`
//! otherwise. Only the token is case-folded; the name keeps its casing.
//! The namespace never appears in the display form.
//!
//! ## Example
//! ```rust
//! use statuswatch::ResourceId;
//!
//! let core = ResourceId::new("", "Service", "api-gw");
//! assert_eq!(core.to_string(), "service/api-gw");
//!
//! let grouped = ResourceId::new("apps", "Deployment", "Web");
//! assert_eq!(grouped.to_string(), "deployment.apps/Web");
//! ```

use std::fmt;

/// Identity of one tracked resource. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId {
    /// API group; empty for the core group.
    pub group: String,
    /// Resource kind, e.g. `Deployment`.
    pub kind: String,
    /// Resource name; casing is preserved everywhere.
    pub name: String,
    /// Namespace, if the resource is namespaced.
    pub namespace: Option<String>,
}

impl ResourceId {
    /// Creates a cluster-scoped identifier.
    pub fn new(
        group: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            kind: kind.into(),
            name: name.into(),
            namespace: None,
        }
    }

    /// Attaches a namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Lowercased group-kind token: `kind`, or `kind.group` when a group is set.
    fn group_kind(&self) -> String {
        if self.group.is_empty() {
            self.kind.to_lowercase()
        } else {
            format!("{}.{}", self.kind, self.group).to_lowercase()
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group_kind(), self.name)
    }
}
