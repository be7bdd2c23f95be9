//! Schema errors and soft findings.

use std::fmt;

use crate::path::NodePath;

/// Error category of a [`SchemaError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaErrorKind {
    /// A required attribute is absent.
    MissingField,
    /// Two sidebars share a name, or sibling entries repeat a document.
    DuplicateKey,
    /// A node matches no known variant.
    InvalidVariant,
    /// A category has neither items nor a link (rejected by policy).
    EmptyCategory,
}

impl SchemaErrorKind {
    /// Stable identifier used in reports (`missing-field`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing-field",
            Self::DuplicateKey => "duplicate-key",
            Self::InvalidVariant => "invalid-variant",
            Self::EmptyCategory => "empty-category",
        }
    }
}

impl fmt::Display for SchemaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural validation error.
///
/// Every variant carries the [`NodePath`] of the offending node so the build
/// can be aborted with a precise location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A required attribute is absent.
    #[error("missing-field: `{field}` is required at {path}")]
    MissingField {
        /// Node missing the attribute.
        path: NodePath,
        /// Attribute name as written in the configuration.
        field: &'static str,
    },
    /// Duplicate sidebar name or duplicate sibling entry.
    #[error("duplicate-key: `{key}` is declared more than once at {path}")]
    DuplicateKey {
        /// Location of the second occurrence.
        path: NodePath,
        /// The repeated sidebar name or document id.
        key: String,
    },
    /// The node shape matches no known variant.
    #[error("invalid-variant at {path}: {reason}")]
    InvalidVariant {
        /// Offending node.
        path: NodePath,
        /// Human-readable explanation.
        reason: String,
    },
    /// Category with no items and no link.
    #[error("empty-category: category `{label}` at {path} has no items and no link")]
    EmptyCategory {
        /// Offending category.
        path: NodePath,
        /// Category label.
        label: String,
    },
}

impl SchemaError {
    /// Path of the offending node.
    #[must_use]
    pub fn path(&self) -> &NodePath {
        match self {
            Self::MissingField { path, .. }
            | Self::DuplicateKey { path, .. }
            | Self::InvalidVariant { path, .. }
            | Self::EmptyCategory { path, .. } => path,
        }
    }

    /// Error category.
    #[must_use]
    pub fn kind(&self) -> SchemaErrorKind {
        match self {
            Self::MissingField { .. } => SchemaErrorKind::MissingField,
            Self::DuplicateKey { .. } => SchemaErrorKind::DuplicateKey,
            Self::InvalidVariant { .. } => SchemaErrorKind::InvalidVariant,
            Self::EmptyCategory { .. } => SchemaErrorKind::EmptyCategory,
        }
    }

    pub(crate) fn invalid(path: &NodePath, reason: impl Into<String>) -> Self {
        Self::InvalidVariant {
            path: path.clone(),
            reason: reason.into(),
        }
    }
}

/// Non-fatal finding recorded during validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaWarning {
    /// Location of the finding.
    pub path: NodePath,
    /// What was found.
    pub kind: WarningKind,
}

/// Kind of a [`SchemaWarning`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WarningKind {
    /// The same document appears twice in one `items` list.
    DuplicateEntry {
        /// Repeated document id.
        id: String,
    },
    /// Category with no items and no link.
    EmptyCategory {
        /// Category label.
        label: String,
    },
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::DuplicateEntry { id } => {
                write!(f, "{}: document `{id}` is listed twice", self.path)
            }
            WarningKind::EmptyCategory { label } => {
                write!(
                    f,
                    "{}: category `{label}` has no items and no link",
                    self.path
                )
            }
        }
    }
}
