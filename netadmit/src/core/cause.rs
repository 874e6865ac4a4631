//! Validation causes: the only output of the network checks.

use serde::{Deserialize, Serialize};

use crate::core::field::FieldPath;

/// Category of a validation cause.
///
/// Serializes to the status-cause reason strings used by the control plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CauseKind {
    /// A referenced name is missing where it must be present.
    #[serde(rename = "FieldValueRequired")]
    Required,
    /// A value fails a format, grammar or consistency rule.
    #[serde(rename = "FieldValueInvalid")]
    Invalid,
    /// A name collides with an earlier entry in the same list.
    #[serde(rename = "FieldValueDuplicate")]
    Duplicate,
    /// A well-formed value outside the accepted set.
    #[serde(rename = "FieldValueNotSupported")]
    NotSupported,
}

impl CauseKind {
    pub fn as_reason(self) -> &'static str {
        match self {
            CauseKind::Required => "FieldValueRequired",
            CauseKind::Invalid => "FieldValueInvalid",
            CauseKind::Duplicate => "FieldValueDuplicate",
            CauseKind::NotSupported => "FieldValueNotSupported",
        }
    }
}

/// A single reason a workload spec fails network validation.
///
/// `message` is user-visible and matched by existing tooling; keep the text
/// stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationCause {
    #[serde(rename = "reason")]
    pub kind: CauseKind,
    pub message: String,
    pub field: String,
}

impl ValidationCause {
    pub fn new(kind: CauseKind, message: impl Into<String>, field: &FieldPath) -> Self {
        Self {
            kind,
            message: message.into(),
            field: field.to_string(),
        }
    }

    pub fn required(message: impl Into<String>, field: &FieldPath) -> Self {
        Self::new(CauseKind::Required, message, field)
    }

    pub fn invalid(message: impl Into<String>, field: &FieldPath) -> Self {
        Self::new(CauseKind::Invalid, message, field)
    }

    pub fn duplicate(message: impl Into<String>, field: &FieldPath) -> Self {
        Self::new(CauseKind::Duplicate, message, field)
    }

    pub fn not_supported(message: impl Into<String>, field: &FieldPath) -> Self {
        Self::new(CauseKind::NotSupported, message, field)
    }
}

/// Path of the `networks` list under `field`.
pub(crate) fn networks_path(field: &FieldPath) -> FieldPath {
    field.child("networks")
}

/// Path of the `domain.devices.interfaces` list under `field`.
pub(crate) fn interfaces_path(field: &FieldPath) -> FieldPath {
    field.children(["domain", "devices", "interfaces"])
}
