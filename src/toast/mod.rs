mod store;

pub use store::ToastStore;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the toast store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToastError {
    #[error("Toast id already in use: {0}")]
    DuplicateId(ToastId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown toast type: {0}")]
pub struct ParseKindError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown toast layout: {0} (expected floating-compact or stacked-banner)")]
pub struct ParseLayoutError(pub String);

/// Opaque toast identifier, used as the render key and the removal argument
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    pub fn generate() -> Self {
        ToastId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        ToastId(id.to_string())
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        ToastId(id)
    }
}

/// Visual classification of a toast. Only affects styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(ToastKind::Success),
            "error" => Ok(ToastKind::Error),
            "info" => Ok(ToastKind::Info),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// A single notification entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    #[serde(rename = "type")]
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    /// Create a toast with a freshly generated id
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self::with_id(ToastId::generate(), kind, message)
    }

    pub fn with_id(id: impl Into<ToastId>, kind: ToastKind, message: impl Into<String>) -> Self {
        Toast {
            id: id.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Presentation variant of the toast overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastLayout {
    /// Small cards stacked in the bottom-right corner
    #[default]
    FloatingCompact,
    /// Full-width banners along the top edge
    StackedBanner,
}

impl ToastLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLayout::FloatingCompact => "floating-compact",
            ToastLayout::StackedBanner => "stacked-banner",
        }
    }
}

impl fmt::Display for ToastLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastLayout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "floating-compact" => Ok(ToastLayout::FloatingCompact),
            "stacked-banner" => Ok(ToastLayout::StackedBanner),
            _ => Err(ParseLayoutError(s.to_string())),
        }
    }
}
