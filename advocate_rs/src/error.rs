//! Error types for the landing page core.
//!
//! Nothing here reaches the visitor as a fault: navigation misses are
//! no-ops, configuration errors fall back to defaults and action failures
//! become [`Feedback`](crate::actions::Feedback).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section id `{0}`")]
pub struct ParseSectionError(pub String);

/// Failure to read a trigger position such as `"top bottom-=100"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTriggerError {
    #[error("trigger position is empty")]
    Empty,
    #[error("trigger position `{0}` needs an element edge and a viewport edge")]
    MissingViewportEdge(String),
    #[error("unknown edge `{0}` (expected top, center, bottom or a percentage)")]
    UnknownEdge(String),
    #[error("invalid pixel offset `{0}`")]
    InvalidOffset(String),
    #[error("unknown toggle action `{0}`")]
    UnknownAction(String),
    #[error("toggle actions need 1 to 4 entries, got {0}")]
    ActionCount(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid animation `{binding}`: {source}")]
    Animation {
        binding: &'static str,
        #[source]
        source: ParseTriggerError,
    },
}

/// Failure reported by a [`PageActions`](crate::actions::PageActions) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("this action is not available yet")]
    Unavailable,
    #[error("{0}")]
    Rejected(String),
}
