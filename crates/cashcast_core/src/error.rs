//! Error types for the projection engine
//!
//! Validation failures and date/time-zone failures are the only two error
//! families. Both are plain values; nothing in the engine panics on bad input.

/// Coarse classification of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Structural problem: day out of range, schedule/frequency mismatch, bad option
    InvalidInput,
    /// Non-positive amount or negative balance
    InvalidAmount,
}

/// An entity (or option) failed its structural constraints.
///
/// The whole validation call fails on the first violation; there is no
/// lenient mode that drops bad entities and carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({entity})")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
    /// Name of the offending entity, or the option name
    pub entity: String,
    /// Field-level detail, e.g. `"day_of_month=32"`
    pub details: Option<String>,
}

impl ValidationError {
    pub fn invalid_input(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidInput,
            message: message.into(),
            entity: entity.into(),
            details: None,
        }
    }

    pub fn invalid_amount(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidAmount,
            message: message.into(),
            entity: entity.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Failures while turning instants or strings into calendar days
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("unknown time zone {name:?}")]
    UnknownTimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },

    #[error("malformed date or timestamp {input:?}")]
    Format {
        input: String,
        #[source]
        source: jiff::Error,
    },
}

/// Top-level error for the engine entry points
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Date(#[from] DateError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
