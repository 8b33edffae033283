//! Shared primitives for all Rust crates in Crowdfund.

#![forbid(unsafe_code)]

/// Currency formatting helpers shared by the domain and API layers.
pub mod money;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use money::{format_money, format_money_whole};

/// Result type used across Crowdfund crates.
pub type AppResult<T> = Result<T, AppError>;

/// One rejected form field and the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Form label of the rejected field (e.g. `Creator Email`).
    pub field: String,
    /// User-facing validation message.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.field, self.message)
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A form submission was rejected; every failing field is listed.
    #[error("submission rejected: {}", join_field_errors(.0))]
    Rejected(Vec<FieldError>),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
