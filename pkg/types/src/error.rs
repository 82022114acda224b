use crate::form::FieldError;
use crate::quota::ResourceDimension;
use thiserror::Error;

/// Recoverable failures of the console core.
///
/// None of these are fatal: callers turn them into a visible notice or a
/// flagged display state and keep running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsoleError {
    /// A quota record whose `max` is not a positive number, or whose `used`
    /// is negative.
    #[error("invalid quota{}: used={used}, max={max}", dimension_suffix(.dimension))]
    InvalidQuota {
        dimension: Option<ResourceDimension>,
        used: f64,
        max: f64,
    },

    /// The cluster form was submitted while some constraint was violated.
    #[error("validation failed: {}", join_errors(.0))]
    ValidationFailed(Vec<FieldError>),

    /// An operation referenced an entity that is not in the store.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
}

impl ConsoleError {
    pub fn cluster_not_found(id: impl Into<String>) -> Self {
        ConsoleError::NotFound {
            kind: "cluster",
            id: id.into(),
        }
    }
}

fn dimension_suffix(dimension: &Option<ResourceDimension>) -> String {
    match dimension {
        Some(d) => format!(" for {}", d.title()),
        None => String::new(),
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
