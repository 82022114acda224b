//! Shared data model for kdeck: clusters, quotas, the cluster form and
//! the error taxonomy every front end reports through.

pub mod cluster;
pub mod config;
pub mod error;
pub mod form;
pub mod quota;
pub mod release;
pub mod validate;

pub use error::{ConsoleError, Result};
