//! Centralized constants for the kdeck project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod console;
pub mod paths;
pub mod quota;
pub mod state;
