//! # Autopick Config
//!
//! Configuration for the selection engine: marker vocabulary, inspector
//! wiring, generalization threshold and action-runner timing.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
