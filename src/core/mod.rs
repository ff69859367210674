//! Core types shared across the crate
//!
//! - `GraphError` - Errors raised by the runner itself
//! - `GraphResult` - Result alias for runner operations

pub mod error;

pub use error::{GraphError, GraphResult};
