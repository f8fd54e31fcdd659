//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod model_builders;
pub mod source_fixtures;

pub use model_builders::*;
pub use source_fixtures::*;
