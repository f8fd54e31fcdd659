//! Upgrade tests
//!
//! Whole-file upgrades through the public API:
//! - End-to-end rewrites and version headers
//! - Idempotence and position stability
//! - Batch runs over files on disk

pub mod tests_batch;
pub mod tests_end_to_end;
