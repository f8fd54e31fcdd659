//! # smithy-upgrade
//!
//! Model-driven upgrader that rewrites Smithy IDL 1.0 files to IDL 2.0 in
//! place, changing only the text that must change.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! upgrade   → Upgrader, per-shape rules, enum lowering, batch runs
//!   ↓
//! text      → PositionTranslator, IdlCursor, PatchBuffer
//!   ↓
//! model     → Model/Shape/Trait types, prelude, transform, IDL serializer
//!   ↓
//! base      → Primitives (SourceLocation, TextRange, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → text → upgrade)
// ============================================================================

/// Foundation types: SourceLocation, TextRange, constants
pub mod base;

/// Semantic model: shapes, members, traits, prelude
pub mod model;

/// Text engine: offsets, scanning, patching
pub mod text;

/// File upgrades
pub mod upgrade;

// Re-export foundation types
pub use base::{SourceLocation, TextRange, TextSize};

// Re-export the upgrade entry points
pub use upgrade::{
    UnsupportedLegacyForm, UpgradeError, UpgradeOptions, UpgradeOutcome, Upgrader, upgrade,
};
