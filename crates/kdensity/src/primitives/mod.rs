//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions and data structures used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API / Registry
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Scalar values, rows, and group-key atoms.
pub mod value;

/// In-memory tabular view.
pub mod view;
