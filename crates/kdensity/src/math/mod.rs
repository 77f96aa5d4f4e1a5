//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks for density
//! estimation:
//! - Kernel shape functions (normalized density kernels)
//! - Bandwidth selection rules (rules of thumb)
//!
//! These are reusable mathematical functions with no pipeline-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API / Registry
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel shape functions (normalized density kernels).
pub mod kernel;

/// Bandwidth selection rules.
pub mod bandwidth;
