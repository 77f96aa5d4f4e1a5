//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the estimation pipeline: option validation and
//! resolution, row partitioning, per-(group, field) density estimation,
//! output assembly, and the final atomic row replacement.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API / Registry
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Option, extent, and bandwidth resolution.
pub mod resolver;

/// Row partitioning by group keys.
pub mod partition;

/// Density curve estimation over a sampling grid.
pub mod estimator;

/// Output curve container and row assembly.
pub mod output;

/// Pipeline orchestration.
pub mod executor;
