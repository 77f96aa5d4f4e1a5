//! Input validation for KDE transform configuration.
//!
//! ## Purpose
//!
//! This module provides validation functions for the transform's
//! configuration record. It enforces the requirements that must hold before
//! the view is touched: a non-empty field list, an output triple of exactly
//! three names, and a resolvable kernel method.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Pre-data**: Every check runs before any view read or mutation.
//! * **Lenient bandwidth**: bandwidth is deliberately *not* validated here;
//!   unusable bandwidth configurations degrade silently to the default rule
//!   (see [`crate::engine::resolver`]).
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not resolve extents or bandwidths.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::math::kernel::KernelShape;
use crate::primitives::errors::KdeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for KDE transform configuration.
///
/// Provides static methods returning `Result<(), KdeError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the estimation field list.
    pub fn validate_fields(fields: &[String]) -> Result<(), KdeError> {
        if fields.is_empty() {
            return Err(KdeError::MissingFields);
        }
        Ok(())
    }

    /// Validate the output-field triple (key, y, size).
    pub fn validate_output_fields(output: &[String]) -> Result<(), KdeError> {
        if output.len() != 3 {
            return Err(KdeError::InvalidOutputFields { got: output.len() });
        }
        Ok(())
    }

    /// Resolve a kernel method name against the kernel registry.
    pub fn resolve_kernel_name(name: &str) -> Result<KernelShape, KdeError> {
        KernelShape::from_name(name).ok_or_else(|| KdeError::UnknownKernel(name.to_string()))
    }
}
