//! Error types for the KDE transform.
//!
//! ## Purpose
//!
//! This module defines the configuration error conditions that can occur
//! when resolving KDE transform options: missing estimation fields, a
//! malformed output-field triple, or an unresolvable kernel name.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the unknown name).
//! * **Pre-data**: Every variant is raised before the view is read or
//!   mutated; there are no mid-pipeline failure paths.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Configuration errors only**: bandwidth problems degrade silently to
//!    the default rule and never surface here.
//! 2. **Numeric edge cases are not errors**: empty groups and degenerate
//!    extents produce well-defined output instead of failing.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for KDE transform configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdeError {
    /// The `fields` option is missing or empty; at least one estimation
    /// field is required.
    MissingFields,

    /// The output-field triple must name exactly 3 fields (key, y, size).
    InvalidOutputFields {
        /// Number of output field names provided.
        got: usize,
    },

    /// The kernel method name does not match any registered kernel.
    UnknownKernel(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for KdeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingFields => {
                write!(f, "At least one estimation field is required")
            }
            Self::InvalidOutputFields { got } => {
                write!(
                    f,
                    "Output fields must name exactly 3 fields (key, y, size), got {got}"
                )
            }
            Self::UnknownKernel(name) => {
                write!(f, "Unknown kernel method: '{name}'")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for KdeError {}
