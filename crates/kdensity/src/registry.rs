//! Named transform registry.
//!
//! ## Purpose
//!
//! This module provides the host-facing registry that maps transform names
//! to callables. The KDE transform registers itself under a canonical long
//! name and two short aliases, all referring to the same behavior.
//!
//! ## Design notes
//!
//! * **Explicit registration**: the registry is an owned value populated at
//!   startup (`with_defaults`) or injected by the host — not a mutable
//!   process-wide dictionary.
//! * **Shared callables**: aliases share one `Arc`'d callable; registering a
//!   name twice replaces the previous entry.
//!
//! ## Non-goals
//!
//! * This module does not define transforms other than KDE.

// External dependencies
use num_traits::Float;
use std::collections::HashMap;
use std::sync::Arc;

// Internal dependencies
use crate::engine::resolver::KdeOptions;
use crate::primitives::errors::KdeError;
use crate::primitives::view::DataView;

// ============================================================================
// Transform Names
// ============================================================================

/// Canonical registry name of the KDE transform.
pub const KDE_NAME: &str = "kernel-density-estimate";

/// Short aliases for the KDE transform.
pub const KDE_ALIASES: [&str; 2] = ["kde", "density"];

// ============================================================================
// Registry
// ============================================================================

/// A registered transform callable.
pub type TransformFn<T> =
    Arc<dyn Fn(&mut DataView<T>, &KdeOptions<T>) -> Result<(), KdeError> + Send + Sync>;

/// Name → transform mapping for a host application.
#[derive(Clone, Default)]
pub struct TransformRegistry<T> {
    transforms: HashMap<String, TransformFn<T>>,
}

impl<T: Float + Send + Sync + 'static> TransformRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// Create a registry with the KDE transform registered under its
    /// canonical name and aliases.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let transform: TransformFn<T> = Arc::new(crate::api::kde);
        registry.register(KDE_NAME, Arc::clone(&transform));
        for alias in KDE_ALIASES {
            registry.register(alias, Arc::clone(&transform));
        }
        registry
    }

    /// Register a transform under a name, replacing any existing entry.
    pub fn register(&mut self, name: impl Into<String>, transform: TransformFn<T>) {
        self.transforms.insert(name.into(), transform);
    }

    /// Look up a transform by name.
    pub fn get(&self, name: &str) -> Option<&TransformFn<T>> {
        self.transforms.get(name)
    }

    /// Whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Number of registered names (aliases count separately).
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}
