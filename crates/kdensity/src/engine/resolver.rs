//! Option, extent, and bandwidth resolution.
//!
//! ## Purpose
//!
//! This module turns the caller-facing [`KdeOptions`] record into a frozen
//! [`ResolvedKde`] configuration the pipeline executes: defaults merged,
//! shapes validated, the kernel method resolved to a callable form, the
//! sampling extent derived, and the bandwidth selected.
//!
//! ## Design notes
//!
//! * **Validate-then-freeze**: all configuration errors surface here, before
//!   any view mutation; once resolution succeeds the pipeline cannot fail.
//! * **Shared extent**: when no explicit extent is given, one global
//!   `[min, max]` is unioned across *all* configured fields. Heterogeneous
//!   fields therefore share a single sampling domain — a preserved source
//!   behavior that charts rely on for a shared axis, kept as a known
//!   limitation rather than generalized to per-field extents.
//! * **First-field bandwidth**: the bandwidth is selected once from
//!   `fields[0]`'s full column and reused for every field — likewise a
//!   preserved source behavior.
//! * **Lenient bandwidth**: unknown rule names, non-positive or non-finite
//!   fixed values, and custom selectors returning unusable values all
//!   degrade silently to the default `nrd` rule.
//!
//! ## Invariants
//!
//! * The resolved bandwidth and step are positive and finite.
//! * Resolution reads the view but never mutates it.
//!
//! ## Non-goals
//!
//! * This module does not partition rows or evaluate densities.

// External dependencies
use core::fmt::{Debug, Formatter};
use num_traits::Float;
use std::sync::Arc;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::bandwidth::BandwidthRule;
use crate::math::kernel::KernelShape;
use crate::primitives::errors::KdeError;
use crate::primitives::view::DataView;

// ============================================================================
// Callable Types
// ============================================================================

/// A continuous density function over the sampling domain.
pub type DensityFn<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// An estimator builder: `(samples, bandwidth) -> (value -> density)`.
pub type EstimatorFn<T> = Arc<dyn Fn(&[T], T) -> DensityFn<T> + Send + Sync>;

/// A custom bandwidth selector: `column values -> bandwidth`.
pub type BandwidthFn<T> = Arc<dyn Fn(&[T]) -> T + Send + Sync>;

// ============================================================================
// Method and Bandwidth Selection
// ============================================================================

/// Kernel method selection: a registry name, an already-resolved shape, or
/// a custom estimator builder.
#[derive(Clone)]
pub enum KernelMethod<T> {
    /// A kernel name, looked up in the kernel registry at resolution time.
    Name(String),

    /// An already-resolved named kernel shape.
    Shape(KernelShape),

    /// A custom estimator builder used verbatim.
    Custom(EstimatorFn<T>),
}

impl<T> Default for KernelMethod<T> {
    fn default() -> Self {
        KernelMethod::Shape(KernelShape::default())
    }
}

impl<T> Debug for KernelMethod<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            KernelMethod::Name(name) => f.debug_tuple("Name").field(name).finish(),
            KernelMethod::Shape(shape) => f.debug_tuple("Shape").field(shape).finish(),
            KernelMethod::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Bandwidth selection: a rule name, a resolved rule, a custom selector, or
/// a fixed value.
#[derive(Clone)]
pub enum Bandwidth<T> {
    /// A rule name, looked up in the bandwidth-rule registry. Unknown names
    /// fall back to the default rule.
    Rule(String),

    /// An already-resolved named rule.
    Method(BandwidthRule),

    /// A custom selector invoked on the column values.
    Custom(BandwidthFn<T>),

    /// A fixed bandwidth, used when positive and finite.
    Fixed(T),
}

impl<T> Default for Bandwidth<T> {
    fn default() -> Self {
        Bandwidth::Method(BandwidthRule::default())
    }
}

impl<T: Debug> Debug for Bandwidth<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Bandwidth::Rule(name) => f.debug_tuple("Rule").field(name).finish(),
            Bandwidth::Method(rule) => f.debug_tuple("Method").field(rule).finish(),
            Bandwidth::Custom(_) => f.write_str("Custom(..)"),
            Bandwidth::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
        }
    }
}

// ============================================================================
// Caller Options
// ============================================================================

/// Configuration record for the KDE transform.
///
/// Callers populate this over [`KdeOptions::default`]; unset options keep
/// their documented defaults.
#[derive(Debug, Clone)]
pub struct KdeOptions<T> {
    /// Field names to estimate density for. Required, non-empty.
    pub fields: Vec<String>,

    /// Output field names `[key, y, size]`: `key` holds the originating
    /// field name, `y` the sampled domain values, `size` the corresponding
    /// densities. Must name exactly 3 fields.
    pub output: Vec<String>,

    /// Sampling domain `[min, max]`. When `None`, derived from the data as
    /// the union range across all configured fields. An explicit extent is
    /// used verbatim (the caller is responsible for `min <= max`).
    pub extent: Option<(T, T)>,

    /// Kernel method (default: the `gaussian` kernel).
    pub method: KernelMethod<T>,

    /// Bandwidth selection (default: the `nrd` rule).
    pub bandwidth: Bandwidth<T>,

    /// Density threshold below which sampled points are dropped
    /// (default: 0.01).
    pub min_size: T,

    /// Sampling stride over the domain; zero or negative means "use the
    /// resolved bandwidth" (default: 0).
    pub step: T,

    /// Field names defining group identity (default: none — one implicit
    /// group containing all rows).
    pub group_by: Vec<String>,
}

impl<T: Float> Default for KdeOptions<T> {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            output: vec!["key".to_string(), "y".to_string(), "size".to_string()],
            extent: None,
            method: KernelMethod::default(),
            bandwidth: Bandwidth::default(),
            min_size: T::from(0.01).unwrap_or_else(T::zero),
            step: T::zero(),
            group_by: Vec::new(),
        }
    }
}

impl<T: Float> KdeOptions<T> {
    /// Create options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field names to estimate density for.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the output field names `[key, y, size]`.
    pub fn output<I, S>(mut self, output: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output = output.into_iter().map(Into::into).collect();
        self
    }

    /// Set an explicit sampling extent.
    pub fn extent(mut self, min: T, max: T) -> Self {
        self.extent = Some((min, max));
        self
    }

    /// Select a kernel by registry name (validated at resolution time).
    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.method = KernelMethod::Name(name.into());
        self
    }

    /// Select an already-resolved kernel shape.
    pub fn kernel(mut self, shape: KernelShape) -> Self {
        self.method = KernelMethod::Shape(shape);
        self
    }

    /// Supply a custom estimator builder.
    pub fn custom_method(mut self, estimator: EstimatorFn<T>) -> Self {
        self.method = KernelMethod::Custom(estimator);
        self
    }

    /// Set the bandwidth selection.
    pub fn bandwidth(mut self, bandwidth: Bandwidth<T>) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Set a fixed bandwidth (unusable values fall back to the default rule).
    pub fn fixed_bandwidth(mut self, value: T) -> Self {
        self.bandwidth = Bandwidth::Fixed(value);
        self
    }

    /// Set the density filtering threshold.
    pub fn min_size(mut self, min_size: T) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the sampling stride (zero means "use the resolved bandwidth").
    pub fn step(mut self, step: T) -> Self {
        self.step = step;
        self
    }

    /// Set the grouping field names.
    pub fn group_by<I, S>(mut self, group_by: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by = group_by.into_iter().map(Into::into).collect();
        self
    }
}

// ============================================================================
// Resolved Configuration
// ============================================================================

/// A kernel method with all names resolved.
#[derive(Clone)]
pub enum ResolvedMethod<T> {
    /// A named kernel shape from the registry.
    Shape(KernelShape),

    /// A custom estimator builder.
    Custom(EstimatorFn<T>),
}

impl<T> Debug for ResolvedMethod<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ResolvedMethod::Shape(shape) => f.debug_tuple("Shape").field(shape).finish(),
            ResolvedMethod::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Fully resolved transform configuration, ready for execution.
#[derive(Debug, Clone)]
pub struct ResolvedKde<T> {
    /// Estimation fields, in caller order.
    pub fields: Vec<String>,

    /// Output field names (key, y, size).
    pub output: [String; 3],

    /// The sampling domain shared by every field.
    pub extent: (T, T),

    /// The resolved kernel method.
    pub method: ResolvedMethod<T>,

    /// The bandwidth, selected once from `fields[0]`'s column.
    pub bandwidth: T,

    /// The sampling stride (positive).
    pub step: T,

    /// Density filtering threshold.
    pub min_size: T,

    /// Grouping field names.
    pub group_by: Vec<String>,
}

/// Resolve caller options against a view into an executable configuration.
///
/// All configuration errors surface here; the view is read (for extents and
/// bandwidth columns) but never mutated.
pub fn resolve<T: Float>(
    options: &KdeOptions<T>,
    view: &DataView<T>,
) -> Result<ResolvedKde<T>, KdeError> {
    Validator::validate_fields(&options.fields)?;
    Validator::validate_output_fields(&options.output)?;

    let method = match &options.method {
        KernelMethod::Name(name) => ResolvedMethod::Shape(Validator::resolve_kernel_name(name)?),
        KernelMethod::Shape(shape) => ResolvedMethod::Shape(*shape),
        KernelMethod::Custom(estimator) => ResolvedMethod::Custom(Arc::clone(estimator)),
    };

    let extent = resolve_extent(options.extent, &options.fields, view);

    // Bandwidth comes from the first field's full column and is reused for
    // every field (preserved source behavior).
    let first_column = view.column(&options.fields[0]);
    let bandwidth = select_bandwidth(&options.bandwidth, &first_column);

    let step = if options.step > T::zero() && options.step.is_finite() {
        options.step
    } else {
        bandwidth
    };

    let output = [
        options.output[0].clone(),
        options.output[1].clone(),
        options.output[2].clone(),
    ];

    Ok(ResolvedKde {
        fields: options.fields.clone(),
        output,
        extent,
        method,
        bandwidth,
        step,
        min_size: options.min_size,
        group_by: options.group_by.clone(),
    })
}

/// Derive the sampling extent: explicit extents are used verbatim, otherwise
/// the union `[min, max]` across all configured fields.
///
/// When no configured field has any finite numeric value, the derived extent
/// degenerates to `(0, 0)` (a singleton domain).
pub fn resolve_extent<T: Float>(
    explicit: Option<(T, T)>,
    fields: &[String],
    view: &DataView<T>,
) -> (T, T) {
    if let Some(extent) = explicit {
        return extent;
    }

    let mut union: Option<(T, T)> = None;
    for field in fields {
        if let Some((lo, hi)) = view.range(field) {
            union = Some(match union {
                Some((min, max)) => (min.min(lo), max.max(hi)),
                None => (lo, hi),
            });
        }
    }
    union.unwrap_or((T::zero(), T::zero()))
}

/// Select the bandwidth for a column.
///
/// Unknown rule names, non-positive or non-finite values (fixed or from a
/// custom selector) all fall back to the default `nrd` rule; the result is
/// always positive and finite.
pub fn select_bandwidth<T: Float>(spec: &Bandwidth<T>, column: &[T]) -> T {
    let candidate = match spec {
        Bandwidth::Rule(name) => BandwidthRule::from_name(name)
            .unwrap_or_default()
            .compute(column),
        Bandwidth::Method(rule) => rule.compute(column),
        Bandwidth::Custom(selector) => selector(column),
        Bandwidth::Fixed(value) => *value,
    };

    if candidate.is_finite() && candidate > T::zero() {
        candidate
    } else {
        BandwidthRule::default().compute(column)
    }
}
