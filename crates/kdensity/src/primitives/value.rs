//! Scalar values, rows, and group-key atoms.
//!
//! ## Purpose
//!
//! This module defines the cell-level data model for the tabular view: a
//! tagged scalar [`Value`], an insertion-ordered field mapping [`Row`], and
//! the [`KeyAtom`] used for structural group-key equality.
//!
//! ## Design notes
//!
//! * **Tagged scalars**: cells hold a number, a string, or a numeric series
//!   (output rows carry the sampled domain/density sequences as series).
//! * **Ordered rows**: field insertion order is preserved so output rows
//!   list grouping fields before the output triple.
//! * **Bit-pattern keys**: numeric group keys compare by `f64` bit pattern,
//!   which is deterministic even for NaN.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * A `Row` holds at most one value per field name; `set` replaces.
//! * `KeyAtom` equality is structural and hashable.
//!
//! ## Non-goals
//!
//! * This module does not perform column extraction or range queries
//!   (see [`crate::primitives::view`]).

// External dependencies
use num_traits::Float;

// ============================================================================
// Scalar Value
// ============================================================================

/// A single cell value in a tabular row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    /// A numeric scalar.
    Num(T),

    /// A string scalar.
    Str(String),

    /// An ordered numeric sequence (used by the transform's output rows).
    Series(Vec<T>),
}

impl<T: Float> Value<T> {
    /// Return the numeric scalar, if this value holds one.
    #[inline]
    pub fn as_num(&self) -> Option<T> {
        match self {
            Value::Num(v) => Some(*v),
            _ => None,
        }
    }

    /// Return the string scalar, if this value holds one.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Return the numeric series, if this value holds one.
    #[inline]
    pub fn as_series(&self) -> Option<&[T]> {
        match self {
            Value::Series(vs) => Some(vs),
            _ => None,
        }
    }

    /// Reduce this value to a group-key atom.
    ///
    /// Series values do not participate in grouping and collapse to
    /// [`KeyAtom::Absent`].
    pub fn key_atom(&self) -> KeyAtom {
        match self {
            Value::Num(v) => KeyAtom::Number(v.to_f64().unwrap_or(f64::NAN).to_bits()),
            Value::Str(s) => KeyAtom::Text(s.clone()),
            Value::Series(_) => KeyAtom::Absent,
        }
    }
}

impl<T> From<String> for Value<T> {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T> From<&str> for Value<T> {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

// ============================================================================
// Group-Key Atom
// ============================================================================

/// One component of a group key, with structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAtom {
    /// Numeric value, stored by `f64` bit pattern for deterministic
    /// equality (NaN groups with NaN).
    Number(u64),

    /// String value.
    Text(String),

    /// The grouping field was absent from the row (or not groupable).
    Absent,
}

// ============================================================================
// Row
// ============================================================================

/// An insertion-ordered mapping from field name to [`Value`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row<T> {
    fields: Vec<(String, Value<T>)>,
}

impl<T: Float> Row<T> {
    /// Create an empty row.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value<T>> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Set a field value, replacing any existing value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: Value<T>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder-style `set` for literal row construction.
    pub fn with(mut self, name: impl Into<String>, value: Value<T>) -> Self {
        self.set(name, value);
        self
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value<T>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}
