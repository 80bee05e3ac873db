//! The source abstraction consumed by the extraction pipeline

use crate::Result;
use std::path::Path;

/// Read-only view of one opened profile container
///
/// Numeric reads return `Vec<Option<f64>>`: one entry per element in
/// row-major order, with masked (fill-value) and non-finite elements
/// already mapped to `None`. This is the single missing-value
/// representation used everywhere downstream.
///
/// A source is scoped to one file's processing and must release its
/// underlying handle when dropped.
pub trait ProfileSource {
    /// Path of the underlying file, used for identity fallback and logs
    fn path(&self) -> &Path;

    /// Length of a named dimension, or `None` if the dimension is absent
    fn dimension_len(&self, name: &str) -> Option<usize>;

    /// Names of all variables present in the container
    fn variable_names(&self) -> Vec<String>;

    /// Number of dimensions of a variable
    fn variable_rank(&self, name: &str) -> Result<usize>;

    /// Read a variable's numeric values
    ///
    /// With `profile = Some(i)` the variable is sliced at index `i` along
    /// its leading dimension; with `None` the whole variable is read. A
    /// zero-rank variable yields a single element either way.
    fn read_numeric(&self, name: &str, profile: Option<usize>) -> Result<Vec<Option<f64>>>;

    /// Read a variable's value as text
    ///
    /// Character-array variables are decoded bytewise with NUL padding
    /// dropped; numeric variables fall back to formatting their first
    /// present element (fixed-width encoded scalar identifiers). Embedded
    /// spaces are preserved for the caller to interpret.
    fn read_text(&self, name: &str, profile: Option<usize>) -> Result<String>;
}
