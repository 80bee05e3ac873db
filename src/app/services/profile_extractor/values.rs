//! Scalar/array normalization and the missing-value guard
//!
//! Single-profile files hold scalar metadata as rank-0 variables and
//! level data as rank-1 sequences; multi-profile files prepend a profile
//! dimension to both. The readers here hide that branch: callers ask for
//! "the scalar for profile i" or "the level sequence for profile i" and
//! get a uniform answer.
//!
//! The guard functions are the only place missingness is decided. A cell
//! is missing when the source masked it, when it is non-finite, or when
//! the requested index is out of range. Degenerate multi-element values
//! resolve to their first present element; they are representational
//! artifacts of the underlying array layout, and nothing here ever
//! averages or otherwise transforms data.

use crate::Result;
use crate::app::services::netcdf_source::ProfileSource;

/// Read a scalar-role value (latitude, longitude, time offset) for one
/// profile, collapsing any degenerate array wrapper
pub fn read_scalar<S: ProfileSource>(
    source: &S,
    name: &str,
    profile: usize,
    multi_profile: bool,
) -> Result<Option<f64>> {
    let cells = if multi_profile {
        source.read_numeric(name, Some(profile))?
    } else {
        source.read_numeric(name, None)?
    };
    Ok(first_present(&cells))
}

/// Read a per-level sequence (pressure, temperature, salinity) for one
/// profile
pub fn read_levels<S: ProfileSource>(
    source: &S,
    name: &str,
    profile: usize,
    multi_profile: bool,
) -> Result<Vec<Option<f64>>> {
    if multi_profile {
        source.read_numeric(name, Some(profile))
    } else {
        source.read_numeric(name, None)
    }
}

/// All-missing sequence standing in for an absent optional variable, so
/// downstream level iteration never branches on variable presence
pub fn missing_levels(len: usize) -> Vec<Option<f64>> {
    vec![None; len]
}

/// The value at one level, or `None` when missing
///
/// Never panics: an out-of-range index reads as missing, as does a
/// masked or non-finite element.
pub fn value_at(levels: &[Option<f64>], index: usize) -> Option<f64> {
    levels
        .get(index)
        .copied()
        .flatten()
        .filter(|v| v.is_finite())
}

/// Whether the value at one level is missing
pub fn is_missing(levels: &[Option<f64>], index: usize) -> bool {
    value_at(levels, index).is_none()
}

/// First present, finite element of a cell sequence
pub fn first_present(cells: &[Option<f64>]) -> Option<f64> {
    cells.iter().copied().flatten().find(|v| v.is_finite())
}
