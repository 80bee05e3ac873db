//! Profile container access
//!
//! This module defines the [`ProfileSource`] trait, the narrow view of a
//! self-describing profile container that the extraction pipeline needs:
//! named dimensions, variable names and ranks, numeric reads with an
//! explicit per-element present/missing result, and text reads for
//! character-array variables.
//!
//! The one production implementation, [`NetcdfSource`], is backed by the
//! `netcdf` crate. It maps `_FillValue` attributes and non-finite values
//! to missing at read time, so nothing downstream ever inspects masks or
//! sentinels again. The handle owns the open file and closes it on drop,
//! on every exit path.

pub mod file;
pub mod source;

pub use file::NetcdfSource;
pub use source::ProfileSource;
