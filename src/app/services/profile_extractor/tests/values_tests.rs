//! Normalization and missing-value guard tests

use super::{MockSource, MockVariable, levels};
use crate::app::services::profile_extractor::values;

#[test]
fn test_read_scalar_single_profile_rank0() {
    let source = MockSource::new("single.nc").with("LATITUDE", MockVariable::Scalar(Some(-12.5)));

    let value = values::read_scalar(&source, "LATITUDE", 0, false).unwrap();
    assert_eq!(value, Some(-12.5));
}

#[test]
fn test_read_scalar_single_profile_degenerate_array() {
    // Some single-profile files wrap scalars in a length-1 array.
    let source =
        MockSource::new("single.nc").with("LATITUDE", MockVariable::Array(vec![Some(-12.5)]));

    let value = values::read_scalar(&source, "LATITUDE", 0, false).unwrap();
    assert_eq!(value, Some(-12.5));
}

#[test]
fn test_read_scalar_multi_profile_indexes_its_profile() {
    let source = MockSource::new("multi.nc").with_profiles(3).with(
        "LATITUDE",
        MockVariable::Array(vec![Some(1.0), Some(2.0), Some(3.0)]),
    );

    assert_eq!(values::read_scalar(&source, "LATITUDE", 1, true).unwrap(), Some(2.0));
    assert_eq!(values::read_scalar(&source, "LATITUDE", 2, true).unwrap(), Some(3.0));
}

#[test]
fn test_read_scalar_masked_is_missing() {
    let source = MockSource::new("multi.nc")
        .with_profiles(2)
        .with("LATITUDE", MockVariable::Array(vec![None, Some(5.0)]));

    assert_eq!(values::read_scalar(&source, "LATITUDE", 0, true).unwrap(), None);
}

#[test]
fn test_read_scalar_degenerate_picks_first_present() {
    // Pick-first, never average: [missing, 7.0, 9.0] resolves to 7.0.
    let source = MockSource::new("single.nc")
        .with("JULD", MockVariable::Array(vec![None, Some(7.0), Some(9.0)]));

    assert_eq!(values::read_scalar(&source, "JULD", 0, false).unwrap(), Some(7.0));
}

#[test]
fn test_read_levels_multi_profile_row() {
    let source = MockSource::new("multi.nc").with_profiles(2).with(
        "PRES",
        MockVariable::Profiles(vec![levels(&[5.0, 10.0]), levels(&[6.0, 12.0])]),
    );

    assert_eq!(
        values::read_levels(&source, "PRES", 1, true).unwrap(),
        vec![Some(6.0), Some(12.0)]
    );
}

#[test]
fn test_missing_levels_all_absent() {
    let absent = values::missing_levels(4);
    assert_eq!(absent.len(), 4);
    assert!(absent.iter().all(|v| v.is_none()));
}

#[test]
fn test_value_at_out_of_range_is_missing() {
    let series = levels(&[1.0, 2.0]);
    assert_eq!(values::value_at(&series, 5), None);
    assert!(values::is_missing(&series, 5));
}

#[test]
fn test_value_at_non_finite_is_missing() {
    let series = vec![Some(f64::NAN), Some(f64::INFINITY), Some(3.0)];
    assert_eq!(values::value_at(&series, 0), None);
    assert_eq!(values::value_at(&series, 1), None);
    assert_eq!(values::value_at(&series, 2), Some(3.0));
}

#[test]
fn test_first_present_skips_non_finite() {
    let cells = vec![None, Some(f64::NAN), Some(4.5)];
    assert_eq!(values::first_present(&cells), Some(4.5));
    assert_eq!(values::first_present(&[]), None);
}
