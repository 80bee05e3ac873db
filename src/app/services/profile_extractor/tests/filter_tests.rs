//! Profile filter tests

use crate::app::models::ProfileSkip;
use crate::app::services::profile_extractor::filter::check_profile;
use crate::config::FilterConfig;
use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap()
}

#[test]
fn test_accepts_inside_both_windows() {
    let filters = FilterConfig::default();
    let result = check_profile(&at(2022), Some(-10.0), Some(75.0), &filters);
    assert_eq!(result, Ok((-10.0, 75.0)));
}

#[test]
fn test_rejects_outside_bounding_box() {
    let filters = FilterConfig::default();
    // lon 200 is east of the default box (20..=140).
    let result = check_profile(&at(2022), Some(10.0), Some(200.0), &filters);
    assert_eq!(result, Err(ProfileSkip::OutsideRegion));
}

#[test]
fn test_bounding_box_edges_are_inclusive() {
    let filters = FilterConfig::default();
    assert!(check_profile(&at(2022), Some(30.0), Some(20.0), &filters).is_ok());
    assert!(check_profile(&at(2022), Some(-70.0), Some(140.0), &filters).is_ok());
}

#[test]
fn test_rejects_outside_year_window() {
    let filters = FilterConfig::default();
    assert_eq!(
        check_profile(&at(2019), Some(0.0), Some(80.0), &filters),
        Err(ProfileSkip::OutsideYearWindow)
    );
    assert_eq!(
        check_profile(&at(2026), Some(0.0), Some(80.0), &filters),
        Err(ProfileSkip::OutsideYearWindow)
    );
}

#[test]
fn test_year_window_edges_are_inclusive() {
    let filters = FilterConfig::default();
    assert!(check_profile(&at(2020), Some(0.0), Some(80.0), &filters).is_ok());
    assert!(check_profile(&at(2025), Some(0.0), Some(80.0), &filters).is_ok());
}

#[test]
fn test_filters_disable_independently() {
    let mut filters = FilterConfig::default();
    filters.geographic.enabled = false;

    // Outside the box but geographic filtering is off; year still applies.
    assert!(check_profile(&at(2022), Some(50.0), Some(-30.0), &filters).is_ok());
    assert_eq!(
        check_profile(&at(1999), Some(50.0), Some(-30.0), &filters),
        Err(ProfileSkip::OutsideYearWindow)
    );

    let mut filters = FilterConfig::default();
    filters.temporal.enabled = false;
    assert!(check_profile(&at(1999), Some(0.0), Some(80.0), &filters).is_ok());
}

#[test]
fn test_rejects_missing_or_non_finite_coordinates() {
    let filters = FilterConfig::default();
    assert_eq!(
        check_profile(&at(2022), None, Some(80.0), &filters),
        Err(ProfileSkip::InvalidCoordinates)
    );
    assert_eq!(
        check_profile(&at(2022), Some(0.0), None, &filters),
        Err(ProfileSkip::InvalidCoordinates)
    );
    assert_eq!(
        check_profile(&at(2022), Some(f64::NAN), Some(80.0), &filters),
        Err(ProfileSkip::InvalidCoordinates)
    );
}

#[test]
fn test_invalid_coordinates_rejected_even_with_filters_off() {
    let mut filters = FilterConfig::default();
    filters.geographic.enabled = false;
    filters.temporal.enabled = false;

    assert_eq!(
        check_profile(&at(2022), Some(f64::INFINITY), Some(80.0), &filters),
        Err(ProfileSkip::InvalidCoordinates)
    );
}
