//! Row emission tests

use super::levels;
use crate::app::services::profile_extractor::emitter::{LevelSeries, emit_rows};
use crate::app::services::profile_extractor::stats::FileStats;
use crate::app::services::row_sink::MemorySink;
use chrono::{DateTime, TimeZone, Utc};

fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 6, 16, 0, 0, 0).unwrap()
}

fn emit(
    pressure: Vec<Option<f64>>,
    temperature: Vec<Option<f64>>,
    salinity: Vec<Option<f64>>,
) -> (MemorySink, FileStats) {
    let mut sink = MemorySink::new();
    let mut stats = FileStats::new();
    let series = LevelSeries {
        pressure: &pressure,
        temperature: &temperature,
        salinity: &salinity,
    };
    emit_rows("2902746", timestamp(), -10.0, 75.0, &series, &mut sink, &mut stats).unwrap();
    (sink, stats)
}

#[test]
fn test_pressure_gates_temperature_and_salinity_do_not() {
    // Level 1 has no pressure so it emits nothing; levels 0 and 2 emit
    // with whatever measurements are present.
    let (sink, stats) = emit(
        vec![Some(10.0), None, Some(20.0)],
        vec![Some(5.0), None, Some(7.0)],
        vec![None, None, None],
    );

    let rows = sink.into_rows();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].pressure_dbar, 10.0);
    assert_eq!(rows[0].temperature_celsius, Some(5.0));
    assert_eq!(rows[0].salinity_psu, None);

    assert_eq!(rows[1].pressure_dbar, 20.0);
    assert_eq!(rows[1].temperature_celsius, Some(7.0));
    assert_eq!(rows[1].salinity_psu, None);

    assert_eq!(stats.levels_seen, 3);
    assert_eq!(stats.levels_skipped, 1);
    assert_eq!(stats.rows_emitted, 2);
}

#[test]
fn test_negative_pressure_skips_level_only() {
    let (sink, stats) = emit(
        levels(&[-1.0, 15.0]),
        levels(&[4.0, 5.0]),
        levels(&[35.0, 35.1]),
    );

    let rows = sink.into_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].pressure_dbar, 15.0);
    assert_eq!(stats.levels_skipped, 1);
}

#[test]
fn test_zero_pressure_is_valid() {
    let (sink, _) = emit(levels(&[0.0]), levels(&[20.0]), levels(&[35.0]));
    assert_eq!(sink.into_rows().len(), 1);
}

#[test]
fn test_non_finite_pressure_skips_level() {
    let (sink, stats) = emit(
        vec![Some(f64::NAN), Some(f64::INFINITY), Some(5.0)],
        vec![None, None, None],
        vec![None, None, None],
    );

    assert_eq!(sink.into_rows().len(), 1);
    assert_eq!(stats.levels_skipped, 2);
}

#[test]
fn test_row_carries_profile_identity() {
    let (sink, stats) = emit(levels(&[12.0]), levels(&[6.5]), levels(&[34.9]));

    let rows = sink.into_rows();
    assert_eq!(rows[0].platform_id, "2902746");
    assert_eq!(rows[0].latitude, -10.0);
    assert_eq!(rows[0].longitude, 75.0);
    assert_eq!(rows[0].timestamp, timestamp());
    assert_eq!(stats.rows_by_year.get(&2021), Some(&1));
}

#[test]
fn test_empty_pressure_series_emits_nothing() {
    let (sink, stats) = emit(vec![], vec![], vec![]);
    assert!(sink.into_rows().is_empty());
    assert_eq!(stats.levels_seen, 0);
    assert_eq!(stats.rows_emitted, 0);
}
