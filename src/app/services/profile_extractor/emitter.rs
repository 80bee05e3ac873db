//! Per-level row emission
//!
//! Walks the pressure levels of an accepted profile and pushes one row
//! per usable level to the sink. Pressure gates the level: a missing or
//! negative value skips that level alone. Temperature and salinity never
//! gate anything; each is independently absent when its value at the
//! level is missing. Sink errors are real I/O failures and propagate.

use super::stats::FileStats;
use super::values;
use crate::Result;
use crate::app::models::MeasurementRow;
use crate::app::services::row_sink::RowSink;
use chrono::{DateTime, Utc};
use tracing::debug;

/// The per-level sequences of one accepted profile
pub struct LevelSeries<'a> {
    pub pressure: &'a [Option<f64>],
    pub temperature: &'a [Option<f64>],
    pub salinity: &'a [Option<f64>],
}

/// Emit rows for every usable level of an accepted profile
pub fn emit_rows<K: RowSink>(
    platform_id: &str,
    timestamp: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
    levels: &LevelSeries<'_>,
    sink: &mut K,
    stats: &mut FileStats,
) -> Result<()> {
    for index in 0..levels.pressure.len() {
        stats.levels_seen += 1;

        let Some(pressure) = values::value_at(levels.pressure, index) else {
            stats.levels_skipped += 1;
            continue;
        };
        if pressure < 0.0 {
            debug!(
                "Skipping level {} of platform {}: negative pressure {}",
                index, platform_id, pressure
            );
            stats.levels_skipped += 1;
            continue;
        }

        let row = MeasurementRow::new(
            platform_id.to_string(),
            timestamp,
            latitude,
            longitude,
            pressure,
            values::value_at(levels.temperature, index),
            values::value_at(levels.salinity, index),
        );

        // A conversion failure affects this level only.
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!(
                    "Skipping level {} of platform {}: {}",
                    index, platform_id, e
                );
                stats.levels_skipped += 1;
                continue;
            }
        };

        sink.write_row(&row)?;
        stats.record_row(row.year());
    }

    Ok(())
}
