//! Per-file extraction pipeline
//!
//! One `ProfileExtractor` drives the whole pipeline for one opened
//! source: resolve variables once, then for each profile resolve
//! identity and timestamp, filter, and emit rows. Profile- and
//! level-scoped conditions are recovered locally and counted; only
//! genuine read/write failures (unreadable container, unparseable
//! reference time, sink I/O) propagate, and the caller records those as
//! per-file failures.

use super::stats::FileStats;
use super::variables::VariableMap;
use super::{emitter, filter, platform, time, values};
use crate::Result;
use crate::app::models::{FileOutcome, ProfileSkip};
use crate::app::services::netcdf_source::ProfileSource;
use crate::app::services::row_sink::RowSink;
use crate::config::Config;
use crate::constants::PROFILE_DIMENSION;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Drives extraction of one source file at a time
///
/// Holds only configuration; all per-file state lives on the stack of
/// [`ProfileExtractor::extract`], so one extractor can be shared across
/// files and threads.
pub struct ProfileExtractor {
    config: Arc<Config>,
}

impl ProfileExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Extract all rows of one source file into the sink
    ///
    /// Returns the file-level outcome together with the per-file
    /// counters. The source handle is borrowed; the caller scopes it so
    /// it is released on every exit path.
    pub fn extract<S: ProfileSource, K: RowSink>(
        &self,
        source: &S,
        sink: &mut K,
    ) -> Result<(FileOutcome, FileStats)> {
        let mut stats = FileStats::new();

        let available = source.variable_names();
        let map = match VariableMap::resolve(&available, &self.config.variables) {
            Ok(map) => map,
            Err(missing) => {
                warn!(
                    "Skipping '{}': missing required variables [{}]",
                    source.path().display(),
                    missing.join(", ")
                );
                return Ok((FileOutcome::MissingVariables(missing), stats));
            }
        };

        // Files without the profile dimension hold one implicit profile.
        let profile_count = source.dimension_len(PROFILE_DIMENSION);
        let multi_profile = profile_count.is_some();
        let num_profiles = profile_count.unwrap_or(1);
        debug!(
            "Processing '{}': {} profile(s), multi_profile={}",
            source.path().display(),
            num_profiles,
            multi_profile
        );

        // The reference instant is file-wide; read and parse it once.
        let reference_raw = source.read_text(&map.reference_time, None)?;
        let reference = time::parse_reference_time(&reference_raw)?;

        for index in 0..num_profiles {
            stats.profiles_seen += 1;
            self.extract_profile(source, sink, &map, reference, index, multi_profile, &mut stats)?;
        }

        info!(
            "Extracted '{}': {}/{} profiles accepted, {} rows",
            source.path().display(),
            stats.profiles_accepted,
            stats.profiles_seen,
            stats.rows_emitted
        );

        Ok((FileOutcome::Extracted, stats))
    }

    #[allow(clippy::too_many_arguments)]
    fn extract_profile<S: ProfileSource, K: RowSink>(
        &self,
        source: &S,
        sink: &mut K,
        map: &VariableMap,
        reference: chrono::NaiveDateTime,
        index: usize,
        multi_profile: bool,
        stats: &mut FileStats,
    ) -> Result<()> {
        let offset = values::read_scalar(source, &map.time_offset, index, multi_profile)?;
        let Some(timestamp) = time::resolve_timestamp(reference, offset) else {
            debug!("Profile {}: no valid time offset, skipping", index);
            stats.record_profile_skip(ProfileSkip::MissingTimestamp);
            return Ok(());
        };

        let latitude = values::read_scalar(source, &map.latitude, index, multi_profile)?;
        let longitude = values::read_scalar(source, &map.longitude, index, multi_profile)?;

        let (latitude, longitude) =
            match filter::check_profile(&timestamp, latitude, longitude, &self.config.filters) {
                Ok(coordinates) => coordinates,
                Err(reason) => {
                    debug!("Profile {}: {}, skipping", index, reason);
                    stats.record_profile_skip(reason);
                    return Ok(());
                }
            };

        let slice = if multi_profile { Some(index) } else { None };
        let raw_id = source.read_text(&map.platform_id, slice)?;
        let platform_id = platform::decode_platform_id(&raw_id, source.path());

        let pressure = values::read_levels(source, &map.pressure, index, multi_profile)?;
        let temperature = match &map.temperature {
            Some(name) => values::read_levels(source, name, index, multi_profile)?,
            None => values::missing_levels(pressure.len()),
        };
        let salinity = match &map.salinity {
            Some(name) => values::read_levels(source, name, index, multi_profile)?,
            None => values::missing_levels(pressure.len()),
        };

        stats.profiles_accepted += 1;

        let levels = emitter::LevelSeries {
            pressure: &pressure,
            temperature: &temperature,
            salinity: &salinity,
        };
        emitter::emit_rows(
            &platform_id,
            timestamp,
            latitude,
            longitude,
            &levels,
            sink,
            stats,
        )
    }
}
