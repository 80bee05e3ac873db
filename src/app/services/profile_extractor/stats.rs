//! Extraction statistics
//!
//! Every skipped file, profile, and level is counted under its reason, so
//! a batch run can report exactly what it could not extract instead of
//! discarding failures in a generic handler.

use crate::app::models::ProfileSkip;
use std::collections::BTreeMap;

/// Per-file extraction counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileStats {
    /// Profiles iterated in the file
    pub profiles_seen: usize,
    /// Profiles that passed all filters
    pub profiles_accepted: usize,
    /// Profiles rejected for a missing or non-finite time offset
    pub profiles_missing_timestamp: usize,
    /// Profiles rejected for missing or non-finite coordinates
    pub profiles_invalid_coordinates: usize,
    /// Profiles rejected by the temporal filter
    pub profiles_outside_year_window: usize,
    /// Profiles rejected by the geographic filter
    pub profiles_outside_region: usize,
    /// Pressure levels iterated in accepted profiles
    pub levels_seen: usize,
    /// Levels skipped for missing/negative pressure or conversion failure
    pub levels_skipped: usize,
    /// Rows actually pushed to the sink
    pub rows_emitted: usize,
    /// Emitted rows by calendar year
    pub rows_by_year: BTreeMap<i32, usize>,
}

impl FileStats {
    /// Create empty per-file counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a whole-profile rejection under its reason
    pub fn record_profile_skip(&mut self, reason: ProfileSkip) {
        match reason {
            ProfileSkip::MissingTimestamp => self.profiles_missing_timestamp += 1,
            ProfileSkip::InvalidCoordinates => self.profiles_invalid_coordinates += 1,
            ProfileSkip::OutsideYearWindow => self.profiles_outside_year_window += 1,
            ProfileSkip::OutsideRegion => self.profiles_outside_region += 1,
        }
    }

    /// Record one emitted row
    pub fn record_row(&mut self, year: i32) {
        self.rows_emitted += 1;
        *self.rows_by_year.entry(year).or_insert(0) += 1;
    }

    /// Total profiles rejected, over all reasons
    pub fn profiles_skipped(&self) -> usize {
        self.profiles_missing_timestamp
            + self.profiles_invalid_coordinates
            + self.profiles_outside_year_window
            + self.profiles_outside_region
    }
}

/// Batch-level extraction counters, aggregated across files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionStats {
    /// Files discovered and attempted
    pub files_seen: usize,
    /// Files whose profiles were iterated (even if none were accepted)
    pub files_extracted: usize,
    /// Files rejected because a required variable role was unresolved
    pub files_missing_variables: usize,
    /// Files that could not be opened or read
    pub files_unreadable: usize,
    /// Aggregated per-file counters
    pub totals: FileStats,
}

impl ExtractionStats {
    /// Create empty batch counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's counters into the batch totals
    pub fn merge_file(&mut self, stats: &FileStats) {
        self.totals.profiles_seen += stats.profiles_seen;
        self.totals.profiles_accepted += stats.profiles_accepted;
        self.totals.profiles_missing_timestamp += stats.profiles_missing_timestamp;
        self.totals.profiles_invalid_coordinates += stats.profiles_invalid_coordinates;
        self.totals.profiles_outside_year_window += stats.profiles_outside_year_window;
        self.totals.profiles_outside_region += stats.profiles_outside_region;
        self.totals.levels_seen += stats.levels_seen;
        self.totals.levels_skipped += stats.levels_skipped;
        self.totals.rows_emitted += stats.rows_emitted;
        for (year, count) in &stats.rows_by_year {
            *self.totals.rows_by_year.entry(*year).or_insert(0) += count;
        }
    }

    /// Profile acceptance rate as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.totals.profiles_seen == 0 {
            0.0
        } else {
            (self.totals.profiles_accepted as f64 / self.totals.profiles_seen as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Extraction summary: {} files ({} extracted, {} missing variables, {} unreadable) | \
             {} profiles seen, {} accepted ({:.1}%), {} skipped | \
             {} levels seen, {} rows emitted, {} levels skipped",
            self.files_seen,
            self.files_extracted,
            self.files_missing_variables,
            self.files_unreadable,
            self.totals.profiles_seen,
            self.totals.profiles_accepted,
            self.acceptance_rate(),
            self.totals.profiles_skipped(),
            self.totals.levels_seen,
            self.totals.rows_emitted,
            self.totals.levels_skipped,
        )
    }
}
