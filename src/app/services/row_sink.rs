//! Row sinks
//!
//! The extraction core streams rows one at a time; a sink decides where
//! they go. [`CsvRowSink`] writes the eight-column CSV layout used by the
//! downstream analysis tooling. [`MemorySink`] buffers rows in memory and
//! backs both the worker-pool handoff (one batch per file) and tests.

use crate::app::models::MeasurementRow;
use crate::constants::CSV_HEADERS;
use crate::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Consumer of an ordered stream of measurement rows
pub trait RowSink {
    /// Accept one row
    fn write_row(&mut self, row: &MeasurementRow) -> Result<()>;

    /// Flush any buffered output; called once after the last row
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// CSV sink writing the standard eight-column measurement layout
///
/// Header row: platform_id, measurement_date, latitude, longitude,
/// pressure_dbar, temperature_celsius, salinity_psu, year. Timestamps are
/// serialized as "YYYY-MM-DD HH:MM:SS"; absent values are empty fields.
pub struct CsvRowSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvRowSink<File> {
    /// Create the output file and write the header row
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| {
            Error::io(format!("Failed to create output file '{}'", path.display()), e)
        })?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvRowSink<W> {
    /// Wrap an arbitrary writer, emitting the header row immediately
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(writer);
        writer
            .write_record(CSV_HEADERS)
            .map_err(|e| Error::csv_writing("Failed to write CSV header", Some(e)))?;
        Ok(Self { writer })
    }
}

impl<W: Write> RowSink for CsvRowSink<W> {
    fn write_row(&mut self, row: &MeasurementRow) -> Result<()> {
        self.writer
            .write_record(row.to_csv_record())
            .map_err(|e| Error::csv_writing("Failed to write CSV row", Some(e)))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::io("Failed to flush CSV output", e))?;
        Ok(())
    }
}

/// In-memory sink buffering rows for batched handoff
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Rows received so far, in emission order
    pub rows: Vec<MeasurementRow>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the sink, yielding its buffered rows
    pub fn into_rows(self) -> Vec<MeasurementRow> {
        self.rows
    }
}

impl RowSink for MemorySink {
    fn write_row(&mut self, row: &MeasurementRow) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_row() -> MeasurementRow {
        MeasurementRow::new(
            "2902746".to_string(),
            Utc.with_ymd_and_hms(2022, 3, 1, 6, 0, 0).unwrap(),
            -5.0,
            90.0,
            12.5,
            Some(28.4),
            None,
        )
        .unwrap()
    }

    #[test]
    fn csv_sink_writes_header_and_rows() {
        let mut sink = CsvRowSink::from_writer(Vec::new()).unwrap();
        sink.write_row(&sample_row()).unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.writer.into_inner().unwrap()).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "platform_id,measurement_date,latitude,longitude,pressure_dbar,\
             temperature_celsius,salinity_psu,year"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2902746,2022-03-01 06:00:00,-5,90,12.5,28.4,,2022"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn memory_sink_preserves_order() {
        let mut sink = MemorySink::new();
        let row = sample_row();
        sink.write_row(&row).unwrap();
        sink.write_row(&row).unwrap();
        assert_eq!(sink.into_rows().len(), 2);
    }
}
