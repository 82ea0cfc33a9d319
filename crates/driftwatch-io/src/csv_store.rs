//! Series CSV files: a `timestamp` column plus one metric column.
//!
//! ```text
//! timestamp,p95_latency_ms
//! 2026-01-01T00:00:00,181.42
//! ```

use std::path::Path;

use chrono::{DateTime, NaiveDateTime};

use driftwatch_core::constants::{TIMESTAMP_COLUMN, TIMESTAMP_FORMAT};
use driftwatch_core::errors::DataError;
use driftwatch_core::models::{Sample, Series};

/// Read `metric` from the CSV at `path`.
///
/// Rejects files with no data rows and files whose timestamps go backwards.
/// Row numbers in errors are 1-based and count the header.
pub fn read_series(path: &Path, metric: &str) -> Result<Series, DataError> {
    let display = path.display().to_string();
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(&display, e))?;

    let headers = reader
        .headers()
        .map_err(|e| csv_error(&display, e))?
        .clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| DataError::MissingColumn {
                path: display.clone(),
                column: name.to_string(),
            })
    };
    let ts_idx = column(TIMESTAMP_COLUMN)?;
    let value_idx = column(metric)?;

    let mut samples = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 2;
        let record = record.map_err(|e| csv_error(&display, e))?;

        let raw_ts = record.get(ts_idx).unwrap_or("").trim();
        let timestamp = parse_timestamp(raw_ts).ok_or_else(|| DataError::InvalidTimestamp {
            path: display.clone(),
            row,
            raw: raw_ts.to_string(),
        })?;

        let raw_value = record.get(value_idx).unwrap_or("").trim();
        let value = raw_value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DataError::InvalidValue {
                path: display.clone(),
                row,
                raw: raw_value.to_string(),
            })?;

        samples.push(Sample::new(timestamp, value));
    }

    let series = Series::new(samples);
    if series.is_empty() {
        return Err(DataError::Empty { path: display });
    }
    if let Some(index) = series.check_ordering() {
        return Err(DataError::OutOfOrder {
            path: display,
            row: index + 2,
        });
    }

    tracing::debug!(path = %path.display(), rows = series.len(), metric, "loaded series");
    Ok(series)
}

/// Write `series` to `path` under the column name `metric`, replacing any
/// existing file.
pub fn write_series(path: &Path, series: &Series, metric: &str) -> Result<(), DataError> {
    let display = path.display().to_string();
    let mut writer = csv::Writer::from_path(path).map_err(|e| csv_error(&display, e))?;

    writer
        .write_record([TIMESTAMP_COLUMN, metric])
        .map_err(|e| csv_error(&display, e))?;
    for sample in series {
        writer
            .write_record([
                sample.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                sample.value.to_string(),
            ])
            .map_err(|e| csv_error(&display, e))?;
    }
    writer.flush().map_err(|e| DataError::Io {
        path: display.clone(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), rows = series.len(), "wrote series");
    Ok(())
}

/// ISO-8601 local date-time, with `T` or space separator and optional
/// fractional seconds. Offsets are accepted and dropped.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

fn csv_error(path: &str, e: csv::Error) -> DataError {
    if e.is_io_error() {
        DataError::Io {
            path: path.to_string(),
            message: e.to_string(),
        }
    } else {
        DataError::Csv {
            path: path.to_string(),
            message: e.to_string(),
        }
    }
}
