// CSV Sink - writes one delimited file per generated collection
// Header comes from the first record's field names, in field order

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// What happened to one collection handed to the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { path: PathBuf, rows: usize },
    SkippedEmpty,
}

/// Bookkeeping for the run manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionEntry {
    pub name: String,
    /// `None` when the collection was empty and no file was written
    pub file: Option<String>,
    pub rows: usize,
}

/// Sequential writer for a run's output directory.
///
/// Empty collections never produce a file; each one yields exactly one
/// warning, logged and kept in [`CsvSink::warnings`].
#[derive(Debug)]
pub struct CsvSink {
    output_dir: PathBuf,
    entries: Vec<CollectionEntry>,
    warnings: Vec<String>,
}

impl CsvSink {
    /// Create the sink, creating `output_dir` (and parents) if absent
    pub fn new(output_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            entries: Vec::new(),
            warnings: Vec::new(),
        })
    }

    /// Write `records` to `<output_dir>/<name>.csv`
    pub fn write<T: Serialize>(&mut self, name: &str, records: &[T]) -> AppResult<WriteOutcome> {
        let file_name = format!("{}.csv", name);

        let Some(first) = records.first() else {
            let message = format!("No data to write for {}", file_name);
            warn!("{}", message);
            self.warnings.push(message);
            self.entries.push(CollectionEntry {
                name: name.to_string(),
                file: None,
                rows: 0,
            });
            return Ok(WriteOutcome::SkippedEmpty);
        };

        let header: Vec<String> = record_fields(name, first)?.keys().cloned().collect();
        let path = self.output_dir.join(&file_name);
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(&header)?;

        for record in records {
            let fields = record_fields(name, record)?;
            let row: Vec<String> = header
                .iter()
                .map(|column| fields.get(column).map(render_cell).unwrap_or_default())
                .collect();
            writer.write_record(&row)?;
        }
        writer.flush()?;

        info!("Wrote {} with {} records", file_name, records.len());
        self.entries.push(CollectionEntry {
            name: name.to_string(),
            file: Some(file_name),
            rows: records.len(),
        });
        Ok(WriteOutcome::Written {
            path,
            rows: records.len(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn record_fields<T: Serialize>(name: &str, record: &T) -> AppResult<Map<String, Value>> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        other => Err(AppError::Validation(format!(
            "records for {} must serialize to named fields, got {}",
            name, other
        ))),
    }
}

/// Flatten one JSON value into a CSV cell
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(render_cell).collect::<Vec<_>>().join("|"),
        Value::Object(_) => value.to_string(),
    }
}
