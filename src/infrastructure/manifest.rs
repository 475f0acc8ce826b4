// Run manifest - a JSON summary written next to the CSV files

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::csv_sink::{CollectionEntry, CsvSink};
use crate::error::AppResult;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Serialize)]
pub struct RunManifest<C: Serialize> {
    pub dataset: &'static str,
    pub seed: Option<u64>,
    pub reference_date: Option<NaiveDate>,
    pub config: C,
    pub collections: Vec<CollectionEntry>,
    pub warnings: Vec<String>,
}

impl<C: Serialize> RunManifest<C> {
    /// Snapshot what `sink` has written so far
    pub fn from_sink(
        dataset: &'static str,
        seed: Option<u64>,
        reference_date: Option<NaiveDate>,
        config: C,
        sink: &CsvSink,
    ) -> Self {
        Self {
            dataset,
            seed,
            reference_date,
            config,
            collections: sink.entries().to_vec(),
            warnings: sink.warnings().to_vec(),
        }
    }

    pub fn write_to(&self, output_dir: &Path) -> AppResult<PathBuf> {
        let path = output_dir.join(MANIFEST_FILE);
        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, self)?;
        info!("Wrote {}", MANIFEST_FILE);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    #[derive(Serialize)]
    struct Pair {
        left: u8,
        right: u8,
    }

    #[test]
    fn test_manifest_lists_written_and_skipped_collections() {
        let dir = TempDir::new().unwrap();
        let mut sink = CsvSink::new(dir.path()).unwrap();
        sink.write("pairs", &[Pair { left: 1, right: 2 }]).unwrap();
        sink.write::<Pair>("empty", &[]).unwrap();

        let manifest = RunManifest::from_sink("test", Some(9), None, serde_json::json!({"n": 1}), &sink);
        assert_eq!(manifest.collections.iter().map(|c| c.rows).sum::<usize>(), 1);
        let path = manifest.write_to(dir.path()).unwrap();

        let parsed: Value = serde_json::from_reader(File::open(path).unwrap()).unwrap();
        assert_eq!(parsed["dataset"], "test");
        assert_eq!(parsed["seed"], 9);
        assert_eq!(parsed["collections"][0]["file"], "pairs.csv");
        assert_eq!(parsed["collections"][1]["file"], Value::Null);
        assert_eq!(parsed["warnings"].as_array().unwrap().len(), 1);
    }
}
