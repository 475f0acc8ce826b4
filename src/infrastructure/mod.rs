// Infrastructure - identifier issuing and everything that touches the output directory
pub mod csv_sink;              // One CSV file per collection
pub mod id_generator;          // Per-kind unique identifiers
pub mod manifest;              // JSON run summary

pub use csv_sink::{CollectionEntry, CsvSink, WriteOutcome};
pub use id_generator::IdGenerator;
pub use manifest::{RunManifest, MANIFEST_FILE};
