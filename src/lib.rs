// Nurse well-being synthetic data - knowledge-graph and workforce survey generators

// Core types, sampling primitives and fake-text helpers
pub mod core;

// Generated record types
pub mod models;

// Identifier issuing and output writing
pub mod infrastructure;

// Generation pipelines
pub mod data_seeder;

// Common utilities
pub mod config;
pub mod error;

// Re-exports for convenience
pub use config::{GraphConfig, RecordCounts, WorkforceConfig};
pub use data_seeder::{run_graph, run_workforce, GraphDataset, GraphSeeder, RunReport};
pub use error::{AppError, AppResult};
