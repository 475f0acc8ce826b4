use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Requested record counts for the knowledge-graph dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    pub nurses: usize,
    pub clinics: usize,
    pub incidents: usize,
    pub comments: usize,
    pub teams: usize,
    pub interventions: usize,
    pub families: usize,
    pub posts: usize,
}

impl Default for RecordCounts {
    fn default() -> Self {
        Self {
            nurses: 500,
            clinics: 20,
            incidents: 700,
            comments: 1500,
            teams: 12,
            interventions: 10,
            families: 300,
            posts: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub counts: RecordCounts,
    pub output_dir: PathBuf,
    /// Unseeded runs draw from OS entropy
    pub seed: Option<u64>,
    /// "Today" for date-this-year draws; seeded runs fall back to a fixed date,
    /// unseeded runs to the local date
    pub reference_date: Option<NaiveDate>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            counts: RecordCounts::default(),
            output_dir: PathBuf::from("nurse_kg_data_v1"),
            seed: None,
            reference_date: None,
        }
    }
}

impl GraphConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from defaults overlaid with whatever `lookup` returns for the `NKG_*` keys
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let count = |key: &str, default: usize| -> AppResult<usize> {
            match lookup(key) {
                Some(raw) => parse_count(key, &raw),
                None => Ok(default),
            }
        };

        let counts = RecordCounts {
            nurses: count("NKG_NUM_NURSES", defaults.counts.nurses)?,
            clinics: count("NKG_NUM_CLINICS", defaults.counts.clinics)?,
            incidents: count("NKG_NUM_INCIDENTS", defaults.counts.incidents)?,
            comments: count("NKG_NUM_COMMENTS", defaults.counts.comments)?,
            teams: count("NKG_NUM_TEAMS", defaults.counts.teams)?,
            interventions: count("NKG_NUM_INTERVENTIONS", defaults.counts.interventions)?,
            families: count("NKG_NUM_FAMILIES", defaults.counts.families)?,
            posts: count("NKG_NUM_POSTS", defaults.counts.posts)?,
        };

        let config = Self {
            counts,
            output_dir: lookup("NKG_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            seed: lookup("NKG_SEED")
                .map(|raw| parse_seed("NKG_SEED", &raw))
                .transpose()?,
            reference_date: lookup("NKG_REFERENCE_DATE")
                .map(|raw| parse_date("NKG_REFERENCE_DATE", &raw))
                .transpose()?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_output_dir(&self.output_dir)
    }
}

/// Settings for the workforce survey dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkforceConfig {
    pub nurses: usize,
    pub supervisors: usize,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
}

impl Default for WorkforceConfig {
    fn default() -> Self {
        Self {
            nurses: 150,
            supervisors: 12,
            output_dir: PathBuf::from("nurses_data_v3"),
            seed: Some(42),
        }
    }
}

impl WorkforceConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            nurses: match lookup("NKG_WORKFORCE_NURSES") {
                Some(raw) => parse_count("NKG_WORKFORCE_NURSES", &raw)?,
                None => defaults.nurses,
            },
            supervisors: match lookup("NKG_WORKFORCE_SUPERVISORS") {
                Some(raw) => parse_count("NKG_WORKFORCE_SUPERVISORS", &raw)?,
                None => defaults.supervisors,
            },
            output_dir: lookup("NKG_WORKFORCE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            seed: match lookup("NKG_WORKFORCE_SEED") {
                Some(raw) => Some(parse_seed("NKG_WORKFORCE_SEED", &raw)?),
                None => defaults.seed,
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_output_dir(&self.output_dir)
    }
}

/// Reject negative counts; everything else converts losslessly
pub fn check_count(name: &str, value: i64) -> AppResult<usize> {
    usize::try_from(value).map_err(|_| {
        AppError::Configuration(format!("{} must not be negative (got {})", name, value))
    })
}

pub fn parse_count(name: &str, raw: &str) -> AppResult<usize> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        AppError::Configuration(format!("{} must be a whole number (got {:?})", name, raw))
    })?;
    check_count(name, value)
}

pub fn parse_seed(name: &str, raw: &str) -> AppResult<u64> {
    raw.trim().parse().map_err(|_| {
        AppError::Configuration(format!("{} must be an unsigned integer (got {:?})", name, raw))
    })
}

pub fn parse_date(name: &str, raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Configuration(format!("{} must be a YYYY-MM-DD date (got {:?})", name, raw))
    })
}

fn validate_output_dir(dir: &std::path::Path) -> AppResult<()> {
    if dir.as_os_str().is_empty() {
        return Err(AppError::Configuration(
            "output directory must not be empty".to_string(),
        ));
    }
    Ok(())
}
