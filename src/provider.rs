//! Data sources for the dashboard.
//!
//! Charts consume plain `Vec<Series>`; providers are the seam where data
//! arrives from disk, an API response, or fixtures. The JSON shape matches
//! the serde derives on the model types.

use crate::models::Series;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read series data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse series data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can hand the dashboard a set of series.
pub trait DataProvider {
    fn series(&self) -> Result<Vec<Series>, ProviderError>;
}

/// In-memory provider, mostly for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    pub series: Vec<Series>,
}

impl StaticProvider {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }
}

impl DataProvider for StaticProvider {
    fn series(&self) -> Result<Vec<Series>, ProviderError> {
        Ok(self.series.clone())
    }
}

/// Provider reading a JSON array of series from a file.
#[derive(Debug, Clone)]
pub struct JsonProvider {
    path: std::path::PathBuf,
}

impl JsonProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse a JSON array of series from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Series>, ProviderError> {
        let series: Vec<Series> = serde_json::from_reader(reader)?;
        info!("loaded {} series", series.len());
        Ok(series)
    }
}

impl DataProvider for JsonProvider {
    fn series(&self) -> Result<Vec<Series>, ProviderError> {
        let file = File::open(&self.path)?;
        Self::from_reader(BufReader::new(file))
    }
}
