use crate::error::SourceError;
use orders::{Order, OrderSource};
use std::path::{Path, PathBuf};

/// Reads a JSON array of orders from disk on every call.
///
/// Missing fields on an order default to an empty symbol and zero
/// price/size.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Order>, SourceError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl OrderSource for JsonFileSource {
    fn get_orders(&self) -> anyhow::Result<Vec<Order>> {
        Ok(self.read()?)
    }
}
