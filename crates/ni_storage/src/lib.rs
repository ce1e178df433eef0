use ni_core::{Error, Result};
use std::str::FromStr;
use std::sync::Arc;

pub mod backends;
pub mod fixtures;

pub use backends::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// In-memory store seeded with the demo collection
    Memory,
    /// In-memory store with no articles
    Empty,
}

impl FromStr for StorageKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageKind::Memory),
            "empty" => Ok(StorageKind::Empty),
            other => Err(Error::Storage(format!(
                "Unknown storage backend: {}. Available backends: memory, empty",
                other
            ))),
        }
    }
}

pub fn create_storage(kind: &str) -> Result<Arc<InMemoryStorage>> {
    let storage = match kind.parse::<StorageKind>()? {
        StorageKind::Memory => InMemoryStorage::seeded(),
        StorageKind::Empty => InMemoryStorage::empty(),
    };
    Ok(Arc::new(storage))
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_storage, StorageKind};
}
