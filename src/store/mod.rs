//! Storage port for the persistent half of screen state.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors from loading or saving persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read state file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write state file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode state file '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode state: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// Durable storage for a persistent state aggregate `P`.
///
/// `load` returns `Ok(None)` on first run, before anything was ever saved.
/// A failed `save` leaves any previously stored value intact.
pub trait StateStore<P>: Send + Sync + 'static {
    fn load(&self) -> Result<Option<P>, StoreError>;
    fn save(&self, persisted: &P) -> Result<(), StoreError>;
}
