use std::fs::{self, File};
use std::marker::PhantomData;
use std::path::PathBuf;

use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{StateStore, StoreError};

/// JSON file store.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a crash mid-write never leaves a torn state file. A `.lock` sidecar is
/// held exclusively for the duration of a save to serialize writers across
/// processes.
pub struct JsonFileStore<P> {
    path: PathBuf,
    _marker: PhantomData<fn() -> P>,
}

impl<P> JsonFileStore<P> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    fn write_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl<P> StateStore<P> for JsonFileStore<P>
where
    P: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn load(&self) -> Result<Option<P>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        let value = serde_json::from_str(&content).map_err(|e| StoreError::Decode {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(value))
    }

    fn save(&self, persisted: &P) -> Result<(), StoreError> {
        let payload =
            serde_json::to_vec_pretty(persisted).map_err(|e| StoreError::Encode { source: e })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }

        let lock_path = self.path.with_extension("lock");
        let lock = File::create(&lock_path).map_err(|e| self.write_err(e))?;
        lock.lock_exclusive().map_err(|e| self.write_err(e))?;

        let tmp_path = self.path.with_extension("tmp");
        let result = fs::write(&tmp_path, &payload)
            .and_then(|()| fs::rename(&tmp_path, &self.path))
            .map_err(|e| self.write_err(e));

        let _ = FileExt::unlock(&lock);
        result
    }
}
