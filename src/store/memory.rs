use parking_lot::Mutex;

use super::{StateStore, StoreError};

/// In-memory store.
///
/// Backs `--ephemeral` runs and tests; "restart" amounts to building a new
/// controller over the same store instance.
#[derive(Default)]
pub struct MemoryStore<P> {
    slot: Mutex<Option<P>>,
}

impl<P> MemoryStore<P> {
    pub fn new() -> Self {
        Self { slot: Mutex::new(None) }
    }
}

impl<P> StateStore<P> for MemoryStore<P>
where
    P: Clone + Send + Sync + 'static,
{
    fn load(&self) -> Result<Option<P>, StoreError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, persisted: &P) -> Result<(), StoreError> {
        *self.slot.lock() = Some(persisted.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store: MemoryStore<String> = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        store.save(&"hello".to_string()).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn save_overwrites() {
        let store = MemoryStore::new();
        store.save(&1u32).unwrap();
        store.save(&2u32).unwrap();
        assert_eq!(store.load().unwrap(), Some(2));
    }
}
