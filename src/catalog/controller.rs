//! State controller for the product-list screen.

use std::sync::Arc;

use tokio::sync::watch;

use crate::mvi::Reducer;
use crate::store::{StateStore, StoreError};

use super::intent::CatalogIntent;
use super::reducer::{CatalogEffect, CatalogReducer};
use super::source::CatalogSource;
use super::state::{CatalogShelf, CatalogState};

/// Owns the catalog state and applies intents to it.
///
/// Snapshots are published through a `watch` channel: new subscribers see
/// the latest snapshot immediately and every later one in publish order.
/// Dispatch is synchronous; the simulated fetch and persistence flushes are
/// scheduled as tokio tasks, so the controller must live inside a runtime.
///
/// Constructing a controller restores the persistent half of the state from
/// the storage port (when the port holds one) and resets the transient half,
/// which is how a "process restart" looks to observers.
#[derive(Clone)]
pub struct CatalogController {
    tx: watch::Sender<CatalogState>,
    store: Arc<dyn StateStore<CatalogShelf>>,
    source: Arc<dyn CatalogSource>,
}

impl CatalogController {
    pub fn new(store: Arc<dyn StateStore<CatalogShelf>>, source: Arc<dyn CatalogSource>) -> Self {
        let shelf = match store.load() {
            Ok(Some(shelf)) => shelf,
            Ok(None) => CatalogShelf::default(),
            Err(err) => {
                tracing::warn!(error = %err, "could not restore catalog state, starting empty");
                CatalogShelf::default()
            }
        };
        let (tx, _) = watch::channel(CatalogState::restored(shelf));
        Self { tx, store, source }
    }

    /// Apply one intent.
    ///
    /// The transition itself happens before this returns; results are
    /// observed through the state stream, nothing is returned to the caller.
    pub fn dispatch(&self, intent: CatalogIntent) {
        tracing::debug!(?intent, "dispatch");
        let mut effect = None;
        let mut shelf_changed = false;
        self.tx.send_modify(|state| {
            let prev = std::mem::take(state);
            let prev_shelf = prev.shelf.clone();
            let (next, requested) = CatalogReducer::reduce(prev, intent);
            shelf_changed = next.shelf != prev_shelf;
            effect = requested;
            *state = next;
        });

        if shelf_changed {
            self.schedule_flush();
        }

        if let Some(CatalogEffect::FetchCatalog) = effect {
            let source = Arc::clone(&self.source);
            let controller = self.clone();
            tokio::spawn(async move {
                let products = source.fetch().await;
                // No cancellation: a fetch started before an intervening
                // Unload/Load still lands when it completes.
                controller.dispatch(CatalogIntent::CatalogFetched(products));
            });
        }
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> CatalogState {
        self.tx.borrow().clone()
    }

    /// Observe the state stream. The receiver yields the current snapshot
    /// on first borrow and wakes on every subsequent publish.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.tx.subscribe()
    }

    /// Synchronously write the persistent half to the storage port.
    ///
    /// Used at shutdown; routine flushes happen in the background after
    /// every shelf change.
    pub fn flush(&self) -> Result<(), StoreError> {
        let shelf = self.tx.borrow().shelf.clone();
        self.store.save(&shelf)
    }

    fn schedule_flush(&self) {
        let store = Arc::clone(&self.store);
        let shelf = self.tx.borrow().shelf.clone();
        tokio::spawn(async move {
            if let Err(err) = store.save(&shelf) {
                tracing::warn!(error = %err, "catalog state flush failed");
            }
        });
    }
}
