//! Restart behavior: the shelf survives, the session resets.

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use stocklist::catalog::{CatalogController, CatalogIntent, CatalogShelf, DemoCatalog};
use stocklist::store::{JsonFileStore, MemoryStore, StateStore};

fn source() -> Arc<DemoCatalog> {
    Arc::new(DemoCatalog::new(Duration::ZERO))
}

#[tokio::test]
async fn restart_restores_shelf_and_resets_session() {
    let store = Arc::new(MemoryStore::<CatalogShelf>::new());

    let first = CatalogController::new(store.clone(), source());
    first.dispatch(CatalogIntent::CatalogFetched(DemoCatalog::products()));
    first.dispatch(CatalogIntent::SelectProduct("Phone".to_string()));
    // Leave the session in a non-default state before the "crash": the
    // fetch below never completes because we never yield to it.
    first.dispatch(CatalogIntent::LoadProducts);
    assert!(first.snapshot().session.is_loading);
    first.flush().unwrap();
    drop(first);

    let second = CatalogController::new(store, source());
    let restored = second.snapshot();
    assert_eq!(restored.shelf.products, DemoCatalog::products());
    assert_eq!(restored.shelf.selected_product.as_deref(), Some("Phone"));
    assert!(!restored.session.is_loading);
    assert!(restored.session.error_message.is_none());
}

#[tokio::test]
async fn error_feedback_does_not_survive_restart() {
    let store = Arc::new(MemoryStore::<CatalogShelf>::new());

    let first = CatalogController::new(store.clone(), source());
    first.dispatch(CatalogIntent::CatalogFetched(DemoCatalog::products()));
    first.flush().unwrap();
    first.dispatch(CatalogIntent::RemoveSelectedProduct);
    assert!(first.snapshot().session.error_message.is_some());
    drop(first);

    let second = CatalogController::new(store, source());
    assert!(second.snapshot().session.error_message.is_none());
    assert_eq!(second.snapshot().shelf.products, DemoCatalog::products());
}

#[tokio::test]
async fn restart_over_a_state_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let first = CatalogController::new(
        Arc::new(JsonFileStore::<CatalogShelf>::new(path.clone())),
        source(),
    );
    first.dispatch(CatalogIntent::CatalogFetched(DemoCatalog::products()));
    first.dispatch(CatalogIntent::SelectProduct("Headphones".to_string()));
    first.flush().unwrap();
    drop(first);

    let second = CatalogController::new(Arc::new(JsonFileStore::<CatalogShelf>::new(path)), source());
    let restored = second.snapshot();
    assert_eq!(restored.shelf.products, DemoCatalog::products());
    assert_eq!(
        restored.shelf.selected_product.as_deref(),
        Some("Headphones")
    );
}

#[tokio::test]
async fn first_run_starts_from_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let controller = CatalogController::new(
        Arc::new(JsonFileStore::<CatalogShelf>::new(dir.path().join("state.json"))),
        source(),
    );
    assert_eq!(controller.snapshot().shelf, CatalogShelf::default());
}

#[tokio::test]
async fn corrupt_state_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "{ not json").unwrap();

    let controller =
        CatalogController::new(Arc::new(JsonFileStore::<CatalogShelf>::new(path)), source());
    assert_eq!(controller.snapshot().shelf, CatalogShelf::default());
}

#[tokio::test]
async fn shelf_changes_flush_in_the_background() {
    let store = Arc::new(MemoryStore::<CatalogShelf>::new());
    let controller = CatalogController::new(store.clone(), source());

    controller.dispatch(CatalogIntent::SelectProduct("Phone".to_string()));
    for _ in 0..16 {
        tokio::task::yield_now().await;
        if store.load().unwrap().is_some() {
            break;
        }
    }

    let saved = store.load().unwrap().expect("background flush should run");
    assert_eq!(saved.selected_product.as_deref(), Some("Phone"));
    assert!(saved.products.is_empty());
}

#[tokio::test]
async fn session_only_changes_do_not_touch_the_store() {
    let store = Arc::new(MemoryStore::<CatalogShelf>::new());
    let controller = CatalogController::new(store.clone(), source());

    // No selection, so this only sets the transient error message.
    controller.dispatch(CatalogIntent::RemoveSelectedProduct);
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }

    assert!(store.load().unwrap().is_none());
}
