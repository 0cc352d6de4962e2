use serde::{Deserialize, Serialize};

use crate::mvi::State;

/// Persistent half of the catalog screen state.
///
/// Everything in here survives a process restart: it is what the storage
/// port serializes. The split into [`CatalogShelf`] and [`CatalogSession`]
/// makes the persistence partition a property of the types — a field cannot
/// accidentally end up on the wrong side of the save path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogShelf {
    /// Product names in insertion order. Duplicates are allowed; removal
    /// matches by value and drops every occurrence.
    #[serde(default)]
    pub products: Vec<String>,
    /// The currently selected product name, if any. Not validated against
    /// `products`.
    #[serde(default)]
    pub selected_product: Option<String>,
}

/// Transient half of the catalog screen state.
///
/// Never serialized; every restart begins from `Default`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogSession {
    /// True only while a simulated catalog fetch is in flight.
    pub is_loading: bool,
    /// Feedback for the most recent intent; cleared by most subsequent
    /// intents.
    pub error_message: Option<String>,
}

/// Full state snapshot of the product-list screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    pub shelf: CatalogShelf,
    pub session: CatalogSession,
}

impl State for CatalogState {}

impl CatalogState {
    /// Build the post-restart snapshot: restored persistent half, default
    /// transient half.
    pub fn restored(shelf: CatalogShelf) -> Self {
        Self {
            shelf,
            session: CatalogSession::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty_and_idle() {
        let state = CatalogState::default();
        assert!(state.shelf.products.is_empty());
        assert!(state.shelf.selected_product.is_none());
        assert!(!state.session.is_loading);
        assert!(state.session.error_message.is_none());
    }

    #[test]
    fn restored_resets_session() {
        let shelf = CatalogShelf {
            products: vec!["Laptop".to_string()],
            selected_product: Some("Laptop".to_string()),
        };
        let state = CatalogState::restored(shelf.clone());
        assert_eq!(state.shelf, shelf);
        assert_eq!(state.session, CatalogSession::default());
    }

    #[test]
    fn shelf_deserializes_from_partial_json() {
        // Older state files may miss fields added later.
        let shelf: CatalogShelf = serde_json::from_str("{}").unwrap();
        assert_eq!(shelf, CatalogShelf::default());
    }
}
