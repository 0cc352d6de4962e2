//! Transition function for the product-list screen.

use crate::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::{CatalogSession, CatalogShelf, CatalogState};

/// Shown when `RemoveSelectedProduct` arrives with nothing selected.
pub const NO_SELECTION_MESSAGE: &str = "Please select a product first";

/// Asynchronous work requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEffect {
    /// Run the simulated catalog fetch; its result comes back as
    /// [`CatalogIntent::CatalogFetched`].
    FetchCatalog,
}

/// Reducer for the catalog screen.
///
/// Pure function — persistence flushes and the simulated fetch are handled
/// by the controller around the dispatch call.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;
    type Effect = CatalogEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>) {
        match intent {
            CatalogIntent::LoadProducts => (
                CatalogState {
                    session: CatalogSession {
                        is_loading: true,
                        error_message: None,
                    },
                    ..state
                },
                Some(CatalogEffect::FetchCatalog),
            ),

            CatalogIntent::CatalogFetched(products) => (
                CatalogState {
                    shelf: CatalogShelf {
                        products,
                        ..state.shelf
                    },
                    session: CatalogSession {
                        is_loading: false,
                        ..state.session
                    },
                },
                None,
            ),

            CatalogIntent::UnloadProducts => (
                CatalogState {
                    shelf: CatalogShelf::default(),
                    session: CatalogSession {
                        error_message: None,
                        ..state.session
                    },
                },
                None,
            ),

            CatalogIntent::RemoveSelectedProduct => match state.shelf.selected_product {
                None => (
                    CatalogState {
                        session: CatalogSession {
                            error_message: Some(NO_SELECTION_MESSAGE.to_string()),
                            ..state.session
                        },
                        ..state
                    },
                    None,
                ),
                Some(selected) => {
                    let mut products = state.shelf.products;
                    // Filter-by-equality: every occurrence of the selected
                    // value goes, not just the first.
                    products.retain(|product| product != &selected);
                    (
                        CatalogState {
                            shelf: CatalogShelf {
                                products,
                                selected_product: None,
                            },
                            session: CatalogSession {
                                error_message: None,
                                ..state.session
                            },
                        },
                        None,
                    )
                }
            },

            CatalogIntent::SelectProduct(name) => (
                CatalogState {
                    shelf: CatalogShelf {
                        selected_product: Some(name),
                        ..state.shelf
                    },
                    session: CatalogSession {
                        error_message: None,
                        ..state.session
                    },
                },
                None,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked() -> CatalogState {
        CatalogState {
            shelf: CatalogShelf {
                products: vec![
                    "Laptop".to_string(),
                    "Phone".to_string(),
                    "Headphones".to_string(),
                ],
                selected_product: None,
            },
            session: CatalogSession::default(),
        }
    }

    #[test]
    fn load_enters_loading_and_requests_fetch() {
        let (state, effect) =
            CatalogReducer::reduce(CatalogState::default(), CatalogIntent::LoadProducts);
        assert!(state.session.is_loading);
        assert!(state.session.error_message.is_none());
        assert_eq!(effect, Some(CatalogEffect::FetchCatalog));
    }

    #[test]
    fn load_clears_previous_error() {
        let mut state = stocked();
        state.session.error_message = Some(NO_SELECTION_MESSAGE.to_string());
        let (state, _) = CatalogReducer::reduce(state, CatalogIntent::LoadProducts);
        assert!(state.session.error_message.is_none());
    }

    #[test]
    fn fetched_replaces_products_and_leaves_loading() {
        let mut state = stocked();
        state.session.is_loading = true;
        let (state, effect) = CatalogReducer::reduce(
            state,
            CatalogIntent::CatalogFetched(vec!["Monitor".to_string()]),
        );
        assert_eq!(state.shelf.products, vec!["Monitor".to_string()]);
        assert!(!state.session.is_loading);
        assert!(effect.is_none());
    }

    #[test]
    fn fetched_keeps_selection() {
        let mut state = stocked();
        state.shelf.selected_product = Some("Phone".to_string());
        let (state, _) = CatalogReducer::reduce(
            state,
            CatalogIntent::CatalogFetched(vec!["Monitor".to_string()]),
        );
        assert_eq!(state.shelf.selected_product, Some("Phone".to_string()));
    }

    #[test]
    fn unload_clears_shelf_and_error() {
        let mut state = stocked();
        state.shelf.selected_product = Some("Phone".to_string());
        state.session.error_message = Some(NO_SELECTION_MESSAGE.to_string());
        let (state, effect) = CatalogReducer::reduce(state, CatalogIntent::UnloadProducts);
        assert!(state.shelf.products.is_empty());
        assert!(state.shelf.selected_product.is_none());
        assert!(state.session.error_message.is_none());
        assert!(effect.is_none());
    }

    #[test]
    fn unload_does_not_touch_loading_flag() {
        let mut state = stocked();
        state.session.is_loading = true;
        let (state, _) = CatalogReducer::reduce(state, CatalogIntent::UnloadProducts);
        assert!(state.session.is_loading);
    }

    #[test]
    fn remove_without_selection_sets_error_only() {
        let before = stocked();
        let (state, effect) =
            CatalogReducer::reduce(before.clone(), CatalogIntent::RemoveSelectedProduct);
        assert_eq!(state.shelf, before.shelf);
        assert_eq!(
            state.session.error_message.as_deref(),
            Some(NO_SELECTION_MESSAGE)
        );
        assert!(effect.is_none());
    }

    #[test]
    fn remove_drops_every_occurrence_of_selection() {
        let state = CatalogState {
            shelf: CatalogShelf {
                products: vec![
                    "Phone".to_string(),
                    "Laptop".to_string(),
                    "Phone".to_string(),
                ],
                selected_product: Some("Phone".to_string()),
            },
            session: CatalogSession::default(),
        };
        let (state, _) = CatalogReducer::reduce(state, CatalogIntent::RemoveSelectedProduct);
        assert_eq!(state.shelf.products, vec!["Laptop".to_string()]);
        assert!(state.shelf.selected_product.is_none());
        assert!(state.session.error_message.is_none());
    }

    #[test]
    fn remove_with_absent_selection_still_clears_it() {
        // The selection is never validated, so it may name a product that
        // is not in the list.
        let mut state = stocked();
        state.shelf.selected_product = Some("Toaster".to_string());
        let (state, _) = CatalogReducer::reduce(state, CatalogIntent::RemoveSelectedProduct);
        assert_eq!(state.shelf.products, stocked().shelf.products);
        assert!(state.shelf.selected_product.is_none());
        assert!(state.session.error_message.is_none());
    }

    #[test]
    fn select_accepts_unknown_name() {
        let (state, effect) = CatalogReducer::reduce(
            stocked(),
            CatalogIntent::SelectProduct("Toaster".to_string()),
        );
        assert_eq!(state.shelf.selected_product, Some("Toaster".to_string()));
        assert!(effect.is_none());
    }

    #[test]
    fn select_clears_error() {
        let mut state = stocked();
        state.session.error_message = Some(NO_SELECTION_MESSAGE.to_string());
        let (state, _) =
            CatalogReducer::reduce(state, CatalogIntent::SelectProduct("Phone".to_string()));
        assert!(state.session.error_message.is_none());
    }

    #[test]
    fn select_then_remove_round_trip() {
        let (state, _) =
            CatalogReducer::reduce(stocked(), CatalogIntent::SelectProduct("Phone".to_string()));
        let (state, _) = CatalogReducer::reduce(state, CatalogIntent::RemoveSelectedProduct);
        assert_eq!(
            state.shelf.products,
            vec!["Laptop".to_string(), "Headphones".to_string()]
        );
        assert!(state.shelf.selected_product.is_none());
    }
}
