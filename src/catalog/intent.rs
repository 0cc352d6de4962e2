use crate::mvi::Intent;

/// Actions consumed by the catalog state controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIntent {
    /// Start the simulated catalog fetch.
    LoadProducts,
    /// Drop the whole product list and the selection.
    UnloadProducts,
    /// Remove every product equal to the current selection.
    RemoveSelectedProduct,
    /// Select a product by name. The name is not checked against the
    /// current list.
    SelectProduct(String),
    /// Completion event of the simulated fetch. Internal: dispatched by the
    /// controller when the fetch effect resolves, never by the view.
    CatalogFetched(Vec<String>),
}

impl Intent for CatalogIntent {}
