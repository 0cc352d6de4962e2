mod controller;
mod intent;
mod reducer;
mod source;
mod state;

pub use controller::CatalogController;
pub use intent::CatalogIntent;
pub use reducer::{CatalogEffect, CatalogReducer, NO_SELECTION_MESSAGE};
pub use source::{CatalogSource, DemoCatalog};
pub use state::{CatalogSession, CatalogShelf, CatalogState};
