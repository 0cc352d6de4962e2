use crate::catalog::{CatalogController, CatalogIntent, CatalogState};

/// Frames of the loading spinner, advanced once per tick.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// View-side state of the product-list screen.
///
/// Holds the latest published snapshot plus purely presentational state:
/// the list cursor, the spinner frame and the quit flag. All domain changes
/// go through the controller as intents; `App` never mutates the snapshot.
pub struct App {
    controller: CatalogController,
    state: CatalogState,
    cursor: usize,
    spinner_frame: usize,
    should_quit: bool,
}

impl App {
    pub fn new(controller: CatalogController) -> Self {
        let state = controller.snapshot();
        Self {
            controller,
            state,
            cursor: 0,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Pull the latest snapshot from the controller and keep the cursor
    /// inside the (possibly shorter) product list.
    pub fn refresh(&mut self) {
        self.state = self.controller.snapshot();
        let len = self.state.shelf.products.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn on_tick(&mut self) {
        if self.state.session.is_loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    /// Move the cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.state.shelf.products.len();
        if len == 0 {
            return;
        }
        self.cursor = if delta < 0 {
            if self.cursor == 0 {
                len - 1
            } else {
                self.cursor - 1
            }
        } else if self.cursor + 1 >= len {
            0
        } else {
            self.cursor + 1
        };
    }

    pub fn load(&self) {
        self.controller.dispatch(CatalogIntent::LoadProducts);
    }

    pub fn unload(&self) {
        self.controller.dispatch(CatalogIntent::UnloadProducts);
    }

    pub fn remove_selected(&self) {
        self.controller.dispatch(CatalogIntent::RemoveSelectedProduct);
    }

    /// Select the product under the cursor, if there is one.
    pub fn select_under_cursor(&self) {
        if let Some(name) = self.state.shelf.products.get(self.cursor) {
            self.controller
                .dispatch(CatalogIntent::SelectProduct(name.clone()));
        }
    }
}
