//! The simulated product-catalog backend.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Port for fetching the product catalog.
///
/// The demo has no real backend; the trait exists so the controller can be
/// driven by an instant source in tests and by [`DemoCatalog`] in the app.
pub trait CatalogSource: Send + Sync + 'static {
    fn fetch(&self) -> Pin<Box<dyn Future<Output = Vec<String>> + Send>>;
}

/// Fixed three-item catalog behind a simulated network latency.
pub struct DemoCatalog {
    latency: Duration,
}

impl DemoCatalog {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// The products the demo backend always returns.
    pub fn products() -> Vec<String> {
        ["Laptop", "Phone", "Headphones"]
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

impl CatalogSource for DemoCatalog {
    fn fetch(&self) -> Pin<Box<dyn Future<Output = Vec<String>> + Send>> {
        let latency = self.latency;
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            Self::products()
        })
    }
}
