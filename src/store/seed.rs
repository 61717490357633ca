//! Startup data for the demo storefront.

use tracing::info;

use super::Store;
use crate::app_system::AppConfig;
use crate::domain::{Product, User};

/// The fixed demo catalog, in display order.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new("Laptop", 20000.0, "Powerful laptop for work", "Electronics", 4.8),
        Product::new("Smartphone", 15000.0, "Modern smartphone", "Electronics", 4.6),
        Product::new("Headphones", 2000.0, "Wireless headphones", "Accessories", 4.2),
        Product::new("Kettle", 800.0, "Electric kettle", "Appliances", 4.0),
        Product::new("TV", 12000.0, "Modern 4K television", "Electronics", 4.9),
    ]
}

/// Builds a store holding the demo catalog and the configured account.
pub fn seeded_store(config: &AppConfig) -> Store {
    let mut store = Store::new();
    for product in demo_catalog() {
        store.add_product(product);
    }
    store.add_user(User::new(config.seed_login.as_str(), config.seed_password.as_str()));

    info!(
        product_count = store.products().len(),
        login = %config.seed_login,
        "Store seeded"
    );
    store
}
