use std::fmt;

/// A catalog item. Products are created when the store is seeded and never
/// change afterwards; order lines hold shared references to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub rating: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `name` - Display name, used for lookup during order entry
    /// * `price` - Unit price
    /// * `description` - Free-form description
    /// * `category` - Category used by category search
    /// * `rating` - Customer rating, conventionally 0 to 5
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            category: category.into(),
            rating,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} {} (Rating: {:.1})\nDescription: {}",
            self.name,
            self.category,
            self.price,
            super::CURRENCY,
            self.rating,
            self.description
        )
    }
}
