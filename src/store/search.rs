use std::rc::Rc;

use crate::domain::Product;

/// Anything that can filter its products with a caller-supplied predicate.
pub trait Searchable {
    /// Returns every product for which `predicate` holds, in catalog order.
    fn search_products<P>(&self, predicate: P) -> Vec<Rc<Product>>
    where
        P: Fn(&Product) -> bool;
}

/// The predicates offered by the console menus.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    All,
    /// Category equals the given text, ignoring case.
    Category(String),
    /// Price at most the given value, inclusive.
    MaxPrice(f64),
    /// Rating at least the given value, inclusive.
    MinRating(f64),
    /// Name equals the given text, ignoring case.
    Name(String),
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Category(category) => eq_ignore_case(&product.category, category),
            ProductFilter::MaxPrice(max) => product.price <= *max,
            ProductFilter::MinRating(min) => product.rating >= *min,
            ProductFilter::Name(name) => eq_ignore_case(&product.name, name),
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
