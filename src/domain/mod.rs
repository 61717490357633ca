//! Storefront domain types. Plain data with no knowledge of the console.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;

/// Currency label appended to every rendered amount.
pub const CURRENCY: &str = "UAH";
