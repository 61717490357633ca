use std::fmt;
use std::rc::Rc;

use super::Product;

/// Store-assigned order identifier, rendered as `order_N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub(crate) usize);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle label of an order. Orders are created `New` and stay that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    New,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::New => f.write_str("New"),
        }
    }
}

/// One line of an order: a shared catalog product and a quantity.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product: Rc<Product>,
    pub quantity: i32,
}

impl OrderLine {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// A customer order.
///
/// `total` is only meaningful after [`Order::calculate_total`]; the store
/// calls it when the order is placed.
#[derive(Debug, Clone, Default)]
pub struct Order {
    pub id: Option<OrderId>,
    pub items: Vec<OrderLine>,
    pub total: f64,
    pub status: OrderStatus,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line. Repeated products are kept as separate lines.
    pub fn add_item(&mut self, product: Rc<Product>, quantity: i32) {
        self.items.push(OrderLine { product, quantity });
    }

    /// Recomputes `total` from the current lines, overwriting the old value.
    pub fn calculate_total(&mut self) -> f64 {
        self.total = self.items.iter().map(OrderLine::subtotal).sum();
        self.total
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => writeln!(f, "Order {id}:")?,
            None => writeln!(f, "Order:")?,
        }
        for line in &self.items {
            writeln!(
                f,
                "{} x{} = {} {}",
                line.product.name,
                line.quantity,
                line.subtotal(),
                super::CURRENCY
            )?;
        }
        write!(
            f,
            "Total: {} {} (Status: {})",
            self.total,
            super::CURRENCY,
            self.status
        )
    }
}
