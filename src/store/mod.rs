//! The in-memory store: catalog, registered users and placed orders.

pub mod search;
pub mod seed;

use std::rc::Rc;

use tracing::{debug, info, instrument, warn};

use crate::domain::{Order, OrderId, Product, User, UserId};
use crate::error::StoreError;

pub use search::{ProductFilter, Searchable};

/// Owns every product, user and order for the lifetime of a session.
///
/// Placed orders are shared between `orders` and the purchasing user's
/// history; each placed order appears exactly once in both.
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Rc<Product>>,
    users: Vec<User>,
    orders: Vec<Rc<Order>>,
    next_order_id: usize,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub fn add_product(&mut self, product: Product) {
        debug!("Adding product to catalog");
        self.products.push(Rc::new(product));
    }

    /// Registers a user and returns the id assigned to it.
    #[instrument(skip(self, user), fields(login = %user.login))]
    pub fn add_user(&mut self, mut user: User) -> UserId {
        let id = UserId(self.users.len() + 1);
        user.id = id;
        debug!(user_id = %id, "Registering user");
        self.users.push(user);
        id
    }

    /// Finds the first user whose login and password both match exactly.
    #[instrument(skip(self, password))]
    pub fn authenticate(&self, login: &str, password: &str) -> Result<&User, StoreError> {
        match self.users.iter().find(|u| u.credentials_match(login, password)) {
            Some(user) => {
                info!(user_id = %user.id, "User authenticated");
                Ok(user)
            }
            None => {
                warn!("Authentication failed");
                Err(StoreError::InvalidCredentials)
            }
        }
    }

    /// First product whose name equals `name`, ignoring case.
    pub fn find_product_by_name(&self, name: &str) -> Option<Rc<Product>> {
        let filter = ProductFilter::Name(name.to_string());
        self.products.iter().find(|p| filter.matches(p)).cloned()
    }

    /// Finalizes `order`, records it and appends it to the user's history.
    ///
    /// Empty orders are accepted and total zero.
    ///
    /// # Errors
    /// [`StoreError::UnknownUser`] if `user` was not issued by this store.
    #[instrument(skip(self, order), fields(item_count = order.items.len()))]
    pub fn place_order(&mut self, user: UserId, mut order: Order) -> Result<Rc<Order>, StoreError> {
        let index = user.0.checked_sub(1).ok_or(StoreError::UnknownUser(user))?;
        let buyer = self
            .users
            .get_mut(index)
            .ok_or(StoreError::UnknownUser(user))?;

        self.next_order_id += 1;
        let order_id = OrderId(self.next_order_id);
        order.id = Some(order_id);
        let total = order.calculate_total();

        let order = Rc::new(order);
        buyer.record_purchase(Rc::clone(&order));
        self.orders.push(Rc::clone(&order));

        info!(order_id = %order_id, total, "Order placed");
        Ok(order)
    }

    pub fn products(&self) -> &[Rc<Product>] {
        &self.products
    }

    pub fn orders(&self) -> &[Rc<Order>] {
        &self.orders
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        id.0.checked_sub(1).and_then(|index| self.users.get(index))
    }
}

impl Searchable for Store {
    fn search_products<P>(&self, predicate: P) -> Vec<Rc<Product>>
    where
        P: Fn(&Product) -> bool,
    {
        let matches: Vec<Rc<Product>> = self
            .products
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect();
        debug!(match_count = matches.len(), "Searched catalog");
        matches
    }
}
