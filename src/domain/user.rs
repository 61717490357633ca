use std::fmt;
use std::rc::Rc;

use super::Order;

/// Store-assigned user identifier, rendered as `user_N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub(crate) usize);

impl UserId {
    /// Placeholder carried by users that have not been registered yet.
    pub const UNASSIGNED: UserId = UserId(0);
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A registered shopper.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub login: String,
    pub password: String,
    purchase_history: Vec<Rc<Order>>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `login` - Login name, matched case-sensitively
    /// * `password` - Plaintext password, matched case-sensitively
    ///
    /// # Notes
    /// The `id` field starts as [`UserId::UNASSIGNED`] and is set by the store
    /// when the user is registered.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: UserId::UNASSIGNED,
            login: login.into(),
            password: password.into(),
            purchase_history: Vec::new(),
        }
    }

    /// Orders placed by this user, oldest first.
    pub fn purchase_history(&self) -> &[Rc<Order>] {
        &self.purchase_history
    }

    pub(crate) fn record_purchase(&mut self, order: Rc<Order>) {
        self.purchase_history.push(order);
    }

    pub(crate) fn credentials_match(&self, login: &str, password: &str) -> bool {
        self.login == login && self.password == password
    }
}
