use std::io::{BufRead, Write};
use std::rc::Rc;

use tracing::{debug, info, instrument};

use super::menu::{MenuChoice, SearchChoice, MAIN_MENU, SEARCH_MENU};
use super::Console;
use crate::app_system::AppConfig;
use crate::domain::{Order, Product, UserId};
use crate::error::{ConsoleError, InputError, StoreError};
use crate::store::{ProductFilter, Searchable, Store};

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user picked the exit menu entry.
    Exited,
    /// Login failed; the menu was never shown.
    LoginRejected,
    /// The input stream closed before the user exited.
    InputClosed,
}

/// Runs one login plus menu loop against `store`.
///
/// End of input is treated as a normal way to leave the session.
pub fn run<R: BufRead, W: Write>(
    store: &mut Store,
    console: &mut Console<R, W>,
    config: &AppConfig,
) -> Result<SessionOutcome, ConsoleError> {
    match login_and_serve(store, console, config) {
        Err(ConsoleError::Input(InputError::EndOfInput)) => {
            info!("Input closed, ending session");
            Ok(SessionOutcome::InputClosed)
        }
        other => other,
    }
}

fn login_and_serve<R: BufRead, W: Write>(
    store: &mut Store,
    console: &mut Console<R, W>,
    config: &AppConfig,
) -> Result<SessionOutcome, ConsoleError> {
    console.say("Welcome to the store!")?;
    let login = console.prompt("Login: ")?;
    let password = console.prompt("Password: ")?;

    let user = match store.authenticate(&login, &password) {
        Ok(user) => user.id,
        Err(err) => {
            console.say(format!("Error: {err}"))?;
            return Ok(SessionOutcome::LoginRejected);
        }
    };

    Session {
        store,
        console,
        config,
        user,
    }
    .serve()
}

/// State of an authenticated session.
struct Session<'a, R, W> {
    store: &'a mut Store,
    console: &'a mut Console<R, W>,
    config: &'a AppConfig,
    user: UserId,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    #[instrument(skip(self), fields(user_id = %self.user))]
    fn serve(&mut self) -> Result<SessionOutcome, ConsoleError> {
        loop {
            self.console.say(MAIN_MENU)?;
            let number: i64 = self.console.prompt_number("Your choice: ")?;
            debug!(number, "Menu choice");

            match MenuChoice::from_number(number) {
                Some(MenuChoice::ListProducts) => {
                    let products = self.search(&ProductFilter::All);
                    self.show_products("Available products", &products)?;
                }
                Some(MenuChoice::Search) => self.search_menu()?,
                Some(MenuChoice::PlaceOrder) => self.build_and_place_order()?,
                Some(MenuChoice::History) => self.show_history()?,
                Some(MenuChoice::Exit) => {
                    self.console.say("Thank you for shopping with us!")?;
                    return Ok(SessionOutcome::Exited);
                }
                None => self.console.say("Invalid choice. Please try again.")?,
            }
        }
    }

    fn search(&self, filter: &ProductFilter) -> Vec<Rc<Product>> {
        self.store.search_products(|p| filter.matches(p))
    }

    fn search_menu(&mut self) -> Result<(), ConsoleError> {
        self.console.say(SEARCH_MENU)?;
        let number: i64 = self.console.prompt_number("Your choice: ")?;

        let filter = match SearchChoice::from_number(number) {
            Some(SearchChoice::Category) => {
                ProductFilter::Category(self.console.prompt("Enter category: ")?)
            }
            Some(SearchChoice::MaxPrice) => {
                ProductFilter::MaxPrice(self.console.prompt_number("Enter maximum price: ")?)
            }
            Some(SearchChoice::MinRating) => {
                ProductFilter::MinRating(self.console.prompt_number("Enter minimum rating: ")?)
            }
            None => {
                self.console.say("Invalid choice. Please try again.")?;
                return Ok(());
            }
        };

        debug!(?filter, "Searching catalog");
        let products = self.search(&filter);
        self.show_products("Search results", &products)
    }

    fn show_products(&mut self, title: &str, products: &[Rc<Product>]) -> Result<(), ConsoleError> {
        self.console.say(format!("\n{title}:"))?;
        if products.is_empty() {
            self.console.say("No products found.")?;
        }
        for product in products {
            self.console.say(product)?;
        }
        Ok(())
    }

    fn build_and_place_order(&mut self) -> Result<(), ConsoleError> {
        let finish = self.config.finish_keyword.to_lowercase();
        self.console.say(format!(
            "\nEnter product names to add to the order (type '{}' to finish):",
            self.config.finish_keyword
        ))?;

        let mut order = Order::new();
        loop {
            let name = self.console.prompt("Product: ")?;
            if name.to_lowercase() == finish {
                break;
            }
            match self.store.find_product_by_name(&name) {
                Some(product) => {
                    let quantity: i32 = self.console.prompt_number("Quantity: ")?;
                    order.add_item(product, quantity);
                }
                None => {
                    debug!(product_name = %name, "Product not found");
                    self.console.say("Product not found.")?;
                }
            }
        }

        let placed = self.store.place_order(self.user, order)?;
        self.console.say("Order placed successfully.")?;
        self.console.say(placed)?;
        Ok(())
    }

    fn show_history(&mut self) -> Result<(), ConsoleError> {
        self.console.say("\nPurchase history:")?;
        let history: Vec<Rc<Order>> = self
            .store
            .user(self.user)
            .ok_or(StoreError::UnknownUser(self.user))?
            .purchase_history()
            .to_vec();

        if history.is_empty() {
            self.console.say("No purchases yet.")?;
        }
        for order in history {
            self.console.say(order)?;
        }
        Ok(())
    }
}
