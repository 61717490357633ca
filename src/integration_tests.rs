#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::app_system::AppConfig;
    use crate::console::{self, Console, SessionOutcome};
    use crate::store::seed::seeded_store;
    use crate::store::Store;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    /// Runs a full session over the seeded store with `input` as keyboard input.
    fn run_script(input: &str) -> Result<(Store, SessionOutcome, String), Box<dyn std::error::Error>> {
        let config = AppConfig::default();
        let mut store = seeded_store(&config);
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

        let outcome = console::run(&mut store, &mut console, &config)?;
        let output = String::from_utf8(console.into_output())?;
        Ok((store, outcome, output))
    }

    #[test]
    fn test_wrong_password_ends_session() -> TestResult {
        let (_, outcome, output) = run_script("admin\nwrong\n1\n")?;

        assert_eq!(outcome, SessionOutcome::LoginRejected);
        assert!(output.contains("Error: Invalid login or password."));
        assert!(!output.contains("Menu:"));
        Ok(())
    }

    #[test]
    fn test_list_products_then_exit() -> TestResult {
        let (_, outcome, output) = run_script("admin\n1234\n1\n5\n")?;

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(output.contains("Available products:"));
        let laptop = output.find("Laptop - Electronics").ok_or("laptop missing")?;
        let tv = output.find("TV - Electronics").ok_or("tv missing")?;
        assert!(laptop < tv);
        assert!(output.contains("Thank you for shopping with us!"));
        Ok(())
    }

    #[test]
    fn test_search_by_category_ignores_case() -> TestResult {
        let (_, _, output) = run_script("admin\n1234\n2\n1\nappliances\n5\n")?;

        let results = output.split("Search results:").nth(1).ok_or("no results")?;
        assert!(results.contains("Kettle - Appliances"));
        assert!(!results.contains("Laptop"));
        Ok(())
    }

    #[test]
    fn test_search_by_max_price_is_inclusive() -> TestResult {
        let (_, _, output) = run_script("admin\n1234\n2\n2\n2000\n5\n")?;

        let results = output.split("Search results:").nth(1).ok_or("no results")?;
        assert!(results.contains("Headphones"));
        assert!(results.contains("Kettle"));
        assert!(!results.contains("Smartphone"));
        Ok(())
    }

    #[test]
    fn test_search_by_rating_with_no_match() -> TestResult {
        let (_, _, output) = run_script("admin\n1234\n2\n3\n5\n5\n")?;
        assert!(output.contains("No products found."));
        Ok(())
    }

    #[test]
    fn test_place_order_and_view_history() -> TestResult {
        let script = "admin\n1234\n3\nlaptop\n1\nToaster\nKETTLE\n2\nDone\n4\n5\n";
        let (store, outcome, output) = run_script(script)?;

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(output.contains("Product not found."));
        assert!(output.contains("Order placed successfully."));
        assert!(output.contains("Laptop x1 = 20000 UAH"));
        assert!(output.contains("Kettle x2 = 1600 UAH"));
        assert!(output.contains("Total: 21600 UAH (Status: New)"));

        let history = output.split("Purchase history:").nth(1).ok_or("no history")?;
        assert!(history.contains("Order order_1:"));

        assert_eq!(store.orders().len(), 1);
        assert_eq!(store.orders()[0].total, 21600.0);
        Ok(())
    }

    #[test]
    fn test_negative_quantity_is_recorded_as_entered() -> TestResult {
        let (store, outcome, output) = run_script("admin\n1234\n3\nKettle\n-1\ndone\n5\n")?;

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(!output.contains("not a valid number"));
        assert!(output.contains("Kettle x-1 = -800 UAH"));
        assert_eq!(store.orders()[0].total, -800.0);
        Ok(())
    }

    #[test]
    fn test_empty_order_is_accepted() -> TestResult {
        let (store, _, output) = run_script("admin\n1234\n3\ndone\n5\n")?;

        assert!(output.contains("Total: 0 UAH"));
        assert_eq!(store.orders().len(), 1);
        Ok(())
    }

    #[test]
    fn test_history_starts_empty() -> TestResult {
        let (_, _, output) = run_script("admin\n1234\n4\n5\n")?;
        assert!(output.contains("No purchases yet."));
        Ok(())
    }

    #[test]
    fn test_bad_numbers_are_recoverable() -> TestResult {
        let script = "admin\n1234\nabc\n9\n3\nTV\nlots\n1\ndone\n5\n";
        let (store, outcome, output) = run_script(script)?;

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(output.contains("'abc' is not a valid number"));
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("'lots' is not a valid number"));
        assert_eq!(store.orders()[0].total, 12000.0);
        Ok(())
    }

    #[test]
    fn test_closed_input_ends_session_cleanly() -> TestResult {
        let (store, outcome, _) = run_script("admin\n1234\n3\nLaptop\n")?;

        assert_eq!(outcome, SessionOutcome::InputClosed);
        assert!(store.orders().is_empty());
        Ok(())
    }

    #[test]
    fn test_custom_finish_keyword() -> TestResult {
        let config = AppConfig {
            finish_keyword: "checkout".to_string(),
            ..AppConfig::default()
        };
        let mut store = seeded_store(&config);
        let input = "admin\n1234\n3\ndone\nCheckout\n5\n";
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

        let outcome = console::run(&mut store, &mut console, &config)?;
        let output = String::from_utf8(console.into_output())?;

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(output.contains("type 'checkout' to finish"));
        assert!(output.contains("Product not found."));
        assert_eq!(store.orders().len(), 1);
        Ok(())
    }
}
