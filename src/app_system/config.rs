/// Runtime settings for a storefront session.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Log filter used when `RUST_LOG` is unset or invalid.
    pub default_log_filter: String,
    /// Word that ends product entry while building an order (case-insensitive).
    pub finish_keyword: String,
    pub seed_login: String,
    pub seed_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_log_filter: "warn".to_string(),
            finish_keyword: "done".to_string(),
            seed_login: "admin".to_string(),
            seed_password: "1234".to_string(),
        }
    }
}
