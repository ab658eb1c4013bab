use std::env;

use persistence::cart::repository::DEFAULT_CART_KEY;

/// Local cart storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub database_url: String,
    pub cart_key: String,
    pub migrations_path: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_DATABASE_URL: SQLite connection string (default: "sqlite://cart.db?mode=rwc")
    /// - CART_STORAGE_KEY: Slot holding the cart snapshot (default: "@RocketShoes:cart")
    /// - CART_MIGRATIONS_PATH: Migrations directory (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("CART_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://cart.db?mode=rwc".to_string()),
            cart_key: env::var("CART_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_CART_KEY.to_string()),
            migrations_path: env::var("CART_MIGRATIONS_PATH")
                .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string()),
        }
    }
}
