use super::{
    cors_config, server_config::ServerConfig, storage_config::StorageConfig,
    storefront_config::StorefrontConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storefront: StorefrontConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            storefront: StorefrontConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}
