use super::{catalog_config::CatalogConfig, cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            catalog: CatalogConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
