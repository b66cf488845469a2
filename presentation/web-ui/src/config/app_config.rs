use super::{product_api_config::ProductApiConfig, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub product_api: ProductApiConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            product_api: ProductApiConfig::from_env()?,
        })
    }
}
