use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// host:port the server binds to.
    pub server_address: String,
}

impl AppConfig {
    /// Reads configuration from the environment. The caller is expected to
    /// have loaded any `.env` file first; a missing SERVER_ADDRESS fails
    /// startup outright.
    pub fn from_env() -> Result<Self> {
        let server_address =
            env::var("SERVER_ADDRESS").context("SERVER_ADDRESS must be set")?;

        Ok(Self { server_address })
    }
}
