//! ServicesFactory implementation: builds the fact store from config for the CLI.
use async_trait::async_trait;
use statefacts_core::api::{AppConfig, CliError, Services, ServicesFactory};
use tracing::info;

use crate::factory;

pub struct PluginServicesFactory;

impl Default for PluginServicesFactory {
    fn default() -> Self {
        Self
    }
}

#[async_trait]
impl ServicesFactory for PluginServicesFactory {
    async fn build_services(&self, cfg: &AppConfig) -> Result<Services, CliError> {
        let facts = factory::build_fact_store(cfg).await?;
        info!(provider = facts.name(), "Fact store ready");
        Ok(Services { facts })
    }
}
