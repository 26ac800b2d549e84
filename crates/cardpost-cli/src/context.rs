use crate::cli::Cli;
use cardpost_client::TrelloClient;
use cardpost_core::{AppConfig, CardPostResult};
use std::sync::Arc;
use std::time::Duration;

/// Configuration and API client shared by the form and the `create` command.
pub struct CliContext {
    pub config: AppConfig,
    pub client: Arc<TrelloClient>,
}

impl CliContext {
    /// Reads the config file once and applies flag/environment overrides.
    pub fn load(cli: &Cli) -> CardPostResult<Self> {
        let config = AppConfig::load(cli.config.as_deref())?.with_overrides(cli.overrides());
        tracing::debug!(
            "Posting cards to list '{}' via {}",
            config.trello.list_id,
            config.trello.effective_api_base_url()
        );
        let client = Arc::new(TrelloClient::new(config.trello.clone())?);
        Ok(Self { config, client })
    }

    pub fn notification_ttl(&self) -> Duration {
        self.config.ui.effective_notification_ttl()
    }
}
