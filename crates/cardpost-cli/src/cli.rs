use cardpost_core::config::ConfigOverrides;
use cardpost_domain::CardDraft;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardpost")]
#[command(about = "Create Trello cards from a terminal form", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", env = "CARDPOST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Trello API key
    #[arg(long, env = "TRELLO_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Trello API token
    #[arg(long, env = "TRELLO_API_TOKEN", hide_env_values = true, global = true)]
    pub api_token: Option<String>,

    /// Identifier of the list new cards are added to
    #[arg(long, env = "TRELLO_LIST_ID", global = true)]
    pub list_id: Option<String>,

    /// Base URL of the Trello REST API
    #[arg(long, env = "TRELLO_API_BASE_URL", global = true, hide = true)]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_key: self.api_key.clone(),
            api_token: self.api_token.clone(),
            list_id: self.list_id.clone(),
            api_base_url: self.api_base_url.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate and submit one card without opening the form
    Create(CreateArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Missing values are left empty and reported by form validation.
#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Due date, YYYY-MM-DD or RFC 3339
    #[arg(long)]
    pub due: Option<String>,
    /// Start date, YYYY-MM-DD or RFC 3339
    #[arg(long)]
    pub start: Option<String>,
}

impl CreateArgs {
    pub fn into_draft(self) -> CardDraft {
        CardDraft::new(
            self.name.unwrap_or_default(),
            self.description.unwrap_or_default(),
            self.due.unwrap_or_default(),
            self.start.unwrap_or_default(),
        )
    }
}
