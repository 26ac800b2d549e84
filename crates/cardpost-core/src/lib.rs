pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod result;

pub use config::{AppConfig, TrelloConfig, UiConfig};
pub use error::CardPostError;
pub use input::InputState;
pub use result::CardPostResult;
