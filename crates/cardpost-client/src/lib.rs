pub mod api;
pub mod submit;
pub mod trello;

pub use api::CardApi;
pub use submit::submit;
pub use trello::TrelloClient;
