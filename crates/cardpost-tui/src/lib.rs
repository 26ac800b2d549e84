pub mod app;
pub mod components;
pub mod events;
pub mod field_input;
pub mod theme;
pub mod ui;

pub use app::{App, Focus, OutcomeReceiver};
