//! Search, sort and pagination core of a real-estate listing admin screen.

pub mod config;
pub mod detail;
pub mod format;
pub mod models;
pub mod screen;
pub mod search;
pub mod shell;
pub mod sources;
pub mod view;

pub use config::ScreenConfig;
pub use models::{Property, SearchField};
pub use screen::ListingScreen;
