pub mod app;
pub mod catalog;
pub mod client;
pub mod config;
pub mod container;
pub mod error;
pub mod interface;
pub mod model;
pub mod render;
pub mod schedule;
pub mod selection;

pub use interface::{ClassSource, Container, NoHook, SelectionHook};
pub use selection::{get_selected_classes, SelectionTracker};

#[cfg(feature = "no-wasm")]
pub use tokio;
