//! Terminal User Interface for indexbar

pub mod app;
pub mod components;
pub mod directory;
pub mod geometry;
pub mod handlers;
pub mod state;
pub mod themes;

// Re-exports
pub use app::App;
