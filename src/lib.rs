// Library entry so integration tests and external tools can reference internal modules.
// Re-export the same modules used by the binary (`main.rs`).
pub mod cache;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod flow;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod session;
pub mod shodan;
pub mod templates;
pub mod ui;

// Convenient re-exports for frequently used types.
pub use model::AppState;
