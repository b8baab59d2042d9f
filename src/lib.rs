//! dbchat library - terminal client for chatting with a database
//!
//! This library exposes the core functionality of dbchat for testing purposes.

pub mod api;
pub mod app;
pub mod chat;
pub mod clipboard;
pub mod config;
pub mod connect;
pub mod error;
pub mod help;
pub mod notification;
pub mod scroll;
pub mod suggest;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
