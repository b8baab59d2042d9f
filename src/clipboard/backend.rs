use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug)]
pub enum ClipboardError {
    SystemUnavailable,
    WriteError,
}

/// Copy message text with the configured backend. Auto tries the system
/// clipboard first and falls back to OSC 52 (useful over SSH/tmux).
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}
