use std::time::{Duration, Instant};

use super::markup;
use crate::scroll::ScrollState;

/// Shown while a chat request is in flight.
pub const TYPING_INDICATOR: &str = "● ● ●";

/// How long a message's "Copied!" label stays up.
const COPY_FLASH_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgSender {
    User,
    Bot,
}

/// One transcript entry. `raw` is what came over the wire (or what the user
/// typed); `rendered` is the flattened display/copy text.
#[derive(Debug, Clone)]
pub struct Message {
    pub raw: String,
    pub rendered: String,
    pub sender: MsgSender,
    pub copied_at: Option<Instant>,
}

impl Message {
    pub fn user(text: &str) -> Self {
        Self {
            raw: text.to_string(),
            rendered: text.to_string(),
            sender: MsgSender::User,
            copied_at: None,
        }
    }

    /// Bot messages may carry markup; flatten it for display.
    pub fn bot(markup_text: &str) -> Self {
        Self {
            raw: markup_text.to_string(),
            rendered: markup::flatten(markup_text),
            sender: MsgSender::Bot,
            copied_at: None,
        }
    }

    pub fn copy_flash_active(&self) -> bool {
        self.copied_at
            .is_some_and(|t| t.elapsed() < COPY_FLASH_DURATION)
    }
}

/// The conversation: message list, typing indicator, selection for copy,
/// scroll position, and chat-request sequencing.
pub struct TranscriptState {
    pub messages: Vec<Message>,
    pub typing: bool,
    pub scroll: ScrollState,
    /// Auto-scroll to bottom on new content; paused by manual scrolling
    pub follow: bool,
    selected: Option<usize>,
    next_seq: u64,
    next_reply_seq: u64,
}

impl TranscriptState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            typing: false,
            scroll: ScrollState::new(),
            follow: true,
            selected: None,
            next_seq: 0,
            next_reply_seq: 0,
        }
    }

    pub fn push_user(&mut self, text: &str) {
        self.messages.push(Message::user(text));
        self.follow = true;
    }

    pub fn push_bot(&mut self, markup_text: &str) {
        self.messages.push(Message::bot(markup_text));
        self.follow = true;
    }

    /// Show the typing indicator. Idempotent: a second call while one is
    /// visible changes nothing.
    pub fn show_typing(&mut self) {
        if self.typing {
            return;
        }
        self.typing = true;
        self.follow = true;
    }

    pub fn hide_typing(&mut self) {
        self.typing = false;
    }

    /// Sequence number for the next outgoing chat request.
    pub fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Whether a reply with this sequence number should be applied.
    ///
    /// Replies arrive FIFO from the worker, but anything older than a reply
    /// already applied is stale and gets dropped so a slow early request
    /// can never misorder the transcript.
    pub fn accept_reply(&mut self, seq: u64) -> bool {
        if seq < self.next_reply_seq {
            return false;
        }
        self.next_reply_seq = seq + 1;
        true
    }

    // --- selection & copy -------------------------------------------------

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_message(&self) -> Option<&Message> {
        self.selected.and_then(|i| self.messages.get(i))
    }

    /// Select the previous (older) message, starting from the newest.
    pub fn select_previous(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => self.messages.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        });
    }

    /// Select the next (newer) message.
    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let last = self.messages.len() - 1;
        self.selected = Some(match self.selected {
            None => last,
            Some(i) => (i + 1).min(last),
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Start the "Copied!" flash on the selected message.
    pub fn mark_selected_copied(&mut self) {
        if let Some(i) = self.selected
            && let Some(msg) = self.messages.get_mut(i)
        {
            msg.copied_at = Some(Instant::now());
        }
    }

    /// True while any message is flashing "Copied!" (keeps renders coming
    /// so the label can disappear without further input).
    pub fn any_copy_flash(&self) -> bool {
        self.messages.iter().any(Message::copy_flash_active)
    }
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_sets_follow() {
        let mut t = TranscriptState::new();
        t.follow = false;

        t.push_user("hello");
        assert!(t.follow);
        assert_eq!(t.messages.len(), 1);
        assert_eq!(t.messages[0].sender, MsgSender::User);
    }

    #[test]
    fn test_bot_message_flattens_markup() {
        let mut t = TranscriptState::new();
        t.push_bot("<p><strong>Count:</strong> 7</p>");

        assert_eq!(t.messages[0].raw, "<p><strong>Count:</strong> 7</p>");
        assert_eq!(t.messages[0].rendered, "Count: 7");
    }

    #[test]
    fn test_typing_indicator_idempotent() {
        let mut t = TranscriptState::new();

        t.show_typing();
        t.follow = false;
        t.show_typing(); // second call is a no-op
        assert!(t.typing);
        assert!(!t.follow);

        t.hide_typing();
        assert!(!t.typing);
    }

    #[test]
    fn test_sequence_numbers_increment() {
        let mut t = TranscriptState::new();
        assert_eq!(t.take_seq(), 0);
        assert_eq!(t.take_seq(), 1);
        assert_eq!(t.take_seq(), 2);
    }

    #[test]
    fn test_stale_reply_rejected() {
        let mut t = TranscriptState::new();
        let first = t.take_seq();
        let second = t.take_seq();

        // Reply to the second request lands first
        assert!(t.accept_reply(second));
        // The first is now stale
        assert!(!t.accept_reply(first));
    }

    #[test]
    fn test_in_order_replies_accepted() {
        let mut t = TranscriptState::new();
        let a = t.take_seq();
        let b = t.take_seq();

        assert!(t.accept_reply(a));
        assert!(t.accept_reply(b));
    }

    #[test]
    fn test_selection_starts_at_newest() {
        let mut t = TranscriptState::new();
        t.push_user("one");
        t.push_bot("two");

        t.select_previous();
        assert_eq!(t.selected(), Some(1));

        t.select_previous();
        assert_eq!(t.selected(), Some(0));

        // Clamped at the oldest
        t.select_previous();
        assert_eq!(t.selected(), Some(0));
    }

    #[test]
    fn test_select_next_clamped_at_newest() {
        let mut t = TranscriptState::new();
        t.push_user("one");
        t.push_bot("two");

        t.select_previous();
        t.select_previous();
        t.select_next();
        t.select_next();
        t.select_next();
        assert_eq!(t.selected(), Some(1));
    }

    #[test]
    fn test_selection_on_empty_transcript() {
        let mut t = TranscriptState::new();
        t.select_previous();
        t.select_next();
        assert_eq!(t.selected(), None);
    }

    #[test]
    fn test_copy_flash() {
        let mut t = TranscriptState::new();
        t.push_bot("answer");
        assert!(!t.any_copy_flash());

        t.select_previous();
        t.mark_selected_copied();
        assert!(t.messages[0].copy_flash_active());
        assert!(t.any_copy_flash());
    }
}
