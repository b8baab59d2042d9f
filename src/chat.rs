pub mod chat_events;
pub mod chat_render;
mod chat_state;
pub mod markup;

pub use chat_state::{MsgSender, Message, TranscriptState, TYPING_INDICATOR};
