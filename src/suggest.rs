pub mod store;
mod suggest_render;
mod suggest_state;

pub use store::{StoreKey, SuggestionStore};
pub use suggest_render::{Anchor, render_popup};
pub use suggest_state::{MAX_VISIBLE_SUGGESTIONS, SuggestState};
