mod app_events;
mod app_render;
mod app_state;
mod input_state;

pub use app_state::{App, Focus, WELCOME_MESSAGE};
pub use input_state::InputState;
