pub mod connect_events;
pub mod connect_render;
mod connect_state;

pub use connect_state::{ConnectField, ConnectState, ConnectStatus, DbType};
