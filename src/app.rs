pub mod events;
pub mod search;
pub mod session;
pub mod settings;
pub mod state;
