pub mod cli;
pub mod config;
pub mod events;
pub mod inputs;
pub mod keys;
pub mod mood;
pub mod search;
pub mod state;

pub use state::*;
