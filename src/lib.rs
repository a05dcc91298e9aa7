pub mod app;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod mood;
pub mod playback;
pub mod ui;
