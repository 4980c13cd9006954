//! CLI library components for the payload card.

pub mod commands;
pub mod logging;
pub mod render;
pub mod settings;
pub mod types;
