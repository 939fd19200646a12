//! Command handlers.

pub mod config;
pub mod export;
pub mod preset;
pub mod studio;
