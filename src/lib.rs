//! MediAssist doctor finder (CLI)

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod interactive;
pub mod render;
