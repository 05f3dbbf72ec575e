//! Core domain + application logic for the guides bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and Google Sheets
//! live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod content;
pub mod domain;
pub mod errors;
pub mod gate;
pub mod logging;
pub mod membership;
pub mod messaging;
pub mod render;
pub mod service;
pub mod state;
pub mod store;
pub mod utils;

pub use errors::{Error, Result};
