//! Core domain + application logic for the eSIM ICCID lookup bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the upstream
//! provider HTTP APIs live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod providers;
pub mod reply;
pub mod report;
pub mod service;

pub use errors::{Error, Result};
