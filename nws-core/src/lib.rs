//! Core library for the `nws` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The weather.gov query client
//! - Wire models and text formatting for alerts and forecasts
//!
//! It is used by `nws-cli`, but can also be reused by other binaries or
//! services that want to expose the same queries.

pub mod client;
pub mod config;
pub mod model;

pub use client::{NwsClient, WeatherSource};
pub use config::Config;
