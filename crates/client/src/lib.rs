//! d1_client - client library and CLI for Cloudflare D1's HTTP query API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use client::D1Client;
pub use config::D1Config;
pub use error::{ClientError, Result};
