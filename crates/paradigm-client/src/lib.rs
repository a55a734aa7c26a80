//! Client library for the Paradigm network REST API.
//!
//! [`ParadigmClient`] turns typed operations (accounts, transactions,
//! blocks, ML tasks, governance) into rate-limited HTTP requests with
//! bounded retries, and turns responses back into typed records or a
//! classified [`ClientError`]. The [`blocking`] module mirrors the whole
//! surface for synchronous callers.

pub mod blocking;
mod client;
pub mod config;
mod dispatch;
mod envelope;
pub mod error;
mod rate_limit;
pub mod transport;
pub mod types;
pub mod validate;

pub use client::ParadigmClient;
pub use config::{ClientConfig, Network, API_VERSION};
pub use error::ClientError;
