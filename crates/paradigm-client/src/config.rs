use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;

use crate::error::ClientError;

/// Version segment baked into every request path.
pub const API_VERSION: &str = "v1";

/// Networks a client can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            other => Err(ClientError::Validation(format!(
                "unknown network `{other}`; expected mainnet, testnet, or devnet"
            ))),
        }
    }
}

/// Client construction parameters.
///
/// Built with [`ClientConfig::new`] plus `with_*` setters and checked once
/// by the client constructor. Immutable afterwards, except the API key,
/// which can be rotated in place on a live client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme + host (+ optional port) of the node's REST endpoint.
    pub base_url: String,
    pub api_key: Option<String>,
    /// Per-request timeout, covering connect and body read.
    pub timeout: Duration,
    /// Additional attempts after the first, for retryable transport
    /// failures only.
    pub retries: u32,
    pub network: Network,
    /// Maximum requests admitted within any trailing `rate_limit_window`.
    pub rate_limit_quota: u32,
    pub rate_limit_window: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(30),
            retries: 3,
            network: Network::Mainnet,
            rate_limit_quota: 100,
            rate_limit_window: Duration::from_secs(60),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    pub fn with_rate_limit(mut self, quota: u32, window: Duration) -> Self {
        self.rate_limit_quota = quota;
        self.rate_limit_window = window;
        self
    }

    /// Check construction invariants. The client constructor calls this
    /// before anything touches the network.
    pub fn validate(&self) -> Result<(), ClientError> {
        let parsed = Url::parse(&self.base_url).map_err(|e| {
            ClientError::Validation(format!(
                "invalid base url `{}`: expected HTTP(S) URL ({e})",
                self.base_url
            ))
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ClientError::Validation(format!(
                    "unsupported base url scheme `{other}`; expected http or https"
                )));
            }
        }

        if self.timeout.is_zero() {
            return Err(ClientError::Validation(
                "timeout must be greater than zero".to_owned(),
            ));
        }
        if self.rate_limit_quota == 0 {
            return Err(ClientError::Validation(
                "rate limit quota must be at least 1".to_owned(),
            ));
        }
        if self.rate_limit_window.is_zero() {
            return Err(ClientError::Validation(
                "rate limit window must be greater than zero".to_owned(),
            ));
        }

        Ok(())
    }

    /// Versioned API root every request path is appended to.
    pub(crate) fn api_root(&self) -> String {
        format!("{}/api/{API_VERSION}", self.base_url.trim_end_matches('/'))
    }
}
