use crate::error::ConfigError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";
pub const ENDPOINT_ENV: &str = "PREDICT_ENDPOINT";
pub const SUBMIT_TIMEOUT: Duration = Duration::from_millis(15_000);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    endpoint: Url,
    timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            timeout: SUBMIT_TIMEOUT,
        })
    }

    /// Resolves the endpoint through `lookup` (usually the process
    /// environment), falling back to [`DEFAULT_ENDPOINT`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(endpoint) => Self::new(endpoint.trim()),
            None => Ok(Self::default()),
        }
    }

    /// Loads `.env` if present, then reads `PREDICT_ENDPOINT`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Root of the backend serving the endpoint, where the status check lives.
    pub fn health_url(&self) -> String {
        let mut root = self.endpoint.clone();
        root.set_path("/");
        root.set_query(None);
        root.set_fragment(None);
        root.to_string()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: SUBMIT_TIMEOUT,
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(raw.to_string())),
    }
}
