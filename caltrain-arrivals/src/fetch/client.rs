//! Timetable page HTTP client.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info};

use super::error::FetchError;

/// Default timetable page.
pub const DEFAULT_URL: &str = "https://www.caltrain.com/?active_tab=route_explorer_tab";

const DEFAULT_USER_AGENT: &str = concat!("caltrain-arrivals/", env!("CARGO_PKG_VERSION"));

/// Longest error body kept in [`FetchError::Status`].
const MAX_ERROR_BODY: usize = 500;

/// Configuration for the timetable client.
#[derive(Debug, Clone)]
pub struct TimetableClientConfig {
    /// Page to fetch
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl TimetableClientConfig {
    /// Create a config for the default timetable page.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Fetch a different page (for testing or mirrors).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TimetableClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches the raw timetable page.
#[derive(Debug, Clone)]
pub struct TimetableClient {
    http: reqwest::Client,
    url: String,
}

impl TimetableClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TimetableClientConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| FetchError::InvalidConfig("invalid user agent".to_string()))?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The page this client fetches.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the page body.
    ///
    /// No retries; any connectivity failure or non-success status is
    /// returned to the caller.
    pub async fn fetch_page(&self) -> Result<String, FetchError> {
        info!(url = %self.url, "fetching timetable page");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "fetched timetable page");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TimetableClientConfig::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("caltrain-arrivals/"));
    }

    #[test]
    fn config_builders() {
        let config = TimetableClientConfig::new()
            .with_url("http://localhost:8080/timetable")
            .with_timeout(5);
        assert_eq!(config.url, "http://localhost:8080/timetable");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_keeps_url() {
        let client =
            TimetableClient::new(TimetableClientConfig::new().with_url("http://localhost:1/"))
                .unwrap();
        assert_eq!(client.url(), "http://localhost:1/");
    }

    #[test]
    fn invalid_user_agent_rejected() {
        let mut config = TimetableClientConfig::new();
        config.user_agent = "bad\nagent".to_string();
        assert!(matches!(
            TimetableClient::new(config),
            Err(FetchError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        // Port 1 on localhost refuses connections
        let client = TimetableClient::new(
            TimetableClientConfig::new()
                .with_url("http://127.0.0.1:1/")
                .with_timeout(2),
        )
        .unwrap();

        assert!(matches!(
            client.fetch_page().await,
            Err(FetchError::Http(_))
        ));
    }
}
