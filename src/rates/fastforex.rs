//! fastFOREX historical rates API client
//!
//! This module fetches historical exchange rates from the fastFOREX
//! `historical` endpoint and parses them into `HistoricalRates`.

use chrono::NaiveDate;
use reqwest::{Client, Request};
use std::fmt;

use super::{HistoricalRates, RateSource, RatesError};

/// Base URL for the fastFOREX API
pub const DEFAULT_BASE_URL: &str = "https://api.fastforex.io";

/// Path of the historical rates endpoint
const HISTORICAL_PATH: &str = "historical";

/// Client for fetching historical rates from fastFOREX
#[derive(Clone)]
pub struct FastForexClient {
    client: Client,
    api_key: String,
    base_url: String,
}

// The API key is a secret; keep it out of debug output.
impl fmt::Debug for FastForexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastForexClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl FastForexClient {
    /// Create a new FastForexClient against the public API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key)
    }

    /// Create a new FastForexClient with a custom HTTP client
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Use a different API root (e.g. a proxy or a local test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the full URL of the historical endpoint
    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), HISTORICAL_PATH)
    }

    /// Builds the GET request for one date and base currency
    fn build_request(&self, date: NaiveDate, base_currency: &str) -> Result<Request, RatesError> {
        let date = date.format("%Y-%m-%d").to_string();
        let request = self
            .client
            .get(self.endpoint())
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("date", date.as_str()),
                ("from", base_currency),
            ])
            .build()?;
        Ok(request)
    }
}

impl RateSource for FastForexClient {
    /// Fetch all rates from `base_currency` on `date`
    ///
    /// # Returns
    /// * `Ok(HistoricalRates)` - The `results` table of the response
    /// * `Err(RatesError)` - If the request fails, the status is not a
    ///   success, or the body cannot be parsed
    async fn fetch_rates(
        &self,
        date: NaiveDate,
        base_currency: &str,
    ) -> Result<HistoricalRates, RatesError> {
        let request = self.build_request(date, base_currency)?;
        log::debug!("Fetching {} rates for {} from {}", base_currency, date, self.endpoint());

        let response = self.client.execute(request).await?.error_for_status()?;
        let text = response.text().await?;

        parse_response(&text)
    }
}

/// Parse a fastFOREX historical response body
///
/// Fields other than `results` (`base`, `date`, `ms`) are ignored.
fn parse_response(text: &str) -> Result<HistoricalRates, RatesError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample valid fastFOREX historical response
    const VALID_RESPONSE: &str = r#"{
        "date": "2024-01-02",
        "base": "USD",
        "results": {
            "EUR": 0.91145,
            "GBP": 0.78693,
            "JPY": 141.83
        },
        "ms": 4
    }"#;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_valid_response() {
        let rates = parse_response(VALID_RESPONSE).unwrap();
        assert_eq!(rates.results.len(), 3);
        assert_eq!(rates.rate("EUR").unwrap(), 0.91145);
        assert_eq!(rates.rate("JPY").unwrap(), 141.83);
    }

    #[test]
    fn test_parse_response_without_results_fails() {
        let result = parse_response(r#"{"error": "Invalid API key"}"#);
        assert!(matches!(result, Err(RatesError::ParseError(_))));
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        assert!(parse_response("not json").is_err());
    }

    #[test]
    fn test_build_request_has_query_parameters() {
        let client = FastForexClient::new("secret-key");
        let request = client.build_request(date("2024-01-02"), "USD").unwrap();

        assert_eq!(request.method(), &reqwest::Method::GET);
        let url = request.url();
        assert_eq!(url.host_str(), Some("api.fastforex.io"));
        assert_eq!(url.path(), "/historical");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("api_key".to_string(), "secret-key".to_string()),
                ("date".to_string(), "2024-01-02".to_string()),
                ("from".to_string(), "USD".to_string()),
            ]
        );
    }

    #[test]
    fn test_with_base_url_overrides_endpoint() {
        let client = FastForexClient::new("k").with_base_url("http://localhost:8080/");
        assert_eq!(client.endpoint(), "http://localhost:8080/historical");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = FastForexClient::new("super-secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }

    /// Serves a single canned HTTP response and returns the request line it saw
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            let request = String::from_utf8_lossy(&buf).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_fetch_rates_success() {
        let (base_url, server) = serve_once("200 OK", VALID_RESPONSE).await;
        let client = FastForexClient::new("abc").with_base_url(base_url);

        let rates = client.fetch_rates(date("2024-01-02"), "USD").await.unwrap();
        assert_eq!(rates.rate("GBP").unwrap(), 0.78693);

        let request_line = server.await.unwrap();
        assert_eq!(
            request_line,
            "GET /historical?api_key=abc&date=2024-01-02&from=USD HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_fetch_rates_non_success_status_fails() {
        let (base_url, server) =
            serve_once("401 Unauthorized", r#"{"error": "Invalid API key"}"#).await;
        let client = FastForexClient::new("bad").with_base_url(base_url);

        let result = client.fetch_rates(date("2024-01-02"), "USD").await;
        let err = result.unwrap_err();
        match err {
            RatesError::RequestFailed(e) => {
                assert_eq!(e.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
            }
            other => panic!("Expected RequestFailed, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_rates_against_unreachable_host_fails() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let client = FastForexClient::new("k").with_base_url("http://127.0.0.1:9");
        let result = client.fetch_rates(date("2024-01-02"), "USD").await;
        assert!(matches!(result, Err(RatesError::RequestFailed(_))));
    }
}
