use std::time::Duration;

use futures_util::StreamExt;
use search_logging::{search_debug, search_info, search_warn};
use url::Url;

use crate::{FailureKind, FetchError, SearchOutput, SearchResponse};

/// Public JobTech search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://jobsearch.api.jobtechdev.se/search";

/// Hits requested per search. Fixed; callers cannot raise it.
pub const RESULT_CAP: u32 = 100;

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub max_bytes: u64,
    pub user_agent: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            max_bytes: 16 * 1024 * 1024,
            user_agent: concat!("jobsearch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait SearchGateway: Send + Sync {
    /// Runs one search. A single attempt: no retries, no caching.
    async fn search(&self, query: &str) -> Result<SearchOutput, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    settings: GatewaySettings,
}

impl ReqwestGateway {
    pub fn new(settings: GatewaySettings) -> Self {
        Self { settings }
    }

    /// The request URL for `query`, with `q` encoded and `limit` fixed.
    pub fn search_url(&self, query: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("limit", &RESULT_CAP.to_string());
        Ok(url)
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .user_agent(self.settings.user_agent.clone())
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl SearchGateway for ReqwestGateway {
    async fn search(&self, query: &str) -> Result<SearchOutput, FetchError> {
        let url = self.search_url(query)?;
        let client = self.build_client()?;
        search_debug!("GET {}", url);

        let response = client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            search_warn!("search for {:?} failed with status {}", query, status);
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        let parsed: SearchResponse = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Malformed, err.to_string()))?;

        search_info!(
            "search for {:?} returned {} hits of {}",
            query,
            parsed.hits.len(),
            parsed.total.value
        );
        Ok(SearchOutput {
            hits: parsed.hits,
            total: parsed.total.value,
        })
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
