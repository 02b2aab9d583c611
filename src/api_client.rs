use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::errors::FetchError;
use crate::models::{JsonObject, SearchResponse};
use crate::search_query::SearchRequest;
use crate::transport::{ReqwestTransport, Transport, TransportResponse};

const SEARCH_REPOSITORIES_PATH: [&str; 2] = ["search", "repositories"];

// Holds no per-request state, so one client can serve concurrent searches
#[derive(Debug, Clone)]
pub struct SearchClient<T> {
    base_url: String,
    transport: T,
}

impl SearchClient<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new(&config.user_agent, config.timeout)?;
        Ok(Self::new(&config.base_url, transport))
    }
}

impl<T: Transport> SearchClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, request: &SearchRequest) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)?;

        // The search path and parameters must not land in someone else's query
        if url.cannot_be_a_base() {
            return Err(FetchError::MalformedUrl(format!(
                "{} cannot be used as a base URL",
                self.base_url
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(FetchError::MalformedUrl(format!(
                "base URL {} must not carry a query or fragment",
                self.base_url
            )));
        }

        url.path_segments_mut()
            .map_err(|()| FetchError::MalformedUrl(format!("{} has no path", self.base_url)))?
            .pop_if_empty()
            .extend(SEARCH_REPOSITORIES_PATH);
        url.query_pairs_mut().extend_pairs(request.parameters());

        Ok(url)
    }

    // One dispatch per call, no retries
    pub async fn fetch_repositories(&self, request: &SearchRequest) -> Result<JsonObject, FetchError> {
        let url = self.build_url(request)?;

        debug!(url = url.as_str(), "dispatching repository search");
        let response = self.transport.get(url).await;
        if let Ok(response) = &response {
            debug!(status = response.status, "repository search answered");
        }

        validate_response(response)
    }

    pub async fn search_repositories(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        let payload = self.fetch_repositories(request).await?;
        SearchResponse::from_payload(payload)
    }
}

// Order matters: transport error, missing body, status, then JSON shape
pub fn validate_response(
    response: anyhow::Result<TransportResponse>,
) -> Result<JsonObject, FetchError> {
    let response = response.map_err(FetchError::Transport)?;

    let body = match response.body {
        Some(body) if !body.is_empty() => body,
        _ => return Err(FetchError::DataMissing),
    };

    if response.status != 200 {
        return Err(FetchError::InvalidResponse);
    }

    match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(object)) => Ok(object),
        _ => Err(FetchError::InvalidJson),
    }
}
