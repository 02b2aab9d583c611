//! Async client for the GitHub repository search endpoint.
//!
//! A [`SearchRequest`] is turned into query parameters, sent through a
//! [`Transport`] and the response is validated into either a JSON object or a
//! [`FetchError`].

pub mod api_client;
pub mod config;
pub mod errors;
pub mod models;
pub mod search_query;
pub mod transport;

pub use api_client::{SearchClient, validate_response};
pub use config::ClientConfig;
pub use errors::{FetchError, FetchErrorKind};
pub use models::{JsonObject, Repo, SearchResponse};
pub use search_query::{OrderOption, ParameterMap, SearchRequest, SortOption};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
