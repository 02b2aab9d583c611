use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::FetchError;

pub type JsonObject = serde_json::Map<String, Value>;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Repo {
    pub full_name: String,           // e.g., "rust-lang/rust"
    pub description: Option<String>, // Optional: Not all repos have a description
    pub stargazers_count: u32,       // Number of stars
    #[serde(default)]
    pub forks_count: u32,
    pub language: Option<String>, // Primary language
    pub html_url: String,         // Link to repo
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub total_count: u32,         // Total number of matching repositories
    pub incomplete_results: bool, // If the server timed out before finishing
    pub items: Vec<Repo>,         // A list of repositories
}

impl SearchResponse {
    // Missing or mistyped fields mean the server sent an incomplete result
    pub fn from_payload(payload: JsonObject) -> Result<Self, FetchError> {
        serde_json::from_value(Value::Object(payload)).map_err(|_| FetchError::IncompleteResult)
    }
}
