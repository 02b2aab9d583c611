use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    // Passed through untouched, reachable with downcast_ref
    #[error(transparent)]
    Transport(anyhow::Error),

    #[error("the response did not contain any data")]
    DataMissing,

    #[error("the server returned an invalid response")]
    InvalidResponse,

    #[error("the response body is not a valid JSON object")]
    InvalidJson,

    #[error("the response is missing expected fields")]
    IncompleteResult,

    #[error("could not build the request URL: {0}")]
    MalformedUrl(String),
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::MalformedUrl(err.to_string())
    }
}

// Fieldless mirror of FetchError, for matching without string compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Transport,
    DataMissing,
    InvalidResponse,
    InvalidJson,
    IncompleteResult,
    MalformedUrl,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::DataMissing => FetchErrorKind::DataMissing,
            FetchError::InvalidResponse => FetchErrorKind::InvalidResponse,
            FetchError::InvalidJson => FetchErrorKind::InvalidJson,
            FetchError::IncompleteResult => FetchErrorKind::IncompleteResult,
            FetchError::MalformedUrl(_) => FetchErrorKind::MalformedUrl,
        }
    }
}
