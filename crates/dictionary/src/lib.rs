use std::time::Duration;

use dictionary_api::get_entry;
use thiserror::Error;

mod dictionary;
mod dictionary_api;

pub use dictionary::{Definition, LexicalEntry, Meaning, Phonetic};
pub use dictionary_api::DICTIONARY_API_URL;
pub use reqwest::StatusCode;

pub const NOT_FOUND_MESSAGE: &str = "Word not found. Please try another.";
pub const UNREACHABLE_MESSAGE: &str = "Could not reach the dictionary. Please try again.";

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("dictionary responded with {0}")]
    Status(StatusCode),
    #[error("no entries found for {word:?}")]
    NotFound { word: String },
    #[error("malformed dictionary response: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("dictionary url {0:?} cannot take a word segment")]
    InvalidUrl(String),
}

impl DictionaryError {
    /// Text shown to the user in place of results.
    pub fn user_message(&self) -> &'static str {
        match self {
            DictionaryError::Fetch(_) => UNREACHABLE_MESSAGE,
            DictionaryError::Status(_)
            | DictionaryError::NotFound { .. }
            | DictionaryError::Deserialize(_)
            | DictionaryError::InvalidUrl(_) => NOT_FOUND_MESSAGE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), DICTIONARY_API_URL)
    }

    /// Uses `client` for every request and looks words up under `base_url`.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds a client with an optional request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, DictionaryError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(DictionaryError::Fetch)?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches `word` and returns the first entry the dictionary knows.
    pub async fn lookup(&self, word: &str) -> Result<LexicalEntry, DictionaryError> {
        get_entry(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
