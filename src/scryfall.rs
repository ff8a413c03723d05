//! Scryfall API client for named card lookups
//!
//! Uses async reqwest. Responses are read as text and parsed as JSON without
//! looking at the HTTP status, so Scryfall's error payloads come back as
//! ordinary card records (see [`CardRecord::api_error`]).

use crate::error::Result;
use crate::image::ImageUris;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Public Scryfall API host
pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";

const USER_AGENT: &str = concat!("scryfall-image/", env!("CARGO_PKG_VERSION"));

/// Card JSON exactly as Scryfall sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRecord {
    value: Value,
}

/// Scryfall API error response (`"object": "error"`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScryfallError {
    pub status: u16,
    pub code: String,
    pub details: String,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    data: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FaceImages {
    #[serde(default)]
    image_uris: Option<ImageUris>,
}

impl CardRecord {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Look up a top-level field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// Card name, if the record has one
    pub fn name(&self) -> Option<&str> {
        self.value.get("name").and_then(Value::as_str)
    }

    /// Parse the `image_uris` field.
    ///
    /// Returns `Ok(None)` when the field is missing or `null`, and a parse
    /// error when it is present but not an object of optional strings.
    pub fn image_uris(&self) -> Result<Option<ImageUris>> {
        match self.value.get("image_uris") {
            None | Some(Value::Null) => Ok(None),
            Some(uris) => Ok(Some(ImageUris::deserialize(uris)?)),
        }
    }

    /// Parse `card_faces[*].image_uris`, one entry per face.
    ///
    /// Double-faced cards carry their images here instead of at the top
    /// level. Returns `Ok(None)` when the record has no `card_faces`.
    pub fn face_image_uris(&self) -> Result<Option<Vec<Option<ImageUris>>>> {
        match self.value.get("card_faces") {
            None | Some(Value::Null) => Ok(None),
            Some(faces) => {
                let faces = Vec::<FaceImages>::deserialize(faces)?;
                Ok(Some(faces.into_iter().map(|f| f.image_uris).collect()))
            }
        }
    }

    /// The error payload, when Scryfall answered with one
    pub fn api_error(&self) -> Option<ScryfallError> {
        if self.value.get("object").and_then(Value::as_str) != Some("error") {
            return None;
        }
        ScryfallError::deserialize(&self.value).ok()
    }
}

impl From<Value> for CardRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Async Scryfall client
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ScryfallClient {
    /// Client for the public Scryfall API
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: SCRYFALL_API_URL.to_string(),
        }
    }

    /// Point the client at another host. Trailing slashes are ignored.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Use a preconfigured reqwest client (proxy, timeouts, ...)
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a card by its exact name
    pub async fn get_card_by_name(&self, name: &str) -> Result<CardRecord> {
        self.fetch_named("exact", name).await
    }

    /// Fetch a card by name (fuzzy search)
    pub async fn get_card_by_fuzzy_name(&self, name: &str) -> Result<CardRecord> {
        self.fetch_named("fuzzy", name).await
    }

    /// Card name suggestions for a partial query
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<String>> {
        let catalog: Catalog = self
            .get_json("/cards/autocomplete", &[("q", query)])
            .await?;
        Ok(catalog.data)
    }

    async fn fetch_named(&self, mode: &str, name: &str) -> Result<CardRecord> {
        let card: CardRecord = self.get_json("/cards/named", &[(mode, name)]).await?;

        if let Some(error) = card.api_error() {
            log::warn!(
                "Scryfall returned an error for {:?}: {} ({})",
                name,
                error.details,
                error.code
            );
        }

        Ok(card)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        log::debug!("Fetching from Scryfall: {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(query)
            .send()
            .await?;

        log::debug!("Scryfall responded with {}", response.status());

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Fetch a card by its exact name using the public API
pub async fn get_card_by_name(name: &str) -> Result<CardRecord> {
    ScryfallClient::new().get_card_by_name(name).await
}

/// Fetch a card by name (fuzzy search) using the public API
pub async fn get_card_by_fuzzy_name(name: &str) -> Result<CardRecord> {
    ScryfallClient::new().get_card_by_fuzzy_name(name).await
}

/// Card name suggestions using the public API
pub async fn autocomplete(query: &str) -> Result<Vec<String>> {
    ScryfallClient::new().autocomplete(query).await
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
