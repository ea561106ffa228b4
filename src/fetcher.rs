use crate::animal::Animal;
use crate::config::Config;
use crate::error::{AnimalError, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Anything that can answer "which animals match this name".
#[async_trait]
pub trait AnimalSource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<Vec<Animal>>;
}

/// HTTP client for the API Ninjas animals endpoint.
pub struct AnimalsClient {
    api_key: Option<String>,
    url: String,
    client: reqwest::Client,
}

impl AnimalsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnimalError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            url: config.animals_url(),
            client,
        })
    }
}

#[async_trait]
impl AnimalSource for AnimalsClient {
    async fn fetch(&self, name: &str) -> Result<Vec<Animal>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AnimalError::Configuration(format!(
                "{} environment variable not set.",
                crate::config::API_KEY_ENV
            ))
        })?;

        info!("Fetching animals matching '{}' from {}", name, self.url);

        let response = self
            .client
            .get(&self.url)
            .query(&[("name", name)])
            .header("X-Api-Key", api_key)
            .send()
            .await
            .map_err(|e| AnimalError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        debug!("Animals API responded with {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| AnimalError::Network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            warn!("Animals API returned {}", status);
            return Err(AnimalError::Network(format!("HTTP {}: {}", status, body.trim())));
        }

        let animals = parse_animals(&body)?;
        info!("Received {} animal(s)", animals.len());
        Ok(animals)
    }
}

/// Parse a response body into records. The body must be a JSON array whose
/// elements are all objects; unexpected values inside `taxonomy` or
/// `characteristics` are kept, not rejected.
pub fn parse_animals(body: &str) -> Result<Vec<Animal>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| AnimalError::DataFormat(format!("Response is not valid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(AnimalError::DataFormat(format!(
                "Expected a list of animals, got {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(AnimalError::DataFormat(format!(
                    "Entry {} is {}, expected an object",
                    index,
                    json_kind(&item)
                )));
            }
            serde_json::from_value(item).map_err(|e| {
                AnimalError::DataFormat(format!("Entry {} has an unexpected shape: {}", index, e))
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
