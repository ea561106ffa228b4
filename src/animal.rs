use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One animal entry as returned by the animals endpoint.
///
/// Every field is optional on the wire; a `null` is treated the same as a
/// missing key. `taxonomy` and `characteristics` keep whatever JSON the API
/// sends; only string values are read back out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Animal {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub taxonomy: Option<BTreeMap<String, Value>>,

    #[serde(default)]
    pub locations: Option<Vec<String>>,

    #[serde(default)]
    pub characteristics: Option<BTreeMap<String, Value>>,
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = Some(locations.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_characteristic(mut self, key: &str, value: &str) -> Self {
        self.characteristics
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Name shown on the card.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Key used for ordering; a missing name sorts first.
    pub fn sort_key(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn locations(&self) -> &[String] {
        self.locations.as_deref().unwrap_or(&[])
    }

    /// String value of a characteristic. Null and non-string values count
    /// as missing.
    pub fn characteristic(&self, key: &str) -> Option<&str> {
        self.characteristics
            .as_ref()
            .and_then(|c| c.get(key))
            .and_then(Value::as_str)
    }

    pub fn diet(&self) -> Option<&str> {
        self.characteristic("diet")
    }

    /// The `type` characteristic (mammal, bird, ...).
    pub fn kind(&self) -> Option<&str> {
        self.characteristic("type")
    }

    pub fn skin_type(&self) -> Option<&str> {
        self.characteristic("skin_type")
    }
}
