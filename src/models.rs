use serde::{Deserialize, Deserializer};

/// One row of the lounge CSV: a single card-to-lounge mapping.
///
/// Column names follow the published sheet (`card`, `Lounge`, `Terminal`,
/// `Airport`, `Image`). Columns missing from a row deserialize to empty
/// strings so that partially filled rows are still listed.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Lounge {
    #[serde(rename = "card", default)]
    pub card: String,
    #[serde(rename = "Lounge", default)]
    pub name: String,
    #[serde(rename = "Terminal", default)]
    pub terminal: String,
    #[serde(rename = "Airport", default)]
    pub airport: String,
    #[serde(rename = "Image", default, deserialize_with = "empty_as_none")]
    pub image: Option<String>,
}

impl Lounge {
    /// Returns true if this row belongs to `card_name`, ignoring case
    pub fn belongs_to(&self, card_name: &str) -> bool {
        self.card.to_lowercase() == card_name.to_lowercase()
    }

    /// Image URL, if the row has one
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
