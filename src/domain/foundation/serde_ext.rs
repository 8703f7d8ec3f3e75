//! Serde helpers shared by drafts and read models.

use serde::{Deserialize, Deserializer};

/// Deserializes a missing or `null` string as the empty string.
///
/// Use together with `#[serde(default)]` so absent keys also land here.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
