use serde::{Deserialize, Deserializer, Serialize};

use super::SourceLocation;
use crate::core::MessageKey;

/// One translatable string of a catalog.
///
/// On the build side `locations` lists every call site of the string. At
/// runtime only `source`, `context` and `translation` matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<SourceLocation>,
    pub source: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub context: Vec<String>,
    /// Empty until a translator fills it in.
    #[serde(default, deserialize_with = "null_as_default")]
    pub translation: String,
}

impl Message {
    /// Create an untranslated message without locations.
    pub fn new(source: impl Into<String>, context: Vec<String>) -> Self {
        Self {
            locations: Vec::new(),
            source: source.into(),
            context,
            translation: String::new(),
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.source.as_str(), &self.context)
    }

    pub fn is_translated(&self) -> bool {
        !self.translation.is_empty()
    }
}

/// On-disk shape of a `.tr` catalog file: `{"Messages": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<Message>,
}

/// Decode `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
