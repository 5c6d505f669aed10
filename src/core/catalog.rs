//! Reading and writing `.tr` catalog files.
//!
//! A catalog holds the messages of exactly one locale. Files are JSON
//! documents of the form `{"Messages": [...]}`; see [`CatalogFile`].

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use serde::de::Error as _;
use serde_json::Value;

use crate::core::{
    Error, MessageKey, Result,
    data::{CatalogFile, Message},
};

/// File extension of catalog files, without the dot.
pub const CATALOG_EXTENSION: &str = "tr";

/// Build-side catalog: full message records keyed by message key.
///
/// The ordered map gives a stable serialization order.
pub type MessageSet = BTreeMap<MessageKey, Message>;

/// Runtime-side catalog: translations keyed by message key.
pub type TranslationMap = HashMap<MessageKey, String>;

/// Catalog file name for `base_name` and `locale`: `<base_name>-<locale>.tr`.
pub fn catalog_file_name(base_name: &str, locale: &str) -> String {
    format!("{}-{}.{}", base_name, locale, CATALOG_EXTENSION)
}

/// Decode catalog bytes into its messages, in file order.
///
/// The document, every message record and every location must be JSON
/// objects. serde would otherwise accept arrays for them positionally.
pub fn decode_catalog(bytes: &[u8]) -> serde_json::Result<Vec<Message>> {
    let document: Value = serde_json::from_slice(bytes)?;
    check_catalog_shape(&document)?;

    let file: CatalogFile = serde_json::from_value(document)?;
    Ok(file.messages)
}

fn check_catalog_shape(document: &Value) -> serde_json::Result<()> {
    expect_object(document, "catalog document")?;

    let Some(Value::Array(messages)) = document.get("Messages") else {
        return Ok(());
    };
    for message in messages {
        expect_object(message, "message record")?;
        if let Some(Value::Array(locations)) = message.get("Locations") {
            for location in locations {
                expect_object(location, "location")?;
            }
        }
    }
    Ok(())
}

fn expect_object(value: &Value, what: &str) -> serde_json::Result<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(serde_json::Error::custom(format!(
            "expected {} to be a JSON object",
            what
        )))
    }
}

/// A catalog as found on disk.
#[derive(Debug)]
pub struct LoadedCatalog {
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// Decoded messages, in file order.
    pub messages: Vec<Message>,
}

/// Read and decode the catalog at `path`, keeping its raw content.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let messages = decode_catalog(&bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedCatalog { bytes, messages })
}

/// Read and decode the catalog at `path`.
pub fn read_catalog(path: &Path) -> Result<Vec<Message>> {
    Ok(load_catalog(path)?.messages)
}

/// Encode messages as catalog text, sorted by message key.
///
/// Output is pretty-printed with 2-space indentation and a trailing newline.
pub fn encode_catalog(messages: impl IntoIterator<Item = Message>) -> serde_json::Result<String> {
    let mut messages: Vec<Message> = messages.into_iter().collect();
    messages.sort_by_cached_key(Message::key);

    let content = serde_json::to_string_pretty(&CatalogFile { messages })?;
    Ok(format!("{}\n", content))
}

/// Write messages to `path`, replacing any existing file.
///
/// Parent directories are created if they don't exist.
pub fn write_catalog(path: &Path, messages: impl IntoIterator<Item = Message>) -> Result<()> {
    let content = encode_catalog(messages).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    save_catalog_text(path, &content)
}

/// Write already encoded catalog text to `path`.
pub fn save_catalog_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Merge the translated messages of one catalog into a locale's translation map.
///
/// Untranslated messages are placeholders and contribute nothing. A key that
/// is already present is overwritten. Returns the number of entries merged.
pub fn merge_translations(
    translations: &mut TranslationMap,
    messages: impl IntoIterator<Item = Message>,
) -> usize {
    let mut merged = 0;
    for message in messages {
        if message.is_translated() {
            translations.insert(message.key(), message.translation);
            merged += 1;
        }
    }
    merged
}

/// Index messages by key; on duplicate keys the later message wins.
pub fn index_messages(messages: impl IntoIterator<Item = Message>) -> HashMap<MessageKey, Message> {
    messages.into_iter().map(|m| (m.key(), m)).collect()
}
