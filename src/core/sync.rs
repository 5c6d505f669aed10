//! Catalog synchronization.
//!
//! For each target locale the freshly extracted messages are merged with the
//! catalog already on disk: existing translations are carried forward by
//! message key, locations are always replaced by the fresh ones, and
//! messages that are no longer extracted are dropped together with their
//! translations.

use std::path::{Path, PathBuf};

use crate::core::{
    Error, Message, Result,
    catalog::{
        LoadedCatalog, MessageSet, catalog_file_name, encode_catalog, index_messages,
        load_catalog, save_catalog_text,
    },
    extract::{DEFAULT_MARKER, extract_messages},
    file_scanner::ScanOptions,
};

/// Everything one extraction/sync run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Catalogs are written to `<base_name>-<locale>.tr`. May contain directories.
    pub base_name: String,
    pub source_root: PathBuf,
    /// Exact target locales. Each must be a valid locale.
    pub locales: Vec<String>,
    /// Name of the function marking translatable strings.
    pub marker: String,
    pub scan: ScanOptions,
}

impl SyncConfig {
    pub fn new(base_name: impl Into<String>, source_root: impl Into<PathBuf>) -> Self {
        Self {
            base_name: base_name.into(),
            source_root: source_root.into(),
            locales: Vec::new(),
            marker: DEFAULT_MARKER.to_string(),
            scan: ScanOptions::default(),
        }
    }

    pub fn with_locales(mut self, locales: Vec<String>) -> Self {
        self.locales = locales;
        self
    }

    pub fn catalog_path(&self, locale: &str) -> PathBuf {
        PathBuf::from(catalog_file_name(&self.base_name, locale))
    }
}

/// What synchronizing one catalog changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub locale: String,
    pub path: PathBuf,
    /// Messages in the new catalog.
    pub total: usize,
    /// Messages of the new catalog that carry a translation.
    pub translated: usize,
    /// Messages that were not in the previous catalog.
    pub added: usize,
    /// Messages found in the previous catalog, translation carried over.
    pub carried: usize,
    /// Messages of the previous catalog that are no longer extracted.
    pub dropped: Vec<Message>,
    /// Whether the new catalog differs from the file on disk (or the file is missing).
    pub changed: bool,
    /// False when the file was left untouched (dry run).
    pub written: bool,
}

impl SyncOutcome {
    /// Dropped messages that had a translation.
    pub fn lost_translations(&self) -> impl Iterator<Item = &Message> {
        self.dropped.iter().filter(|m| m.is_translated())
    }
}

/// Merge `extracted` into the catalog at `path` and, unless `dry_run`, write it back.
///
/// A missing catalog is treated as empty. A malformed one fails the sync
/// without touching the file.
pub fn sync_catalog(
    path: &Path,
    locale: &str,
    extracted: &MessageSet,
    dry_run: bool,
) -> Result<SyncOutcome> {
    let old = if path.exists() {
        Some(load_catalog(path)?)
    } else {
        None
    };
    let (old_bytes, old_messages) = match old {
        Some(LoadedCatalog { bytes, messages }) => (Some(bytes), messages),
        None => (None, Vec::new()),
    };
    let mut old_index = index_messages(old_messages);

    let mut added = 0;
    let mut carried = 0;
    let mut merged = Vec::with_capacity(extracted.len());
    for (key, message) in extracted {
        let mut message = message.clone();
        match old_index.remove(key) {
            Some(old) => {
                message.translation = old.translation;
                carried += 1;
            }
            None => added += 1,
        }
        merged.push(message);
    }

    let mut dropped: Vec<Message> = old_index.into_values().collect();
    dropped.sort_by_cached_key(Message::key);

    let total = merged.len();
    let translated = merged.iter().filter(|m| m.is_translated()).count();
    let content = encode_catalog(merged).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    let changed = old_bytes.as_deref() != Some(content.as_bytes());

    if !dry_run {
        save_catalog_text(path, &content)?;
    }

    Ok(SyncOutcome {
        locale: locale.to_string(),
        path: path.to_path_buf(),
        total,
        translated,
        added,
        carried,
        dropped,
        changed,
        written: !dry_run,
    })
}

/// Result of a full extraction and sync run.
#[derive(Debug)]
pub struct SyncReport {
    pub files_scanned: usize,
    pub call_count: usize,
    pub message_count: usize,
    /// One entry per target locale, in configuration order.
    pub outcomes: Vec<SyncOutcome>,
}

/// Extract messages under the source root and synchronize every target catalog.
pub fn run_sync(config: &SyncConfig, dry_run: bool) -> Result<SyncReport> {
    let extraction = extract_messages(&config.source_root, &config.marker, &config.scan)?;

    let outcomes = config
        .locales
        .iter()
        .map(|locale| {
            sync_catalog(
                &config.catalog_path(locale),
                locale,
                &extraction.messages,
                dry_run,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SyncReport {
        files_scanned: extraction.files_scanned,
        call_count: extraction.call_count,
        message_count: extraction.messages.len(),
        outcomes,
    })
}
