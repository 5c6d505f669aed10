//! Message extraction from a source tree.
//!
//! Extraction runs in three steps:
//!
//! 1. `file_scanner` lists source files in a stable order
//! 2. `call_site` parses each file and reduces calls to [`CallSite`]s
//! 3. `messages` folds marker call sites into a deduplicated [`MessageSet`]
//!
//! Files are parsed in parallel, but call sites are folded in file order so
//! location lists and the resulting catalogs are reproducible.

pub mod call_site;
pub mod messages;

use std::path::Path;

use rayon::prelude::*;

use crate::core::{
    Result,
    catalog::MessageSet,
    file_scanner::{ScanOptions, scan_source_files},
};

pub use call_site::{CallSite, CallSiteCollector, collect_call_sites};
pub use messages::{DEFAULT_MARKER, MessageExtractor};

/// Result of extracting messages from a source tree.
#[derive(Debug, Default)]
pub struct Extraction {
    pub messages: MessageSet,
    /// Number of source files parsed.
    pub files_scanned: usize,
    /// Number of marker call sites that produced or extended a message.
    pub call_count: usize,
}

/// Scan `root` and extract every message passed to the `marker` function.
///
/// Any unreadable or unparsable file fails the whole extraction.
pub fn extract_messages(root: &Path, marker: &str, options: &ScanOptions) -> Result<Extraction> {
    let files = scan_source_files(root, options)?;

    let per_file: Vec<Vec<CallSite>> = files
        .par_iter()
        .map(collect_call_sites)
        .collect::<Result<_>>()?;

    let mut extractor = MessageExtractor::new(marker);
    for call in per_file.into_iter().flatten() {
        extractor.add(call);
    }

    Ok(Extraction {
        files_scanned: files.len(),
        call_count: extractor.call_count(),
        messages: extractor.finish(),
    })
}
