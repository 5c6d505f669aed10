//! Core localization engine.
//!
//! The build half extracts messages from source code and synchronizes them
//! into per-locale catalogs; the runtime half loads those catalogs into a
//! [`Dict`] for lookup. Both halves join messages through [`MessageKey`].
//!
//! ## Module Structure
//!
//! - `locale`: locale validation and fallback chains
//! - `key`: message keys built from (source, context)
//! - `data`: catalog records and source locations
//! - `catalog`: reading, writing and merging `.tr` files
//! - `dict`: runtime lookup with locale fallback
//! - `file_scanner`: source file discovery
//! - `parsers`: host-language parsing (swc)
//! - `extract`: call-site collection and message extraction
//! - `sync`: carrying translations forward into fresh catalogs

pub mod catalog;
pub mod data;
pub mod dict;
mod error;
pub mod extract;
pub mod file_scanner;
pub mod key;
pub mod locale;
pub mod parsers;
pub mod sync;

pub use data::{CatalogFile, Message, SourceLocation};
pub use dict::Dict;
pub use error::{Error, Result};
pub use key::MessageKey;
pub use locale::LocaleChain;
pub use sync::{SyncConfig, SyncOutcome, SyncReport, run_sync, sync_catalog};
