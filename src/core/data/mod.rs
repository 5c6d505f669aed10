//! Core data types shared by extraction, synchronization and lookup.
//!
//! ## Module Structure
//!
//! - `message`: catalog records (`Message`, `CatalogFile`)
//! - `source`: source code locations (`SourceLocation`)

pub mod message;
pub mod source;

pub use message::{CatalogFile, Message};
pub use source::SourceLocation;
