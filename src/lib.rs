//! Polyglot - source-string translation catalogs
//!
//! Polyglot is a CLI tool and library for translating applications by their
//! source strings. The build side scans JavaScript/TypeScript sources for
//! `tr("...")` calls and keeps one `.tr` catalog per locale in sync with them.
//! The runtime side loads those catalogs into a [`core::Dict`] and resolves
//! strings through a locale fallback chain.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Locales, catalogs, extraction, synchronization and the runtime dict

pub mod cli;
pub mod config;
pub mod core;
