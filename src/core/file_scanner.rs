//! Source file discovery for extraction.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::WalkDir;

use crate::core::{Error, Result};

/// Extensions scanned when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs", "mts", "cts"];

/// Ignore patterns applied when none are configured.
pub const DEFAULT_IGNORES: &[&str] = &["**/node_modules/**"];

/// Which files under the source root take part in extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// File extensions without the dot, e.g. `tsx`.
    pub extensions: Vec<String>,
    /// Glob patterns matched against paths relative to the source root.
    pub ignores: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignores: DEFAULT_IGNORES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// A source file found by [`scan_source_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path usable for reading the file.
    pub path: PathBuf,
    /// Path relative to the source root with `/` separators, used in locations.
    pub display_path: String,
}

/// Recursively list source files under `root`, depth-first in file-name order.
///
/// Unreadable directories abort the scan; nothing is skipped silently.
pub fn scan_source_files(root: &Path, options: &ScanOptions) -> Result<Vec<SourceFile>> {
    ensure_directory(root)?;
    let ignores = compile_patterns(&options.ignores)?;
    let is_ignored = |path: &Path| {
        let relative = path.strip_prefix(root).unwrap_or(path);
        ignores.iter().any(|p| p.matches_path(relative))
    };

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry.path()));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), &options.extensions) {
            continue;
        }
        let display_path = display_path(root, entry.path());
        files.push(SourceFile {
            path: entry.into_path(),
            display_path,
        });
    }

    Ok(files)
}

/// Fails with `Error::Io` unless `path` is an existing directory.
///
/// A walk rooted at a regular file would yield just that file.
pub(crate) fn ensure_directory(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if metadata.is_dir() {
        Ok(())
    } else {
        Err(Error::io(
            path,
            io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        ))
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::Pattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

fn display_path(root: &Path, path: &Path) -> String {
    let relative = match path.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative,
        _ => path,
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
