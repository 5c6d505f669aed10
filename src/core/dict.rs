//! Runtime translation lookup.
//!
//! A [`Dict`] is built once for a (directory, locale) pair. Construction walks
//! the directory tree, loads every catalog whose file name ends with
//! `-<L>.tr` for a locale `L` of the chain, and keeps one translation map per
//! locale. After that it is read-only.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::core::{
    LocaleChain, MessageKey, Result,
    catalog::{TranslationMap, merge_translations, read_catalog},
    file_scanner::ensure_directory,
};

#[derive(Debug)]
pub struct Dict {
    dir_path: PathBuf,
    chain: LocaleChain,
    translations: HashMap<String, TranslationMap>,
    loaded_files: Vec<PathBuf>,
}

impl Dict {
    /// Load all catalogs under `dir_path` that belong to the chain of `locale`.
    ///
    /// Sub-directories are visited in file-name order, so when two files of
    /// the same locale define the same key, the one loaded later wins
    /// deterministically.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidLocale` if `locale` is malformed
    /// - `Error::Io` if `dir_path` is not a readable directory
    /// - `Error::Walk`/`Error::Io` if the tree or a file cannot be read
    /// - `Error::Decode` if any matching catalog is malformed
    pub fn new(dir_path: impl AsRef<Path>, locale: &str) -> Result<Self> {
        let dir_path = dir_path.as_ref();
        let chain = LocaleChain::resolve(locale)?;

        let mut dict = Self {
            dir_path: dir_path.to_path_buf(),
            chain,
            translations: HashMap::new(),
            loaded_files: Vec::new(),
        };
        dict.load_translations()?;

        Ok(dict)
    }

    fn load_translations(&mut self) -> Result<()> {
        ensure_directory(&self.dir_path)?;
        let walker = WalkDir::new(&self.dir_path)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(locale) = self.catalog_locale(entry.path()) else {
                continue;
            };

            let messages = read_catalog(entry.path())?;
            merge_translations(self.translations.entry(locale).or_default(), messages);
            self.loaded_files.push(entry.into_path());
        }

        Ok(())
    }

    /// Chain locale a catalog file belongs to, judged by its file name.
    fn catalog_locale(&self, path: &Path) -> Option<String> {
        let file_name = path.file_name()?.to_str()?;
        self.chain.match_file_name(file_name).map(str::to_string)
    }

    /// Translate `source` disambiguated by `context`.
    ///
    /// Locales are tried most specific first. When none of them has a
    /// translation, `source` is returned unchanged.
    pub fn translate<'a, S: AsRef<str>>(&'a self, source: &'a str, context: &[S]) -> &'a str {
        let key = MessageKey::new(source, context);
        self.chain
            .iter()
            .filter_map(|locale| self.translations.get(locale))
            .find_map(|translations| translations.get(&key))
            .map_or(source, String::as_str)
    }

    /// The most specific locale of the chain.
    pub fn locale(&self) -> &str {
        self.chain.primary()
    }

    pub fn locales(&self) -> &LocaleChain {
        &self.chain
    }

    pub fn dir_path(&self) -> &Path {
        &self.dir_path
    }

    /// Catalog files that contributed to this dict, in load order.
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }

    /// Number of (locale, key) translations held.
    pub fn len(&self) -> usize {
        self.translations.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
