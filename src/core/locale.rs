//! Locale validation and fallback chains.
//!
//! A locale is either a bare language code (`de`) or a language plus region
//! (`de_AT`). Lookups try the specific locale first and then its language:
//! `de_AT` expands to `["de_AT", "de"]`.
//!
//! There is no normalization: `DE`, `de-AT` and `de_at` are rejected rather
//! than coerced, because catalog file names are matched verbatim.

use std::fmt;

use super::{Error, Result};

/// Ordered fallback chain, most specific locale first.
///
/// Always holds one or two entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChain {
    locales: Vec<String>,
}

impl LocaleChain {
    /// Validate `locale` and expand it into its fallback chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyglot::core::LocaleChain;
    ///
    /// let chain = LocaleChain::resolve("fr_FR").unwrap();
    /// assert_eq!(chain.as_slice(), ["fr_FR", "fr"]);
    ///
    /// assert!(LocaleChain::resolve("de-DE").is_err());
    /// ```
    pub fn resolve(locale: &str) -> Result<Self> {
        let invalid = || Error::InvalidLocale(locale.to_string());

        let parts: Vec<&str> = locale.split('_').collect();
        let (language, region) = match parts.as_slice() {
            [language] => (*language, None),
            [language, region] => (*language, Some(*region)),
            _ => return Err(invalid()),
        };

        if language.len() != 2 || !language.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(invalid());
        }

        let locales = match region {
            None => vec![language.to_string()],
            Some(region) => {
                if !(2..=3).contains(&region.len())
                    || !region.bytes().all(|b| b.is_ascii_uppercase())
                {
                    return Err(invalid());
                }
                vec![locale.to_string(), language.to_string()]
            }
        };

        Ok(Self { locales })
    }

    /// The most specific locale of the chain.
    pub fn primary(&self) -> &str {
        &self.locales[0]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.locales
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(String::as_str)
    }

    /// Returns the first chain locale `L` for which `file_name` ends with `-L.tr`.
    pub fn match_file_name(&self, file_name: &str) -> Option<&str> {
        self.iter().find(|locale| {
            file_name
                .strip_suffix(".tr")
                .and_then(|stem| stem.strip_suffix(locale))
                .is_some_and(|rest| rest.ends_with('-'))
        })
    }
}

impl fmt::Display for LocaleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.locales.join(" -> "))
    }
}

/// Returns true if `locale` would resolve to a chain.
pub fn is_valid_locale(locale: &str) -> bool {
    LocaleChain::resolve(locale).is_ok()
}

/// Clean up a list of target locales.
///
/// Entries are trimmed; empty entries and repeats are skipped, keeping the
/// first occurrence. Every remaining entry must be a valid locale.
///
/// ```
/// use polyglot::core::locale::normalize_locales;
///
/// let locales = normalize_locales("de_AT, de,,fr,de".split(',')).unwrap();
/// assert_eq!(locales, ["de_AT", "de", "fr"]);
/// ```
pub fn normalize_locales<I, S>(locales: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for locale in locales {
        let locale = locale.as_ref().trim();
        if locale.is_empty() || normalized.iter().any(|l| l == locale) {
            continue;
        }
        LocaleChain::resolve(locale)?;
        normalized.push(locale.to_string());
    }
    Ok(normalized)
}
