//! Message keys: the join between extracted messages and stored translations.
//!
//! A key is the pair (source, context). It is compared structurally, so a
//! source or context entry containing the `__` delimiter can never make two
//! distinct messages collide. The delimited string form is only a rendering.

use std::fmt;

/// Delimiter used when rendering a contextualized key.
pub const KEY_DELIMITER: &str = "__";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    source: String,
    context: Vec<String>,
}

impl MessageKey {
    pub fn new<S: AsRef<str>>(source: impl Into<String>, context: &[S]) -> Self {
        Self {
            source: source.into(),
            context: context.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn context(&self) -> &[String] {
        &self.context
    }
}

/// Renders the key as text.
///
/// Without context the source is returned verbatim; with context the result
/// is `__source__ctx1__ctx2__`.
///
/// ```
/// use polyglot::core::MessageKey;
///
/// assert_eq!(MessageKey::new("Hello", &[] as &[&str]).to_string(), "Hello");
/// assert_eq!(MessageKey::new("Exit", &["menu"]).to_string(), "__Exit__menu__");
/// ```
impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            return f.write_str(&self.source);
        }
        write!(
            f,
            "{d}{}{d}{}{d}",
            self.source,
            self.context.join(KEY_DELIMITER),
            d = KEY_DELIMITER
        )
    }
}
