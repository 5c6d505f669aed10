use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A call site of a translatable string.
///
/// Serialized as `{"File": "src/app.ts", "Line": "12"}`. The line is written
/// as a string; decoding accepts either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceLocation {
    pub file: String,
    /// 1-indexed line number.
    #[serde(serialize_with = "line_to_string", deserialize_with = "line_from_any")]
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

fn line_to_string<S: Serializer>(line: &usize, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&line.to_string())
}

fn line_from_any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Line {
        Number(usize),
        Text(String),
    }

    match Line::deserialize(deserializer)? {
        Line::Number(line) => Ok(line),
        Line::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
