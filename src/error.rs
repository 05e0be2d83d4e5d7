use std::fmt;

/// Errors produced while building or rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Heading level outside `1..=4`.
    #[error("unsupported heading level {0}, expected 1 to 4")]
    InvalidHeadingLevel(u8),
    /// Alignment list length differs from the header column count.
    #[error("table has {columns} columns but {alignments} alignments")]
    AlignmentMismatch { columns: usize, alignments: usize },
    /// A theme selector failed to parse.
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    /// The container element was not found in the parsed tree.
    #[error("container element `div.{0}` not found in rendered output")]
    MissingContainer(String),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Theme TOML parsing error.
    #[error("theme parse error: {0}")]
    Theme(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_selector(selector: &str, message: impl fmt::Display) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
