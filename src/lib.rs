//! Build Markdown documents programmatically and render them to HTML with
//! inline styles.
//!
//! ```
//! use mdstyle::{Document, HeadingLevel, Row, Table, wrap_bold};
//!
//! let mut doc = Document::new();
//! doc.add_heading(HeadingLevel::H1, "Report")
//!     .add_text("Numbers below.")
//!     .add_table(Table::new(["a", "b"]).row(Row::new().cell("a", 112).cell("b", wrap_bold(5463))));
//!
//! let html = doc.render().unwrap().to_string();
//! assert!(html.starts_with("<div class=\"markdown-body\""));
//! ```

mod block;
mod document;
mod error;
mod inline;
pub mod markup;
mod render;
mod theme;

pub use block::{
    Alignment, CELL_PLACEHOLDER, Fragment, HeadingLevel, LIST_INDENT, ListItem, Row, Table,
};
pub use document::Document;
pub use error::{Error, Result};
pub use inline::{RED_CLASS, wrap_bold, wrap_code, wrap_italic, wrap_red_text};
pub use render::{fragments_to_markdown, markdown_to_html, render_fragments, render_markdown};
pub use theme::{DEFAULT_PROFILE, StripeConfig, StyleRule, Theme};
