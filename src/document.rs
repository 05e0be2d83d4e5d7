use std::fmt;

use crate::block::{Fragment, HeadingLevel, ListItem, Table};
use crate::error::Result;
use crate::markup::Element;
use crate::render;
use crate::theme::{DEFAULT_PROFILE, Theme};

/// Append-only Markdown document builder.
///
/// Each operation records one [`Fragment`]; the Markdown source is the
/// fragments' expansions concatenated in call order. Rendering never
/// consumes or mutates the recorded fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    profile: String,
    fragments: Vec<Fragment>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_profile(DEFAULT_PROFILE)
    }

    pub fn with_profile(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            fragments: Vec::new(),
        }
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn add_heading(&mut self, level: HeadingLevel, text: impl Into<String>) -> &mut Self {
        self.push(Fragment::Heading {
            level,
            text: text.into(),
        })
    }

    /// A paragraph, separated from its neighbours by blank lines.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Fragment::Text(text.into()))
    }

    /// Append a table. A mismatched alignment list is padded or truncated to the header.
    pub fn add_table(&mut self, table: Table) -> &mut Self {
        self.push(Fragment::Table(table))
    }

    /// Append a table, rejecting an alignment list whose length differs from the header.
    pub fn try_add_table(&mut self, table: Table) -> Result<&mut Self> {
        table.check_alignment()?;
        Ok(self.push(Fragment::Table(table)))
    }

    pub fn add_list<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ListItem>,
    {
        self.push(Fragment::List(items.into_iter().map(Into::into).collect()))
    }

    /// Append Markdown (or inline HTML) verbatim.
    pub fn add_raw(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Fragment::Raw(text.into()))
    }

    fn push(&mut self, fragment: Fragment) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    /// The accumulated Markdown source.
    pub fn markdown(&self) -> String {
        render::fragments_to_markdown(&self.fragments)
    }

    /// Render with this document's style profile.
    pub fn render(&self) -> Result<Element> {
        let theme = Theme::named(&self.profile).unwrap_or_else(|| {
            tracing::warn!(profile = %self.profile, "Unknown style profile, using default");
            Theme::compiled_default()
        });
        self.render_with(&theme)
    }

    pub fn render_with(&self, theme: &Theme) -> Result<Element> {
        render::render_fragments(&self.fragments, theme)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Row;
    use crate::error::Error;
    use crate::inline::{wrap_bold, wrap_red_text};
    use pretty_assertions::assert_eq;

    #[test]
    fn operations_concatenate_in_call_order() {
        let mut doc = Document::new();
        doc.add_heading(HeadingLevel::H1, "hello")
            .add_heading(HeadingLevel::H2, "world")
            .add_text("text1")
            .add_text("text2")
            .add_raw("raw")
            .add_list(["a", "b"]);

        assert_eq!(
            doc.markdown(),
            "# hello\n## world\n\ntext1\n\n\ntext2\n\nraw* a\n* b\n"
        );
        assert_eq!(doc.to_string(), doc.markdown());
        assert_eq!(doc.fragments().len(), 6);
    }

    #[test]
    fn default_profile() {
        assert_eq!(Document::new().profile(), "default");
        assert_eq!(Document::with_profile("print").profile(), "print");
    }

    #[test]
    fn unknown_profile_renders_with_default() {
        let mut a = Document::with_profile("print");
        a.add_text("same");
        let mut b = Document::new();
        b.add_text("same");
        assert_eq!(a.render().unwrap(), b.render().unwrap());
    }

    #[test]
    fn strict_table_rejects_mismatched_alignment() {
        let mut doc = Document::new();
        let table = Table::new(["a", "b"]).align_codes(["r"]);
        assert!(matches!(
            doc.try_add_table(table),
            Err(Error::AlignmentMismatch {
                columns: 2,
                alignments: 1
            })
        ));
        assert!(doc.fragments().is_empty());

        doc.try_add_table(Table::new(["a"]).align_codes(["c"])).unwrap();
        assert_eq!(doc.markdown(), "|a|\n|:---:|\n\n");
    }

    #[test]
    fn render_does_not_consume_fragments() {
        let mut doc = Document::new();
        doc.add_table(
            Table::new(["a", "b"]).row(Row::new().cell("a", wrap_bold(45)).cell("b", wrap_red_text(123))),
        );
        let first = doc.render().unwrap().to_string();
        let second = doc.render().unwrap().to_string();
        assert_eq!(first, second);
        assert_eq!(doc.fragments().len(), 1);
    }
}
