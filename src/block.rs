use std::collections::HashMap;
use std::fmt::Display;

use crate::error::{Error, Result};

/// Text substituted for a column a row does not define.
pub const CELL_PLACEHOLDER: &str = " ";

/// Spaces added per nesting level of a list.
pub const LIST_INDENT: usize = 4;

/// Supported heading depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
    H4 = 4,
}

impl HeadingLevel {
    /// Number of `#` markers for this level.
    pub fn depth(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            4 => Ok(Self::H4),
            other => Err(Error::InvalidHeadingLevel(other)),
        }
    }
}

/// Column alignment in a pipe table's delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Map a short code (`l`, `c`, `r`) to an alignment.
    /// Unknown codes fall back to [`Alignment::None`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "l" | "left" => Self::Left,
            "c" | "center" => Self::Center,
            "r" | "right" => Self::Right,
            _ => Self::None,
        }
    }

    fn delimiter(self) -> &'static str {
        match self {
            Self::None => "---",
            Self::Left => ":---",
            Self::Center => ":---:",
            Self::Right => "---:",
        }
    }
}

/// One table row: column name to cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn cell(mut self, column: impl Into<String>, value: impl Display) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Display) {
        self.cells.insert(column.into(), value.to_string());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Cell text for `column`, or [`CELL_PLACEHOLDER`] when absent.
    pub fn get_or_placeholder(&self, column: &str) -> &str {
        self.get(column).unwrap_or(CELL_PLACEHOLDER)
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// A pipe table: header columns, body rows and optional per-column alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Row>,
    alignment: Option<Vec<Alignment>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            alignment: None,
        }
    }

    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn align(mut self, alignment: impl IntoIterator<Item = Alignment>) -> Self {
        self.alignment = Some(alignment.into_iter().collect());
        self
    }

    /// Alignment from short codes, see [`Alignment::from_code`].
    pub fn align_codes<S: AsRef<str>>(self, codes: impl IntoIterator<Item = S>) -> Self {
        self.align(codes.into_iter().map(|c| Alignment::from_code(c.as_ref())))
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn body(&self) -> &[Row] {
        &self.rows
    }

    pub fn alignment(&self) -> Option<&[Alignment]> {
        self.alignment.as_deref()
    }

    /// Fails when an alignment list is present and its length differs from the header.
    pub fn check_alignment(&self) -> Result<()> {
        match &self.alignment {
            Some(alignment) if alignment.len() != self.header.len() => {
                Err(Error::AlignmentMismatch {
                    columns: self.header.len(),
                    alignments: alignment.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Missing alignments are padded with plain delimiters and extra ones dropped,
    /// so the delimiter row always matches the header.
    fn write_markdown(&self, out: &mut String) {
        push_row(out, self.header.iter().map(String::as_str));

        let delimiters = (0..self.header.len()).map(|i| {
            self.alignment
                .as_ref()
                .and_then(|alignment| alignment.get(i).copied())
                .unwrap_or_default()
                .delimiter()
        });
        push_row(out, delimiters);

        for row in &self.rows {
            push_row(
                out,
                self.header.iter().map(|column| row.get_or_placeholder(column)),
            );
        }
        out.push('\n');
    }
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push_str(cell);
    }
    out.push_str("|\n");
}

/// A bullet list entry: a plain item or a labelled sub-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Leaf(String),
    Group(String, Vec<ListItem>),
}

impl ListItem {
    pub fn leaf(value: impl Display) -> Self {
        Self::Leaf(value.to_string())
    }

    pub fn group(label: impl Display, children: impl IntoIterator<Item = ListItem>) -> Self {
        Self::Group(label.to_string(), children.into_iter().collect())
    }
}

impl From<&str> for ListItem {
    fn from(value: &str) -> Self {
        Self::Leaf(value.to_string())
    }
}

impl From<String> for ListItem {
    fn from(value: String) -> Self {
        Self::Leaf(value)
    }
}

fn write_list(items: &[ListItem], indent: usize, out: &mut String) {
    for item in items {
        let label = match item {
            ListItem::Leaf(value) => value,
            ListItem::Group(label, _) => label,
        };
        out.extend(std::iter::repeat_n(' ', indent));
        out.push_str("* ");
        out.push_str(label);
        out.push('\n');

        if let ListItem::Group(_, children) = item {
            write_list(children, indent + LIST_INDENT, out);
        }
    }
}

/// One unit of Markdown source appended by a builder operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Heading { level: HeadingLevel, text: String },
    Text(String),
    Table(Table),
    List(Vec<ListItem>),
    /// Appended verbatim.
    Raw(String),
}

impl Fragment {
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        self.write_markdown(&mut out);
        out
    }

    pub(crate) fn write_markdown(&self, out: &mut String) {
        match self {
            Fragment::Heading { level, text } => {
                out.extend(std::iter::repeat_n('#', level.depth()));
                out.push(' ');
                out.push_str(text);
                out.push('\n');
            }
            Fragment::Text(text) => {
                out.push('\n');
                out.push_str(text);
                out.push_str("\n\n");
            }
            Fragment::Table(table) => table.write_markdown(out),
            Fragment::List(items) => write_list(items, 0, out),
            Fragment::Raw(text) => out.push_str(text),
        }
    }
}
