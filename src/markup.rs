//! Rendered HTML tree, detached from the parser that produced it.

use std::fmt;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
    "script",
    "style",
    "xmp",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: Vec<(String, String)>) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inline style, empty when absent.
    pub fn style(&self) -> &str {
        self.attr("style").unwrap_or_default()
    }

    /// Append CSS declarations to the inline style, keeping what is already there.
    pub fn append_style(&mut self, declarations: &str) {
        if declarations.is_empty() {
            return;
        }
        match self.attrs.iter_mut().find(|(key, _)| key == "style") {
            Some((_, style)) => {
                let trimmed = style.trim_end();
                if !trimmed.is_empty() && !trimmed.ends_with(';') {
                    style.truncate(trimmed.len());
                    style.push(';');
                }
                style.push_str(declarations);
            }
            None => self
                .attrs
                .push(("style".to_string(), declarations.to_string())),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Descendant elements (excluding `self`) with the given tag name, in document order.
    pub fn descendants_named(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_named(&self.children, name, &mut found);
        found
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
            Node::Comment(_) => {}
        }
    }
}

fn collect_named<'a>(nodes: &'a [Node], name: &str, found: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(element) = node {
            if element.name == name {
                found.push(element);
            }
            collect_named(&element.children, name, found);
        }
    }
}

/// HTML5 serialization.
///
/// Attribute names are written as stored; trees built by the renderer keep only
/// the local name, so a namespaced attribute such as `xlink:href` comes out as `href`.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attrs {
            write!(
                f,
                " {}=\"{}\"",
                key,
                html_escape::encode_double_quoted_attribute(value)
            )?;
        }
        f.write_str(">")?;

        if VOID_ELEMENTS.contains(&self.name.as_str()) {
            return Ok(());
        }

        let raw_text = RAW_TEXT_ELEMENTS.contains(&self.name.as_str());
        for child in &self.children {
            match child {
                Node::Text(text) if raw_text => f.write_str(text)?,
                other => write!(f, "{other}")?,
            }
        }
        write!(f, "</{}>", self.name)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => write!(f, "{element}"),
            Node::Text(text) => f.write_str(&html_escape::encode_text(text)),
            Node::Comment(comment) => write!(f, "<!--{comment}-->"),
        }
    }
}
