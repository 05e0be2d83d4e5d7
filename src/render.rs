use pulldown_cmark::{Options, Parser, html};
use scraper::{ElementRef, Html, Node as HtmlNode, Selector};

use crate::block::Fragment;
use crate::error::{Error, Result};
use crate::markup::{Element, Node};
use crate::theme::Theme;

/// Convert Markdown to an HTML fragment with table syntax enabled.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Concatenate fragments into Markdown source, preserving order.
pub fn fragments_to_markdown(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        fragment.write_markdown(&mut out);
    }
    out
}

/// Render fragments to a styled tree rooted at the container element.
pub fn render_fragments(fragments: &[Fragment], theme: &Theme) -> Result<Element> {
    let markdown = fragments_to_markdown(fragments);
    tracing::debug!(
        fragments = fragments.len(),
        bytes = markdown.len(),
        "Rendering document"
    );
    render_markdown(&markdown, theme)
}

/// Render Markdown source to a styled tree rooted at the container element.
pub fn render_markdown(markdown: &str, theme: &Theme) -> Result<Element> {
    let stylesheet = Stylesheet::compile(theme)?;

    let body = markdown_to_html(markdown);
    let wrapped = format!(
        "<div class=\"{}\">{}</div>",
        html_escape::encode_double_quoted_attribute(&theme.container_class),
        body
    );
    let document = Html::parse_fragment(&wrapped);

    let container = document
        .select(&stylesheet.container)
        .next()
        .ok_or_else(|| Error::MissingContainer(theme.container_class.clone()))?;

    // Raw HTML that closes the container pushes the remaining content outside it
    let dropped = container.next_siblings().count();
    if dropped > 0 {
        tracing::warn!(
            nodes = dropped,
            "Content after the container element is not part of the rendered tree"
        );
    }

    let mut styler = Styler {
        sheet: &stylesheet,
        stripe_positions: Vec::new(),
        styled: 0,
    };
    let root = styler.detach(container);
    tracing::trace!(styled = styler.styled, "Applied style rules");
    Ok(root)
}

struct CompiledRule<'t> {
    selectors: Vec<Selector>,
    declarations: &'t str,
}

/// A theme with its selectors parsed.
struct Stylesheet<'t> {
    container: Selector,
    rules: Vec<CompiledRule<'t>>,
    stripe_table: Selector,
    stripe_row: Selector,
    stripe: &'t str,
}

impl<'t> Stylesheet<'t> {
    fn compile(theme: &'t Theme) -> Result<Self> {
        let rules = theme
            .rules
            .iter()
            .map(|rule| -> Result<CompiledRule<'t>> {
                Ok(CompiledRule {
                    selectors: rule
                        .selectors
                        .iter()
                        .map(String::as_str)
                        .map(parse_selector)
                        .collect::<Result<_>>()?,
                    declarations: &rule.declarations,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(rules = rules.len(), "Compiled theme");

        Ok(Self {
            container: parse_selector(&format!("div.{}", theme.container_class))?,
            rules,
            stripe_table: parse_selector(&theme.stripe.table)?,
            stripe_row: parse_selector(&theme.stripe.row)?,
            stripe: &theme.stripe.declarations,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector.trim()).map_err(|e| Error::invalid_selector(selector, e))
}

/// Copies the parsed tree into [`Element`]s, appending matched declarations on the way.
struct Styler<'a, 't> {
    sheet: &'a Stylesheet<'t>,
    // One row counter per striped table currently open
    stripe_positions: Vec<usize>,
    styled: usize,
}

impl Styler<'_, '_> {
    fn detach(&mut self, source: ElementRef<'_>) -> Element {
        let value = source.value();
        let attrs = value
            .attrs()
            .map(|(key, val)| (key.to_string(), val.to_string()))
            .collect();
        let mut element = Element::new(value.name()).with_attrs(attrs);

        let before = element.style().len();
        for rule in &self.sheet.rules {
            for selector in &rule.selectors {
                if selector.matches(&source) {
                    element.append_style(rule.declarations);
                }
            }
        }

        if self.sheet.stripe_row.matches(&source) {
            if let Some(position) = self.stripe_positions.last_mut() {
                if *position % 2 == 0 {
                    element.append_style(self.sheet.stripe);
                }
                *position += 1;
            }
        }
        if element.style().len() != before {
            self.styled += 1;
        }

        let striped_table = self.sheet.stripe_table.matches(&source);
        if striped_table {
            self.stripe_positions.push(0);
        }

        for child in source.children() {
            match child.value() {
                HtmlNode::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        element.push(Node::Element(self.detach(child)));
                    }
                }
                HtmlNode::Text(text) => element.push(Node::Text(String::from(&**text))),
                HtmlNode::Comment(comment) => {
                    element.push(Node::Comment(String::from(&**comment)))
                }
                _ => {}
            }
        }

        if striped_table {
            self.stripe_positions.pop();
        }
        element
    }
}
