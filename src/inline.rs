//! Inline emphasis helpers for use inside text blocks and table cells.

use std::fmt::Display;

/// Class carried by spans produced with [`wrap_red_text`].
pub const RED_CLASS: &str = "red";

/// `*value*`
pub fn wrap_italic(value: impl Display) -> String {
    format!("*{value}*")
}

/// `**value**`
pub fn wrap_bold(value: impl Display) -> String {
    format!("**{value}**")
}

/// Inline code: `` `value` ``
pub fn wrap_code(value: impl Display) -> String {
    format!("`{value}`")
}

/// Highlighted span styled by the theme's `span.red` rule.
///
/// The value is embedded as-is; Markdown passes the span through as raw HTML.
pub fn wrap_red_text(value: impl Display) -> String {
    format!("<span class=\"{RED_CLASS}\">{value}</span>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis() {
        assert_eq!(wrap_italic(112), "*112*");
        assert_eq!(wrap_bold("x"), "**x**");
        assert_eq!(wrap_code(0.98), "`0.98`");
    }

    #[test]
    fn red_text_keeps_value_unchanged() {
        assert_eq!(wrap_red_text("x"), "<span class=\"red\">x</span>");
        assert_eq!(wrap_red_text("a & b"), "<span class=\"red\">a & b</span>");
    }
}
