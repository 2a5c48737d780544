//! Token types for syntax highlighting
//!
//! This module defines the semantic token classes the built-in HTML, CSS
//! and JavaScript lexers assign, and their default visual styles.

use super::style::{Color, Style};

/// Semantic token classes for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Comments (<!-- -->, /* */, //)
    Comment,
    /// String literals and attribute values
    String,
    /// Numeric literals, with or without CSS units
    Number,
    /// Language keywords, CSS at-rules and !important
    Keyword,
    /// HTML tag names and brackets
    Tag,
    /// HTML attribute names
    Attribute,
    /// CSS property names
    Property,
    /// CSS class selectors
    Qualifier,
    /// Constants (true, null, colours, entities)
    Atom,
    /// CSS id selectors and well-known globals
    Builtin,
    /// Operators (+, -, =>, etc.)
    Operator,
    /// Punctuation ({ } ; , etc.)
    Punctuation,
    /// Doctype and other document metadata
    Meta,
}

impl TokenType {
    /// All token types
    pub const ALL: [TokenType; 13] = [
        TokenType::Comment,
        TokenType::String,
        TokenType::Number,
        TokenType::Keyword,
        TokenType::Tag,
        TokenType::Attribute,
        TokenType::Property,
        TokenType::Qualifier,
        TokenType::Atom,
        TokenType::Builtin,
        TokenType::Operator,
        TokenType::Punctuation,
        TokenType::Meta,
    ];

    /// Get the default style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenType::String => Style::fg(Color::Green),
            TokenType::Number => Style::fg(Color::Cyan),
            TokenType::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenType::Tag => Style::fg(Color::Red),
            TokenType::Attribute => Style::fg(Color::Yellow),
            TokenType::Property => Style::fg(Color::Blue),
            TokenType::Qualifier => Style::fg(Color::BrightYellow),
            TokenType::Atom => Style::fg(Color::BrightRed),
            TokenType::Builtin => Style::fg(Color::BrightBlue),
            TokenType::Operator => Style::fg(Color::BrightWhite),
            TokenType::Punctuation => Style::default(),
            TokenType::Meta => Style::fg(Color::BrightMagenta).with_underline(),
        }
    }

    /// Get the class name for this token type (as used in style sheets)
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Keyword => "keyword",
            TokenType::Tag => "tag",
            TokenType::Attribute => "attribute",
            TokenType::Property => "property",
            TokenType::Qualifier => "qualifier",
            TokenType::Atom => "atom",
            TokenType::Builtin => "builtin",
            TokenType::Operator => "operator",
            TokenType::Punctuation => "punctuation",
            TokenType::Meta => "meta",
        }
    }

    /// Prefixed CSS class for rendered output, e.g. `cm-tag`
    pub fn css_class(&self) -> String {
        format!("cm-{}", self.name())
    }

    /// Parse a token type from its class name (for configuration)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_not_empty() {
        assert!(!TokenType::Comment.default_style().is_default());
        assert!(!TokenType::String.default_style().is_default());
        assert!(!TokenType::Tag.default_style().is_default());
        assert!(TokenType::Punctuation.default_style().is_default());
    }

    #[test]
    fn test_from_name_roundtrip() {
        for token_type in TokenType::ALL {
            assert_eq!(TokenType::from_name(token_type.name()), Some(token_type));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("Tag"), None);
        assert_eq!(TokenType::from_name(""), None);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(TokenType::Property.css_class(), "cm-property");
    }
}
