//! CSS language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenType;

/// Create CSS language definition
pub fn css_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("CSS");

    // Multiline rules
    // Block comments
    if let Some(rule) = MultilineRule::new("block_comment", r"/\*", r"\*/", TokenType::Comment, 1) {
        lang.add_multiline(rule);
    }

    // Single-line patterns

    // Strings
    if let Some(rule) = PatternRule::new("string", r#""(?:[^"\\]|\\.)*"?"#, TokenType::String, 95) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("string_single", r"'(?:[^'\\]|\\.)*'?", TokenType::String, 95) {
        lang.add_pattern(rule);
    }

    // At-rules and !important
    if let Some(rule) = PatternRule::new("at_rule", r"@[A-Za-z-]+", TokenType::Keyword, 90) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("important", r"!\s*important\b", TokenType::Keyword, 90) {
        lang.add_pattern(rule);
    }

    // Hex colours (before id selectors)
    if let Some(rule) = PatternRule::new("hex_color", r"#[0-9a-fA-F]{3,8}\b", TokenType::Atom, 85) {
        lang.add_pattern(rule);
    }

    // Selectors
    if let Some(rule) = PatternRule::new("id_selector", r"#[A-Za-z_-][\w-]*", TokenType::Builtin, 80) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("class_selector", r"\.[A-Za-z_-][\w-]*", TokenType::Qualifier, 80) {
        lang.add_pattern(rule);
    }

    // Property names, including custom properties
    if let Some(rule) = PatternRule::new("property", r"-{0,2}[A-Za-z][\w-]*\s*:(?:\s|$)", TokenType::Property, 75) {
        lang.add_pattern(rule);
    }

    // Pseudo classes and elements
    if let Some(rule) = PatternRule::new("pseudo", r"::?[A-Za-z-]+", TokenType::Qualifier, 70) {
        lang.add_pattern(rule);
    }

    // Global keyword values
    if let Some(rule) = PatternRule::new("global_value", r"\b(?:inherit|initial|unset|revert|auto|none)\b", TokenType::Atom, 65) {
        lang.add_pattern(rule);
    }

    // Numbers with optional unit
    if let Some(rule) = PatternRule::new("number", r"\b\d+(?:\.\d+)?(?:%|[A-Za-z]+)?", TokenType::Number, 60) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("fraction", r"\B\.\d+(?:%|[A-Za-z]+)?", TokenType::Number, 60) {
        lang.add_pattern(rule);
    }

    // Punctuation
    if let Some(rule) = PatternRule::new("punctuation", r"[{};,()]", TokenType::Punctuation, 40) {
        lang.add_pattern(rule);
    }

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{LineState, Span};

    fn types_of(text: &str) -> Vec<(String, TokenType)> {
        let (spans, _) = css_language().highlight_line(text, LineState::default());
        spans
            .iter()
            .map(|s| (text[s.start..s.end].to_string(), s.token_type))
            .collect()
    }

    #[test]
    fn test_rule_set() {
        let tokens = types_of(".card:hover { color: #fff; }");
        assert_eq!(tokens[0], (".card".to_string(), TokenType::Qualifier));
        assert_eq!(tokens[1], (":hover".to_string(), TokenType::Qualifier));
        assert_eq!(tokens[2], ("{".to_string(), TokenType::Punctuation));
        assert_eq!(tokens[3], ("color: ".to_string(), TokenType::Property));
        assert_eq!(tokens[4], ("#fff".to_string(), TokenType::Atom));
    }

    #[test]
    fn test_numbers_with_units() {
        let tokens = types_of("margin: 2px .5em 10%;");
        let numbers: Vec<_> = tokens
            .iter()
            .filter(|(_, t)| *t == TokenType::Number)
            .map(|(text, _)| text.as_str())
            .collect();
        assert_eq!(numbers, vec!["2px", ".5em", "10%"]);
    }

    #[test]
    fn test_comment_spans_lines() {
        let lang = css_language();
        let (_, state) = lang.highlight_line("a { /* open", LineState::default());
        assert!(state.is_inside_multiline());
        let (spans, state) = lang.highlight_line("close */ }", state);
        assert!(state.is_normal());
        assert_eq!(spans[0], Span::new(0, 8, TokenType::Comment));
    }
}
