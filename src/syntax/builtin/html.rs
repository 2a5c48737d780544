//! HTML language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenType;

/// Create HTML language definition
pub fn html_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("HTML");

    // Multiline rules
    // Comments
    if let Some(rule) = MultilineRule::new("comment", r"<!--", r"-->", TokenType::Comment, 1) {
        lang.add_multiline(rule);
    }

    // Single-line patterns

    // Doctype
    if let Some(rule) = PatternRule::new("doctype", r"(?i)<!doctype[^>]*>", TokenType::Meta, 100) {
        lang.add_pattern(rule);
    }

    // Opening and closing tag names
    if let Some(rule) = PatternRule::new("tag_open", r"</?[A-Za-z][\w:-]*", TokenType::Tag, 90) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("tag_close", r"/?>", TokenType::Tag, 89) {
        lang.add_pattern(rule);
    }

    // Attribute values
    if let Some(rule) = PatternRule::new("string", r#""[^"]*""#, TokenType::String, 85) {
        lang.add_pattern(rule);
    }

    // Attribute names, including the equals sign
    if let Some(rule) = PatternRule::new("attribute", r"[A-Za-z_:@][\w:.-]*\s*=", TokenType::Attribute, 80) {
        lang.add_pattern(rule);
    }

    // Character references
    if let Some(rule) = PatternRule::new("entity", r"&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9a-fA-F]+);", TokenType::Atom, 70) {
        lang.add_pattern(rule);
    }

    lang
}
