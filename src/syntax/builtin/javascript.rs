//! JavaScript language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{MultilineRule, PatternRule};
use crate::syntax::tokens::TokenType;

/// Create JavaScript language definition
pub fn javascript_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("JavaScript");

    // Multiline rules
    // Block comments
    if let Some(rule) = MultilineRule::new("block_comment", r"/\*", r"\*/", TokenType::Comment, 1) {
        lang.add_multiline(rule);
    }

    // Template literals (with escape support)
    if let Some(rule) = MultilineRule::with_escape("template", r"`", r"`", TokenType::String, 2, '\\') {
        lang.add_multiline(rule);
    }

    // Single-line patterns

    // Line comments
    if let Some(rule) = PatternRule::new("line_comment", r"//.*$", TokenType::Comment, 100) {
        lang.add_pattern(rule);
    }

    // Strings, closing quote optional so unterminated strings still colour
    if let Some(rule) = PatternRule::new("string", r#""(?:[^"\\]|\\.)*"?"#, TokenType::String, 95) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("string_single", r"'(?:[^'\\]|\\.)*'?", TokenType::String, 95) {
        lang.add_pattern(rule);
    }

    // Keywords
    let keywords = r"\b(?:async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|function|if|import|in|instanceof|let|new|of|return|static|super|switch|this|throw|try|typeof|var|void|while|with|yield)\b";
    if let Some(rule) = PatternRule::new("keyword", keywords, TokenType::Keyword, 80) {
        lang.add_pattern(rule);
    }

    // Literal constants
    if let Some(rule) = PatternRule::new("atom", r"\b(?:true|false|null|undefined|NaN|Infinity)\b", TokenType::Atom, 78) {
        lang.add_pattern(rule);
    }

    // Well-known globals
    let builtins = r"\b(?:console|window|document|globalThis|Math|JSON|Object|Array|String|Number|Boolean|Promise|Map|Set|Date|RegExp|Error)\b";
    if let Some(rule) = PatternRule::new("builtin", builtins, TokenType::Builtin, 75) {
        lang.add_pattern(rule);
    }

    // Numbers
    if let Some(rule) = PatternRule::new("hex", r"\b0[xX][0-9a-fA-F_]+n?\b", TokenType::Number, 66) {
        lang.add_pattern(rule);
    }
    if let Some(rule) = PatternRule::new("number", r"\b\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?n?\b", TokenType::Number, 65) {
        lang.add_pattern(rule);
    }

    // Operators; a lone slash so comment openers are never swallowed
    if let Some(rule) = PatternRule::new("operator", r"[+\-*%&|^!<>=~?:]+|/", TokenType::Operator, 40) {
        lang.add_pattern(rule);
    }

    // Punctuation
    if let Some(rule) = PatternRule::new("punctuation", r"[{}()\[\];,.]", TokenType::Punctuation, 30) {
        lang.add_pattern(rule);
    }

    lang
}
