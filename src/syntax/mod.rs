//! Syntax and styling module
//!
//! This module provides the rule-based lexers used for each embedded
//! language:
//! - Token classes and their terminal styles
//! - Regex pattern and multi-line rules
//! - Per-token line scanning with carried line state
//! - Built-in HTML, CSS and JavaScript definitions

mod style;
mod tokens;
mod rules;
mod language;
pub mod builtin;

pub use style::{Color, Span, Style};
pub use tokens::TokenType;
pub use rules::{LineState, MultilineRule, PatternRule};
pub use language::{LanguageDefinition, Scan};
