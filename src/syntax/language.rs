//! Language definitions for syntax highlighting
//!
//! This module provides the LanguageDefinition struct that combines
//! pattern rules and multiline rules for one embedded language, and
//! scans a line one token at a time.

use tracing::trace;

use super::rules::{LineState, MultilineRule, PatternRule};
#[cfg(test)]
use super::style::Span;
use super::tokens::TokenType;

/// Result of scanning one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    /// Byte offset just past the token
    pub end: usize,
    /// Class of the token, None for plain text
    pub token_type: Option<TokenType>,
    /// State after the token
    pub state: LineState,
}

/// A complete language definition for syntax highlighting
#[derive(Debug)]
pub struct LanguageDefinition {
    /// Language name (e.g., "HTML", "CSS")
    pub name: String,
    /// Single-line pattern rules, sorted by priority (highest first)
    pub patterns: Vec<PatternRule>,
    /// Multi-line rules for comments, strings, etc.
    pub multiline_rules: Vec<MultilineRule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            patterns: Vec::new(),
            multiline_rules: Vec::new(),
        }
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Keep sorted by priority (highest first)
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Add a multiline rule
    pub fn add_multiline(&mut self, rule: MultilineRule) {
        self.multiline_rules.push(rule);
    }

    /// Get multiline rule by state ID
    fn get_multiline_rule(&self, state_id: u8) -> Option<&MultilineRule> {
        self.multiline_rules.iter().find(|r| r.state_id == state_id)
    }

    /// Scan the token starting at `pos`
    ///
    /// Always consumes at least one character when `pos` is inside the line.
    pub fn next_token(&self, text: &str, pos: usize, state: LineState) -> Scan {
        let mut state = state;

        // Inside a multiline construct: look for its end
        if state.is_inside_multiline() {
            match self.get_multiline_rule(state.multiline_id) {
                Some(rule) => {
                    let token_type = Some(rule.token_type);
                    return match rule.find_end(text, pos) {
                        Some(end) => Scan { end, token_type, state: LineState::default() },
                        None => Scan { end: text.len(), token_type, state },
                    };
                }
                // Unknown state id: reset
                None => state = LineState::default(),
            }
        }

        // Earliest position where some rule could start a token
        let mut next_start = text.len();

        for rule in &self.multiline_rules {
            match rule.find_start(text, pos) {
                Some(open) if open.start == pos => {
                    let token_type = Some(rule.token_type);
                    return match rule.find_end(text, open.end) {
                        Some(end) => Scan { end, token_type, state },
                        None => {
                            trace!(language = %self.name, rule = %rule.name, pos, "construct left open");
                            Scan {
                                end: text.len(),
                                token_type,
                                state: LineState::inside(rule.state_id),
                            }
                        }
                    };
                }
                Some(open) => next_start = next_start.min(open.start),
                None => {}
            }
        }

        // First match at position (highest priority) wins
        for rule in &self.patterns {
            match rule.find_at(text, pos) {
                Some(found) if found.start == pos => {
                    trace!(language = %self.name, rule = %rule.name, pos, end = found.end, "pattern matched");
                    return Scan { end: found.end, token_type: Some(rule.token_type), state };
                }
                Some(found) => next_start = next_start.min(found.start),
                None => {}
            }
        }

        // Plain text up to the next candidate, at least one character
        let mut end = next_start.max(pos + 1).min(text.len());
        while end < text.len() && !text.is_char_boundary(end) {
            end += 1;
        }
        Scan { end, token_type: None, state }
    }

    /// Highlight a single line of text
    ///
    /// Takes the line text and the state from the previous line.
    /// Returns styled spans and the state for the next line.
    #[cfg(test)]
    pub(crate) fn highlight_line(&self, text: &str, prev_state: LineState) -> (Vec<Span>, LineState) {
        let mut spans = Vec::new();
        let mut pos = 0;
        let mut state = prev_state;

        while pos < text.len() {
            let scan = self.next_token(text, pos, state);
            if let Some(token_type) = scan.token_type {
                spans.push(Span::new(pos, scan.end, token_type));
            }
            pos = scan.end;
            state = scan.state;
        }

        (spans, state)
    }
}
