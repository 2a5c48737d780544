//! Regex rules used by the built-in sub-lexers
//!
//! A [`PatternRule`] classifies one token on a single line. A
//! [`MultilineRule`] opens a construct that may run past the end of the
//! line; the open construct is remembered in [`LineState`].

use std::ops::Range;

use regex::Regex;

use super::tokens::TokenType;

/// First non-empty match of `re` at or after `from`
///
/// Matching runs on the whole line so `^` and `\b` see the text before `from`.
fn non_empty_match(re: &Regex, text: &str, from: usize) -> Option<Range<usize>> {
    if from >= text.len() {
        return None;
    }
    re.find_at(text, from)
        .map(|m| m.range())
        .filter(|range| !range.is_empty())
}

/// Single-line rule; higher priority wins when several match at one position
#[derive(Debug)]
pub struct PatternRule {
    pub name: String,
    pub pattern: Regex,
    pub token_type: TokenType,
    pub priority: i32,
}

impl PatternRule {
    /// Compile a rule, None if the pattern is invalid
    pub fn new(name: &str, pattern: &str, token_type: TokenType, priority: i32) -> Option<Self> {
        let pattern = Regex::new(pattern).ok()?;
        Some(Self {
            name: name.to_string(),
            pattern,
            token_type,
            priority,
        })
    }

    pub fn find_at(&self, text: &str, from: usize) -> Option<Range<usize>> {
        non_empty_match(&self.pattern, text, from)
    }
}

/// Block comment, template literal or any other construct spanning lines
#[derive(Debug)]
pub struct MultilineRule {
    pub name: String,
    /// Opening delimiter
    pub start: Regex,
    /// Closing delimiter
    pub end: Regex,
    pub token_type: TokenType,
    /// Closing delimiters preceded by an odd run of this char don't count
    pub escape_char: Option<char>,
    /// Id stored in [`LineState`] while the construct is open, never 0
    pub state_id: u8,
}

impl MultilineRule {
    pub fn new(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token_type: TokenType,
        state_id: u8,
    ) -> Option<Self> {
        Some(Self {
            name: name.to_string(),
            start: Regex::new(start_pattern).ok()?,
            end: Regex::new(end_pattern).ok()?,
            token_type,
            escape_char: None,
            state_id,
        })
    }

    /// Same as [`MultilineRule::new`] with an escapable closing delimiter
    pub fn with_escape(
        name: &str,
        start_pattern: &str,
        end_pattern: &str,
        token_type: TokenType,
        state_id: u8,
        escape_char: char,
    ) -> Option<Self> {
        Self::new(name, start_pattern, end_pattern, token_type, state_id).map(|rule| Self {
            escape_char: Some(escape_char),
            ..rule
        })
    }

    /// Where the opening delimiter is, at or after `from`
    pub fn find_start(&self, text: &str, from: usize) -> Option<Range<usize>> {
        non_empty_match(&self.start, text, from)
    }

    /// Byte offset just past the closing delimiter, None if it is not on this line
    pub fn find_end(&self, text: &str, from: usize) -> Option<usize> {
        let mut search = from;
        while let Some(found) = non_empty_match(&self.end, text, search) {
            if !self.is_escaped(&text[from..found.start]) {
                return Some(found.end);
            }
            search = found.end;
        }
        None
    }

    fn is_escaped(&self, before: &str) -> bool {
        match self.escape_char {
            Some(escape) => before.chars().rev().take_while(|&c| c == escape).count() % 2 == 1,
            None => false,
        }
    }
}

/// Lexer state carried from one line to the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// Id of the open multiline construct, 0 when none is open
    pub multiline_id: u8,
}

impl LineState {
    pub fn inside(state_id: u8) -> Self {
        Self { multiline_id: state_id }
    }

    pub fn is_inside_multiline(&self) -> bool {
        self.multiline_id != 0
    }

    pub fn is_normal(&self) -> bool {
        !self.is_inside_multiline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> MultilineRule {
        MultilineRule::with_escape("template", "`", "`", TokenType::String, 2, '\\').unwrap()
    }

    #[test]
    fn test_pattern_finds_from_offset() {
        let rule = PatternRule::new("unit", r"\d+px", TokenType::Number, 60).unwrap();
        assert_eq!(rule.find_at("margin: 4px 12px", 0), Some(8..11));
        assert_eq!(rule.find_at("margin: 4px 12px", 11), Some(12..16));
        assert_eq!(rule.find_at("margin: 4px", 11), None);
    }

    #[test]
    fn test_pattern_sees_text_before_offset() {
        let rule = PatternRule::new("word", r"\bcolor\b", TokenType::Property, 50).unwrap();
        assert_eq!(rule.find_at("bgcolor", 2), None);
        assert_eq!(rule.find_at("a color", 1), Some(2..7));
    }

    #[test]
    fn test_empty_matches_ignored() {
        let rule = PatternRule::new("maybe", r"x*", TokenType::Atom, 10).unwrap();
        assert_eq!(rule.find_at("abc", 0), None);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternRule::new("bad", r"(", TokenType::Atom, 10).is_none());
        assert!(MultilineRule::new("bad", r"<!--", r"[", TokenType::Comment, 1).is_none());
    }

    #[test]
    fn test_html_comment_bounds() {
        let rule = MultilineRule::new("comment", "<!--", "-->", TokenType::Comment, 1).unwrap();
        assert_eq!(rule.find_start("a <!-- b --> c", 0), Some(2..6));
        assert_eq!(rule.find_end("a <!-- b --> c", 6), Some(12));
        assert_eq!(rule.find_end("<!-- open", 4), None);
    }

    #[test]
    fn test_escaped_closing_delimiter() {
        let rule = template();
        assert_eq!(rule.find_end("${x}`;", 0), Some(5));
        assert_eq!(rule.find_end(r"a\`b`", 0), Some(5));
        assert_eq!(rule.find_end(r"a\\`b", 0), Some(4));
        assert_eq!(rule.find_end(r"a\`", 0), None);
    }

    #[test]
    fn test_line_state() {
        assert!(LineState::default().is_normal());
        assert!(LineState::inside(2).is_inside_multiline());
        assert!(!LineState::inside(2).is_normal());
    }
}
