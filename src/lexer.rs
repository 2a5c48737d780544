//! Sub-lexer capability
//!
//! Each embedded language is tokenized by a [`SubLexer`]: a zero-state
//! constructor, a single incremental step over a [`LineCursor`], and a
//! non-incremental whole-text classification. The state type is owned by
//! the lexer; callers only store, clone and hand it back.

use tracing::warn;

use crate::cursor::LineCursor;
use crate::syntax::{LanguageDefinition, LineState, TokenType};

/// One classified piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token class, None for plain text and sentinel lines
    pub style: Option<TokenType>,
    /// The consumed text
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(style: Option<TokenType>, text: &'a str) -> Self {
        Self { style, text }
    }

    /// An unstyled token
    pub fn plain(text: &'a str) -> Self {
        Self { style: None, text }
    }
}

/// A per-language tokenizer usable inside a composite block
pub trait SubLexer {
    /// Opaque per-document state, carried across lines
    type State: Clone;

    /// Fresh state for the start of a segment
    fn start_state(&self) -> Self::State;

    /// Consume one token from the cursor, updating `state` in place
    ///
    /// Must advance the cursor when it is not at the end of the line.
    fn token(&self, cursor: &mut LineCursor<'_>, state: &mut Self::State) -> Option<TokenType>;

    /// Classify a whole text at once, starting from a fresh state
    ///
    /// Line breaks are emitted as plain tokens, so the token texts always
    /// concatenate back to `text`.
    fn classify_whole<'t>(&self, text: &'t str) -> Vec<Token<'t>> {
        let mut state = self.start_state();
        let mut tokens = Vec::new();

        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                tokens.push(Token::plain("\n"));
            }
            let mut cursor = LineCursor::new(line);
            while !cursor.eol() {
                cursor.begin_token();
                let style = self.token(&mut cursor, &mut state);
                if cursor.bump_if_stalled() {
                    warn!(pos = cursor.start(), "sub-lexer did not advance");
                }
                tokens.push(Token::new(style, cursor.current()));
            }
        }

        tokens
    }
}

impl SubLexer for LanguageDefinition {
    type State = LineState;

    fn start_state(&self) -> LineState {
        LineState::default()
    }

    fn token(&self, cursor: &mut LineCursor<'_>, state: &mut LineState) -> Option<TokenType> {
        let scan = self.next_token(cursor.line(), cursor.pos(), *state);
        cursor.advance_to(scan.end);
        *state = scan.state;
        scan.token_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builtin::{css_language, html_language};

    /// A lexer that never advances, to exercise the stall guard
    struct Stuck;

    impl SubLexer for Stuck {
        type State = ();

        fn start_state(&self) -> Self::State {}

        fn token(&self, _cursor: &mut LineCursor<'_>, _state: &mut ()) -> Option<TokenType> {
            Some(TokenType::Meta)
        }
    }

    #[test]
    fn test_language_step_updates_state() {
        let lang = css_language();
        let mut state = lang.start_state();
        let mut cursor = LineCursor::new("/* open");

        cursor.begin_token();
        let style = lang.token(&mut cursor, &mut state);

        assert_eq!(style, Some(TokenType::Comment));
        assert_eq!(cursor.current(), "/* open");
        assert!(state.is_inside_multiline());
    }

    #[test]
    fn test_classify_whole_concatenates() {
        let text = "<ul>\n  <li class=\"a\">one</li>\n\n</ul>";
        let tokens = html_language().classify_whole(text);
        let joined: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(joined, text);
        assert_eq!(tokens[0], Token::new(Some(TokenType::Tag), "<ul"));
    }

    #[test]
    fn test_classify_whole_carries_state() {
        let tokens = html_language().classify_whole("<!-- a\nb -->");
        let comments: Vec<_> = tokens
            .iter()
            .filter(|t| t.style == Some(TokenType::Comment))
            .map(|t| t.text)
            .collect();
        assert_eq!(comments, vec!["<!-- a", "b -->"]);
    }

    #[test]
    fn test_stall_guard() {
        let tokens = Stuck.classify_whole("ab");
        assert_eq!(
            tokens,
            vec![
                Token::new(Some(TokenType::Meta), "a"),
                Token::new(Some(TokenType::Meta), "b"),
            ]
        );
    }
}
