//! Composite segmented tokenizer
//!
//! Drives three sub-lexers over one block, one step at a time. The
//! tokenizer holds which segment is active and one opaque state per
//! segment; a sentinel line moves it forward to the next segment, anything
//! else is handed to the active segment's lexer.
//!
//! Transitions only go forward (markup, style, script). Script is terminal:
//! further sentinel lines are consumed unstyled and change nothing. Whole
//! document validation (too many segments) lives in the splitter.

use tracing::{debug, trace, warn};

use crate::cursor::LineCursor;
use crate::lexer::{SubLexer, Token};
use crate::segment::{is_sentinel, SegmentKind};
use crate::syntax::builtin;
use crate::syntax::{LanguageDefinition, LineState};

/// Complete incremental state for one document
///
/// Created by [`CompositeTokenizer::start_state`] and mutated only by
/// [`CompositeTokenizer::step`]. Cloning it gives a checkpoint a host can
/// resume from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeState<M, S, J> {
    current: SegmentKind,
    markup: M,
    style: S,
    script: J,
}

impl<M, S, J> CompositeState<M, S, J> {
    /// The segment subsequent steps delegate to
    pub fn current_segment(&self) -> SegmentKind {
        self.current
    }

    fn advance(&mut self) {
        if let Some(next) = self.current.next() {
            debug!(from = ?self.current, to = ?next, "segment transition");
            self.current = next;
        } else {
            trace!("sentinel in terminal segment ignored");
        }
    }
}

/// State type of a tokenizer built from three sub-lexers
pub type StateOf<M, S, J> =
    CompositeState<<M as SubLexer>::State, <S as SubLexer>::State, <J as SubLexer>::State>;

/// Tokenizer over markup, style and script segments
#[derive(Debug)]
pub struct CompositeTokenizer<M, S, J> {
    markup: M,
    style: S,
    script: J,
}

/// The tokenizer built from the built-in HTML, CSS and JavaScript lexers
pub type SwarnamTokenizer = CompositeTokenizer<LanguageDefinition, LanguageDefinition, LanguageDefinition>;

/// Incremental state of a [`SwarnamTokenizer`]
pub type SwarnamState = CompositeState<LineState, LineState, LineState>;

impl SwarnamTokenizer {
    /// Create a tokenizer with the built-in language definitions
    pub fn builtin() -> Self {
        Self::new(
            builtin::for_segment(SegmentKind::Markup),
            builtin::for_segment(SegmentKind::Style),
            builtin::for_segment(SegmentKind::Script),
        )
    }
}

impl<M, S, J> CompositeTokenizer<M, S, J>
where
    M: SubLexer,
    S: SubLexer,
    J: SubLexer,
{
    /// Create a tokenizer from one lexer per segment kind
    pub fn new(markup: M, style: S, script: J) -> Self {
        Self { markup, style, script }
    }

    /// Fresh state: markup segment, every sub-state at its zero value
    ///
    /// Calling this again is the only way to rewind.
    pub fn start_state(&self) -> StateOf<M, S, J> {
        CompositeState {
            current: SegmentKind::Markup,
            markup: self.markup.start_state(),
            style: self.style.start_state(),
            script: self.script.start_state(),
        }
    }

    /// Consume one token from the cursor
    ///
    /// A sentinel line is consumed whole, unstyled, and advances the
    /// segment. Only the whole line counts, the same test the splitter
    /// applies, so marker text after other tokens stays with the lexer.
    /// Otherwise the active segment's lexer consumes the token with its own
    /// stored state.
    pub fn step<'a>(&self, cursor: &mut LineCursor<'a>, state: &mut StateOf<M, S, J>) -> Token<'a> {
        cursor.begin_token();

        if is_sentinel(cursor.line()) {
            cursor.skip_to_end();
            state.advance();
            return Token::plain(cursor.current());
        }

        let style = match state.current {
            SegmentKind::Markup => self.markup.token(cursor, &mut state.markup),
            SegmentKind::Style => self.style.token(cursor, &mut state.style),
            SegmentKind::Script => self.script.token(cursor, &mut state.script),
        };

        Token::new(style, cursor.current())
    }

    /// Tokenize one whole line, stepping until the end of the line
    ///
    /// A lexer that fails to advance is moved forward one character so the
    /// host's highlighting loop always terminates.
    pub fn tokenize_line<'a>(&self, line: &'a str, state: &mut StateOf<M, S, J>) -> Vec<Token<'a>> {
        let mut cursor = LineCursor::new(line);
        let mut tokens = Vec::new();

        while !cursor.eol() {
            let mut token = self.step(&mut cursor, state);
            if cursor.bump_if_stalled() {
                warn!(segment = ?state.current, pos = cursor.start(), "sub-lexer did not advance");
                token.text = cursor.current();
            }
            tokens.push(token);
        }

        tokens
    }

    /// Classify a whole segment text with the lexer for `kind`
    pub fn classify<'t>(&self, kind: SegmentKind, text: &'t str) -> Vec<Token<'t>> {
        match kind {
            SegmentKind::Markup => self.markup.classify_whole(text),
            SegmentKind::Style => self.style.classify_whole(text),
            SegmentKind::Script => self.script.classify_whole(text),
        }
    }
}
