//! Per-document editing session
//!
//! A session owns the incremental highlighting state of one document: the
//! composite state at the start of every line seen so far (checkpoints) and
//! the spans already computed for each line. After an edit the host calls
//! [`DocumentSession::invalidate_from`]; the next request re-drives the
//! tokenizer from the nearest valid checkpoint instead of the top.

use tracing::debug;

use crate::composite::{CompositeTokenizer, StateOf};
use crate::lexer::SubLexer;
use crate::segment::SegmentKind;
use crate::syntax::Span;

/// Incremental highlighting state for one document
///
/// Invariant: `line_spans.len() == invalid_from` and
/// `checkpoints.len() == invalid_from + 1`.
pub struct DocumentSession<'t, M: SubLexer, S: SubLexer, J: SubLexer> {
    tokenizer: &'t CompositeTokenizer<M, S, J>,
    /// State at the start of each line; index 0 is the fresh state
    checkpoints: Vec<StateOf<M, S, J>>,
    /// Styled spans per line
    line_spans: Vec<Vec<Span>>,
    /// First line that needs recomputation
    invalid_from: usize,
}

impl<'t, M, S, J> DocumentSession<'t, M, S, J>
where
    M: SubLexer,
    S: SubLexer,
    J: SubLexer,
{
    /// Start a session for a freshly loaded document
    pub fn new(tokenizer: &'t CompositeTokenizer<M, S, J>) -> Self {
        Self {
            tokenizer,
            checkpoints: vec![tokenizer.start_state()],
            line_spans: Vec::new(),
            invalid_from: 0,
        }
    }

    /// First line whose highlighting is not cached
    pub fn invalid_from(&self) -> usize {
        self.invalid_from
    }

    /// Invalidate cache from a specific line onwards
    pub fn invalidate_from(&mut self, line: usize) {
        if line >= self.invalid_from {
            return;
        }
        self.invalid_from = line;
        self.line_spans.truncate(line);
        self.checkpoints.truncate(line + 1);
    }

    /// Discard everything and begin again from a fresh state
    pub fn restart(&mut self) {
        self.invalid_from = 0;
        self.line_spans.clear();
        self.checkpoints.clear();
        self.checkpoints.push(self.tokenizer.start_state());
    }

    /// Highlight a single line, computing earlier lines as needed
    ///
    /// Returns the styled spans of `lines[line_idx]`, or an empty vec when
    /// the index is past the end of the document.
    pub fn highlight_line(&mut self, lines: &[&str], line_idx: usize) -> Vec<Span> {
        if line_idx >= lines.len() {
            return Vec::new();
        }

        if line_idx >= self.invalid_from {
            self.compute_through(lines, line_idx);
        }

        self.line_spans[line_idx].clone()
    }

    /// Segment a line belongs to, if it has been computed
    ///
    /// A sentinel line reports the segment it opens.
    pub fn segment_at(&self, line_idx: usize) -> Option<SegmentKind> {
        if line_idx >= self.invalid_from {
            return None;
        }
        self.checkpoints
            .get(line_idx + 1)
            .map(|state| state.current_segment())
    }

    /// End the session, releasing its states
    pub fn dispose(self) {
        debug!(lines = self.invalid_from, "session disposed");
    }

    fn compute_through(&mut self, lines: &[&str], last: usize) {
        debug!(from = self.invalid_from, to = last, "re-tokenizing lines");

        for (idx, text) in lines.iter().enumerate().take(last + 1).skip(self.invalid_from) {
            let mut state = self.checkpoints[idx].clone();
            let tokens = self.tokenizer.tokenize_line(text, &mut state);

            let mut spans = Vec::new();
            let mut offset = 0;
            for token in tokens {
                let end = offset + token.text.len();
                if let Some(token_type) = token.style {
                    spans.push(Span::new(offset, end, token_type));
                }
                offset = end;
            }

            self.line_spans.push(spans);
            self.checkpoints.push(state);
        }

        self.invalid_from = last + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::SwarnamTokenizer;
    use crate::syntax::TokenType;

    const DOC: [&str; 6] = [
        "<b>hi</b>",
        "---*---",
        "b { color: red; }",
        "---*---",
        "let x = 1;",
        "/* open",
    ];

    #[test]
    fn test_highlight_computes_earlier_lines() {
        let tokenizer = SwarnamTokenizer::builtin();
        let mut session = DocumentSession::new(&tokenizer);

        let spans = session.highlight_line(&DOC, 4);

        assert_eq!(spans[0], Span::new(0, 3, TokenType::Keyword));
        assert_eq!(session.invalid_from(), 5);
        assert_eq!(session.segment_at(0), Some(SegmentKind::Markup));
        assert_eq!(session.segment_at(1), Some(SegmentKind::Style));
        assert_eq!(session.segment_at(4), Some(SegmentKind::Script));
        assert_eq!(session.segment_at(5), None);
    }

    #[test]
    fn test_sentinel_line_has_no_spans() {
        let tokenizer = SwarnamTokenizer::builtin();
        let mut session = DocumentSession::new(&tokenizer);
        assert!(session.highlight_line(&DOC, 1).is_empty());
    }

    #[test]
    fn test_out_of_range() {
        let tokenizer = SwarnamTokenizer::builtin();
        let mut session = DocumentSession::new(&tokenizer);
        assert!(session.highlight_line(&DOC, 10).is_empty());
        assert_eq!(session.invalid_from(), 0);
    }

    #[test]
    fn test_invalidate_redrives_from_checkpoint() {
        let tokenizer = SwarnamTokenizer::builtin();
        let mut session = DocumentSession::new(&tokenizer);
        session.highlight_line(&DOC, 5);

        // Remove the second sentinel: line 4 now belongs to the style segment
        let edited = ["<b>hi</b>", "---*---", "b { color: red; }", "x", "let x = 1;", "/* open"];
        session.invalidate_from(3);
        assert_eq!(session.invalid_from(), 3);

        let spans = session.highlight_line(&edited, 4);
        assert_eq!(session.segment_at(4), Some(SegmentKind::Style));

        let mut fresh = DocumentSession::new(&tokenizer);
        assert_eq!(fresh.highlight_line(&edited, 4), spans);
    }

    #[test]
    fn test_invalidate_later_line_keeps_cache() {
        let tokenizer = SwarnamTokenizer::builtin();
        let mut session = DocumentSession::new(&tokenizer);
        session.highlight_line(&DOC, 2);
        session.invalidate_from(4);
        assert_eq!(session.invalid_from(), 3);
    }

    #[test]
    fn test_restart() {
        let tokenizer = SwarnamTokenizer::builtin();
        let mut session = DocumentSession::new(&tokenizer);
        session.highlight_line(&DOC, 3);
        session.restart();
        assert_eq!(session.invalid_from(), 0);
        assert_eq!(session.segment_at(0), None);
        session.dispose();
    }
}
