//! Render pipeline
//!
//! Turns a raw block into source panes and a preview. The block is split
//! and validated first; an invalid block produces exactly one diagnostic
//! and nothing else.

use tracing::warn;

use crate::composite::CompositeTokenizer;
use crate::lexer::{SubLexer, Token};
use crate::segment::SegmentKind;
use crate::splitter::{split, SegmentSet};

/// Builds a displayable preview from the three segment texts
pub trait Preview {
    type Document;

    fn render(&mut self, markup: &str, style: &str, script: &str) -> Self::Document;
}

/// Receives user-facing messages when a block cannot be rendered
pub trait Diagnostics {
    fn report_error(&mut self, message: &str);
}

/// Diagnostics sink that keeps every message
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagnosticLog {
    pub messages: Vec<String>,
}

impl Diagnostics for DiagnosticLog {
    fn report_error(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// A highlighted source pane for one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePane<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
    pub tokens: Vec<Token<'a>>,
}

/// Output of a successful render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<'a, D> {
    /// One pane per non-empty segment, markup first
    pub panes: Vec<SourcePane<'a>>,
    pub preview: D,
}

/// Split, validate and render a raw block
///
/// Returns None after reporting a diagnostic if the block is invalid.
pub fn render<'a, M, S, J, P, D>(
    raw: &'a str,
    tokenizer: &CompositeTokenizer<M, S, J>,
    preview: &mut P,
    diagnostics: &mut D,
) -> Option<Rendered<'a, P::Document>>
where
    M: SubLexer,
    S: SubLexer,
    J: SubLexer,
    P: Preview,
    D: Diagnostics,
{
    match split(raw) {
        Ok(segments) => Some(render_segments(&segments, tokenizer, preview)),
        Err(err) => {
            warn!(error = %err, "block not rendered");
            diagnostics.report_error(&err.to_string());
            None
        }
    }
}

/// Render an already validated segment set
pub fn render_segments<'a, M, S, J, P>(
    segments: &SegmentSet<'a>,
    tokenizer: &CompositeTokenizer<M, S, J>,
    preview: &mut P,
) -> Rendered<'a, P::Document>
where
    M: SubLexer,
    S: SubLexer,
    J: SubLexer,
    P: Preview,
{
    let panes = segments
        .non_empty()
        .map(|(kind, text)| SourcePane {
            kind,
            text,
            tokens: tokenizer.classify(kind, text),
        })
        .collect();

    let preview = preview.render(segments.markup, segments.style, segments.script);

    Rendered { panes, preview }
}
