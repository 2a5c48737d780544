//! Segment splitter
//!
//! Splits a whole block into its markup, style and script segments. This is
//! the only place where the number of segments is validated; the incremental
//! tokenizer never sees the whole document.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::SplitError;
use crate::segment::{SegmentKind, SEGMENT_COUNT};

/// A whole line holding only the sentinel, with optional surrounding whitespace
static SENTINEL_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*---\*---\s*$").unwrap());

/// The validated, trimmed segments of one block
///
/// Borrows from the raw block text. Missing trailing segments are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSet<'a> {
    pub markup: &'a str,
    pub style: &'a str,
    pub script: &'a str,
}

impl<'a> SegmentSet<'a> {
    /// Get the text for a segment kind
    pub fn get(&self, kind: SegmentKind) -> &'a str {
        match kind {
            SegmentKind::Markup => self.markup,
            SegmentKind::Style => self.style,
            SegmentKind::Script => self.script,
        }
    }

    /// Iterate over all segments in source order, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (SegmentKind, &'a str)> + '_ {
        SegmentKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Iterate over the segments that have content
    pub fn non_empty(&self) -> impl Iterator<Item = (SegmentKind, &'a str)> + '_ {
        self.iter().filter(|(_, text)| !text.is_empty())
    }
}

/// Split a raw block into its segments
///
/// Every line consisting solely of the sentinel is a delimiter, even one
/// that sits inside a comment or string of a sub-language.
pub fn split(raw: &str) -> Result<SegmentSet<'_>, SplitError> {
    let pieces: Vec<&str> = SENTINEL_LINE.split(raw).collect();
    debug!(pieces = pieces.len(), "split block");

    if pieces.len() > SEGMENT_COUNT {
        return Err(SplitError::TooManySegments {
            extra: pieces.len() - SEGMENT_COUNT,
        });
    }

    let mut trimmed = pieces.into_iter().map(str::trim);
    let markup = trimmed.next().unwrap_or("");
    let style = trimmed.next().unwrap_or("");
    let script = trimmed.next().unwrap_or("");

    if markup.is_empty() {
        return Err(SplitError::MissingMarkup);
    }

    Ok(SegmentSet { markup, style, script })
}
