//! Segment kinds and the sentinel delimiter
//!
//! A swarnam block is made of up to three segments, always in the order
//! markup, style, script, separated by lines containing only `---*---`.

use crate::syntax::Color;

/// The delimiter marker, matched against a whole trimmed line
pub const SENTINEL: &str = "---*---";

/// Maximum number of segments in a block
pub const SEGMENT_COUNT: usize = 3;

/// One of the three sub-language regions of a block
///
/// The ordering is meaningful: it is both the order segments appear in the
/// source and the only direction the tokenizer may move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentKind {
    Markup,
    Style,
    Script,
}

impl SegmentKind {
    /// All kinds in source order
    pub const ALL: [SegmentKind; SEGMENT_COUNT] =
        [SegmentKind::Markup, SegmentKind::Style, SegmentKind::Script];

    /// Position of this kind in a segment set
    pub fn index(self) -> usize {
        match self {
            SegmentKind::Markup => 0,
            SegmentKind::Style => 1,
            SegmentKind::Script => 2,
        }
    }

    /// The kind following this one, or None for the terminal kind
    pub fn next(self) -> Option<Self> {
        match self {
            SegmentKind::Markup => Some(SegmentKind::Style),
            SegmentKind::Style => Some(SegmentKind::Script),
            SegmentKind::Script => None,
        }
    }

    /// Badge text shown on a source pane
    pub fn label(self) -> &'static str {
        match self {
            SegmentKind::Markup => "HTML",
            SegmentKind::Style => "CSS",
            SegmentKind::Script => "JS",
        }
    }

    /// Badge colour shown on a source pane
    pub fn badge_color(self) -> Color {
        match self {
            SegmentKind::Markup => Color::Rgb(0xe3, 0x4c, 0x26),
            SegmentKind::Style => Color::Rgb(0x29, 0x65, 0xf1),
            SegmentKind::Script => Color::Rgb(0xf0, 0xdb, 0x4f),
        }
    }
}

/// Check whether a line (or the rest of one) is a sentinel line
pub fn is_sentinel(line: &str) -> bool {
    line.trim() == SENTINEL
}
