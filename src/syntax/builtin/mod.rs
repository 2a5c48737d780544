//! Built-in language definitions
//!
//! This module provides syntax highlighting definitions for the three
//! languages a swarnam block embeds.

mod css;
mod html;
mod javascript;

use super::language::LanguageDefinition;
use crate::segment::SegmentKind;

pub use css::css_language;
pub use html::html_language;
pub use javascript::javascript_language;

/// Get the built-in language definition for a segment kind
pub fn for_segment(kind: SegmentKind) -> LanguageDefinition {
    match kind {
        SegmentKind::Markup => html_language(),
        SegmentKind::Style => css_language(),
        SegmentKind::Script => javascript_language(),
    }
}
