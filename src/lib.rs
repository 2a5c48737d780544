//! swarnam - composite HTML/CSS/JS snippet tokenizer
//!
//! A swarnam block holds markup, style and script separated by lines
//! containing only `---*---`. This crate provides:
//! - [`splitter::split`]: whole-block validation into a [`SegmentSet`]
//! - [`CompositeTokenizer`]: an incremental, line-at-a-time tokenizer that
//!   hands each line to the lexer of the segment it belongs to
//! - [`DocumentSession`]: checkpointed re-highlighting for editors
//! - [`render::render`]: source panes plus a preview document

pub mod composite;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod preview;
pub mod render;
pub mod segment;
pub mod session;
pub mod splitter;
pub mod syntax;
pub mod terminal;

pub use composite::{CompositeState, CompositeTokenizer, SwarnamState, SwarnamTokenizer};
pub use cursor::LineCursor;
pub use error::{Result, SplitError, SwarnamError};
pub use lexer::{SubLexer, Token};
pub use segment::{SegmentKind, SENTINEL};
pub use session::DocumentSession;
pub use splitter::{split, SegmentSet};
