//! Pluméo Core - writing-feedback library
//!
//! This crate turns the annotated text returned by an external analysis
//! service into an ordered, selectable sequence of display segments, and
//! carries the surrounding application state (draft editing, tips,
//! progress, export). It owns no I/O and never talks to the service itself;
//! frontends feed it strings and key events.

pub mod app;
pub mod category;
pub mod cursor;
pub mod export;
pub mod inspiration;
pub mod model;
pub mod parse;
pub mod selection;
pub mod tips;
pub mod toolkit;

pub use app::{App, CorrectionSession, InputTarget, Mode, Progress};
pub use category::{ColorToken, DisplayMeta};
pub use cursor::CursorState;
pub use export::{
    analysis_prompt, consigne_prompt, correction_text, inspiration_prompt, to_json, CopyMode,
    ExportReport,
};
pub use inspiration::{Excerpt, InspirationTheme, THEMES};
pub use model::{
    Advice, Analysis, Consigne, ConsigneKind, Draft, ErrorKind, ErrorSegment, GradeLevel,
    ParsedDocument, ScoreBand, Segment, SegmentId, TextSegment,
};
pub use parse::parse;
pub use selection::Selection;
pub use tips::{Tip, TipCategory, TipDeck, TIPS};
pub use toolkit::{ToolkitEntry, ToolkitTab, TOOLKIT};
