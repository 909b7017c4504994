mod analysis;
mod consigne;
mod document;
mod draft;
mod segment;

pub use analysis::{Advice, Analysis, ScoreBand};
pub use consigne::{Consigne, ConsigneKind, GradeLevel};
pub use document::ParsedDocument;
pub use draft::Draft;
pub use segment::{ErrorKind, ErrorSegment, Segment, SegmentId, TextSegment};
