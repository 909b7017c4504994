use super::{ErrorSegment, Segment, SegmentId};

/// The ordered sequence of segments produced from one annotated-text input.
///
/// A document is built once by the parser and never mutated; a new analysis
/// replaces it wholesale. Segment ids are unique within one document only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDocument {
    segments: Vec<Segment>,
}

impl ParsedDocument {
    pub(crate) fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Look up an error segment by id; `None` for stale or unknown ids.
    pub fn error(&self, id: SegmentId) -> Option<&ErrorSegment> {
        self.errors().find(|e| e.id == id)
    }

    /// Error segments in textual order.
    pub fn errors(&self) -> impl Iterator<Item = &ErrorSegment> {
        self.segments.iter().filter_map(Segment::as_error)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn first_error_id(&self) -> Option<SegmentId> {
        self.errors().next().map(|e| e.id)
    }

    /// Id of the error following `id` in textual order, wrapping around.
    pub fn next_error_id(&self, id: SegmentId) -> Option<SegmentId> {
        let ids: Vec<SegmentId> = self.errors().map(|e| e.id).collect();
        let pos = ids.iter().position(|&i| i == id)?;
        Some(ids[(pos + 1) % ids.len()])
    }

    /// Id of the error preceding `id` in textual order, wrapping around.
    pub fn prev_error_id(&self, id: SegmentId) -> Option<SegmentId> {
        let ids: Vec<SegmentId> = self.errors().map(|e| e.id).collect();
        let pos = ids.iter().position(|&i| i == id)?;
        Some(ids[(pos + ids.len() - 1) % ids.len()])
    }

    /// The de-tagged visible text: every segment's content concatenated in
    /// order. For a well-formed input this reproduces the original string
    /// with each tag replaced by its captured inner text.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::content).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ErrorKind, TextSegment};

    fn sample() -> ParsedDocument {
        ParsedDocument::new(vec![
            Segment::Text(TextSegment {
                content: "a ".to_string(),
            }),
            Segment::Error(ErrorSegment {
                id: 0,
                content: "b".to_string(),
                error_type: ErrorKind::Grammar,
                hint: "h".to_string(),
                guidance: "g".to_string(),
            }),
            Segment::Error(ErrorSegment {
                id: 1,
                content: "c".to_string(),
                error_type: ErrorKind::Lexical,
                hint: "h2".to_string(),
                guidance: "g2".to_string(),
            }),
        ])
    }

    #[test]
    fn test_error_lookup() {
        let doc = sample();
        assert_eq!(doc.error(0).unwrap().content, "b");
        assert!(doc.error(7).is_none());
        assert_eq!(doc.error_count(), 2);
    }

    #[test]
    fn test_error_cycling_wraps() {
        let doc = sample();
        assert_eq!(doc.first_error_id(), Some(0));
        assert_eq!(doc.next_error_id(0), Some(1));
        assert_eq!(doc.next_error_id(1), Some(0));
        assert_eq!(doc.prev_error_id(0), Some(1));
        assert_eq!(doc.next_error_id(9), None);
    }

    #[test]
    fn test_plain_text_concatenates_in_order() {
        assert_eq!(sample().plain_text(), "a bc");
    }
}
