/// Identifier of an error segment within one parsed document.
///
/// Ids are assigned sequentially at parse time and are only meaningful
/// paired with the document that produced them.
pub type SegmentId = u32;

/// Error family reported by the analysis service.
///
/// The service is a language model and may emit labels outside the two
/// documented ones, so this is a recognized-but-open set rather than a
/// closed enum: unknown labels are preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Grammar,
    Lexical,
    Other(String),
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::Grammar => "grammar",
            ErrorKind::Lexical => "lexical",
            ErrorKind::Other(label) => label,
        }
    }
}

impl From<&str> for ErrorKind {
    fn from(label: &str) -> Self {
        match label {
            "grammar" => ErrorKind::Grammar,
            "lexical" => ErrorKind::Lexical,
            other => ErrorKind::Other(other.to_string()),
        }
    }
}

/// Literal passthrough text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub content: String,
}

/// A flagged span with its pedagogical payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSegment {
    pub id: SegmentId,
    pub content: String,
    pub error_type: ErrorKind,
    pub hint: String,
    pub guidance: String,
}

/// An ordered atomic unit of a parsed annotated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(TextSegment),
    Error(ErrorSegment),
}

impl Segment {
    /// The visible text of this segment, tags stripped.
    pub fn content(&self) -> &str {
        match self {
            Segment::Text(t) => &t.content,
            Segment::Error(e) => &e.content,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorSegment> {
        match self {
            Segment::Error(e) => Some(e),
            Segment::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_round_trip() {
        assert_eq!(ErrorKind::from("grammar"), ErrorKind::Grammar);
        assert_eq!(ErrorKind::from("lexical"), ErrorKind::Lexical);
        assert_eq!(
            ErrorKind::from("syntax"),
            ErrorKind::Other("syntax".to_string())
        );
        assert_eq!(ErrorKind::from("syntax").as_str(), "syntax");
    }
}
