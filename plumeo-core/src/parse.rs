//! Tokenizer for the annotated text returned by the analysis service.
//!
//! The service wraps each detected error in
//! `<error type="..." hint="..." guidance="...">...</error>`. The string is
//! model-generated and not guaranteed well-formed, so scanning is fail-soft:
//! anything that does not match the grammar exactly stays in the output as
//! literal text. Parsing never fails and never drops input.

use crate::model::{ErrorKind, ErrorSegment, ParsedDocument, Segment, SegmentId, TextSegment};

const TAG_OPEN: &str = "<error type=\"";
const DELIM_HINT: &str = "\" hint=\"";
const DELIM_GUIDANCE: &str = "\" guidance=\"";
const DELIM_CONTENT: &str = "\">";
const TAG_CLOSE: &str = "</error>";

struct TagMatch<'a> {
    error_type: &'a str,
    hint: &'a str,
    guidance: &'a str,
    content: &'a str,
    /// Byte offset just past the closing tag.
    end: usize,
}

/// Split an annotated string into ordered segments.
///
/// Successive non-overlapping matches are taken left to right; text between
/// matches becomes `TextSegment`s (only if non-empty). Error ids are assigned
/// sequentially, so two parses of the same string are structurally equal.
pub fn parse(raw: &str) -> ParsedDocument {
    let mut segments = Vec::new();
    let mut next_id: SegmentId = 0;
    // Everything before `emitted` has been turned into segments already.
    let mut emitted = 0;
    let mut scan = 0;

    while let Some(rel) = raw[scan..].find(TAG_OPEN) {
        let start = scan + rel;
        match match_tag(raw, start) {
            Some(tag) => {
                if start > emitted {
                    segments.push(Segment::Text(TextSegment {
                        content: raw[emitted..start].to_string(),
                    }));
                }
                segments.push(Segment::Error(ErrorSegment {
                    id: next_id,
                    content: tag.content.to_string(),
                    error_type: ErrorKind::from(tag.error_type),
                    hint: tag.hint.to_string(),
                    guidance: tag.guidance.to_string(),
                }));
                next_id += 1;
                emitted = tag.end;
                scan = tag.end;
            }
            // Malformed candidate: its characters stay in the pending text
            // region; resume scanning just past the '<'.
            None => scan = start + 1,
        }
    }

    if emitted < raw.len() {
        segments.push(Segment::Text(TextSegment {
            content: raw[emitted..].to_string(),
        }));
    }

    ParsedDocument::new(segments)
}

/// Try to match one full tag whose `<error type="` prefix starts at `start`.
///
/// Attribute values run to the first `"`; the exact next delimiter must
/// follow at that quote or the whole candidate is rejected. Content runs to
/// the first `</error>`, so a tag opened inside content is never recognized
/// as nested; it stays literal text inside the outer span.
fn match_tag(raw: &str, start: usize) -> Option<TagMatch<'_>> {
    let mut pos = start + TAG_OPEN.len();
    let error_type = attr_value(raw, &mut pos, DELIM_HINT)?;
    let hint = attr_value(raw, &mut pos, DELIM_GUIDANCE)?;
    let guidance = attr_value(raw, &mut pos, DELIM_CONTENT)?;
    let content_end = pos + raw[pos..].find(TAG_CLOSE)?;

    Some(TagMatch {
        error_type,
        hint,
        guidance,
        content: &raw[pos..content_end],
        end: content_end + TAG_CLOSE.len(),
    })
}

fn attr_value<'a>(raw: &'a str, pos: &mut usize, delim: &str) -> Option<&'a str> {
    let quote = *pos + raw[*pos..].find('"')?;
    if !raw[quote..].starts_with(delim) {
        return None;
    }
    let value = &raw[*pos..quote];
    *pos = quote + delim.len();
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ErrorKind;

    fn text(doc: &ParsedDocument, idx: usize) -> &str {
        match &doc.segments()[idx] {
            Segment::Text(t) => &t.content,
            Segment::Error(_) => panic!("expected text segment at {}", idx),
        }
    }

    fn error(doc: &ParsedDocument, idx: usize) -> &ErrorSegment {
        doc.segments()[idx]
            .as_error()
            .unwrap_or_else(|| panic!("expected error segment at {}", idx))
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_no_tags_is_single_text_segment() {
        let doc = parse("Il était une fois un chevalier.");
        assert_eq!(doc.segments().len(), 1);
        assert_eq!(text(&doc, 0), "Il était une fois un chevalier.");
    }

    #[test]
    fn test_worked_example() {
        let doc = parse(
            "Il a manger <error type=\"grammar\" hint=\"accord\" \
             guidance=\"Quel est le sujet ?\">une pomme</error> hier.",
        );

        assert_eq!(doc.segments().len(), 3);
        assert_eq!(text(&doc, 0), "Il a manger ");
        let err = error(&doc, 1);
        assert_eq!(err.id, 0);
        assert_eq!(err.error_type, ErrorKind::Grammar);
        assert_eq!(err.hint, "accord");
        assert_eq!(err.guidance, "Quel est le sujet ?");
        assert_eq!(err.content, "une pomme");
        assert_eq!(text(&doc, 2), " hier.");
    }

    #[test]
    fn test_unterminated_tag_stays_literal() {
        let raw = "Il a manger <error type=\"grammar\" hint=\"h\" guidance=\"g\">une pomme";
        let doc = parse(raw);
        assert_eq!(doc.segments().len(), 1);
        assert_eq!(text(&doc, 0), raw);
    }

    #[test]
    fn test_nested_tag_is_not_recognized() {
        let doc = parse(
            "<error type=\"grammar\" hint=\"h\" guidance=\"g\">a \
             <error type=\"lexical\" hint=\"x\" guidance=\"y\">b</error> c</error>",
        );

        // The outer span ends at the first `</error>`; the inner opening tag
        // is literal content and the leftover ` c</error>` is plain text.
        assert_eq!(doc.segments().len(), 2);
        let err = error(&doc, 0);
        assert_eq!(err.error_type, ErrorKind::Grammar);
        assert_eq!(
            err.content,
            "a <error type=\"lexical\" hint=\"x\" guidance=\"y\">b"
        );
        assert_eq!(text(&doc, 1), " c</error>");
    }

    #[test]
    fn test_unknown_type_is_preserved_verbatim() {
        let doc = parse("<error type=\"ponctuation\" hint=\"h\" guidance=\"g\">x</error>");
        assert_eq!(
            error(&doc, 0).error_type,
            ErrorKind::Other("ponctuation".to_string())
        );
    }

    #[test]
    fn test_unexpected_attribute_layout_is_rejected() {
        // The first quote closes the hint value, after which the grammar
        // expects `" guidance="` exactly; the stray text rejects the tag.
        let raw = "<error type=\"grammar\" hint=\"un \"indice\"\" guidance=\"g\">x</error>";
        let doc = parse(raw);
        assert_eq!(doc.segments().len(), 1);
        assert_eq!(text(&doc, 0), raw);
    }

    #[test]
    fn test_malformed_candidate_does_not_mask_later_tags() {
        let doc = parse(
            "début <error type=\"oops ensuite \
             <error type=\"lexical\" hint=\"h\" guidance=\"g\">mot</error> fin",
        );

        assert_eq!(doc.segments().len(), 3);
        assert_eq!(text(&doc, 0), "début <error type=\"oops ensuite ");
        assert_eq!(error(&doc, 1).content, "mot");
        assert_eq!(text(&doc, 2), " fin");
    }

    #[test]
    fn test_adjacent_tags_have_no_empty_text_between() {
        let doc = parse(
            "<error type=\"grammar\" hint=\"a\" guidance=\"b\">un</error>\
             <error type=\"lexical\" hint=\"c\" guidance=\"d\">deux</error>",
        );

        assert_eq!(doc.segments().len(), 2);
        assert_eq!(error(&doc, 0).id, 0);
        assert_eq!(error(&doc, 1).id, 1);
        assert_eq!(error(&doc, 1).content, "deux");
    }

    #[test]
    fn test_content_completeness_invariant() {
        let raw = "Début <error type=\"grammar\" hint=\"h\" guidance=\"g\">faute</error> \
                   milieu <error type=\"lexical\" hint=\"h2\" guidance=\"g2\">mot</error> fin.";
        let de_tagged = "Début faute milieu mot fin.";
        assert_eq!(parse(raw).plain_text(), de_tagged);
    }

    #[test]
    fn test_reparse_is_structurally_equal() {
        let raw = "a <error type=\"grammar\" hint=\"h\" guidance=\"g\">b</error> c";
        assert_eq!(parse(raw), parse(raw));
    }

    #[test]
    fn test_accented_text_offsets() {
        let doc = parse(
            "L'été <error type=\"grammar\" hint=\"accent\" guidance=\"é ou è ?\">étais</error> là.",
        );
        assert_eq!(doc.segments().len(), 3);
        assert_eq!(error(&doc, 1).content, "étais");
        assert_eq!(error(&doc, 1).guidance, "é ou è ?");
    }
}
