//! Which flagged span, if any, the student is currently inspecting.
//!
//! Modeled as an explicit value rather than UI-local state so the machine can
//! be driven from tests without a rendering environment. The stored id is a
//! weak lookup key into one `ParsedDocument`; resolving it against a document
//! that no longer contains the id yields `None` instead of failing.

use crate::model::{ErrorSegment, ParsedDocument, SegmentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(SegmentId),
}

impl Selection {
    /// Select `id` unconditionally. Re-selecting the same id is idempotent;
    /// selecting a different id overwrites (there is no toggle-off).
    pub fn select(self, id: SegmentId) -> Self {
        Selection::Selected(id)
    }

    /// Drop the selection (overlay dismissed or document replaced).
    pub fn clear(self) -> Self {
        Selection::NoSelection
    }

    pub fn selected_id(&self) -> Option<SegmentId> {
        match self {
            Selection::NoSelection => None,
            Selection::Selected(id) => Some(*id),
        }
    }

    /// Resolve the selection against `doc`; stale ids yield `None`.
    pub fn current<'a>(&self, doc: &'a ParsedDocument) -> Option<&'a ErrorSegment> {
        doc.error(self.selected_id()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn test_select_is_idempotent() {
        let state = Selection::default().select(3);
        assert_eq!(state, state.select(3));
        assert_eq!(state, Selection::Selected(3));
    }

    #[test]
    fn test_reselect_overwrites_without_toggle() {
        let state = Selection::default().select(3).select(5);
        assert_eq!(state, Selection::Selected(5));
    }

    #[test]
    fn test_clear() {
        assert_eq!(Selection::default().select(2).clear(), Selection::NoSelection);
    }

    #[test]
    fn test_current_resolves_against_document() {
        let doc = parse("x <error type=\"grammar\" hint=\"h\" guidance=\"g\">y</error>");
        let state = Selection::default().select(0);
        assert_eq!(state.current(&doc).unwrap().content, "y");
    }

    #[test]
    fn test_stale_selection_resolves_to_none() {
        let doc_without_id_7 = parse("aucune erreur ici");
        let state = Selection::NoSelection.select(7);
        assert!(state.current(&doc_without_id_7).is_none());
    }
}
