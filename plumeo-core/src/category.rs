//! Display metadata for error families. Presentation only; the parser never
//! consults this table.

use crate::model::ErrorKind;

/// Renderer-agnostic color name; each frontend maps it to its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMeta {
    pub label: &'static str,
    pub color_token: ColorToken,
}

impl DisplayMeta {
    /// Total over every possible kind: the two recognized families get their
    /// own entry, anything else falls back to a default bucket.
    pub fn for_kind(kind: &ErrorKind) -> DisplayMeta {
        match kind {
            ErrorKind::Grammar => DisplayMeta {
                label: "Grammaire / Ortho",
                color_token: ColorToken::Red,
            },
            ErrorKind::Lexical => DisplayMeta {
                label: "Vocabulaire",
                color_token: ColorToken::Green,
            },
            ErrorKind::Other(_) => DisplayMeta {
                label: "Autre",
                color_token: ColorToken::Blue,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_kinds() {
        assert_eq!(
            DisplayMeta::for_kind(&ErrorKind::Grammar).label,
            "Grammaire / Ortho"
        );
        assert_eq!(
            DisplayMeta::for_kind(&ErrorKind::Lexical).color_token,
            ColorToken::Green
        );
    }

    #[test]
    fn test_unknown_kind_falls_back_to_default() {
        let meta = DisplayMeta::for_kind(&ErrorKind::Other("syntax".to_string()));
        assert_eq!(meta.label, "Autre");
        assert_eq!(meta.color_token, ColorToken::Blue);
    }
}
