use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The student's working text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Draft {
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            filename: None,
            filepath: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a draft with file metadata (used by the CLI when importing).
    pub fn with_file_info(
        title: String,
        content: String,
        filepath: String,
        filename: String,
    ) -> Self {
        let mut draft = Self::new(title, content);
        draft.filepath = Some(filepath);
        draft.filename = Some(filename);
        draft
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn replace_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Merge imported text: replaces a blank draft, otherwise appends after
    /// a blank line.
    pub fn merge_content(&mut self, imported: &str) {
        if self.is_blank() {
            self.content = imported.to_string();
        } else {
            self.content.push_str("\n\n");
            self.content.push_str(imported);
        }
        self.updated_at = Utc::now();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.updated_at = Utc::now();
    }

    /// Insert a character at a char offset (not a byte offset).
    pub fn insert_char(&mut self, char_offset: usize, c: char) {
        let byte = byte_index(&self.content, char_offset);
        self.content.insert(byte, c);
        self.updated_at = Utc::now();
    }

    /// Remove the character at a char offset, if any.
    pub fn remove_char(&mut self, char_offset: usize) {
        let start = byte_index(&self.content, char_offset);
        if start >= self.content.len() {
            return;
        }
        let end = byte_index(&self.content, char_offset + 1);
        self.content.replace_range(start..end, "");
        self.updated_at = Utc::now();
    }
}

fn byte_index(content: &str, char_offset: usize) -> usize {
    content
        .char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(content.len())
}

impl Default for Draft {
    fn default() -> Self {
        Self::new("Sans titre".to_string(), String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        let draft = Draft::new("t".to_string(), "Il a mangé une pomme".to_string());
        assert_eq!(draft.word_count(), 5);
        assert_eq!(Draft::default().word_count(), 0);
    }

    #[test]
    fn test_char_edits_handle_accents() {
        let mut draft = Draft::new("t".to_string(), "été".to_string());
        draft.insert_char(3, '!');
        assert_eq!(draft.content, "été!");

        draft.remove_char(0);
        assert_eq!(draft.content, "té!");

        // Past-the-end removal is a no-op
        draft.remove_char(10);
        assert_eq!(draft.content, "té!");
    }

    #[test]
    fn test_merge_replaces_blank_draft() {
        let mut draft = Draft::default();
        draft.merge_content("Bonjour");
        assert_eq!(draft.content, "Bonjour");

        draft.merge_content("la suite");
        assert_eq!(draft.content, "Bonjour\n\nla suite");
    }
}
