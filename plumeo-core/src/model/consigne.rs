use serde::{Deserialize, Serialize};

/// School grade the consigne targets (French collège).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GradeLevel {
    #[serde(rename = "6ème")]
    Sixieme,
    #[serde(rename = "5ème")]
    Cinquieme,
    #[serde(rename = "4ème")]
    Quatrieme,
    #[serde(rename = "3ème")]
    Troisieme,
}

impl GradeLevel {
    pub fn all() -> &'static [GradeLevel] {
        &[
            GradeLevel::Sixieme,
            GradeLevel::Cinquieme,
            GradeLevel::Quatrieme,
            GradeLevel::Troisieme,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::Sixieme => "6ème",
            GradeLevel::Cinquieme => "5ème",
            GradeLevel::Quatrieme => "4ème",
            GradeLevel::Troisieme => "3ème",
        }
    }
}

/// Kind of writing exercise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConsigneKind {
    Narratif,
    Argumentatif,
    Descriptif,
    Explicatif,
}

impl ConsigneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsigneKind::Narratif => "narratif",
            ConsigneKind::Argumentatif => "argumentatif",
            ConsigneKind::Descriptif => "descriptif",
            ConsigneKind::Explicatif => "explicatif",
        }
    }
}

/// A writing prompt, either generated by the service or written by hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Consigne {
    pub title: String,
    pub description: String,
    pub grade_level: GradeLevel,
    #[serde(rename = "type")]
    pub kind: ConsigneKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_json() {
        let json = r#"{
            "title": "Une rencontre inattendue",
            "description": "Raconte une rencontre qui a changé ta journée.",
            "gradeLevel": "4ème",
            "type": "narratif"
        }"#;

        let consigne: Consigne = serde_json::from_str(json).unwrap();
        assert_eq!(consigne.grade_level, GradeLevel::Quatrieme);
        assert_eq!(consigne.kind, ConsigneKind::Narratif);
        assert_eq!(consigne.grade_level.as_str(), "4ème");
    }
}
