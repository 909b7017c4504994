use serde::{Deserialize, Serialize};

/// Per-axis advice from the coach.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub organization: String,
    pub vocabulary: String,
    pub grammar: String,
    pub style: String,
}

/// One feedback round returned by the analysis service.
///
/// Field names follow the service's JSON (camelCase). `annotated_text` is the
/// semi-trusted string the parser consumes; it is not guaranteed well-formed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub summary: String,
    /// Score on the Brevet scale, 0-40.
    pub score: f32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub advice: Advice,
    pub annotated_text: String,
}

/// Display band for the score (32/40 = 8/10, 24/40 = 6/10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Solid,
    Fragile,
}

impl Analysis {
    pub fn score_band(&self) -> ScoreBand {
        if self.score >= 32.0 {
            ScoreBand::Strong
        } else if self.score >= 24.0 {
            ScoreBand::Solid
        } else {
            ScoreBand::Fragile
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_json() {
        let json = r#"{
            "summary": "Un bon début !",
            "score": 28,
            "strengths": ["Vocabulaire riche"],
            "improvements": ["Attention à la grammaire"],
            "advice": {
                "organization": "Fais un plan.",
                "vocabulary": "Varie tes verbes.",
                "grammar": "Relis les accords.",
                "style": "Varie tes phrases."
            },
            "annotatedText": "Il a <error type=\"grammar\" hint=\"h\" guidance=\"g\">manger</error>."
        }"#;

        let analysis: Analysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.score, 28.0);
        assert_eq!(analysis.score_band(), ScoreBand::Solid);
        assert!(analysis.annotated_text.contains("<error"));
    }

    #[test]
    fn test_score_bands() {
        let mut analysis: Analysis = serde_json::from_str(
            r#"{"summary":"","score":40,"strengths":[],"improvements":[],
                "advice":{"organization":"","vocabulary":"","grammar":"","style":""},
                "annotatedText":""}"#,
        )
        .unwrap();
        assert_eq!(analysis.score_band(), ScoreBand::Strong);
        analysis.score = 24.0;
        assert_eq!(analysis.score_band(), ScoreBand::Solid);
        analysis.score = 10.5;
        assert_eq!(analysis.score_band(), ScoreBand::Fragile);
    }
}
