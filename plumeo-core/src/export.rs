use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::{Advice, Analysis, Consigne, Draft, GradeLevel, ParsedDocument};

/// What a copy or export of the reviewed text contains.
///
/// The overlay historically exported the raw tag-laden string; that is now an
/// explicit choice instead of an accident, with the raw form as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyMode {
    /// The annotated string exactly as received from the service.
    #[default]
    RawAnnotated,
    /// The de-tagged visible text.
    PlainText,
}

impl CopyMode {
    pub fn toggle(self) -> Self {
        match self {
            CopyMode::RawAnnotated => CopyMode::PlainText,
            CopyMode::PlainText => CopyMode::RawAnnotated,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CopyMode::RawAnnotated => "texte annoté brut",
            CopyMode::PlainText => "texte visible",
        }
    }
}

/// The text a copy action exports, per the configured mode.
pub fn correction_text(analysis: &Analysis, document: &ParsedDocument, mode: CopyMode) -> String {
    match mode {
        CopyMode::RawAnnotated => analysis.annotated_text.clone(),
        CopyMode::PlainText => document.plain_text(),
    }
}

/// On-disk report format, camelCase like the service JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub title: String,
    pub word_count: usize,
    pub score: f32,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub advice: Advice,
    pub error_count: usize,
    pub annotated_text: String,
    pub plain_text: String,
}

impl ExportReport {
    pub fn build(draft: &Draft, analysis: &Analysis, document: &ParsedDocument) -> Self {
        Self {
            title: draft.title.clone(),
            word_count: draft.word_count(),
            score: analysis.score,
            summary: analysis.summary.clone(),
            strengths: analysis.strengths.clone(),
            improvements: analysis.improvements.clone(),
            advice: analysis.advice.clone(),
            error_count: document.error_count(),
            annotated_text: analysis.annotated_text.clone(),
            plain_text: document.plain_text(),
        }
    }
}

pub fn to_json(report: &ExportReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

/// Render the request prompt for the external analysis service.
///
/// The service is expected to answer with the JSON `Analysis` shape; the
/// annotated-text instruction spells out the tag grammar the parser reads.
pub fn analysis_prompt(draft: &Draft, consigne: Option<&Consigne>) -> String {
    let mut prompt = String::new();

    prompt.push_str("Tu es un coach pédagogique pour collégiens (DNB).\n");
    prompt.push_str(
        "Analyse la rédaction et fournis des retours constructifs SANS donner la correction directe.\n",
    );
    prompt.push_str("Note sur 40.\n\n");
    prompt.push_str("IMPORTANT pour \"annotatedText\" : entoure CHAQUE erreur par :\n");
    prompt.push_str(
        "<error type=\"grammar|lexical\" hint=\"indice\" guidance=\"question\">texte erroné</error>\n\n",
    );

    match consigne {
        Some(consigne) => {
            prompt.push_str(&format!(
                "Sujet : {} ({}, {})\n{}\n\n",
                consigne.title,
                consigne.grade_level.as_str(),
                consigne.kind.as_str(),
                consigne.description
            ));
        }
        None => prompt.push_str("Sujet : Libre\n\n"),
    }

    prompt.push_str("Texte :\n\"");
    prompt.push_str(&draft.content);
    prompt.push_str("\"\n\n");
    prompt.push_str(
        "Réponds au format JSON avec les champs : summary, score, strengths, improvements, \
         advice {organization, vocabulary, grammar, style}, annotatedText.",
    );

    prompt
}

/// Request prompt asking the service to generate a consigne on a theme.
///
/// The expected answer is the `Consigne` JSON shape minus `gradeLevel`, which
/// the caller fills in itself.
pub fn consigne_prompt(grade: GradeLevel, theme: &str) -> String {
    format!(
        "Génère un sujet de rédaction scolaire pour un élève de {} sur le thème \"{}\".\n\
         Réponds au format JSON avec les champs : title, description, \
         type (un de : narratif, argumentatif, descriptif, explicatif).",
        grade.as_str(),
        theme
    )
}

/// Request prompt asking the service for a fresh inspiration text on a theme.
pub fn inspiration_prompt(theme: &str) -> String {
    format!(
        "Tu es un grand auteur classique. Écris un court texte d'inspiration \
         (environ 150 mots) de type \"{}\" pour un collégien.\n\
         Le texte doit être exemplaire, riche en vocabulaire et respectant \
         parfaitement les codes du genre.\n\
         Ajoute aussi 3 conseils courts pour réussir ce genre d'exercice.\n\
         Réponds en JSON avec les champs : \"text\" et \"tips\" (tableau de chaînes).",
        theme
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConsigneKind, GradeLevel};
    use crate::parse::parse;

    fn sample_analysis() -> Analysis {
        Analysis {
            summary: "Bon travail".to_string(),
            score: 30.0,
            strengths: vec!["Imagination".to_string()],
            improvements: vec!["Accords".to_string()],
            advice: Advice {
                organization: "o".to_string(),
                vocabulary: "v".to_string(),
                grammar: "g".to_string(),
                style: "s".to_string(),
            },
            annotated_text:
                "Il a <error type=\"grammar\" hint=\"h\" guidance=\"g\">manger</error> hier."
                    .to_string(),
        }
    }

    #[test]
    fn test_copy_mode_raw_exports_tags_unmodified() {
        let analysis = sample_analysis();
        let doc = parse(&analysis.annotated_text);
        let text = correction_text(&analysis, &doc, CopyMode::RawAnnotated);
        assert_eq!(text, analysis.annotated_text);
    }

    #[test]
    fn test_copy_mode_plain_exports_de_tagged_text() {
        let analysis = sample_analysis();
        let doc = parse(&analysis.annotated_text);
        let text = correction_text(&analysis, &doc, CopyMode::PlainText);
        assert_eq!(text, "Il a manger hier.");
    }

    #[test]
    fn test_export_report_format() {
        let draft = Draft::new("Ma rédaction".to_string(), "Il a manger hier.".to_string());
        let analysis = sample_analysis();
        let doc = parse(&analysis.annotated_text);

        let report = ExportReport::build(&draft, &analysis, &doc);
        let json = to_json(&report).unwrap();

        // Verify camelCase field names
        assert!(json.contains("\"wordCount\": 4"));
        assert!(json.contains("\"errorCount\": 1"));
        assert!(json.contains("\"plainText\": \"Il a manger hier.\""));
        assert!(json.contains("\"annotatedText\""));
    }

    #[test]
    fn test_analysis_prompt_includes_consigne() {
        let draft = Draft::new("t".to_string(), "Mon texte.".to_string());
        let consigne = Consigne {
            title: "Une rencontre".to_string(),
            description: "Raconte.".to_string(),
            grade_level: GradeLevel::Quatrieme,
            kind: ConsigneKind::Narratif,
        };

        let prompt = analysis_prompt(&draft, Some(&consigne));
        assert!(prompt.contains("Une rencontre"));
        assert!(prompt.contains("4ème"));
        assert!(prompt.contains("Mon texte."));
        assert!(prompt.contains("annotatedText"));

        let free = analysis_prompt(&draft, None);
        assert!(free.contains("Sujet : Libre"));
    }

    #[test]
    fn test_consigne_prompt_carries_grade_and_theme() {
        let prompt = consigne_prompt(GradeLevel::Sixieme, "la mer");
        assert!(prompt.contains("élève de 6ème"));
        assert!(prompt.contains("\"la mer\""));
        assert!(prompt.contains("narratif, argumentatif, descriptif, explicatif"));
    }

    #[test]
    fn test_inspiration_prompt_carries_theme() {
        let prompt = inspiration_prompt("Fantastique");
        assert!(prompt.contains("\"Fantastique\""));
        assert!(prompt.contains("3 conseils"));
    }
}
