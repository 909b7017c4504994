use rand::Rng;

use crate::cursor::CursorState;
use crate::export::CopyMode;
use crate::inspiration::{InspirationTheme, THEMES};
use crate::model::{Analysis, Consigne, Draft, ErrorSegment, GradeLevel, ParsedDocument, SegmentId};
use crate::parse;
use crate::selection::Selection;
use crate::tips::{Tip, TipDeck};
use crate::toolkit::{self, ToolkitEntry, ToolkitTab};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Input,
    Report,
    Correction,
    Toolkit,
    Inspiration,
    Help,
}

/// Input target for text input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    ImportDraft,
    LoadAnalysis,
    LoadConsigne,
    /// Theme for a generated consigne request prompt.
    ConsigneTheme,
}

/// One feedback round: the service report with its parsed annotated text and
/// the selection over it.
///
/// Parsing happens exactly once, here; the selection is born empty and dies
/// with the session, so a selection can never outlive its document.
#[derive(Debug, Clone)]
pub struct CorrectionSession {
    pub report: Analysis,
    pub document: ParsedDocument,
    pub selection: Selection,
}

impl CorrectionSession {
    fn new(report: Analysis) -> Self {
        let document = parse::parse(&report.annotated_text);
        Self {
            report,
            document,
            selection: Selection::NoSelection,
        }
    }
}

/// Where the student is on the path from blank page to corrected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub percent: u8,
    pub label: &'static str,
}

/// Words expected before the draft counts as ready for analysis.
const DRAFT_WORD_TARGET: usize = 150;

/// Platform-agnostic application state
pub struct App {
    pub draft: Draft,
    pub cursor: CursorState,
    pub mode: Mode,
    pub running: bool,

    pub consigne: Option<Consigne>,
    pub session: Option<CorrectionSession>,
    pub is_analyzing: bool,

    // Input state
    pub input_buffer: String,
    pub input_target: InputTarget,

    // Sidebar state
    pub tips: TipDeck,

    // Toolkit popup state
    pub toolkit_tab: ToolkitTab,
    pub toolkit_index: usize,

    // Inspiration library state
    pub inspiration_theme: usize,
    pub inspiration_excerpt: Option<usize>,

    // Preferences
    pub copy_mode: CopyMode,
    pub dark_mode: bool,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            draft: Draft::default(),
            cursor: CursorState::new(),
            mode: Mode::Normal,
            running: true,

            consigne: None,
            session: None,
            is_analyzing: false,

            input_buffer: String::new(),
            input_target: InputTarget::ImportDraft,

            tips: TipDeck::new(rng),

            toolkit_tab: ToolkitTab::Imagination,
            toolkit_index: 0,

            inspiration_theme: 0,
            inspiration_excerpt: None,

            copy_mode: CopyMode::default(),
            dark_mode: false,

            status_message: None,
        }
    }

    pub fn load_draft(&mut self, draft: Draft) {
        self.cursor.set_content(&draft.content);
        self.draft = draft;
    }

    /// Merge imported text into the draft (replace if blank, append after a
    /// blank line otherwise) and move the cursor to the end.
    pub fn import_text(&mut self, text: &str) {
        self.draft.merge_content(text);
        let end = self.draft.content.chars().count();
        self.cursor.reload(&self.draft.content, end);
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
        self.cursor.set_content("");
        self.session = None;
        self.mode = Mode::Normal;
        self.set_status("Texte effacé");
    }

    // Draft editing

    pub fn insert_char(&mut self, c: char) {
        let offset = self.cursor.offset();
        self.draft.insert_char(offset, c);
        self.cursor.reload(&self.draft.content, offset + 1);
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        let offset = self.cursor.offset();
        if offset == 0 {
            return;
        }
        self.draft.remove_char(offset - 1);
        self.cursor.reload(&self.draft.content, offset - 1);
    }

    pub fn word_count(&self) -> usize {
        self.draft.word_count()
    }

    /// Progress meter shown above the editor.
    pub fn progress(&self) -> Progress {
        let words = self.word_count();
        if self.mode == Mode::Correction {
            Progress {
                percent: 100,
                label: "Perfectionnement en cours !",
            }
        } else if self.session.is_some() {
            Progress {
                percent: 85,
                label: "Analyse Pluméo terminée !",
            }
        } else if self.is_analyzing {
            Progress {
                percent: 65,
                label: "Ta plume est à l'étude...",
            }
        } else if words > 0 {
            Progress {
                percent: ((words * 50) / DRAFT_WORD_TARGET).min(50) as u8,
                label: if words < DRAFT_WORD_TARGET {
                    "L'inspiration arrive..."
                } else {
                    "Prêt pour le bilan Pluméo !"
                },
            }
        } else {
            Progress {
                percent: 0,
                label: "Commence à écrire...",
            }
        }
    }

    // Analysis lifecycle

    /// Receive a fresh analysis: the annotated text is parsed once and the
    /// previous session (document and selection together) is replaced
    /// wholesale.
    pub fn set_analysis(&mut self, analysis: Analysis) {
        let session = CorrectionSession::new(analysis);
        let errors = session.document.error_count();
        self.session = Some(session);
        self.is_analyzing = false;
        self.mode = Mode::Report;
        self.set_status(&format!("Bilan reçu : {} passage(s) à retravailler", errors));
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.session.as_ref().map(|s| &s.report)
    }

    pub fn document(&self) -> Option<&ParsedDocument> {
        self.session.as_ref().map(|s| &s.document)
    }

    // Correction overlay

    pub fn open_correction(&mut self) {
        if self.session.is_some() {
            self.mode = Mode::Correction;
        }
    }

    /// Dismiss the overlay; the selection does not survive it.
    pub fn close_correction(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.selection = session.selection.clear();
        }
        self.mode = Mode::Normal;
    }

    /// Report that the student picked a flagged span.
    pub fn select_error(&mut self, id: SegmentId) {
        if let Some(session) = self.session.as_mut() {
            session.selection = session.selection.select(id);
        }
    }

    pub fn selected_error(&self) -> Option<&ErrorSegment> {
        let session = self.session.as_ref()?;
        session.selection.current(&session.document)
    }

    pub fn select_next_error(&mut self) {
        self.cycle_selection(true);
    }

    pub fn select_prev_error(&mut self) {
        self.cycle_selection(false);
    }

    fn cycle_selection(&mut self, forward: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let next = match session.selection.selected_id() {
            None => session.document.first_error_id(),
            Some(id) => {
                if forward {
                    session.document.next_error_id(id)
                } else {
                    session.document.prev_error_id(id)
                }
            }
        };
        if let Some(id) = next {
            session.selection = session.selection.select(id);
        }
    }

    // Tips

    pub fn current_tip(&self) -> &'static Tip {
        self.tips.current()
    }

    pub fn next_tip(&mut self, rng: &mut impl Rng) {
        let analysis = self.session.as_ref().map(|s| &s.report);
        self.tips.advance(analysis, rng);
    }

    // Toolkit popup

    pub fn open_toolkit(&mut self) {
        self.mode = Mode::Toolkit;
    }

    pub fn toolkit_toggle_tab(&mut self) {
        self.toolkit_tab = self.toolkit_tab.toggle();
        self.toolkit_index = 0;
    }

    pub fn toolkit_next(&mut self) {
        let count = toolkit::entries(self.toolkit_tab).count();
        self.toolkit_index = (self.toolkit_index + 1) % count;
    }

    pub fn toolkit_prev(&mut self) {
        let count = toolkit::entries(self.toolkit_tab).count();
        self.toolkit_index = (self.toolkit_index + count - 1) % count;
    }

    pub fn current_toolkit_entry(&self) -> &'static ToolkitEntry {
        toolkit::entries(self.toolkit_tab)
            .nth(self.toolkit_index)
            .unwrap_or(&toolkit::TOOLKIT[0])
    }

    // Inspiration library

    pub fn open_inspiration(&mut self) {
        self.mode = Mode::Inspiration;
    }

    pub fn current_inspiration(&self) -> &'static InspirationTheme {
        &THEMES[self.inspiration_theme]
    }

    pub fn inspiration_next_theme(&mut self) {
        self.inspiration_theme = (self.inspiration_theme + 1) % THEMES.len();
        self.inspiration_excerpt = None;
    }

    pub fn inspiration_prev_theme(&mut self) {
        self.inspiration_theme = (self.inspiration_theme + THEMES.len() - 1) % THEMES.len();
        self.inspiration_excerpt = None;
    }

    /// Cycle the reading position: pedagogical example, then each anthology
    /// excerpt, then back to the example.
    pub fn inspiration_cycle_passage(&mut self) {
        let library_len = self.current_inspiration().library.len();
        self.inspiration_excerpt = match self.inspiration_excerpt {
            None => Some(0),
            Some(i) if i + 1 < library_len => Some(i + 1),
            Some(_) => None,
        };
    }

    /// The currently displayed passage as (text, author, source).
    pub fn inspiration_passage(&self) -> (&'static str, &'static str, &'static str) {
        self.current_inspiration().passage(self.inspiration_excerpt)
    }

    /// Grade used for a generated-consigne request: the loaded consigne's,
    /// or 6ème like the original selector default.
    pub fn consigne_grade(&self) -> GradeLevel {
        self.consigne
            .as_ref()
            .map(|c| c.grade_level)
            .unwrap_or(GradeLevel::Sixieme)
    }

    // Preferences

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_copy_mode(&mut self) {
        self.copy_mode = self.copy_mode.toggle();
        self.set_status(&format!("Copie : {}", self.copy_mode.as_str()));
    }

    // Status

    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Get title for display
    pub fn title(&self) -> String {
        self.draft
            .filename
            .clone()
            .unwrap_or_else(|| self.draft.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Advice;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app() -> App {
        App::new(&mut StdRng::seed_from_u64(1))
    }

    fn analysis(annotated: &str) -> Analysis {
        Analysis {
            summary: String::new(),
            score: 25.0,
            strengths: Vec::new(),
            improvements: Vec::new(),
            advice: Advice {
                organization: String::new(),
                vocabulary: String::new(),
                grammar: String::new(),
                style: String::new(),
            },
            annotated_text: annotated.to_string(),
        }
    }

    const TWO_ERRORS: &str = "a <error type=\"grammar\" hint=\"h\" guidance=\"g\">b</error> \
                              c <error type=\"lexical\" hint=\"i\" guidance=\"j\">d</error>";

    #[test]
    fn test_editing_updates_draft_and_cursor() {
        let mut app = app();
        app.insert_char('é');
        app.insert_char('t');
        app.insert_newline();
        app.insert_char('!');
        assert_eq!(app.draft.content, "ét\n!");
        assert_eq!(app.cursor.cursor(), (1, 1));

        app.backspace();
        assert_eq!(app.draft.content, "ét\n");
        app.backspace();
        assert_eq!(app.draft.content, "ét");
        assert_eq!(app.cursor.cursor(), (0, 2));
    }

    #[test]
    fn test_progress_phases() {
        let mut app = app();
        assert_eq!(app.progress().percent, 0);

        app.import_text("un deux trois");
        let progress = app.progress();
        assert_eq!(progress.percent, 1); // 3 words * 50 / 150
        assert_eq!(progress.label, "L'inspiration arrive...");

        app.is_analyzing = true;
        assert_eq!(app.progress().percent, 65);

        app.set_analysis(analysis(TWO_ERRORS));
        assert_eq!(app.progress().percent, 85);
        assert!(!app.is_analyzing);

        app.open_correction();
        assert_eq!(app.progress().percent, 100);
    }

    #[test]
    fn test_selection_cycles_through_errors() {
        let mut app = app();
        app.set_analysis(analysis(TWO_ERRORS));
        app.open_correction();

        assert!(app.selected_error().is_none());
        app.select_next_error();
        assert_eq!(app.selected_error().unwrap().content, "b");
        app.select_next_error();
        assert_eq!(app.selected_error().unwrap().content, "d");
        app.select_next_error();
        assert_eq!(app.selected_error().unwrap().content, "b");
        app.select_prev_error();
        assert_eq!(app.selected_error().unwrap().content, "d");
    }

    #[test]
    fn test_new_analysis_replaces_session_and_selection() {
        let mut app = app();
        app.set_analysis(analysis(TWO_ERRORS));
        app.select_error(1);
        assert!(app.selected_error().is_some());

        app.set_analysis(analysis("rien à signaler"));
        assert!(app.selected_error().is_none());
        assert_eq!(app.document().unwrap().error_count(), 0);
    }

    #[test]
    fn test_close_correction_clears_selection() {
        let mut app = app();
        app.set_analysis(analysis(TWO_ERRORS));
        app.open_correction();
        app.select_next_error();
        app.close_correction();

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.selected_error().is_none());
    }

    #[test]
    fn test_toolkit_navigation_wraps_within_tab() {
        let mut app = app();
        app.open_toolkit();
        assert_eq!(app.mode, Mode::Toolkit);
        assert_eq!(app.current_toolkit_entry().title, "Éviter les répétitions");

        app.toolkit_prev();
        assert_eq!(app.current_toolkit_entry().title, "Expressivité");
        app.toolkit_next();
        assert_eq!(app.current_toolkit_entry().title, "Éviter les répétitions");

        app.toolkit_next();
        app.toolkit_toggle_tab();
        assert_eq!(app.toolkit_tab, ToolkitTab::Reflexion);
        assert_eq!(app.current_toolkit_entry().title, "Connecteurs logiques");
    }

    #[test]
    fn test_inspiration_passage_cycles_example_and_excerpts() {
        let mut app = app();
        app.open_inspiration();
        assert_eq!(app.inspiration_passage().1, "Pluméo");

        app.inspiration_cycle_passage();
        assert_eq!(app.inspiration_passage().1, "Victor Hugo");
        app.inspiration_cycle_passage();
        assert_eq!(app.inspiration_passage().1, "Edmond Rostand");
        app.inspiration_cycle_passage();
        assert_eq!(app.inspiration_passage().1, "Pluméo");

        // Switching themes resets to the pedagogical example
        app.inspiration_cycle_passage();
        app.inspiration_next_theme();
        assert_eq!(app.current_inspiration().title, "Fantastique");
        assert_eq!(app.inspiration_passage().1, "Pluméo");
    }

    #[test]
    fn test_consigne_grade_defaults_to_sixieme() {
        use crate::model::ConsigneKind;

        let mut app = app();
        assert_eq!(app.consigne_grade(), GradeLevel::Sixieme);

        app.consigne = Some(Consigne {
            title: "t".to_string(),
            description: "d".to_string(),
            grade_level: GradeLevel::Troisieme,
            kind: ConsigneKind::Narratif,
        });
        assert_eq!(app.consigne_grade(), GradeLevel::Troisieme);
    }

    #[test]
    fn test_clear_draft_discards_session() {
        let mut app = app();
        app.import_text("du texte");
        app.set_analysis(analysis(TWO_ERRORS));
        app.clear_draft();

        assert!(app.draft.is_blank());
        assert!(app.session.is_none());
    }
}
