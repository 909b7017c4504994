//! Pluméo - Terminal writing workshop for collégiens

mod io;
mod ui;

use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use plumeo_core::{
    analysis_prompt, consigne_prompt, correction_text, inspiration_prompt, App, ExportReport,
    InputTarget, Mode,
};

fn main() -> Result<()> {
    // Get file path from args
    let args: Vec<String> = std::env::args().collect();
    let file_path = args.get(1);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let mut app = App::new(&mut rng);

    // Load draft if provided
    if let Some(path) = file_path {
        match io::load_draft(path) {
            Ok(draft) => {
                app.load_draft(draft);
                app.set_status(&format!("Texte chargé : {}", path));
            }
            Err(e) => {
                app.set_status(&format!("Erreur : {}", e));
            }
        }
    }

    // Main loop
    let res = run_app(&mut terminal, &mut app, &mut rng);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = res {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rng: &mut impl rand::Rng,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Clear status on any key
            app.clear_status();

            match app.mode {
                Mode::Normal => handle_normal_mode(app, key.code, rng),
                Mode::Insert => handle_insert_mode(app, key.code),
                Mode::Input => handle_input_mode(app, key.code),
                Mode::Report => handle_report_mode(app, key.code),
                Mode::Correction => handle_correction_mode(app, key.code),
                Mode::Toolkit => handle_toolkit_mode(app, key.code),
                Mode::Inspiration => handle_inspiration_mode(app, key.code),
                Mode::Help => {
                    app.mode = Mode::Normal;
                }
            }
        }
    }
    Ok(())
}

fn handle_normal_mode(app: &mut App, code: KeyCode, rng: &mut impl rand::Rng) {
    match code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.mode = Mode::Help,

        KeyCode::Char('i') => app.mode = Mode::Insert,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.cursor.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor.move_up(),
        KeyCode::Char('h') | KeyCode::Left => app.cursor.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.cursor.move_right(),
        KeyCode::Char('g') => app.cursor.move_to_top(),
        KeyCode::Char('G') => app.cursor.move_to_bottom(),
        KeyCode::Char('w') => app.cursor.move_word_forward(),
        KeyCode::Char('b') => app.cursor.move_word_back(),

        // File input
        KeyCode::Char('o') => open_input(app, InputTarget::ImportDraft),
        KeyCode::Char('a') => open_input(app, InputTarget::LoadAnalysis),
        KeyCode::Char('s') => open_input(app, InputTarget::LoadConsigne),
        KeyCode::Char('S') => open_input(app, InputTarget::ConsigneTheme),

        // Resources
        KeyCode::Char('B') => app.open_toolkit(),
        KeyCode::Char('I') => app.open_inspiration(),

        // Feedback
        KeyCode::Char('r') => {
            if app.session.is_some() {
                app.mode = Mode::Report;
            } else {
                app.set_status("Pas de bilan à afficher (a pour en charger un)");
            }
        }
        KeyCode::Char('c') => {
            if app.session.is_some() {
                app.open_correction();
            } else {
                app.set_status("Pas de bilan à corriger (a pour en charger un)");
            }
        }

        // Sidebar
        KeyCode::Char('t') => app.next_tip(rng),

        // Preferences
        KeyCode::Char('m') => app.toggle_copy_mode(),
        KeyCode::Char('T') => app.toggle_dark_mode(),

        // Draft
        KeyCode::Char('X') => app.clear_draft(),

        // Exports
        KeyCode::Char('p') => {
            let prompt = analysis_prompt(&app.draft, app.consigne.as_ref());
            match io::export_prompt(&prompt) {
                Ok(path) => app.set_status(&format!("Prompt exporté : {}", path.display())),
                Err(e) => app.set_status(&format!("Export échoué : {}", e)),
            }
        }
        KeyCode::Char('y') => export_correction(app),
        KeyCode::Char('E') => {
            if let Some(session) = &app.session {
                let report = ExportReport::build(&app.draft, &session.report, &session.document);
                match io::export_report(&report) {
                    Ok(path) => app.set_status(&format!("Bilan exporté : {}", path.display())),
                    Err(e) => app.set_status(&format!("Export échoué : {}", e)),
                }
            } else {
                app.set_status("Pas de bilan à exporter");
            }
        }

        _ => {}
    }
}

fn handle_insert_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.mode = Mode::Normal,
        KeyCode::Enter => app.insert_newline(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.insert_char(c),
        KeyCode::Down => app.cursor.move_down(),
        KeyCode::Up => app.cursor.move_up(),
        KeyCode::Left => app.cursor.move_left(),
        KeyCode::Right => app.cursor.move_right(),
        _ => {}
    }
}

fn handle_report_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('r') => app.mode = Mode::Normal,
        KeyCode::Char('c') => app.open_correction(),
        KeyCode::Char('y') => export_correction(app),
        _ => {}
    }
}

fn handle_correction_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_correction(),
        KeyCode::Char('n') | KeyCode::Char('j') | KeyCode::Tab => app.select_next_error(),
        KeyCode::Char('p') | KeyCode::Char('k') | KeyCode::BackTab => app.select_prev_error(),
        KeyCode::Char('r') => app.mode = Mode::Report,
        KeyCode::Char('y') => export_correction(app),
        KeyCode::Char('m') => app.toggle_copy_mode(),
        _ => {}
    }
}

fn handle_toolkit_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('B') => app.mode = Mode::Normal,
        KeyCode::Tab => app.toolkit_toggle_tab(),
        KeyCode::Char('j') | KeyCode::Char('n') | KeyCode::Down => app.toolkit_next(),
        KeyCode::Char('k') | KeyCode::Char('p') | KeyCode::Up => app.toolkit_prev(),
        _ => {}
    }
}

fn handle_inspiration_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('I') => app.mode = Mode::Normal,
        KeyCode::Char('l') | KeyCode::Right => app.inspiration_next_theme(),
        KeyCode::Char('h') | KeyCode::Left => app.inspiration_prev_theme(),
        KeyCode::Char('e') | KeyCode::Tab => app.inspiration_cycle_passage(),
        KeyCode::Char('y') => {
            let (text, author, _) = app.inspiration_passage();
            match io::export_inspiration("inspiration.txt", text) {
                Ok(path) => {
                    app.set_status(&format!("Texte de {} copié : {}", author, path.display()))
                }
                Err(e) => app.set_status(&format!("Export échoué : {}", e)),
            }
        }
        KeyCode::Char('g') => {
            let prompt = inspiration_prompt(app.current_inspiration().title);
            match io::export_inspiration("inspiration_prompt.txt", &prompt) {
                Ok(path) => app.set_status(&format!("Prompt exporté : {}", path.display())),
                Err(e) => app.set_status(&format!("Export échoué : {}", e)),
            }
        }
        _ => {}
    }
}

fn handle_input_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.input_buffer.clear();
        }
        KeyCode::Enter => {
            let path = app.input_buffer.clone();
            app.input_buffer.clear();
            app.mode = Mode::Normal;
            dispatch_input(app, &path);
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
        }
        _ => {}
    }
}

fn open_input(app: &mut App, target: InputTarget) {
    app.input_buffer.clear();
    app.input_target = target;
    app.mode = Mode::Input;
}

fn dispatch_input(app: &mut App, value: &str) {
    if value.is_empty() {
        return;
    }
    match app.input_target {
        InputTarget::ImportDraft => match io::read_text(value) {
            Ok(text) => {
                app.import_text(&text);
                app.set_status(&format!("Texte importé : {}", value));
            }
            Err(e) => app.set_status(&format!("Erreur : {}", e)),
        },
        InputTarget::LoadAnalysis => match io::load_analysis(value) {
            Ok(analysis) => app.set_analysis(analysis),
            Err(e) => app.set_status(&format!("Erreur : {}", e)),
        },
        InputTarget::LoadConsigne => match io::load_consigne(value) {
            Ok(consigne) => {
                app.set_status(&format!("Sujet chargé : {}", consigne.title));
                app.consigne = Some(consigne);
            }
            Err(e) => app.set_status(&format!("Erreur : {}", e)),
        },
        InputTarget::ConsigneTheme => {
            let prompt = consigne_prompt(app.consigne_grade(), value);
            match io::export_consigne_prompt(&prompt) {
                Ok(path) => app.set_status(&format!("Prompt sujet exporté : {}", path.display())),
                Err(e) => app.set_status(&format!("Export échoué : {}", e)),
            }
        }
    }
}

fn export_correction(app: &mut App) {
    let Some(session) = &app.session else {
        app.set_status("Pas de texte corrigé à copier");
        return;
    };
    let text = correction_text(&session.report, &session.document, app.copy_mode);
    match io::export_correction(&text) {
        Ok(path) => app.set_status(&format!(
            "Copié ({}) : {}",
            app.copy_mode.as_str(),
            path.display()
        )),
        Err(e) => app.set_status(&format!("Export échoué : {}", e)),
    }
}
