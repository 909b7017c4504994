//! Terminal UI rendering for Pluméo.
//!
//! The overlay is where the renderer contract lives: it reads the ordered
//! segments, styles error spans via their display metadata, and highlights
//! the current selection. All parsing and selection logic stays in the core.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use plumeo_core::{toolkit, App, ColorToken, DisplayMeta, InputTarget, Mode, ScoreBand, Segment};

pub struct Theme {
    pub surface0: Color,
    pub surface1: Color,
    pub text: Color,
    pub subtext: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub mauve: Color,
    pub teal: Color,
}

// Catppuccin Mocha
const DARK: Theme = Theme {
    surface0: Color::Rgb(49, 50, 68),
    surface1: Color::Rgb(69, 71, 90),
    text: Color::Rgb(205, 214, 244),
    subtext: Color::Rgb(166, 173, 200),
    red: Color::Rgb(243, 139, 168),
    yellow: Color::Rgb(249, 226, 175),
    green: Color::Rgb(166, 227, 161),
    blue: Color::Rgb(137, 180, 250),
    mauve: Color::Rgb(203, 166, 247),
    teal: Color::Rgb(148, 226, 213),
};

// Catppuccin Latte
const LIGHT: Theme = Theme {
    surface0: Color::Rgb(204, 208, 218),
    surface1: Color::Rgb(188, 192, 204),
    text: Color::Rgb(76, 79, 105),
    subtext: Color::Rgb(108, 111, 133),
    red: Color::Rgb(210, 15, 57),
    yellow: Color::Rgb(223, 142, 29),
    green: Color::Rgb(64, 160, 43),
    blue: Color::Rgb(30, 102, 245),
    mauve: Color::Rgb(136, 57, 239),
    teal: Color::Rgb(23, 146, 153),
};

fn theme(app: &App) -> &'static Theme {
    if app.dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

fn token_color(token: ColorToken, theme: &Theme) -> Color {
    match token {
        ColorToken::Red => theme.red,
        ColorToken::Green => theme.green,
        ColorToken::Blue => theme.blue,
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = theme(app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, theme, chunks[0]);
    draw_main_area(frame, app, theme, chunks[1]);
    draw_status_bar(frame, app, theme, chunks[2]);

    // Draw popups/overlays
    match app.mode {
        Mode::Report => draw_report(frame, app, theme),
        Mode::Correction => draw_correction_overlay(frame, app, theme),
        Mode::Toolkit => draw_toolkit(frame, app, theme),
        Mode::Inspiration => draw_inspiration(frame, app, theme),
        Mode::Input => draw_input_dialog(frame, app, theme),
        Mode::Help => draw_help(frame, theme),
        _ => {}
    }
}

fn draw_title_bar(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let title_text = format!(" Pluméo - {} [{} mots]", app.title(), app.word_count());

    let title_bar = Paragraph::new(title_text)
        .style(Style::default().fg(theme.text).bg(theme.surface0));

    frame.render_widget(title_bar, area);
}

fn draw_main_area(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Editor
            Constraint::Length(36), // Sidebar
        ])
        .split(area);

    draw_editor(frame, app, theme, chunks[0]);
    draw_sidebar(frame, app, theme, chunks[1]);
}

fn draw_editor(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let editing = app.mode == Mode::Insert;
    let editor_style = if editing {
        Style::default().fg(theme.blue)
    } else {
        Style::default().fg(theme.subtext)
    };

    let mode_indicator = if editing { " [ÉCRITURE]" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(editor_style)
        .title(format!("Ma Plume{}", mode_indicator));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.cursor.line_count() == 0 {
        let placeholder = Paragraph::new("Laisse couler ton inspiration sur cette page Pluméo...")
            .style(Style::default().fg(theme.subtext).add_modifier(Modifier::ITALIC));
        frame.render_widget(placeholder, inner);
        return;
    }

    let lines: Vec<Line> = (0..app.cursor.line_count())
        .map(|i| {
            Line::from(Span::styled(
                app.cursor.line(i).unwrap_or_default().to_string(),
                Style::default().fg(theme.text),
            ))
        })
        .collect();

    // Scroll both axes so the cursor stays visible
    let (row, col) = app.cursor.cursor();
    let v_scroll = scroll_offset(row, inner.height as usize);
    let h_scroll = scroll_offset(col, inner.width as usize);

    let paragraph = Paragraph::new(lines).scroll((v_scroll as u16, h_scroll as u16));
    frame.render_widget(paragraph, inner);

    if editing {
        let x = inner.x + (col - h_scroll) as u16;
        let y = inner.y + (row - v_scroll) as u16;
        frame.set_cursor(x, y);
    }
}

/// How far to scroll one axis so that `pos` falls inside a `visible`-sized
/// window anchored at the scroll offset.
fn scroll_offset(pos: usize, visible: usize) -> usize {
    if visible > 0 && pos >= visible {
        pos - visible + 1
    } else {
        0
    }
}

fn draw_sidebar(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Length(9), // Tip
            Constraint::Length(6), // Consigne
            Constraint::Min(0),    // Bilan
        ])
        .split(area);

    draw_progress(frame, app, theme, chunks[0]);
    draw_tip(frame, app, theme, chunks[1]);
    draw_consigne(frame, app, theme, chunks[2]);
    draw_bilan_card(frame, app, theme, chunks[3]);
}

fn draw_progress(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let progress = app.progress();
    let color = if progress.percent == 100 {
        theme.green
    } else {
        theme.blue
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progression"))
        .gauge_style(Style::default().fg(color).bg(theme.surface0))
        .percent(progress.percent as u16)
        .label(progress.label);

    frame.render_widget(gauge, area);
}

fn draw_tip(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let tip = app.current_tip();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.mauve))
        .title(format!("Astuce [{}]", tip.category.badge()));

    let paragraph = Paragraph::new(format!("\"{}\"", tip.text))
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}

fn draw_consigne(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.teal))
        .title("Mon Sujet");

    let paragraph = match &app.consigne {
        Some(consigne) => Paragraph::new(vec![
            Line::from(Span::styled(
                consigne.title.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} - {}", consigne.grade_level.as_str(), consigne.kind.as_str()),
                Style::default().fg(theme.subtext),
            )),
            Line::from(Span::styled(
                consigne.description.clone(),
                Style::default().fg(theme.subtext),
            )),
        ])
        .wrap(Wrap { trim: true }),
        None => Paragraph::new("Sujet libre (s pour charger)")
            .style(Style::default().fg(theme.subtext).add_modifier(Modifier::ITALIC)),
    };

    frame.render_widget(paragraph.block(block), area);
}

fn draw_bilan_card(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.subtext))
        .title("Bilan");

    let paragraph = match app.analysis() {
        Some(analysis) => {
            let errors = app.document().map(|d| d.error_count()).unwrap_or(0);
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("Note : {}/40", analysis.score),
                    Style::default()
                        .fg(score_color(analysis.score_band(), theme))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} passage(s) à retravailler", errors),
                    Style::default().fg(theme.subtext),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "r bilan complet | c correction",
                    Style::default().fg(theme.subtext),
                )),
            ])
        }
        None => Paragraph::new("Pas encore de bilan.\n(a pour charger la réponse du coach)")
            .style(Style::default().fg(theme.subtext).add_modifier(Modifier::ITALIC))
            .wrap(Wrap { trim: true }),
    };

    frame.render_widget(paragraph.block(block), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mode_str = match app.mode {
        Mode::Normal => "NORMAL",
        Mode::Insert => "ÉCRITURE",
        Mode::Input => "SAISIE",
        Mode::Report => "BILAN",
        Mode::Correction => "CORRECTION",
        Mode::Toolkit => "BOÎTE À OUTILS",
        Mode::Inspiration => "INSPIRATION",
        Mode::Help => "AIDE",
    };

    let status = app.status_message.as_deref().unwrap_or("");

    let help_hint = "i écrire | a bilan | c correction | B outils | I inspiration | ? aide";

    let status_text = format!(
        " {} | {}",
        mode_str,
        if status.is_empty() { help_hint } else { status },
    );

    let status_bar =
        Paragraph::new(status_text).style(Style::default().fg(theme.subtext).bg(theme.surface0));

    frame.render_widget(status_bar, area);
}

fn score_color(band: ScoreBand, theme: &Theme) -> Color {
    match band {
        ScoreBand::Strong => theme.green,
        ScoreBand::Solid => theme.blue,
        ScoreBand::Fragile => theme.yellow,
    }
}

fn draw_report(frame: &mut Frame, app: &App, theme: &Theme) {
    let Some(analysis) = app.analysis() else {
        return;
    };

    let area = centered_rect(70, 24, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.blue))
        .title(format!("Ton bilan pédagogique - {}/40", analysis.score));

    let mut lines = vec![
        Line::from(Span::styled(
            "Le mot du coach",
            Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("\"{}\"", analysis.summary),
            Style::default().fg(theme.text).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Ce qui est réussi",
            Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
        )),
    ];
    for strength in &analysis.strengths {
        lines.push(Line::from(format!("  ✓ {}", strength)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tes prochains défis",
        Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
    )));
    for improvement in &analysis.improvements {
        lines.push(Line::from(format!("  ! {}", improvement)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Mes conseils",
        Style::default().fg(theme.teal).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!("  Organisation : {}", analysis.advice.organization)));
    lines.push(Line::from(format!("  Vocabulaire : {}", analysis.advice.vocabulary)));
    lines.push(Line::from(format!("  Grammaire : {}", analysis.advice.grammar)));
    lines.push(Line::from(format!("  Style : {}", analysis.advice.style)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "c correction autonome | y copier le texte | Échap fermer",
        Style::default().fg(theme.subtext),
    )));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_correction_overlay(frame: &mut Frame, app: &App, theme: &Theme) {
    let Some(doc) = app.document() else {
        return;
    };

    let frame_area = frame.area();
    let area = centered_rect(
        frame_area.width.saturating_sub(8).max(40),
        frame_area.height.saturating_sub(4).max(12),
        frame_area,
    );
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.mauve))
        .title("Mode Correction Autonome");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Annotated text
            Constraint::Length(36), // Hint panel
        ])
        .split(inner);

    draw_annotated_text(frame, app, theme, chunks[0]);
    draw_hint_panel(frame, app, theme, chunks[1]);
}

fn draw_annotated_text(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let Some(session) = &app.session else {
        return;
    };
    let selected = session.selection.selected_id();

    // Segment contents may span lines; rebuild the line structure while
    // keeping one style per segment.
    let mut lines: Vec<Line> = Vec::new();
    let mut spans: Vec<Span> = Vec::new();

    for segment in session.document.segments() {
        let style = match segment {
            Segment::Text(_) => Style::default().fg(theme.text),
            Segment::Error(err) => {
                let meta = DisplayMeta::for_kind(&err.error_type);
                let mut style = Style::default()
                    .fg(token_color(meta.color_token, theme))
                    .add_modifier(Modifier::UNDERLINED);
                if selected == Some(err.id) {
                    style = style.bg(theme.surface1).add_modifier(Modifier::BOLD);
                }
                style
            }
        };

        for (i, part) in segment.content().split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            if !part.is_empty() {
                spans.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines.push(Line::from(spans));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.subtext))
        .title("Ton texte annoté");

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_hint_panel(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Hint
            Constraint::Length(4), // Legend
        ])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.subtext))
        .title("Le coin des indices");

    let paragraph = match app.selected_error() {
        Some(err) => {
            let meta = DisplayMeta::for_kind(&err.error_type);
            let color = token_color(meta.color_token, theme);
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("[{}]", meta.label),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("\"{}\"", err.content),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled("Indice", Style::default().fg(theme.subtext))),
                Line::from(Span::styled(
                    err.hint.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::ITALIC),
                )),
                Line::from(""),
                Line::from(Span::styled("Réflexion", Style::default().fg(theme.mauve))),
                Line::from(Span::styled(err.guidance.clone(), Style::default().fg(theme.text))),
            ])
            .wrap(Wrap { trim: true })
        }
        None => Paragraph::new(
            "Choisis une erreur avec n/p pour obtenir de l'aide sans avoir la réponse !",
        )
        .style(Style::default().fg(theme.subtext).add_modifier(Modifier::ITALIC))
        .wrap(Wrap { trim: true }),
    };

    frame.render_widget(paragraph.block(block), chunks[0]);

    let legend = Paragraph::new(vec![
        Line::from(Span::styled(
            "● Grammaire & Orthographe",
            Style::default().fg(theme.red),
        )),
        Line::from(Span::styled(
            "● Vocabulaire & Lexique",
            Style::default().fg(theme.green),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.subtext))
            .title("Légende"),
    );
    frame.render_widget(legend, chunks[1]);
}

fn draw_toolkit(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = centered_rect(72, 20, frame.area());
    frame.render_widget(Clear, area);

    let tab = app.toolkit_tab;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.green))
        .title(format!("Boîte à outils - {} (Tab pour changer)", tab.label()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(inner);

    let selected = app.current_toolkit_entry();
    let list: Vec<Line> = toolkit::entries(tab)
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == app.toolkit_index {
                Style::default().fg(theme.green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(Span::styled(entry.title, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(list), chunks[0]);

    let mut detail = vec![
        Line::from(Span::styled(
            selected.title,
            Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            selected.summary,
            Style::default().fg(theme.subtext).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];
    for line in selected.body {
        detail.push(Line::from(Span::styled(*line, Style::default().fg(theme.text))));
    }

    let paragraph = Paragraph::new(detail).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[1]);
}

fn draw_inspiration(frame: &mut Frame, app: &App, theme: &Theme) {
    let frame_area = frame.area();
    let area = centered_rect(
        frame_area.width.saturating_sub(8).max(50),
        frame_area.height.saturating_sub(4).max(16),
        frame_area,
    );
    frame.render_widget(Clear, area);

    let card = app.current_inspiration();
    let (text, author, source) = app.inspiration_passage();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.mauve))
        .title(format!(
            "Bibliothèque d'Inspiration - {} (h/l thème, e extrait)",
            card.title
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .split(inner);

    let mut passage = vec![
        Line::from(Span::styled(
            format!("{} - {}", author, source),
            Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for part in text.split('\n') {
        passage.push(Line::from(Span::styled(
            part.to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::ITALIC),
        )));
    }

    let paragraph = Paragraph::new(passage).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.subtext))
            .title(card.desc),
    );
    frame.render_widget(paragraph, chunks[0]);

    let mut tips = vec![Line::from(Span::styled(
        "Conseils d'écriture",
        Style::default().fg(theme.teal).add_modifier(Modifier::BOLD),
    ))];
    for (i, tip) in card.tips.iter().enumerate() {
        tips.push(Line::from(""));
        tips.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, tip),
            Style::default().fg(theme.text),
        )));
    }
    tips.push(Line::from(""));
    tips.push(Line::from(Span::styled(
        "y copier le texte | g prompt variante IA",
        Style::default().fg(theme.subtext),
    )));

    let tips_panel = Paragraph::new(tips).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.subtext))
            .title("Pour réussir ce genre"),
    );
    frame.render_widget(tips_panel, chunks[1]);
}

fn draw_input_dialog(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = centered_rect(60, 5, frame.area());
    frame.render_widget(Clear, area);

    let title = match app.input_target {
        InputTarget::ImportDraft => "Fichier texte à importer",
        InputTarget::LoadAnalysis => "Fichier JSON du bilan",
        InputTarget::LoadConsigne => "Fichier JSON du sujet",
        InputTarget::ConsigneTheme => "Thème du sujet à générer",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.green))
        .title(title);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input =
        Paragraph::new(format!("{}_", app.input_buffer)).style(Style::default().fg(theme.text));
    frame.render_widget(input, inner);
}

fn draw_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(62, 28, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.blue))
        .title("Aide (une touche pour fermer)");

    let bold = Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(Span::styled("Écriture", bold)),
        Line::from("  i        Mode écriture (Échap pour sortir)"),
        Line::from("  h/j/k/l  Déplacer le curseur"),
        Line::from("  g/G      Début / fin du texte"),
        Line::from("  o        Importer un fichier texte"),
        Line::from("  X        Tout effacer"),
        Line::from(""),
        Line::from(Span::styled("Bilan", bold)),
        Line::from("  s        Charger un sujet (JSON)"),
        Line::from("  S        Générer un sujet (prompt sur un thème)"),
        Line::from("  p        Exporter le prompt d'analyse"),
        Line::from("  a        Charger le bilan du coach (JSON)"),
        Line::from("  r        Afficher le bilan complet"),
        Line::from("  E        Exporter le bilan (JSON)"),
        Line::from(""),
        Line::from(Span::styled("Correction autonome", bold)),
        Line::from("  c        Ouvrir l'atelier de correction"),
        Line::from("  n/p      Erreur suivante / précédente"),
        Line::from("  y        Copier le texte (m change brut/visible)"),
        Line::from(""),
        Line::from(Span::styled("Ressources", bold)),
        Line::from("  B        Boîte à outils (Tab imagination/réflexion)"),
        Line::from("  I        Bibliothèque d'inspiration"),
        Line::from(""),
        Line::from(Span::styled(
            "  t astuce | T thème | q quitter",
            Style::default().fg(theme.subtext),
        )),
    ];

    let paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(theme.text))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keeps_cursor_in_window() {
        // Cursor inside the window: no scrolling
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);

        // Cursor past the window: window slides so the cursor is the last cell
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);

        // A long line scrolls horizontally the same way
        let col = 120;
        let visible = 40;
        let offset = scroll_offset(col, visible);
        assert!(col - offset < visible);
        assert_eq!(col - offset, visible - 1);
    }

    #[test]
    fn test_scroll_tolerates_zero_sized_pane() {
        assert_eq!(scroll_offset(5, 0), 0);
    }
}
