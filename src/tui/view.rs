//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function; `render()` dispatches on
//! the current Screen variant. Every style comes from the palette
//! resolved for the active theme mode, so a toggle repaints everything.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::profile;
use crate::render::{CareerEntry, career_entries};

use super::state::{App, Screen};
use super::theme::Palette;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let palette = Palette::for_mode(app.theme.mode());
    let area = frame.area();

    // Paint the whole frame in the mode's base colors first
    frame.render_widget(Block::new().style(palette.base), area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_header(app, &palette, chunks[0].width), chunks[0]);
    frame.render_widget(render_help(&app.screen, &palette), chunks[2]);

    // Startup validation guarantees these resolve; an empty list would
    // only mean the validation path was bypassed.
    let entries = career_entries(&app.career, &app.strings, app.today).unwrap_or_default();

    match &app.screen {
        Screen::Home => render_home(app, &palette, frame, chunks[1]),
        Screen::Career { cursor } => {
            render_career(app, &entries, *cursor, &palette, frame, chunks[1]);
        }
        Screen::JobDetail { index } => {
            render_job_detail(&entries, *index, &palette, frame, chunks[1]);
        }
        Screen::Links { cursor } => render_links(app, *cursor, &palette, frame, chunks[1]),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Header: name, language tag, and the theme toggle icon with its
/// localized label. Narrow terminals get the short mark.
fn render_header(app: &App, palette: &Palette, width: u16) -> Paragraph<'static> {
    let label = if app.theme.mode().is_dark() {
        &app.strings.turn_lights_on
    } else {
        &app.strings.turn_lights_off
    };
    let name = if width < 60 { profile::SHORT_NAME } else { profile::NAME };

    Paragraph::new(Line::from(vec![
        Span::styled(name, palette.title),
        Span::styled("   ", palette.base),
        Span::styled(format!("[{}]", app.lang.tag()), palette.dim),
        Span::styled("   ", palette.base),
        Span::styled(app.icon.glyph(), palette.accent),
        Span::styled(" ", palette.base),
        Span::styled(format!("{label} [t]"), palette.dim),
    ]))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen, palette: &Palette) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Home => "[1-3] sections  [Enter] career  [t] theme  [l] language  [q] quit",
        Screen::Career { .. } => {
            "[j/k] move  [Enter] details  [Esc] back  [t] theme  [l] language  [q] quit"
        }
        Screen::JobDetail { .. } => "[Esc] back  [t] theme  [l] language  [q] quit",
        Screen::Links { .. } => "[j/k] move  [Esc] back  [t] theme  [l] language  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, palette.dim))
}

// ============================================================================
// SCREEN: HOME
// ============================================================================

fn render_home(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let strings = &app.strings;
    let mut lines = vec![Line::from("")];

    for intro_line in strings.introduction.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {intro_line}"),
            palette.title,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", strings.about),
        palette.body,
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("  {}", strings.principles.title),
        palette.heading,
    )));
    for principle in &strings.principles.principles {
        lines.push(Line::from(Span::styled(
            format!("    {}", principle.title),
            palette.body,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", strings.footer.under_construction),
        palette.dim,
    )));

    let paragraph = Paragraph::new(lines)
        .style(palette.base)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: CAREER
// ============================================================================

fn render_career(
    app: &App,
    entries: &[CareerEntry],
    cursor: usize,
    palette: &Palette,
    frame: &mut Frame,
    area: Rect,
) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", app.strings.career.title),
            palette.heading,
        )),
        Line::from(""),
    ];

    for (i, entry) in entries.iter().enumerate() {
        let title_style = if i == cursor { palette.cursor } else { palette.heading };
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.title),
            title_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {} - {}", entry.company, entry.location),
            palette.body,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.dates),
            palette.dim,
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .style(palette.base)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: JOB DETAIL
// ============================================================================

fn render_job_detail(
    entries: &[CareerEntry],
    index: usize,
    palette: &Palette,
    frame: &mut Frame,
    area: Rect,
) {
    let Some(entry) = entries.get(index) else {
        return;
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", entry.title), palette.heading)),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} - {}", entry.company, entry.location),
            palette.body,
        )),
        Line::from(Span::styled(format!("  {}", entry.dates), palette.body)),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} → {}", entry.start, entry.end),
            palette.dim,
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .style(palette.base)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: LINKS
// ============================================================================

fn render_links(app: &App, cursor: usize, palette: &Palette, frame: &mut Frame, area: Rect) {
    let strings = &app.strings;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", strings.footer.social_medias_title),
            palette.heading,
        )),
    ];

    let socials = profile::SOCIAL_MEDIAS.len();
    for (i, link) in profile::SOCIAL_MEDIAS.iter().enumerate() {
        lines.push(link_line(link, i == cursor, palette));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", strings.footer.techs_title),
        palette.heading,
    )));
    for (i, link) in profile::USED_TECHS.iter().enumerate() {
        lines.push(link_line(link, socials + i == cursor, palette));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", strings.footer.credits),
        palette.dim,
    )));

    let paragraph = Paragraph::new(lines)
        .style(palette.base)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn link_line(link: &profile::LabeledLink, focused: bool, palette: &Palette) -> Line<'static> {
    let name_style = if focused { palette.cursor } else { palette.accent };
    Line::from(vec![
        Span::styled(format!("    {}", link.name), name_style),
        Span::styled(format!("  {}", link.href), palette.dim),
    ])
}
