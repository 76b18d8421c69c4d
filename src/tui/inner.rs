// src/tui/inner.rs  —  ratatui layout for every screen and overlay
use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use crate::app::App;
use crate::carousel::{Carousel, TAG_KEYS};
use crate::i18n::{LanguageCode, Localization};
use crate::screens::details::{DetailsScreen, Focus, DATE_FORMAT};
use crate::screens::wizard::{Overlay, WizardScreen};
use crate::screens::{Key, Screen};
use std::io::stdout;
use std::time::Instant;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen)?;
        let backend  = CrosstermBackend::new(out);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn cleanup(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }

    pub fn draw(&mut self, app: &App) -> Result<()> {
        self.terminal.draw(|f| render(f, app))?;
        Ok(())
    }
}

/// crossterm key → app key; keys the app has no use for map to None
pub fn key_from_event(k: &KeyEvent) -> Option<Key> {
    Some(match k.code {
        // Ctrl/Alt chords never type text
        KeyCode::Char(_) if k.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => return None,
        KeyCode::Char(c)   => Key::Char(c),
        KeyCode::Enter     => Key::Enter,
        KeyCode::Esc       => Key::Esc,
        KeyCode::Tab       => Key::Tab,
        KeyCode::BackTab   => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Left      => Key::Left,
        KeyCode::Right     => Key::Right,
        KeyCode::Up        => Key::Up,
        KeyCode::Down      => Key::Down,
        _ => return None,
    })
}

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    let t = app.i18n();

    if let Screen::Splash(s) = app.screen() {
        render_splash(f, area, s.remaining(Instant::now()).as_secs());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header / language label
            Constraint::Min(8),     // screen body
            Constraint::Length(3),  // footer hints
        ])
        .split(area);

    // ── Header ────────────────────────────────────────────────────────────
    let header = Paragraph::new(format!(
        " {}  |  {}  |  {} ▾",
        t.t("app.title"), app.flow().current().route, t.lang_name()
    ))
    .style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, chunks[0]);

    // ── Body + footer ─────────────────────────────────────────────────────
    let footer_text = match app.screen() {
        Screen::Splash(_) => String::new(),
        Screen::Wizard(w) => {
            render_wizard(f, chunks[1], w, app);
            let mut hint = String::new();
            if w.step().number() > 1 { hint.push_str(&format!(" ← {}  ", t.t("nav.previous"))); }
            hint.push_str(&format!(" → {}   i = image   l = language   Esc = quit", t.t("nav.next")));
            hint
        }
        Screen::Details(d) => {
            render_details(f, chunks[1], d, app);
            format!(" Tab = field   on {}: Enter = pick  ← {}  → {}   Esc = quit",
                t.t("details.date"), t.t("nav.previous"), t.t("nav.next"))
        }
        Screen::Showcase(s) => {
            render_carousel(f, chunks[1], s.carousel(), t);
            format!(" ←/→ swipe   p = {}   f = {}   Esc = quit", t.t("nav.previous"), t.t("nav.finish"))
        }
        Screen::Home(h) => {
            render_carousel(f, chunks[1], h.carousel(), t);
            format!(" ←/→ swipe   e = {}   Esc = quit", t.t("nav.edit"))
        }
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray).bg(Color::Black));
    f.render_widget(footer, chunks[2]);
}

fn render_splash(f: &mut Frame, area: Rect, secs_left: u64) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("SnapLog", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("Developed By: Nahji Nuzaf", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            format!("Version: {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled("·".repeat(secs_left as usize + 1), Style::default().fg(Color::DarkGray))),
    ];
    let p = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(p, centered(area, 60, 8));
}

fn render_wizard(f: &mut Frame, area: Rect, w: &WizardScreen, app: &App) {
    let t = app.i18n();
    let slot = app.form().data().image(w.step().slot);
    let preview = match slot {
        Some(uri) => Span::styled(uri.to_string(), Style::default().fg(Color::Green)),
        None      => Span::styled(t.t("wizard.selectFromGallery").to_string(), Style::default().fg(Color::DarkGray)),
    };
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{}  ({}/3)", t.t(w.title_key()), w.step().number()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(preview),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Yellow)))
    .wrap(Wrap { trim: true });
    f.render_widget(body, area);

    match w.overlay() {
        Overlay::None => {}
        Overlay::LanguageMenu { cursor } => {
            let lines: Vec<Line> = LanguageCode::ALL.iter().enumerate()
                .map(|(i, l)| menu_line(l.native_name(), i == *cursor))
                .collect();
            popup(f, area, t.t("lang.select"), lines, Color::Cyan);
        }
        Overlay::Gallery(sheet) if sheet.items.is_empty() => {
            let lines = vec![Line::from(t.t("gallery.empty").to_string())];
            popup(f, area, t.t("gallery.title"), lines, Color::Green);
        }
        Overlay::Gallery(sheet) => {
            let height = u16::try_from(sheet.items.len()).unwrap_or(u16::MAX).saturating_add(2).min(area.height);
            let rect   = centered(area, 70, height);
            let items: Vec<ListItem> = sheet.items.iter()
                .map(|uri| ListItem::new(uri.as_str()))
                .collect();
            let list = List::new(items)
                .block(Block::default()
                    .title(format!(" {} ", t.t("gallery.title")))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)))
                .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow))
                .highlight_symbol("> ");
            // List scrolls its window so the selected row stays on screen
            let mut state = ListState::default().with_selected(Some(sheet.cursor));
            f.render_widget(Clear, rect);
            f.render_stateful_widget(list, rect, &mut state);
        }
        Overlay::PermissionDenied => {
            let lines = vec![
                Line::from(t.t("perm.message").to_string()),
                Line::from(""),
                Line::from(format!("[ {} ]", t.t("notice.ok"))),
            ];
            popup(f, area, t.t("perm.denied"), lines, Color::Red);
        }
    }
}

fn render_details(f: &mut Frame, area: Rect, d: &DetailsScreen, app: &App) {
    let t    = app.i18n();
    let data = app.form().data();
    let date = data.date.format(DATE_FORMAT).to_string();
    let rows = [
        (Focus::Location,    t.t("details.location"),    data.location.as_str()),
        (Focus::Description, t.t("details.description"), data.description.as_str()),
        (Focus::Date,        t.t("details.date"),        date.as_str()),
    ];
    let mut lines = vec![
        Line::from(Span::styled(t.t("details.title").to_string(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    for (focus, label, value) in rows {
        let style = if d.focus() == focus {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<14}"), style),
            Span::raw(value.to_string()),
        ]));
    }
    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Yellow)))
        .wrap(Wrap { trim: false });
    f.render_widget(body, area);

    if let Some(picker) = d.picker() {
        let lines = vec![
            Line::from(Span::styled(
                picker.value.format(DATE_FORMAT).to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("←/→ day   ↑/↓ week   Enter = OK   Esc = cancel"),
        ];
        popup(f, area, t.t("details.date"), lines, Color::Cyan);
    }
}

fn render_carousel(f: &mut Frame, area: Rect, c: &Carousel, t: &Localization) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let dots: String = (0..c.len()).map(|i| if i == c.index() { '●' } else { '○' }).collect();
    let page = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(c.current().unwrap_or_default().to_string(), Style::default().fg(Color::Green))),
        Line::from(""),
        Line::from(format!("{}   {}/{}", dots, c.index() + 1, c.len())),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title(format!(" {} ", t.t("showcase.title"))).borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    f.render_widget(page, chunks[0]);

    let tags: Vec<Span> = TAG_KEYS.iter()
        .flat_map(|k| [
            Span::styled(format!(" {} ", t.t(k)), Style::default().fg(Color::Black).bg(Color::Gray)),
            Span::raw(" "),
        ])
        .collect();
    let tag_row = Paragraph::new(Line::from(tags))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(tag_row, chunks[1]);
}

fn menu_line(text: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(format!("> {text}"), Style::default().fg(Color::Black).bg(Color::Yellow)))
    } else {
        Line::from(format!("  {text}"))
    }
}

fn popup(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, color: Color) {
    let height = (lines.len() as u16).saturating_add(2).min(area.height);
    let rect = centered(area, 70, height);
    f.render_widget(Clear, rect);
    let p = Paragraph::new(lines)
        .block(Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)))
        .wrap(Wrap { trim: true });
    f.render_widget(p, rect);
}

/// `percent_x` of the width, `height` rows, centred in `area`
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width  = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
