//! Interactive catalog browser: type to filter, Tab to cycle the tag
//! facet, `t` to cycle the persisted theme.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Terminal;

use curio_core::{Session, Theme};

use crate::theme::ThemeFile;

pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

pub struct RealEventSource;

impl EventSource for RealEventSource {
    fn poll(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

#[derive(Clone, Copy)]
struct Palette {
    border_fg: Color,
    text_fg: Color,
    help_fg: Color,
    highlight_fg: Color,
    highlight_bg: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Unset => Palette {
            border_fg: Color::Gray,
            text_fg: Color::Reset,
            help_fg: Color::Yellow,
            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
        },
        Theme::Dark => Palette {
            border_fg: Color::DarkGray,
            text_fg: Color::White,
            help_fg: Color::Cyan,
            highlight_fg: Color::Black,
            highlight_bg: Color::LightBlue,
        },
        Theme::Light => Palette {
            border_fg: Color::Black,
            text_fg: Color::Black,
            help_fg: Color::Blue,
            highlight_fg: Color::White,
            highlight_bg: Color::Blue,
        },
    }
}

pub fn run_browser(
    session: &mut Session,
    themes: &ThemeFile,
    alt_screen: bool,
) -> Result<Option<String>> {
    let mut es = RealEventSource;
    run_browser_with(session, themes, &mut es, true, alt_screen)
}

pub fn run_browser_with(
    session: &mut Session,
    themes: &ThemeFile,
    es: &mut dyn EventSource,
    draw: bool,
    alt_screen: bool,
) -> Result<Option<String>> {
    // Hydrate the persisted theme before anything is shown.
    let mut theme = themes.load();

    let mut terminal = if draw {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if alt_screen {
            crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        }
        let backend = CrosstermBackend::new(stdout);
        Some(Terminal::new(backend)?)
    } else {
        None
    };

    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Normal,
        Query,
    }
    let mut mode = Mode::Normal;
    let mut query = String::new();
    // index into session.tags(); None is the unselected facet
    let mut tag_idx: Option<usize> = None;
    let mut selected = 0usize;
    let mut picked: Option<String> = None;

    loop {
        let matches = session.matches();
        if selected >= matches.len() {
            selected = matches.len().saturating_sub(1);
        }

        if let Some(ref mut term) = terminal {
            let pal = palette(theme);
            let total = session.items().len();
            let tag_label = session
                .filter()
                .tag
                .clone()
                .unwrap_or_else(|| "all".into());
            term.draw(|f| {
                let size = f.area();
                let chunks = if mode == Mode::Query {
                    Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Length(3), // search bar (only in search mode)
                            Constraint::Min(5),    // grid
                            Constraint::Length(3), // shortcuts/status
                        ])
                        .split(size)
                } else {
                    Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Min(5), Constraint::Length(3)])
                        .split(size)
                };

                if mode == Mode::Query {
                    let q = Paragraph::new(query.as_str()).block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Search — type to filter")
                            .border_style(Style::default().fg(pal.border_fg)),
                    );
                    f.render_widget(q, chunks[0]);
                }

                let title = format!("Catalog — {}/{} — Tag: {}", matches.len(), total, tag_label);
                let list_area_idx = if mode == Mode::Query { 1 } else { 0 };
                if matches.is_empty() {
                    // Empty-state indicator: shown exactly when nothing matches.
                    let empty = Paragraph::new("No items match the current filters.")
                        .style(Style::default().fg(pal.text_fg).add_modifier(Modifier::DIM))
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .title(title)
                                .border_style(Style::default().fg(pal.border_fg)),
                        );
                    f.render_widget(empty, chunks[list_area_idx]);
                } else {
                    let list_items: Vec<ListItem> = matches
                        .iter()
                        .map(|it| {
                            let subtitle: Vec<&str> =
                                [it.brand.as_deref(), it.model.as_deref()]
                                    .into_iter()
                                    .flatten()
                                    .filter(|s| !s.is_empty())
                                    .collect();
                            let line1 = if subtitle.is_empty() {
                                it.name.clone()
                            } else {
                                format!("{} — {}", it.name, subtitle.join(" · "))
                            };
                            let mut meta = it.tags.join(", ");
                            if let Some(n) = it.notes.as_deref().filter(|s| !s.is_empty()) {
                                if meta.is_empty() {
                                    meta = preview(n);
                                } else {
                                    meta = format!("{} • {}", meta, preview(n));
                                }
                            }
                            ListItem::new(vec![
                                Line::from(line1).style(Style::default().fg(pal.text_fg)),
                                Line::from(meta)
                                    .style(Style::default().add_modifier(Modifier::DIM)),
                            ])
                        })
                        .collect();
                    let list = List::new(list_items)
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .title(title)
                                .border_style(Style::default().fg(pal.border_fg)),
                        )
                        .highlight_style(
                            Style::default()
                                .fg(pal.highlight_fg)
                                .bg(pal.highlight_bg)
                                .add_modifier(Modifier::REVERSED),
                        );
                    f.render_stateful_widget(
                        list,
                        chunks[list_area_idx],
                        &mut ratatui::widgets::ListState::default().with_selected(Some(selected)),
                    );
                }

                let footer = Paragraph::new(vec![
                    Line::raw("/ search | Tab tag facet | t theme | Enter select"),
                    Line::raw(format!(
                        "Esc/q quit | ↑/↓ move | theme: {}",
                        theme.name()
                    )),
                ])
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Shortcuts")
                        .border_style(Style::default().fg(pal.border_fg)),
                )
                .style(Style::default().fg(pal.help_fg))
                .wrap(Wrap { trim: true });
                let footer_area_idx = if mode == Mode::Query { 2 } else { 1 };
                f.render_widget(footer, chunks[footer_area_idx]);
            })?;
        }

        if let Some(ev) = es.poll(Duration::from_millis(100))? {
            match ev {
                Event::Key(k) if k.kind == KeyEventKind::Press => match k.code {
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Esc => {
                        if mode == Mode::Query {
                            mode = Mode::Normal;
                        } else {
                            break;
                        }
                    }
                    KeyCode::Enter => {
                        if mode == Mode::Query {
                            mode = Mode::Normal;
                        } else {
                            picked = session.matches().get(selected).map(|it| it.name.clone());
                            break;
                        }
                    }
                    KeyCode::Tab => {
                        // Cycle the tag facet: unselected, then each tag in
                        // sorted order, then back to unselected.
                        let tags = session.tags().to_vec();
                        tag_idx = match tag_idx {
                            None if tags.is_empty() => None,
                            None => Some(0),
                            Some(i) if i + 1 < tags.len() => Some(i + 1),
                            Some(_) => None,
                        };
                        session.set_tag(tag_idx.map(|i| tags[i].clone()));
                        selected = 0;
                    }
                    KeyCode::Up => selected = selected.saturating_sub(1),
                    KeyCode::Down => {
                        if selected + 1 < session.matches().len() {
                            selected += 1;
                        }
                    }
                    KeyCode::Char('/') if mode == Mode::Normal => mode = Mode::Query,
                    KeyCode::Char('q') if mode == Mode::Normal => break,
                    KeyCode::Char('t') if mode == Mode::Normal => {
                        theme = themes.toggle();
                    }
                    KeyCode::Char(ch) if mode == Mode::Query => {
                        query.push(ch);
                        session.set_query(query.clone());
                        selected = 0;
                    }
                    KeyCode::Backspace if mode == Mode::Query => {
                        query.pop();
                        session.set_query(query.clone());
                        selected = 0;
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }

    if draw {
        disable_raw_mode()?;
        if alt_screen {
            crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
        }
    }
    Ok(picked)
}

fn preview(s: &str) -> String {
    let s = s.replace('\n', " ");
    const MAX: usize = 60;
    if s.chars().count() > MAX {
        format!("{}…", s.chars().take(MAX).collect::<String>())
    } else {
        s
    }
}
