//! Terminal UI implementation using ratatui
//!
//! Draws a [`ScreenState`] with ratatui and owns the crossterm terminal lifecycle. It holds no
//! browsing state of its own.

use crate::error::{Result, ShelfError};
use crate::render::ui::state::{ScreenState, SearchField};
use crate::render::ui::{ColorTheme, UIRenderer};
use crate::theme::ThemeMode;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

const NO_RESULTS: &str = "No results found. Your filters might be a little too narrow.";
const HINTS: &str = " /: search  t: theme  m: show more  enter: open  q: quit";

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Ok(Self { terminal: None })
    }

    /// Draw a full frame. Overlays stack in reverse focus order so the focused one ends on top.
    pub fn draw_screen(frame: &mut Frame, screen: &ScreenState) {
        let theme = ColorTheme::from_tokens(screen.tokens);
        let size = frame.size();

        frame.render_widget(Block::default().style(theme.normal_text), size);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ]
                .as_ref(),
            )
            .split(size);

        Self::render_header(frame, chunks[0], &theme);
        Self::render_list(frame, chunks[1], screen, &theme);
        Self::render_show_more(frame, chunks[2], screen, &theme);
        Self::render_status(frame, chunks[3], screen, &theme);

        if screen.detail_open {
            Self::render_detail(frame, size, screen, &theme);
        }
        if screen.settings_open {
            Self::render_settings(frame, size, screen, &theme);
        }
        if screen.search_open {
            Self::render_search(frame, size, screen, &theme);
        }
    }

    fn render_header(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
        let header = Line::from(vec![
            Span::styled(" shelfview ", theme.selection),
            Span::styled(HINTS, theme.muted_text),
        ]);
        frame.render_widget(Paragraph::new(header).style(theme.normal_text), area);
    }

    fn render_list(frame: &mut Frame, area: Rect, screen: &ScreenState, theme: &ColorTheme) {
        let shown = screen.previews.len();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .title(format!(" Books {}/{} ", shown, shown + screen.remaining))
            .style(theme.normal_text);

        if screen.no_results_visible {
            let message = Paragraph::new(NO_RESULTS)
                .style(theme.message)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = screen
            .previews
            .iter()
            .map(|preview| {
                ListItem::new(vec![
                    Line::from(preview.title.as_str()),
                    Line::from(Span::styled(
                        format!("  {}", preview.author_name),
                        theme.muted_text,
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .style(theme.normal_text)
            .highlight_style(theme.selection)
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(screen.list_cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_show_more(frame: &mut Frame, area: Rect, screen: &ScreenState, theme: &ColorTheme) {
        let style = if screen.show_more_enabled() {
            theme.accent
        } else {
            theme.disabled
        };
        let button = Paragraph::new(format!(" {}", screen.show_more_label())).style(style);
        frame.render_widget(button, area);
    }

    fn render_status(frame: &mut Frame, area: Rect, screen: &ScreenState, theme: &ColorTheme) {
        let text = screen.status.as_deref().unwrap_or("");
        frame.render_widget(Paragraph::new(format!(" {text}")).style(theme.status), area);
    }

    fn render_search(frame: &mut Frame, area: Rect, screen: &ScreenState, theme: &ColorTheme) {
        let form = &screen.search_form;
        let popup = centered_rect(60, 9, area);
        let field_style = |field: SearchField| {
            if form.field == field {
                theme.accent
            } else {
                theme.normal_text
            }
        };
        let cursor = if form.field == SearchField::Title { "_" } else { "" };

        let lines = vec![
            Line::from(vec![
                Span::styled("Title:  ", field_style(SearchField::Title)),
                Span::raw(format!("{}{}", form.title, cursor)),
            ]),
            Line::from(vec![
                Span::styled("Author: ", field_style(SearchField::Author)),
                Span::raw(format!("< {} >", form.author.label())),
            ]),
            Line::from(vec![
                Span::styled("Genre:  ", field_style(SearchField::Genre)),
                Span::raw(format!("< {} >", form.genre.label())),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "tab: next field  arrows: change  enter: search  esc: cancel",
                theme.muted_text,
            )),
        ];

        Self::render_popup(frame, popup, " Search ", lines, theme);
    }

    fn render_settings(frame: &mut Frame, area: Rect, screen: &ScreenState, theme: &ColorTheme) {
        let popup = centered_rect(50, 6, area);
        let label = match screen.settings_form.mode {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        let lines = vec![
            Line::from(vec![
                Span::styled("Theme: ", theme.accent),
                Span::raw(format!("< {label} >")),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "arrows: change  enter: save  esc: cancel",
                theme.muted_text,
            )),
        ];

        Self::render_popup(frame, popup, " Settings ", lines, theme);
    }

    fn render_detail(frame: &mut Frame, area: Rect, screen: &ScreenState, theme: &ColorTheme) {
        let Some(detail) = &screen.detail else {
            return;
        };

        // Dimmed backdrop standing in for the blurred cover
        frame.render_widget(
            Block::default()
                .title_bottom(format!(" {} ", detail.backdrop))
                .style(theme.disabled),
            area,
        );

        let popup = centered_rect(70, 14, area);
        let lines = vec![
            Line::from(Span::styled(detail.subtitle.as_str(), theme.muted_text)),
            Line::from(Span::styled(
                format!("Cover: {}", detail.image),
                theme.muted_text,
            )),
            Line::from(""),
            Line::from(detail.description.as_str()),
            Line::from(""),
            Line::from(Span::styled("esc: close", theme.muted_text)),
        ];

        let title = format!(" {} ", detail.title);
        Self::render_popup(frame, popup, &title, lines, theme);
    }

    fn render_popup(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        lines: Vec<Line>,
        theme: &ColorTheme,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent)
            .title(title.to_string())
            .style(theme.normal_text);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

/// Label a failed terminal call as a UI error.
fn terminal_error(action: &'static str) -> impl FnOnce(io::Error) -> ShelfError {
    move |err| ShelfError::ui(format!("{action}: {err}"))
}

/// A rectangle `percent_x` wide and `height` rows tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * percent_x as u32 / 100) as u16;
    let width = width.max(20).min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, screen: &ScreenState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            terminal
                .draw(|frame| Self::draw_screen(frame, screen))
                .map_err(terminal_error("drawing frame"))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode().map_err(terminal_error("enabling raw mode"))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(terminal_error("entering alternate screen"))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(terminal_error("creating terminal"))?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode().map_err(terminal_error("disabling raw mode"))?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
                .map_err(terminal_error("leaving alternate screen"))?;
            self.terminal = None;
        }
        Ok(())
    }

    fn terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()
            .map_err(terminal_error("reading terminal size"))?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
