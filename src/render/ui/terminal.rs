//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui
//! for cross-platform terminal interface. It only reads `ViewState`; all state changes
//! happen in the render coordinator.

use crate::error::Result;
use crate::render::ui::{ColorTheme, UIRenderer, ViewState};
use crate::session::ViewMode;
use crate::views::Form;
use ratatui::crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    fn base_style(theme: &ColorTheme) -> Style {
        match theme.normal_text {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        }
    }

    /// One line per field, the focused one highlighted and followed by a cursor block
    fn form_lines<'a>(form: &'a Form, theme: &ColorTheme) -> Vec<Line<'a>> {
        form.fields()
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let label = Span::styled(
                    format!("{:>9}: ", field.label()),
                    Style::default().fg(theme.field_label),
                );
                let value = if index == form.focus() {
                    Span::styled(format!("{}█", field.display_value()), theme.focused_field)
                } else {
                    Span::styled(field.display_value(), Self::base_style(theme))
                };
                Line::from(vec![label, value])
            })
            .collect()
    }

    fn render_body(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let mut lines = match view_state.active_view() {
            ViewMode::Login => Self::form_lines(view_state.screens.login.form(), theme),
            ViewMode::Register => Self::form_lines(view_state.screens.register.form(), theme),
            ViewMode::Search => Self::form_lines(view_state.screens.search.form(), theme),
        };

        if view_state.active_view() == ViewMode::Search {
            let search = &view_state.screens.search;
            if search.in_flight() > 0 {
                lines.push(Line::from(Span::styled(
                    "Searching...",
                    Style::default().fg(theme.field_label),
                )));
            }
            lines.push(Line::from(""));
            if let Some(heading) = search.results_heading() {
                lines.push(Line::from(Span::styled(heading, theme.header)));
            }
            for record in search.results() {
                lines.push(Line::from(vec![
                    Span::styled(record.nom_raison_sociale.as_str(), theme.result_name),
                    Span::styled(
                        format!(" - SIREN {} - Score {:.2}", record.siren, record.score),
                        Self::base_style(theme),
                    ),
                ]));
            }
        }

        let block = Block::default().borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_frame(frame: &mut Frame, view_state: &ViewState, theme: &ColorTheme) {
        let size = frame.size();

        // Header, error banner, body, footer
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ]
                .as_ref(),
            )
            .split(size);

        frame.render_widget(
            Paragraph::new(Span::styled(view_state.header(), theme.header)),
            chunks[0],
        );

        if let Some(message) = view_state.error_banner() {
            frame.render_widget(
                Paragraph::new(Span::styled(message, Style::default().fg(theme.error_text))),
                chunks[1],
            );
        }

        Self::render_body(frame, chunks[2], view_state, theme);

        let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        frame.render_widget(
            Paragraph::new(view_state.hints()).style(status_style),
            chunks[3],
        );
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;
            terminal.draw(|frame| Self::render_frame(frame, view_state, theme))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
