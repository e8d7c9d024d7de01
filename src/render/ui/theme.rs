//! Color theme and styling definitions using ratatui colors
//!
//! This module provides color themes for terminal rendering using ratatui's
//! color system directly to avoid unnecessary abstractions.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTheme {
    /// Normal text color (None uses terminal default)
    pub normal_text: Option<Color>,

    /// Screen title / welcome line
    pub header: Style,

    /// Labels in front of input fields
    pub field_label: Color,

    /// Input field that currently receives keystrokes
    pub focused_field: Style,

    /// Company name in a result line
    pub result_name: Style,

    /// Footer background
    pub status_bg: Color,

    /// Footer text
    pub status_fg: Color,

    /// Error banner text
    pub error_text: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            normal_text: None,
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            field_label: Color::Gray,
            focused_field: Style::default().fg(Color::Black).bg(Color::Yellow),
            result_name: Style::default().add_modifier(Modifier::BOLD),
            status_bg: Color::Blue,
            status_fg: Color::White,
            error_text: Color::Red,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            normal_text: None,
            header: Style::default().add_modifier(Modifier::BOLD),
            field_label: Color::White,
            focused_field: Style::default().fg(Color::Black).bg(Color::White),
            result_name: Style::default().add_modifier(Modifier::BOLD),
            status_bg: Color::Black,
            status_fg: Color::White,
            error_text: Color::White,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            normal_text: Some(Color::White),
            header: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            field_label: Color::LightGreen,
            focused_field: Style::default().fg(Color::LightYellow).bg(Color::Black),
            result_name: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            status_bg: Color::White,
            status_fg: Color::Black,
            error_text: Color::LightRed,
        }
    }

    /// Look up a theme by its settings name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "monochrome" => Some(Self::monochrome()),
            "high-contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }
}
