//! Layout components (hero header, footer, status bar)

use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Page regions, top to bottom
pub struct PageLayout {
    pub hero: Rect,
    pub card: Rect,
    pub footer: Rect,
}

/// Split the screen into hero, card and footer, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hero
            Constraint::Min(0),    // Card
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    PageLayout {
        hero: chunks[0],
        card: chunks[1],
        footer: chunks[2],
    }
}

/// Draw the hero header
pub fn draw_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " Support Tawba ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Tawba is a free, offline Islamic app built to help Muslims track and repay missed prayers.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Need a hand or have an idea to make Tawba better? Reach out through the support form and we will get back to you.",
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        },
    );
}

/// Draw the footer
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new("Made with care to support the Tawba community.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // Focus-specific hints
    let hints = get_focus_hints(app.state.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " Esc:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused element
fn get_focus_hints(focus: Focus) -> String {
    use crate::platform::{COPY_LINK_SHORTCUT, SUBMIT_SHORTCUT};

    let common = format!("{SUBMIT_SHORTCUT}:submit  {COPY_LINK_SHORTCUT}:copy link");
    match focus {
        Focus::Name | Focus::Email => format!("Tab:next  Enter:submit  {common}"),
        Focus::Tag => format!("←/→:change tag  Tab:next  {common}"),
        Focus::Description => format!("Tab:next  Enter:newline  {common}"),
        Focus::Submit => format!("Enter:submit  Tab:next  {COPY_LINK_SHORTCUT}:copy link"),
    }
}
