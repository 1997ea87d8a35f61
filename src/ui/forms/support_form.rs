//! Contact support form rendering

use super::field_renderer::{draw_tag_selector, draw_text_field};
use crate::app::App;
use crate::state::{FieldName, Focus, FormStatus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact support card
pub fn draw_support_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " Contact support ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Subtitle
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Tag
            Constraint::Min(5),                // Description
            Constraint::Length(1),             // Status line
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .horizontal_margin(1)
        .split(inner);

    let subtitle = Paragraph::new(
        "Share as many details as possible so we can respond quickly and effectively.",
    )
    .style(Style::default().fg(Color::Gray))
    .wrap(Wrap { trim: true });
    frame.render_widget(subtitle, chunks[0]);

    let form = &app.state.form;
    let focus = app.state.focus;

    for (field, area) in [
        (FieldName::Name, chunks[1]),
        (FieldName::Email, chunks[2]),
        (FieldName::Description, chunks[4]),
    ] {
        draw_text_field(
            frame,
            area,
            field,
            form.value(field),
            focus.field() == Some(field),
        );
    }

    draw_tag_selector(
        frame,
        chunks[3],
        form.value(FieldName::Tag),
        focus == Focus::Tag,
    );

    if let Some(status) = form.status() {
        let color = match status {
            FormStatus::Incomplete => Color::Red,
            FormStatus::Sent => Color::Green,
        };
        let line = Paragraph::new(Line::from(Span::styled(
            form.status_message(),
            Style::default().fg(color),
        )));
        frame.render_widget(line, chunks[5]);
    }

    let button_area = Rect {
        width: chunks[6].width.min(24),
        ..chunks[6]
    };
    render_button(
        frame,
        button_area,
        "Submit request",
        focus == Focus::Submit,
        form.is_valid(),
    );
}
