//! Field rendering utilities for forms

use crate::state::{tag_label, FieldName, TAG_OPTIONS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active))
}

/// Draw a text field, showing its placeholder while empty
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if value.is_empty() {
        let placeholder = Span::styled(
            field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        Paragraph::new(Line::from(vec![cursor, placeholder]))
    } else if field.is_multiline() {
        // split('\n') keeps a trailing empty line so the cursor follows a fresh newline
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(value, style), cursor]))
    };

    frame.render_widget(
        content
            .wrap(Wrap { trim: false })
            .block(field_block(field.label(), is_active)),
        area,
    );
}

/// Draw the tag selector with every option and the current one highlighted
pub fn draw_tag_selector(frame: &mut Frame, area: Rect, tag: &str, is_active: bool) {
    let mut spans = vec![];
    let known = TAG_OPTIONS.iter().any(|option| option.value == tag);

    if is_active {
        spans.push(Span::styled("‹ ", Style::default().fg(Color::Cyan)));
    }
    for (idx, option) in TAG_OPTIONS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if option.value == tag {
            Style::default()
                .fg(if is_active { Color::Cyan } else { Color::White })
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", option.label), style));
    }
    if !known {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", tag_label(tag)),
            Style::default().fg(Color::Yellow),
        ));
    }
    if is_active {
        spans.push(Span::styled(" ›", Style::default().fg(Color::Cyan)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block(FieldName::Tag.label(), is_active)),
        area,
    );
}
