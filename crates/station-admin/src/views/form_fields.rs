//! Field rendering and editing keys shared by the login, register and entity forms

use crate::actions::{Action, FormAction, FormInput};
use crate::state::{FormId, FormState};
use crate::theme::Theme;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const LABEL_WIDTH: usize = 18;

/// Rows each field occupies: value line plus error line
pub const FIELD_HEIGHT: u16 = 2;

/// Editing keys common to every form
///
/// Tab/Down and BackTab/Up move focus, Enter submits, Ctrl+U clears the field.
pub fn editing_key(form: FormId, key: KeyEvent) -> Option<Action> {
    let input = match key.code {
        KeyCode::Enter => return Some(Action::Form(FormAction::Submit(form))),
        KeyCode::Tab | KeyCode::Down => FormInput::NextField,
        KeyCode::BackTab | KeyCode::Up => FormInput::PrevField,
        KeyCode::Backspace => FormInput::Backspace,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            FormInput::ClearField
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            FormInput::Char(c)
        }
        _ => return None,
    };
    Some(Action::Form(FormAction::Input(form, input)))
}

/// Render every field of `form` stacked from the top of `area`
pub fn render_fields(form: &FormState, theme: &Theme, area: Rect, f: &mut Frame) {
    let rows = Layout::vertical(
        form.fields
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT)),
    )
    .split(area);

    for (index, (field, row)) in form.fields.iter().zip(rows.iter()).enumerate() {
        let focused = index == form.focused;
        let value = if field.key.is_secret() {
            "•".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };

        let label_style = if focused {
            theme.text().add_modifier(Modifier::BOLD)
        } else {
            theme.text()
        };
        let value_style = if focused {
            Style::default().fg(theme.selected_fg).bg(theme.selected_bg)
        } else {
            theme.text()
        };

        let mut spans = vec![
            Span::styled(if focused { "> " } else { "  " }, theme.accent()),
            Span::styled(
                format!("{:width$}", format!("{}:", field.key.label()), width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(value, value_style),
        ];
        if focused {
            spans.push(Span::styled("▌", theme.accent()));
        }

        let error = field
            .error
            .as_deref()
            .map(|e| {
                Line::from(Span::styled(
                    format!("{:width$}{}", "", e, width = LABEL_WIDTH + 2),
                    theme.error(),
                ))
            })
            .unwrap_or_default();

        f.render_widget(Paragraph::new(vec![Line::from(spans), error]), *row);
    }
}

/// Height needed to render `form`
pub fn fields_height(form: &FormState) -> u16 {
    form.fields.len() as u16 * FIELD_HEIGHT
}

/// Area of `width` x `height` centered in `area`, clipped to it
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Bordered form panel: fields, an optional notice line under them, and key
/// hints in the bottom border
pub fn render_form_panel(
    title: &str,
    form: &FormState,
    notice: Option<Line>,
    hints: &[(&str, &str)],
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    let height = fields_height(form) + 5;
    let panel = centered(area, (area.width * 65 / 100).clamp(50, 80), height);
    f.render_widget(Clear, panel);

    let mut footer = vec![Span::raw(" ")];
    for (key, description) in hints {
        footer.push(Span::styled(*key, theme.key_hint()));
        footer.push(Span::styled(format!(" {}  ", description), theme.muted()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .title_style(theme.panel_title())
        .title_bottom(Line::from(footer))
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    let inner = block.inner(panel).inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    f.render_widget(block, panel);

    let [fields, notice_area] =
        Layout::vertical([Constraint::Length(fields_height(form)), Constraint::Min(0)]).areas(inner);
    render_fields(form, theme, fields, f);
    if let Some(notice) = notice {
        f.render_widget(Paragraph::new(notice), notice_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_is_clipped_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered(area, 80, 20), area);
    }

    #[test]
    fn test_ctrl_chars_are_not_typed() {
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(editing_key(FormId::Login, key).is_none());
    }

    #[test]
    fn test_enter_submits() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(
            editing_key(FormId::Register, key),
            Some(Action::Form(FormAction::Submit(FormId::Register)))
        ));
    }
}
