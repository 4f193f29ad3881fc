//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] emoji message                     [source]`

use crate::state::{AppState, StatusKind};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the latest status message
pub struct StatusBarWidget<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.state.theme;

        if area.height < 1 {
            return;
        }

        // Fill entire row with background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(theme.bg_status).set_char(' ');
        }

        let Some(message) = self.state.status_bar.latest() else {
            return;
        };

        let message_style = match message.kind {
            StatusKind::Success => theme.success(),
            StatusKind::Error => theme.error(),
            StatusKind::Info => theme.info(),
        }
        .bg(theme.bg_status);
        let metadata_style = theme.muted().bg(theme.bg_status);

        let mut x = area.x + 1;

        let timestamp = format!("[{}] ", message.timestamp.format("%H:%M:%S"));
        buf.set_string(x, area.y, &timestamp, metadata_style);
        x += timestamp.len() as u16;

        buf.set_string(x, area.y, format!("{} ", message.kind.emoji()), message_style);
        x += 3; // emoji + space (emoji typically renders as 2 cells)

        let source = format!("[{}]", message.source);
        let source_width = source.len() as u16 + 2;

        let available = area.right().saturating_sub(x + source_width) as usize;
        let text: String = if message.message.chars().count() > available {
            let mut truncated: String = message
                .message
                .chars()
                .take(available.saturating_sub(1))
                .collect();
            truncated.push('…');
            truncated
        } else {
            message.message.clone()
        };
        buf.set_string(x, area.y, &text, message_style);

        if area.width > source_width {
            let source_x = area.right() - source.len() as u16 - 1;
            buf.set_string(source_x, area.y, &source, metadata_style);
        }
    }
}
