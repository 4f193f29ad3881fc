use ratatui::style::{palette::tailwind, Color, Modifier, Style};

/// Colors and prebuilt styles shared by all views
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_panel: Color,
    pub bg_status: Color,

    pub text_primary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,

    pub status_success: Color,
    pub status_error: Color,
    pub status_info: Color,

    pub selected_bg: Color,
    pub selected_fg: Color,

    pub table_header_bg: Color,
    pub table_header_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg_panel: tailwind::SLATE.c900,
            bg_status: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_info: tailwind::BLUE.c400,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            table_header_bg: tailwind::BLUE.c500,
            table_header_fg: tailwind::SLATE.c200,
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Enter" in "Enter submit")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.status_error)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.status_success)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.status_info)
    }
}
