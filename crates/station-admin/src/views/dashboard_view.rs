//! Dashboard View
//!
//! Base screen once signed in: a header with the user and section tabs, and a
//! body showing either the Home overview or one collection as a table.

use crate::actions::{AccountAction, Action, DashboardAction, FormAction, GlobalAction};
use crate::state::{AppState, EntityKind, Section};
use crate::theme::Theme;
use crate::views::form_fields::centered;
use crate::views::{View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct DashboardView;

impl DashboardView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for DashboardView {
    fn view_id(&self) -> ViewId {
        ViewId::Dashboard
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        render_header(state, header, f);
        match state.dashboard.section.entity_kind() {
            None => render_home(state, body, f),
            Some(kind) => render_collection(state, kind, body, f),
        }
        render_footer(state, footer, f);

        if let Some(id) = &state.dashboard.pending_delete {
            render_delete_confirmation(state, id, area, f);
        }
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState) -> Option<Action> {
        let dashboard = &state.dashboard;

        if dashboard.pending_delete.is_some() {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    Some(Action::Dashboard(DashboardAction::ConfirmDelete))
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    Some(Action::Dashboard(DashboardAction::CancelDelete))
                }
                _ => None,
            };
        }

        let kind = dashboard.section.entity_kind();
        let cursor_record = kind.and_then(|k| state.record_at(k, dashboard.cursor(k)));

        match key.code {
            KeyCode::Char('1') => Some(Action::Dashboard(DashboardAction::ShowSection(Section::Home))),
            KeyCode::Char('2') => Some(Action::Dashboard(DashboardAction::ShowSection(
                Section::Stations,
            ))),
            KeyCode::Char('3') => Some(Action::Dashboard(DashboardAction::ShowSection(
                Section::Categories,
            ))),
            KeyCode::Tab => Some(Action::Dashboard(DashboardAction::NextSection)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Dashboard(DashboardAction::CursorDown)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::Dashboard(DashboardAction::CursorUp)),
            KeyCode::Char('r') => Some(match kind {
                Some(kind) => kind.fetch_all(),
                None => Action::Dashboard(DashboardAction::ShowSection(Section::Home)),
            }),
            KeyCode::Char('a') => kind.map(|kind| {
                Action::Form(FormAction::OpenEntityForm { kind, seed: None })
            }),
            KeyCode::Char('e') | KeyCode::Enter => {
                let kind = kind?;
                cursor_record.map(|seed| {
                    Action::Form(FormAction::OpenEntityForm {
                        kind,
                        seed: Some(seed),
                    })
                })
            }
            KeyCode::Char('d') => {
                cursor_record.map(|seed| Action::Dashboard(DashboardAction::RequestDelete(seed.id)))
            }
            KeyCode::Char('x') => kind.map(|kind| kind.clear_error()),
            KeyCode::Char('l') => Some(Action::Account(AccountAction::Logout)),
            KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
            KeyCode::Esc => Some(Action::Global(GlobalAction::Close)),
            _ => None,
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

fn render_header(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let user = state
        .account
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "guest".to_string());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Station Admin ")
        .title_style(theme.panel_title())
        .title(Line::from(Span::styled(format!(" {} ", user), theme.accent())).right_aligned())
        .border_style(theme.panel_border());

    let selected = Section::ALL
        .iter()
        .position(|s| *s == state.dashboard.section)
        .unwrap_or(0);
    let tabs = Tabs::new(
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{} {}", i + 1, s.title())),
    )
    .select(selected)
    .style(theme.muted())
    .highlight_style(theme.key_hint().add_modifier(Modifier::REVERSED))
    .block(block);

    f.render_widget(tabs, area);
}

fn render_home(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let [stations, categories] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(
            Rect {
                height: area.height.min(5),
                ..area
            },
        );

    render_stat(theme, EntityKind::Station, state, stations, f);
    render_stat(theme, EntityKind::Category, state, categories, f);
}

fn render_stat(theme: &Theme, kind: EntityKind, state: &AppState, area: Rect, f: &mut Frame) {
    let value = if state.slice_loading(kind) {
        Span::styled("loading...", theme.muted())
    } else {
        Span::styled(
            state.item_count(kind).to_string(),
            theme.text().add_modifier(Modifier::BOLD),
        )
    };
    let mut lines = vec![Line::from(value)];
    if let Some(error) = state.slice_error(kind) {
        lines.push(Line::from(Span::styled(error.to_string(), theme.error())));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Total {} ", kind.title()))
        .border_style(theme.muted());
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_collection(state: &AppState, kind: EntityKind, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let error = state.slice_error(kind);
    let [table_area, error_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(if error.is_some() { 2 } else { 0 }),
    ])
    .areas(area);

    let rows: Vec<Row> = match kind {
        EntityKind::Category => state
            .categories
            .items
            .iter()
            .map(|c| row(&c.name, &c.description, &c.id))
            .collect(),
        EntityKind::Station => state
            .stations
            .items
            .iter()
            .map(|s| row(&s.name, &s.description, &s.id))
            .collect(),
    };
    let empty = rows.is_empty();

    let mut title = format!(" {} ", state.dashboard.section.title());
    if state.slice_loading(kind) {
        title.push_str("(loading...) ");
    }

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(55),
            Constraint::Percentage(15),
        ],
    )
    .header(Row::new(["Name", "Description", "ID"]).style(theme.table_header()))
    .row_highlight_style(theme.table_selected())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(theme.panel_title())
            .border_style(theme.panel_border()),
    );

    let selected = (!empty).then(|| state.dashboard.cursor(kind));
    let mut table_state = TableState::default().with_selected(selected);
    f.render_stateful_widget(table, table_area, &mut table_state);

    if let Some(error) = error {
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" Error: {} ", error), theme.error()),
                Span::styled("(x to dismiss)", theme.muted()),
            ]))
            .wrap(Wrap { trim: true }),
            error_area,
        );
    }
}

fn row<'a>(name: &'a str, description: &'a str, id: &'a str) -> Row<'a> {
    Row::new([Cell::from(name), Cell::from(description), Cell::from(id)])
}

fn render_footer(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let mut hints = vec![("1-3", "section")];
    if state.dashboard.section.entity_kind().is_some() {
        hints.extend([("j/k", "move"), ("a", "add"), ("e", "edit"), ("d", "delete")]);
    }
    hints.extend([("r", "refresh"), ("l", "logout"), ("q", "quit")]);

    let mut spans = vec![Span::raw(" ")];
    for (key, description) in hints {
        spans.push(Span::styled(key, theme.key_hint()));
        spans.push(Span::styled(format!(" {}  ", description), theme.muted()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_delete_confirmation(state: &AppState, id: &str, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let Some(kind) = state.dashboard.section.entity_kind() else {
        return;
    };
    let name = match kind {
        EntityKind::Category => state.categories.get(id).map(|c| c.name.clone()),
        EntityKind::Station => state.stations.get(id).map(|s| s.name.clone()),
    }
    .unwrap_or_else(|| id.to_string());

    let popup = centered(area, 50, 5);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Delete {} ", kind.label()))
        .title_style(theme.error().add_modifier(Modifier::BOLD))
        .border_style(theme.error())
        .style(theme.panel_background());
    let text = vec![
        Line::from(format!("Are you sure you want to delete \"{}\"?", name)),
        Line::from(vec![
            Span::styled("y", theme.key_hint()),
            Span::styled(" yes  ", theme.muted()),
            Span::styled("n", theme.key_hint()),
            Span::styled(" no", theme.muted()),
        ]),
    ];
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;
    use station_admin_client::Category;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn categories_state() -> AppState {
        let mut state = AppState::default();
        state.dashboard.section = Section::Categories;
        state.categories.items = vec![Category {
            id: "1".to_string(),
            name: "Drinks".to_string(),
            description: "Beverage category".to_string(),
        }];
        state
    }

    #[test]
    fn test_edit_seeds_form_from_cursor_record() {
        let action = DashboardView::new().handle_key(key(KeyCode::Char('e')), &categories_state());
        assert!(matches!(
            action,
            Some(Action::Form(FormAction::OpenEntityForm {
                kind: EntityKind::Category,
                seed: Some(seed),
            })) if seed.name == "Drinks"
        ));
    }

    #[test]
    fn test_delete_asks_for_confirmation() {
        let view = DashboardView::new();
        let mut state = categories_state();
        let action = view.handle_key(key(KeyCode::Char('d')), &state);
        assert!(matches!(
            action,
            Some(Action::Dashboard(DashboardAction::RequestDelete(id))) if id == "1"
        ));

        state.dashboard.pending_delete = Some("1".to_string());
        assert!(view.handle_key(key(KeyCode::Char('a')), &state).is_none());
        assert!(matches!(
            view.handle_key(key(KeyCode::Char('y')), &state),
            Some(Action::Dashboard(DashboardAction::ConfirmDelete))
        ));
    }

    #[test]
    fn test_home_has_no_row_actions() {
        let view = DashboardView::new();
        let state = AppState::default();
        assert!(view.handle_key(key(KeyCode::Char('a')), &state).is_none());
        assert!(view.handle_key(key(KeyCode::Char('d')), &state).is_none());
    }
}
