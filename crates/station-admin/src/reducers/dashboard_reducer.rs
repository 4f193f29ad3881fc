//! Dashboard Reducer

use crate::actions::DashboardAction;
use crate::state::{AppState, DashboardState};

pub fn reduce_dashboard(mut state: AppState, action: &DashboardAction) -> AppState {
    match action {
        DashboardAction::ShowSection(section) => {
            state.dashboard.section = *section;
            state.dashboard.pending_delete = None;
        }
        DashboardAction::NextSection => {
            state.dashboard.section = state.dashboard.section.next();
            state.dashboard.pending_delete = None;
        }
        DashboardAction::CursorUp => {
            if let Some(kind) = state.dashboard.section.entity_kind() {
                let cursor = state.dashboard.cursor_mut(kind);
                *cursor = cursor.saturating_sub(1);
            }
        }
        DashboardAction::CursorDown => {
            if let Some(kind) = state.dashboard.section.entity_kind() {
                let count = state.item_count(kind);
                let cursor = state.dashboard.cursor_mut(kind);
                if *cursor + 1 < count {
                    *cursor += 1;
                }
            }
        }
        DashboardAction::RequestDelete(id) => {
            state.dashboard.pending_delete = Some(id.clone());
        }
        // NavigationMiddleware has already issued the delete
        DashboardAction::ConfirmDelete | DashboardAction::CancelDelete => {
            state.dashboard.pending_delete = None;
        }
    }
    state
}

/// Keep both cursors inside their collections after items change
pub fn clamp_cursors(mut dashboard: DashboardState, categories: usize, stations: usize) -> DashboardState {
    dashboard.category_cursor = dashboard.category_cursor.min(categories.saturating_sub(1));
    dashboard.station_cursor = dashboard.station_cursor.min(stations.saturating_sub(1));
    dashboard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Section;
    use station_admin_client::Station;

    fn station(id: &str) -> Station {
        Station {
            id: id.to_string(),
            name: format!("Station {id}"),
            description: "Fast charger downtown".to_string(),
        }
    }

    #[test]
    fn test_cursor_stays_within_items() {
        let mut state = AppState::default();
        state.stations.items = vec![station("1"), station("2")];
        let state = reduce_dashboard(state, &DashboardAction::ShowSection(Section::Stations));

        let state = reduce_dashboard(state, &DashboardAction::CursorDown);
        let state = reduce_dashboard(state, &DashboardAction::CursorDown);
        assert_eq!(state.dashboard.station_cursor, 1);

        let state = reduce_dashboard(state, &DashboardAction::CursorUp);
        let state = reduce_dashboard(state, &DashboardAction::CursorUp);
        assert_eq!(state.dashboard.station_cursor, 0);
    }

    #[test]
    fn test_switching_section_drops_pending_delete() {
        let state = reduce_dashboard(
            AppState::default(),
            &DashboardAction::RequestDelete("1".to_string()),
        );
        assert_eq!(state.dashboard.pending_delete.as_deref(), Some("1"));

        let state = reduce_dashboard(state, &DashboardAction::NextSection);
        assert_eq!(state.dashboard.section, Section::Stations);
        assert_eq!(state.dashboard.pending_delete, None);
    }

    #[test]
    fn test_clamp_cursors() {
        let dashboard = DashboardState {
            category_cursor: 5,
            station_cursor: 2,
            ..DashboardState::default()
        };
        let dashboard = clamp_cursors(dashboard, 3, 0);
        assert_eq!(dashboard.category_cursor, 2);
        assert_eq!(dashboard.station_cursor, 0);
    }
}
