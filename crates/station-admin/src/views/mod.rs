use crate::actions::Action;
use crate::state::AppState;
use ratatui::{
    crossterm::event::KeyEvent,
    layout::{Constraint, Layout, Rect},
    Frame,
};

pub mod dashboard_view;
pub mod entity_form_view;
pub mod form_fields;
pub mod login_view;
pub mod register_view;
pub mod status_bar;

pub use dashboard_view::DashboardView;
pub use entity_form_view::EntityFormView;
pub use login_view::LoginView;
pub use register_view::RegisterView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Login,
    Register,
    Dashboard,
    EntityForm,
}

/// View trait - defines the interface that all views must implement
///
/// Views are stored as trait objects (`Box<dyn View>`) on the view stack and
/// travel inside actions, so the trait must stay object-safe and `Send`.
pub trait View: std::fmt::Debug + Send {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Map a key press to an action while this view is on top
    fn handle_key(&self, key: KeyEvent, state: &AppState) -> Option<Action>;

    /// Clone this view into a Box
    /// This is needed because Clone requires Sized, so we provide a manual clone method
    fn clone_box(&self) -> Box<dyn View>;
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views render bottom-up so popups draw over the screen beneath them. The
/// last row always holds the status bar.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [main, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    for view in &state.view_stack {
        view.render(state, main, f);
    }

    f.render_widget(status_bar::StatusBarWidget::new(state), status);
}
