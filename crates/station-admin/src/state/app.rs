//! Application State

use crate::theme::Theme;
use crate::views::{LoginView, View};
use station_admin_client::{Category, Station};

use super::{
    AccountState, DashboardState, EntityFormState, EntityKind, EntitySeed, EntitySlice, FormId,
    FormState, StatusBarState,
};

/// Application state
///
/// The three data slices live under fixed keys (`account`, `categories`,
/// `stations`); everything else is screen state.
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,
    pub account: AccountState,
    pub categories: EntitySlice<Category>,
    pub stations: EntitySlice<Station>,
    pub dashboard: DashboardState,
    pub login_form: FormState,
    pub register_form: FormState,
    /// Create/edit popup (present only while open)
    pub entity_form: Option<EntityFormState>,
    pub status_bar: StatusBarState,
    pub theme: Theme,
}

impl AppState {
    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }

    pub fn form(&self, id: FormId) -> Option<&FormState> {
        match id {
            FormId::Login => Some(&self.login_form),
            FormId::Register => Some(&self.register_form),
            FormId::Entity => self.entity_form.as_ref().map(|f| &f.form),
        }
    }

    pub fn form_mut(&mut self, id: FormId) -> Option<&mut FormState> {
        match id {
            FormId::Login => Some(&mut self.login_form),
            FormId::Register => Some(&mut self.register_form),
            FormId::Entity => self.entity_form.as_mut().map(|f| &mut f.form),
        }
    }

    pub fn item_count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Category => self.categories.items.len(),
            EntityKind::Station => self.stations.items.len(),
        }
    }

    /// Fields of the record at `index` in the given collection
    pub fn record_at(&self, kind: EntityKind, index: usize) -> Option<EntitySeed> {
        match kind {
            EntityKind::Category => self.categories.items.get(index).map(EntitySeed::from_entity),
            EntityKind::Station => self.stations.items.get(index).map(EntitySeed::from_entity),
        }
    }

    pub fn slice_error(&self, kind: EntityKind) -> Option<&str> {
        match kind {
            EntityKind::Category => self.categories.error.as_deref(),
            EntityKind::Station => self.stations.error.as_deref(),
        }
    }

    pub fn slice_loading(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Category => self.categories.loading,
            EntityKind::Station => self.stations.loading,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("account", &self.account)
            .field("categories", &self.categories)
            .field("stations", &self.stations)
            .field("dashboard", &self.dashboard)
            .field("login_form", &"<form>")
            .field("register_form", &"<form>")
            .field("entity_form", &self.entity_form.as_ref().map(|f| f.kind))
            .field("status_bar", &self.status_bar.latest())
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            account: self.account.clone(),
            categories: self.categories.clone(),
            stations: self.stations.clone(),
            dashboard: self.dashboard.clone(),
            login_form: self.login_form.clone(),
            register_form: self.register_form.clone(),
            entity_form: self.entity_form.clone(),
            status_bar: self.status_bar.clone(),
            theme: self.theme.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(LoginView::new())],
            account: AccountState::default(),
            categories: EntitySlice::default(),
            stations: EntitySlice::default(),
            dashboard: DashboardState::default(),
            login_form: FormState::login(),
            register_form: FormState::register(),
            entity_form: None,
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
        }
    }
}
