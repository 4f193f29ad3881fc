//! Dashboard State

use super::EntityKind;

/// Dashboard sections, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Stations,
    Categories,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Stations, Section::Categories];

    pub fn next(self) -> Self {
        match self {
            Self::Home => Self::Stations,
            Self::Stations => Self::Categories,
            Self::Categories => Self::Home,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Stations => "Manage Charging Stations",
            Self::Categories => "Manage Category",
        }
    }

    /// Collection shown by this section, `None` for Home
    pub fn entity_kind(self) -> Option<EntityKind> {
        match self {
            Self::Home => None,
            Self::Stations => Some(EntityKind::Station),
            Self::Categories => Some(EntityKind::Category),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub section: Section,
    pub station_cursor: usize,
    pub category_cursor: usize,
    /// Id awaiting delete confirmation in the current section
    pub pending_delete: Option<String>,
}

impl DashboardState {
    pub fn cursor(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Category => self.category_cursor,
            EntityKind::Station => self.station_cursor,
        }
    }

    pub fn cursor_mut(&mut self, kind: EntityKind) -> &mut usize {
        match kind {
            EntityKind::Category => &mut self.category_cursor,
            EntityKind::Station => &mut self.station_cursor,
        }
    }
}
