//! Entity slice actions
//!
//! One generic action type drives both the categories and the stations slice.
//!
//! Requests (`FetchAll`, `Create`, `Update`, `Delete`) are consumed by the API
//! middleware. It tags each one with a [`Request`] carrying a monotonic sequence
//! number and reports `Pending`, then `Fulfilled` or `Rejected`. Only those
//! lifecycle variants (and the synchronous ones at the bottom) reach the reducer.

use station_admin_client::{Category, Entity, EntityDraft, Station};

use super::Action;
use crate::state::EntityKind;

/// Which remote call a request performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    Create,
    Update(String),
    Delete(String),
}

impl Operation {
    /// Identifier this operation writes to, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Operation::Update(id) | Operation::Delete(id) => Some(id),
            Operation::FetchAll | Operation::Create => None,
        }
    }
}

/// A dispatched remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub seq: u64,
    pub op: Operation,
}

impl Request {
    pub fn new(seq: u64, op: Operation) -> Self {
        Self { seq, op }
    }
}

/// Successful result of a remote call
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<E> {
    Fetched(Vec<E>),
    Created(E),
    Updated(E),
    /// The id that was deleted (the server sends no body)
    Deleted(String),
}

#[derive(Debug, Clone)]
pub enum EntityAction<E: Entity> {
    // Requests
    FetchAll,
    Create(EntityDraft),
    Update { id: String, patch: EntityDraft },
    Delete(String),

    // Lifecycle
    Pending(Request),
    Fulfilled(Request, Outcome<E>),
    Rejected(Request, String),

    // Synchronous
    ClearError,
    Select(String),
    ClearSelected,
}

/// Ties an entity type to its [`Action`] variant
pub trait StoreEntity: Entity {
    fn wrap(action: EntityAction<Self>) -> Action;
}

impl StoreEntity for Category {
    fn wrap(action: EntityAction<Self>) -> Action {
        Action::Categories(action)
    }
}

impl StoreEntity for Station {
    fn wrap(action: EntityAction<Self>) -> Action {
        Action::Stations(action)
    }
}

impl EntityKind {
    pub fn fetch_all(self) -> Action {
        match self {
            EntityKind::Category => Category::wrap(EntityAction::FetchAll),
            EntityKind::Station => Station::wrap(EntityAction::FetchAll),
        }
    }

    pub fn create(self, draft: EntityDraft) -> Action {
        match self {
            EntityKind::Category => Category::wrap(EntityAction::Create(draft)),
            EntityKind::Station => Station::wrap(EntityAction::Create(draft)),
        }
    }

    pub fn update(self, id: String, patch: EntityDraft) -> Action {
        match self {
            EntityKind::Category => Category::wrap(EntityAction::Update { id, patch }),
            EntityKind::Station => Station::wrap(EntityAction::Update { id, patch }),
        }
    }

    pub fn delete(self, id: String) -> Action {
        match self {
            EntityKind::Category => Category::wrap(EntityAction::Delete(id)),
            EntityKind::Station => Station::wrap(EntityAction::Delete(id)),
        }
    }

    pub fn clear_error(self) -> Action {
        match self {
            EntityKind::Category => Category::wrap(EntityAction::ClearError),
            EntityKind::Station => Station::wrap(EntityAction::ClearError),
        }
    }
}
