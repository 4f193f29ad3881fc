//! Entity slice state
//!
//! Shared by categories and stations.

use crate::actions::Request;
use station_admin_client::Entity;
use std::collections::HashMap;

/// The two mirrored collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    Station,
}

impl EntityKind {
    /// Singular, lower case
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::Station => "station",
        }
    }

    /// Plural, for titles
    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Category => "Categories",
            EntityKind::Station => "Charging Stations",
        }
    }
}

/// Copy of a record's fields, used to prefill the edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySeed {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl EntitySeed {
    pub fn from_entity<E: Entity>(entity: &E) -> Self {
        Self {
            id: entity.id().to_string(),
            name: entity.name().to_string(),
            description: entity.description().to_string(),
        }
    }
}

/// In-memory mirror of one remote collection
///
/// `loading` is true while at least one operation is between dispatch and
/// settlement. `error` holds the last failure until it is dismissed or the
/// next operation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingWrites {
    latest: u64,
    count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntitySlice<E> {
    pub items: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
    /// Id of the record being edited
    pub selected: Option<String>,
    in_flight: usize,
    /// Per identifier with writes in flight: latest sequence number and count
    writes: HashMap<String, PendingWrites>,
}

impl<E> Default for EntitySlice<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            selected: None,
            in_flight: 0,
            writes: HashMap::new(),
        }
    }
}

impl<E: Entity> EntitySlice<E> {
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Number of operations awaiting settlement
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn selected_item(&self) -> Option<&E> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Record a dispatched request
    pub(crate) fn begin(&mut self, request: &Request) {
        self.in_flight += 1;
        self.loading = true;
        self.error = None;
        if let Some(id) = request.op.target() {
            let writes = self
                .writes
                .entry(id.to_string())
                .or_insert(PendingWrites { latest: 0, count: 0 });
            writes.latest = writes.latest.max(request.seq);
            writes.count += 1;
        }
    }

    /// Record a settled request. Returns false when a newer write to the same
    /// identifier was dispatched after this one, i.e. the response is stale.
    pub(crate) fn finish(&mut self, request: &Request) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = self.in_flight > 0;

        let Some(id) = request.op.target() else {
            return true;
        };
        let Some(writes) = self.writes.get_mut(id) else {
            return true;
        };
        let current = writes.latest <= request.seq;
        writes.count = writes.count.saturating_sub(1);
        if writes.count == 0 {
            self.writes.remove(id);
        }
        current
    }
}
