//! Entity Reducer
//!
//! Generic reducer shared by the categories and stations slices.

use crate::actions::{EntityAction, Outcome};
use crate::state::EntitySlice;
use station_admin_client::Entity;

/// Reduce an entity slice
///
/// Request variants are side effects owned by the API middleware and leave
/// the slice untouched.
pub fn reduce_entity<E: Entity>(mut state: EntitySlice<E>, action: &EntityAction<E>) -> EntitySlice<E> {
    match action {
        EntityAction::FetchAll
        | EntityAction::Create(_)
        | EntityAction::Update { .. }
        | EntityAction::Delete(_) => {}

        EntityAction::Pending(request) => {
            state.begin(request);
        }

        EntityAction::Fulfilled(request, outcome) => {
            if !state.finish(request) {
                log::debug!(
                    "Discarding stale {} response #{} ({:?})",
                    E::LABEL,
                    request.seq,
                    request.op
                );
                return state;
            }
            apply_outcome(&mut state, outcome);
        }

        EntityAction::Rejected(request, error) => {
            state.finish(request);
            log::warn!("{} request #{} failed: {}", E::LABEL, request.seq, error);
            state.error = Some(error.clone());
        }

        EntityAction::ClearError => {
            state.error = None;
        }

        EntityAction::Select(id) => {
            state.selected = Some(id.clone());
        }

        EntityAction::ClearSelected => {
            state.selected = None;
        }
    }
    state
}

fn apply_outcome<E: Entity>(state: &mut EntitySlice<E>, outcome: &Outcome<E>) {
    match outcome {
        Outcome::Fetched(items) => {
            log::info!("Loaded {} {} records", items.len(), E::LABEL);
            state.items = items.clone();
        }
        Outcome::Created(item) => {
            state.items.push(item.clone());
        }
        Outcome::Updated(item) => match state.position(item.id()) {
            Some(index) => state.items[index] = item.clone(),
            None => log::debug!(
                "Updated {} {} is not loaded, ignoring",
                E::LABEL,
                item.id()
            ),
        },
        Outcome::Deleted(id) => {
            state.items.retain(|item| item.id() != id);
            if state.selected.as_deref() == Some(id.as_str()) {
                state.selected = None;
            }
        }
    }
}
