//! Reducer logic for the packing list.
//!
//! Commands are validated and turned into events; events are applied to state.
//! Removing or toggling an id that is not on the list is a no-op, not a
//! validation failure.

use crate::types::{Entry, EntryId, PackingAction, PackingState, ValidationError};
use far_away_core::{
    effect::Effect,
    environment::{IdGenerator, SequentialIds},
    reducer::Reducer,
    smallvec, SmallVec,
};
use std::sync::Arc;

/// Question asked before the whole list is cleared
pub const CLEAR_PROMPT: &str = "Are you sure you wish to remove all items from the list?";

/// Environment dependencies for the packing reducer
#[derive(Clone)]
pub struct PackingEnvironment {
    /// Source of ids for new entries
    pub ids: Arc<dyn IdGenerator>,
}

impl PackingEnvironment {
    /// Creates a new `PackingEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Environment whose ids continue after the highest id in `state`
    #[must_use]
    pub fn continuing(state: &PackingState) -> Self {
        let ids = state
            .max_id()
            .map_or_else(SequentialIds::default, |id| SequentialIds::after(id.get()));
        Self::new(Arc::new(ids))
    }

    /// Draws the next id that is not already on the list
    ///
    /// Ids already taken in `state` are skipped. Gives up with `None` once
    /// the generator runs dry, or after `state.count() + 1` draws, which is
    /// enough for any generator that never repeats itself.
    #[must_use]
    pub fn allocate_id(&self, state: &PackingState) -> Option<EntryId> {
        (0..=state.count())
            .map_while(|_| self.ids.next_id())
            .map(EntryId::new)
            .find(|id| !state.exists(*id))
    }
}

impl std::fmt::Debug for PackingEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackingEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the packing list
#[derive(Clone, Debug, Default)]
pub struct PackingReducer;

impl PackingReducer {
    /// Creates a new `PackingReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates an `AddEntry` command and picks the new entry's id
    fn validate_add_entry(
        state: &PackingState,
        description: &str,
        env: &PackingEnvironment,
    ) -> Result<EntryId, ValidationError> {
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        env.allocate_id(state).ok_or(ValidationError::IdsExhausted)
    }

    /// Applies an event to state
    fn apply_event(state: &mut PackingState, action: &PackingAction) {
        match action {
            PackingAction::EntryAdded {
                id,
                description,
                quantity,
            } => {
                state
                    .entries
                    .push(Entry::new(*id, description.clone(), *quantity));
                state.last_error = None;
            }
            PackingAction::EntryRemoved { id } => {
                state.entries.retain(|e| e.id != *id);
                state.last_error = None;
            }
            PackingAction::EntryToggled { id, packed } => {
                if let Some(entry) = state.entries.iter_mut().find(|e| e.id == *id) {
                    entry.packed = *packed;
                }
                state.last_error = None;
            }
            PackingAction::ListCleared { .. } => {
                state.entries.clear();
                state.last_error = None;
            }
            PackingAction::ValidationFailed { error } => {
                state.last_error = Some(error.clone());
            }
            // Commands are not applied to state
            PackingAction::AddEntry { .. }
            | PackingAction::RemoveEntry { .. }
            | PackingAction::ToggleEntry { .. }
            | PackingAction::RequestClear
            | PackingAction::ClearList => {}
        }
    }
}

impl Reducer for PackingReducer {
    type State = PackingState;
    type Action = PackingAction;
    type Environment = PackingEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            PackingAction::AddEntry {
                description,
                quantity,
            } => {
                let id = match Self::validate_add_entry(state, &description, env) {
                    Ok(id) => id,
                    Err(error) => {
                        Self::apply_event(state, &PackingAction::ValidationFailed { error });
                        return SmallVec::new();
                    }
                };

                let event = PackingAction::EntryAdded {
                    id,
                    description,
                    quantity,
                };
                Self::apply_event(state, &event);

                SmallVec::new()
            }

            PackingAction::RemoveEntry { id } => {
                if state.exists(id) {
                    Self::apply_event(state, &PackingAction::EntryRemoved { id });
                }
                SmallVec::new()
            }

            PackingAction::ToggleEntry { id } => {
                if let Some(packed) = state.get(id).map(|e| !e.packed) {
                    Self::apply_event(state, &PackingAction::EntryToggled { id, packed });
                }
                SmallVec::new()
            }

            PackingAction::RequestClear => {
                smallvec![Effect::confirm(CLEAR_PROMPT, PackingAction::ClearList)]
            }

            PackingAction::ClearList => {
                let event = PackingAction::ListCleared {
                    removed: state.count(),
                };
                Self::apply_event(state, &event);
                SmallVec::new()
            }

            // ========== Events ==========
            PackingAction::EntryAdded { .. }
            | PackingAction::EntryRemoved { .. }
            | PackingAction::EntryToggled { .. }
            | PackingAction::ListCleared { .. }
            | PackingAction::ValidationFailed { .. } => {
                Self::apply_event(state, &action);
                SmallVec::new()
            }
        }
    }
}
