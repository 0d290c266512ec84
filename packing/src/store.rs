//! The packing list as a single owned object.
//!
//! [`ListStore`] wraps the runtime [`Store`] and turns each operation into one
//! command action. Reads go straight to the current state.

use crate::reducer::{PackingEnvironment, PackingReducer};
use crate::types::{Entry, EntryId, PackingAction, PackingState, Quantity, ValidationError};
use crate::view::{self, SortKey, Statistics};
use far_away_core::environment::Confirmation;
use far_away_runtime::Store;

/// Runtime store specialised to the packing list
pub type PackingStore = Store<PackingState, PackingAction, PackingEnvironment, PackingReducer>;

/// The authoritative packing list for one session
///
/// Create one per session and pass it by reference to whatever needs it.
/// Clearing through [`ListStore::request_clear`] asks the confirmation
/// capability first; without one, every request is declined.
///
/// Only [`ListStore::add`] can fail. Every other operation always succeeds,
/// even for ids that are not on the list.
pub struct ListStore {
    store: PackingStore,
}

impl ListStore {
    /// A list starting from `state`, drawing new ids after its highest id
    #[must_use]
    pub fn new(state: PackingState) -> Self {
        let environment = PackingEnvironment::continuing(&state);
        Self::with_environment(state, environment)
    }

    /// A list with an explicit environment
    #[must_use]
    pub fn with_environment(state: PackingState, environment: PackingEnvironment) -> Self {
        Self {
            store: Store::new(state, PackingReducer::new(), environment),
        }
    }

    /// Use `confirmation` to gate [`ListStore::request_clear`]
    #[must_use]
    pub fn with_confirmation(self, confirmation: impl Confirmation + 'static) -> Self {
        Self {
            store: self.store.with_confirmation(confirmation),
        }
    }

    /// Adds an unpacked entry to the end of the list
    ///
    /// The new entry gets the next id that is not already on the list.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyDescription`] if `description` is empty
    /// - [`ValidationError::IdsExhausted`] if the id generator has nothing
    ///   left to hand out
    ///
    /// The list is unchanged in both cases.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        quantity: Quantity,
    ) -> Result<EntryId, ValidationError> {
        self.store.send(PackingAction::AddEntry {
            description: description.into(),
            quantity,
        });

        if let Some(error) = self.state().last_error.clone() {
            tracing::debug!(%error, "Entry rejected");
            return Err(error);
        }

        // A successful add always leaves the new entry last
        let id = self
            .entries()
            .last()
            .map(|e| e.id)
            .ok_or(ValidationError::IdsExhausted)?;
        tracing::info!(%id, %quantity, "Entry added");
        Ok(id)
    }

    /// Removes the entry with `id`
    ///
    /// Returns whether anything was removed; a missing id is a no-op.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.len();
        self.store.send(PackingAction::RemoveEntry { id });

        let removed = self.len() < before;
        if removed {
            tracing::info!(%id, "Entry removed");
        } else {
            tracing::debug!(%id, "Remove ignored, no such entry");
        }
        removed
    }

    /// Flips the packed flag of the entry with `id`
    ///
    /// Returns the new packed flag, or `None` if there is no such entry.
    pub fn toggle(&mut self, id: EntryId) -> Option<bool> {
        self.store.send(PackingAction::ToggleEntry { id });

        let packed = self.get(id).map(|e| e.packed);
        if packed.is_none() {
            tracing::debug!(%id, "Toggle ignored, no such entry");
        }
        packed
    }

    /// Removes every entry without asking
    ///
    /// Callers are responsible for confirming first; see
    /// [`ListStore::request_clear`]. Returns how many entries were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.len();
        self.store.send(PackingAction::ClearList);
        tracing::info!(removed, "List cleared");
        removed
    }

    /// Asks the confirmation capability, then clears on "yes"
    ///
    /// Returns whether the list was cleared. On "no" the list is untouched.
    pub fn request_clear(&mut self) -> bool {
        let before = self.len();
        // RequestClear plus, if confirmed, ClearList
        let cleared = self.store.send(PackingAction::RequestClear) > 1;

        if cleared {
            tracing::info!(removed = before, "List cleared");
        } else {
            tracing::debug!("Clear declined");
        }
        cleared
    }

    /// The entries in `key` order; the list itself is not reordered
    #[must_use]
    pub fn project(&self, key: SortKey) -> Vec<&Entry> {
        view::project(self.entries(), key)
    }

    /// Completion statistics for the list
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::of(self.entries())
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.store.current_state().entries
    }

    /// The entry with `id`, if present
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.store.current_state().get(id)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// True if the list has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// The full state, including the last validation error
    #[must_use]
    pub const fn state(&self) -> &PackingState {
        self.store.current_state()
    }
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new(PackingState::new())
    }
}

impl std::fmt::Debug for ListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListStore")
            .field("entries", &self.entries())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use far_away_testing::ScriptedConfirmation;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn add_returns_fresh_ids() {
        let mut list = ListStore::default();
        let tent = list.add("Tent", qty(2)).unwrap();
        let stove = list.add("Stove", qty(1)).unwrap();

        assert_ne!(tent, stove);
        assert_eq!(list.get(tent).unwrap().quantity.get(), 2);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn add_continues_after_starter_ids() {
        let mut list = ListStore::new(PackingState::starter());
        assert_eq!(list.add("Tent", qty(1)).unwrap(), EntryId::new(4));
    }

    #[test]
    fn add_empty_description_is_rejected() {
        let mut list = ListStore::new(PackingState::starter());
        let err = list.add("", qty(5)).unwrap_err();

        assert_eq!(err, ValidationError::EmptyDescription);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn add_after_the_last_id_reports_exhaustion() {
        let mut state = PackingState::new();
        state.entries.push(Entry::new(
            EntryId::new(u64::MAX - 1),
            "Hat".to_string(),
            Quantity::ONE,
        ));
        let mut list = ListStore::new(state);

        assert_eq!(list.add("Tent", qty(1)), Ok(EntryId::new(u64::MAX)));
        assert_eq!(list.add("Stove", qty(1)), Err(ValidationError::IdsExhausted));
        assert_eq!(list.len(), 2);

        assert_eq!(list.add("", qty(1)), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut list = ListStore::default();
        let first = list.add("Tent", qty(1)).unwrap();
        assert!(list.remove(first));
        let second = list.add("Tent", qty(1)).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut list = ListStore::new(PackingState::starter());
        assert!(list.remove(EntryId::new(1)));
        assert!(!list.remove(EntryId::new(1)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn toggle_returns_new_flag() {
        let mut list = ListStore::new(PackingState::starter());
        assert_eq!(list.toggle(EntryId::new(2)), Some(true));
        assert_eq!(list.toggle(EntryId::new(2)), Some(false));
        assert_eq!(list.toggle(EntryId::new(42)), None);
    }

    #[test]
    fn clear_reports_removed_count() {
        let mut list = ListStore::new(PackingState::starter());
        assert_eq!(list.clear(), 3);
        assert_eq!(list.clear(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn request_clear_without_confirmation_is_declined() {
        let mut list = ListStore::new(PackingState::starter());
        assert!(!list.request_clear());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn request_clear_asks_once_and_obeys() {
        let confirm = ScriptedConfirmation::answering([false, true]);
        let mut list = ListStore::new(PackingState::starter()).with_confirmation(confirm.clone());

        assert!(!list.request_clear());
        assert_eq!(list.len(), 3);

        assert!(list.request_clear());
        assert!(list.is_empty());

        assert_eq!(confirm.prompts().len(), 2);
        assert_eq!(confirm.prompts()[0], crate::reducer::CLEAR_PROMPT);
    }

    #[test]
    fn project_and_statistics_read_current_entries() {
        let mut list = ListStore::new(PackingState::starter());
        assert_eq!(list.toggle(EntryId::new(1)), Some(true));

        let order: Vec<_> = list
            .project(SortKey::PackedStatus)
            .iter()
            .map(|e| e.id.get())
            .collect();
        assert_eq!(order, [2, 3, 1]);
        assert_eq!(
            list.statistics(),
            Statistics::Progress {
                total: 3,
                packed: 1,
                percentage: 33
            }
        );

        let insertion: Vec<_> = list.entries().iter().map(|e| e.id.get()).collect();
        assert_eq!(insertion, [1, 2, 3]);
    }
}
