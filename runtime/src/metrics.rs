//! Metric names recorded by the Store.
//!
//! The store records through the [`metrics`] facade. Nothing is exported
//! unless the host installs a recorder; without one every call is a no-op.
//!
//! # Example
//!
//! ```rust,ignore
//! // After installing a recorder of your choice:
//! far_away_runtime::metrics::register_metrics();
//! ```

use metrics::describe_counter;

/// Actions reduced by any store, including confirmed follow-ups
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Effects executed, labelled by `kind` (currently only `confirm`)
pub const EFFECTS_TOTAL: &str = "store.effects.total";

/// Confirmation prompts answered, labelled by `answer` (`yes`, `no`)
pub const CONFIRMATIONS_TOTAL: &str = "store.confirmations.total";

/// Register descriptions for every metric the store records.
///
/// Safe to call more than once.
pub fn register_metrics() {
    describe_counter!(
        ACTIONS_TOTAL,
        "Total number of actions reduced by the store"
    );
    describe_counter!(
        EFFECTS_TOTAL,
        "Total number of effects executed by the store"
    );
    describe_counter!(
        CONFIRMATIONS_TOTAL,
        "Total number of confirmation prompts answered"
    );
}
