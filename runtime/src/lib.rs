//! # Far Away Runtime
//!
//! Runtime implementation for the Far Away packing list.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state and runs every action through the reducer
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to the reducer
//! - **Confirmation**: Host-supplied yes/no gate consulted by `Effect::Confirm`
//!
//! Everything runs synchronously on the caller's thread. The store is owned by
//! exactly one session and mutated through `&mut self`, one action at a time.
//!
//! ## Example
//!
//! ```ignore
//! use far_away_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment)
//!     .with_confirmation(|prompt: &str| ask_user(prompt));
//!
//! // Send an action
//! store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use far_away_core::{effect::Effect, reducer::Reducer};

/// Metric names and descriptions
pub mod metrics;

/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{Effect, Reducer};
    use crate::metrics::{ACTIONS_TOTAL, CONFIRMATIONS_TOTAL, EFFECTS_TOTAL};
    use far_away_core::environment::{Confirmation, DeclineAll};
    use std::collections::VecDeque;
    use std::marker::PhantomData;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned directly, no locking)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (confirmed actions are fed back in)
    /// 5. The confirmation capability used by `Effect::Confirm`
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        confirmation: Box<dyn Confirmation>,
        actions: PhantomData<fn(A)>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// The store starts with [`DeclineAll`] as its confirmation, so
        /// confirmed actions never run until a real prompt is supplied with
        /// [`Store::with_confirmation`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                confirmation: Box::new(DeclineAll),
                actions: PhantomData,
            }
        }

        /// Replace the confirmation capability
        #[must_use]
        pub fn with_confirmation(mut self, confirmation: impl Confirmation + 'static) -> Self {
            self.confirmation = Box::new(confirmation);
            self
        }

        /// Send an action to the store
        ///
        /// The action is reduced immediately. Its effects are then executed
        /// in order; every action the host confirms is reduced, along with
        /// its own effects, before this call returns.
        ///
        /// Termination is up to the reducer: an action whose confirmed
        /// follow-up keeps asking again runs for as long as the host says yes.
        ///
        /// # Returns
        ///
        /// The number of actions reduced, including confirmed ones
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> usize {
            let mut queue = VecDeque::from([action]);
            let mut processed = 0;

            while let Some(action) = queue.pop_front() {
                processed += 1;

                tracing::debug!(?action, "Processing action");
                metrics::counter!(ACTIONS_TOTAL).increment(1);

                let effects = self
                    .reducer
                    .reduce(&mut self.state, action, &self.environment);

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                for effect in effects {
                    self.execute_effect(effect, &mut queue);
                }
            }

            processed
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let packed = store.state(|s| s.packed_count());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Borrow the current state
        ///
        /// Useful when the caller wants to hand out references into state,
        /// which [`Store::state`] cannot return.
        #[must_use]
        pub const fn current_state(&self) -> &S {
            &self.state
        }

        /// The injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        fn execute_effect(&self, effect: Effect<A>, queue: &mut VecDeque<A>) {
            match effect {
                Effect::None => {},
                Effect::Confirm { prompt, on_confirm } => {
                    metrics::counter!(EFFECTS_TOTAL, "kind" => "confirm").increment(1);
                    let confirmed = self.confirmation.confirm(&prompt);
                    let answer = if confirmed { "yes" } else { "no" };
                    metrics::counter!(CONFIRMATIONS_TOTAL, "answer" => answer).increment(1);
                    tracing::debug!(%prompt, answer, "Confirmation answered");

                    if confirmed {
                        tracing::trace!(?on_confirm, "Queueing confirmed action");
                        queue.push_back(*on_confirm);
                    }
                },
            }
        }
    }
}

pub use store::Store;
