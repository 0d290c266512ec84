//! # Far Away Core
//!
//! Core traits and types for the Far Away packing list.
//!
//! The packing list is built with the Reducer pattern: every user interaction
//! becomes an action, a pure reducer turns that action into state changes plus
//! effect descriptions, and a runtime executes the effects.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (the packing list)
//! - **Action**: All possible inputs to a reducer (commands and events)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Example
//!
//! ```ignore
//! use far_away_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! impl Reducer for ChecklistReducer {
//!     type State = ChecklistState;
//!     type Action = ChecklistAction;
//!     type Environment = ChecklistEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ChecklistState,
//!         action: ChecklistAction,
//!         env: &ChecklistEnvironment,
//!     ) -> SmallVec<[Effect<ChecklistAction>; 4]> {
//!         // Business logic goes here
//!         SmallVec::new()
//!     }
//! }
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// Most actions produce no effects, so the result is inline-allocated
        /// for up to four effects.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe work for the runtime to perform after a reducer returns.
/// They are values, never executed by the reducer itself.
pub mod effect {
    /// Effect type - describes a side effect to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Ask the host for a yes/no answer before dispatching an action
        ///
        /// The runtime dispatches `on_confirm` only when the confirmation
        /// capability answers yes. A "no" leaves state untouched.
        Confirm {
            /// Question shown to the user
            prompt: String,
            /// Action to dispatch after a "yes"
            on_confirm: Box<Action>,
        },
    }

    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Confirm { prompt, on_confirm } => f
                    .debug_struct("Effect::Confirm")
                    .field("prompt", prompt)
                    .field("on_confirm", on_confirm)
                    .finish(),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Dispatch `action` only if the host confirms `prompt`
        #[must_use]
        pub fn confirm(prompt: impl Into<String>, action: Action) -> Effect<Action> {
            Effect::Confirm {
                prompt: prompt.into(),
                on_confirm: Box::new(action),
            }
        }

        /// Returns true for `Effect::None`
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter, or handed to the runtime directly.
pub mod environment {
    use std::sync::{Mutex, PoisonError};

    /// Identifier source for newly created aggregates
    ///
    /// Identifiers handed out by one generator are never repeated. A
    /// generator that has nothing left to hand out returns `None` from then on.
    pub trait IdGenerator: Send + Sync {
        /// Returns the next unused identifier, or `None` once exhausted
        fn next_id(&self) -> Option<u64>;
    }

    /// Monotonic identifier generator
    ///
    /// Hands out `start`, `start + 1`, ... up to and including `u64::MAX`,
    /// then reports exhaustion instead of wrapping around to reused values.
    #[derive(Debug)]
    pub struct SequentialIds {
        next: Mutex<Option<u64>>,
    }

    impl SequentialIds {
        /// Creates a generator whose first identifier is `start`
        #[must_use]
        pub const fn starting_at(start: u64) -> Self {
            Self {
                next: Mutex::new(Some(start)),
            }
        }

        /// Creates a generator whose first identifier follows `last`
        ///
        /// Starts exhausted when `last` is `u64::MAX`.
        #[must_use]
        pub const fn after(last: u64) -> Self {
            Self {
                next: Mutex::new(last.checked_add(1)),
            }
        }

        /// Peeks at the identifier the next call will return
        #[must_use]
        pub fn peek(&self) -> Option<u64> {
            *self.next.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl Default for SequentialIds {
        fn default() -> Self {
            Self::starting_at(1)
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> Option<u64> {
            let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
            let id = (*next)?;
            *next = id.checked_add(1);
            Some(id)
        }
    }

    /// Yes/no gate supplied by the host before destructive actions
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Terminal - asks on stdin
    /// struct Prompt;
    /// impl Confirmation for Prompt {
    ///     fn confirm(&self, prompt: &str) -> bool {
    ///         ask_user(prompt) == "y"
    ///     }
    /// }
    /// ```
    pub trait Confirmation {
        /// Returns true if the user agreed to `prompt`
        fn confirm(&self, prompt: &str) -> bool;
    }

    /// Confirmation that always answers no
    ///
    /// Used when no host prompt is wired in, so destructive actions never run
    /// unattended.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DeclineAll;

    impl Confirmation for DeclineAll {
        fn confirm(&self, _prompt: &str) -> bool {
            false
        }
    }

    impl<F> Confirmation for F
    where
        F: Fn(&str) -> bool,
    {
        fn confirm(&self, prompt: &str) -> bool {
            self(prompt)
        }
    }
}
