//! # Far Away Testing
//!
//! Testing utilities and helpers for the Far Away packing list.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then builder for reducers ([`ReducerTest`])
//! - Property-based testing strategies
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```
//! use far_away_core::environment::{Confirmation, IdGenerator};
//! use far_away_testing::{test_ids, ScriptedConfirmation};
//!
//! // Hand a clone to the code under test, keep the other to inspect
//! let confirm = ScriptedConfirmation::answering([true]);
//! let handle = confirm.clone();
//!
//! assert!(confirm.confirm("Clear the list?"));
//! assert_eq!(handle.prompts(), ["Clear the list?"]);
//!
//! assert_eq!(test_ids().next_id(), Some(1));
//! ```

/// Reducer Given-When-Then testing
pub mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations of Environment traits
pub mod mocks {
    use far_away_core::environment::{Confirmation, SequentialIds};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Confirmation that replays scripted answers
    ///
    /// Answers are consumed in order. Once the script runs out every further
    /// prompt is declined. Every prompt is recorded so tests can check what
    /// the user would have been asked. Clones share the same script.
    ///
    /// # Example
    ///
    /// ```
    /// use far_away_testing::mocks::ScriptedConfirmation;
    /// use far_away_core::environment::Confirmation;
    ///
    /// let confirm = ScriptedConfirmation::answering([true, false]);
    /// assert!(confirm.confirm("first?"));
    /// assert!(!confirm.confirm("second?"));
    /// assert!(!confirm.confirm("third?")); // script exhausted
    /// assert_eq!(confirm.prompts().len(), 3);
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct ScriptedConfirmation {
        inner: Rc<RefCell<Script>>,
    }

    #[derive(Debug, Default)]
    struct Script {
        answers: VecDeque<bool>,
        prompts: Vec<String>,
    }

    impl ScriptedConfirmation {
        /// Create a confirmation that gives `answers` in order
        #[must_use]
        pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
            Self {
                inner: Rc::new(RefCell::new(Script {
                    answers: answers.into_iter().collect(),
                    prompts: Vec::new(),
                })),
            }
        }

        /// Every prompt seen so far, oldest first
        #[must_use]
        pub fn prompts(&self) -> Vec<String> {
            self.inner.borrow().prompts.clone()
        }

        /// Answers not yet consumed
        #[must_use]
        pub fn remaining(&self) -> usize {
            self.inner.borrow().answers.len()
        }
    }

    impl Confirmation for ScriptedConfirmation {
        fn confirm(&self, prompt: &str) -> bool {
            let mut script = self.inner.borrow_mut();
            script.prompts.push(prompt.to_string());
            script.answers.pop_front().unwrap_or(false)
        }
    }

    /// Identifier generator for tests, starting at 1
    #[must_use]
    pub const fn test_ids() -> SequentialIds {
        SequentialIds::starting_at(1)
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a test-friendly tracing subscriber
    ///
    /// Output goes through the test harness writer so it only shows for
    /// failing tests. Honors `RUST_LOG`. Calling it more than once is fine.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Short human-readable labels, never empty
    pub fn label() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,15}"
    }

    /// Labels that may be empty, for exercising validation
    pub fn maybe_empty_label() -> impl Strategy<Value = String> {
        prop_oneof![1 => Just(String::new()), 4 => label()]
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use mocks::{test_ids, ScriptedConfirmation};
