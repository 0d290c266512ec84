//! Far Away: a travel packing checklist.
//!
//! The list is an ordered collection of entries that can be added, toggled
//! between packed and unpacked, removed, or cleared after confirmation. Sorted
//! views and completion statistics are derived on demand and never reorder
//! the list itself.
//!
//! - [`ListStore`]: the owned list, one per session
//! - [`PackingReducer`]: validation and state transitions
//! - [`view`]: sorted projections and [`Statistics`]
//! - [`AddForm`]: the draft of a new entry
//! - [`shell`]: the line-oriented front end used by the `far-away` binary
//!
//! # Quick Start
//!
//! ```
//! use far_away::{ListStore, PackingState, Quantity, SortKey, Statistics};
//!
//! # fn main() -> Result<(), far_away::ValidationError> {
//! let mut list = ListStore::new(PackingState::new())
//!     .with_confirmation(|_prompt: &str| true);
//!
//! let socks = list.add("Socks", Quantity::new(12)?)?;
//! list.add("Charger", Quantity::ONE)?;
//! list.toggle(socks);
//!
//! let sorted: Vec<_> = list
//!     .project(SortKey::Description)
//!     .iter()
//!     .map(|e| e.description.as_str())
//!     .collect();
//! assert_eq!(sorted, ["Charger", "Socks"]);
//!
//! assert_eq!(
//!     list.statistics(),
//!     Statistics::Progress { total: 2, packed: 1, percentage: 50 }
//! );
//!
//! assert!(list.request_clear());
//! assert!(list.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod form;
pub mod reducer;
pub mod render;
pub mod shell;
pub mod store;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::{ConfigError, PackingConfig};
pub use form::AddForm;
pub use reducer::{PackingEnvironment, PackingReducer, CLEAR_PROMPT};
pub use store::ListStore;
pub use types::{Entry, EntryId, PackingAction, PackingState, Quantity, ValidationError};
pub use view::{SortKey, Statistics};
