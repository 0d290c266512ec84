//! Domain types for the packing list.
//!
//! A packing list is an ordered collection of entries. Entries are added,
//! toggled between packed and unpacked, removed one at a time, or cleared all
//! at once. Insertion order is the only order the state ever keeps.

use far_away_macros::Action;
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU32, ParseIntError};
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a packing list entry
///
/// Identifiers are handed out once and never reused within a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Creates an `EntryId` from its raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    /// Parses `7` or `#7`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.strip_prefix('#').unwrap_or(s).parse().map(Self)
    }
}

/// How many of an item to pack, always at least one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single item
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Creates a quantity
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroQuantity`] for zero.
    pub const fn new(quantity: u32) -> Result<Self, ValidationError> {
        match NonZeroU32::new(quantity) {
            Some(quantity) => Ok(Self(quantity)),
            None => Err(ValidationError::ZeroQuantity),
        }
    }

    /// Returns the count
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected input. Nothing in the list changes when one of these is raised.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The description was empty
    #[error("Item description cannot be empty")]
    EmptyDescription,

    /// Every item id has been handed out already
    #[error("No unused item ids are left")]
    IdsExhausted,

    /// A quantity of zero was requested
    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    /// A quantity above the configured maximum was requested
    #[error("Quantity {quantity} is above the maximum of {max}")]
    QuantityOutOfRange {
        /// The requested quantity
        quantity: u32,
        /// The largest quantity allowed
        max: u32,
    },
}

/// A single line on the packing list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,
    /// What to pack
    pub description: String,
    /// How many to pack
    pub quantity: Quantity,
    /// Whether it is already in the bag
    pub packed: bool,
}

impl Entry {
    /// Creates a new, unpacked entry
    #[must_use]
    pub const fn new(id: EntryId, description: String, quantity: Quantity) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
        }
    }
}

/// State of the packing list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingState {
    /// All entries, in the order they were added
    pub entries: Vec<Entry>,
    /// Last validation error (if any)
    pub last_error: Option<ValidationError>,
}

impl PackingState {
    /// Creates a new empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_error: None,
        }
    }

    /// A list seeded with a few travel basics, ids 1 to 3
    #[must_use]
    pub fn starter() -> Self {
        let seed = [("Passports", 2), ("Socks", 12), ("Charger", 1)];
        let entries = (1..)
            .zip(seed)
            .filter_map(|(id, (description, quantity))| {
                let quantity = Quantity::new(quantity).ok()?;
                Some(Entry::new(EntryId::new(id), description.to_string(), quantity))
            })
            .collect();

        Self {
            entries,
            last_error: None,
        }
    }

    /// Returns the number of entries
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of packed entries
    #[must_use]
    pub fn packed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.packed).count()
    }

    /// Returns an entry by ID
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Checks if an entry exists
    #[must_use]
    pub fn exists(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    /// Highest id currently on the list
    #[must_use]
    pub fn max_id(&self) -> Option<EntryId> {
        self.entries.iter().map(|e| e.id).max()
    }
}

/// Actions representing commands and events for the packing list
///
/// Commands are validated by the reducer and produce events. Events are
/// applied to state as-is, which also makes them replayable.
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackingAction {
    // ========== Commands ==========
    /// Command: Add an entry to the end of the list
    ///
    /// The reducer picks the id from the environment.
    #[command]
    AddEntry {
        /// What to pack
        description: String,
        /// How many to pack
        quantity: Quantity,
    },

    /// Command: Remove an entry
    #[command]
    RemoveEntry {
        /// Entry to remove
        id: EntryId,
    },

    /// Command: Flip an entry between packed and unpacked
    #[command]
    ToggleEntry {
        /// Entry to toggle
        id: EntryId,
    },

    /// Command: Ask the user, then clear the list if they agree
    #[command]
    RequestClear,

    /// Command: Remove every entry, no questions asked
    #[command]
    ClearList,

    // ========== Events ==========
    /// Event: Entry was added
    #[event]
    EntryAdded {
        /// Entry identifier
        id: EntryId,
        /// What to pack
        description: String,
        /// How many to pack
        quantity: Quantity,
    },

    /// Event: Entry was removed
    #[event]
    EntryRemoved {
        /// Entry identifier
        id: EntryId,
    },

    /// Event: Entry packed status changed
    #[event]
    EntryToggled {
        /// Entry identifier
        id: EntryId,
        /// Packed status after the change
        packed: bool,
    },

    /// Event: Every entry was removed
    #[event]
    ListCleared {
        /// How many entries were removed
        removed: usize,
    },

    /// Event: Command validation failed
    #[event]
    ValidationFailed {
        /// Why the command was rejected
        error: ValidationError,
    },
}
