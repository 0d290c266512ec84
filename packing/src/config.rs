//! Configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `FAR_AWAY_MAX_QUANTITY` | `20` | Largest quantity the add form offers |
//! | `FAR_AWAY_SORT` | `input` | Initial sort order (`input`, `description`, `packed`) |
//! | `FAR_AWAY_STARTER_ITEMS` | `true` | Seed the list with a few travel basics |

use crate::form::DEFAULT_MAX_QUANTITY;
use crate::types::PackingState;
use crate::view::SortKey;
use thiserror::Error;

/// Environment variable for the largest selectable quantity
pub const MAX_QUANTITY_VAR: &str = "FAR_AWAY_MAX_QUANTITY";
/// Environment variable for the initial sort order
pub const SORT_VAR: &str = "FAR_AWAY_SORT";
/// Environment variable toggling the starter items
pub const STARTER_ITEMS_VAR: &str = "FAR_AWAY_STARTER_ITEMS";

/// Errors from loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to something unusable
    #[error("Invalid value '{value}' for {var}: {reason}")]
    Invalid {
        /// Variable name
        var: &'static str,
        /// Value as found
        value: String,
        /// What was expected
        reason: &'static str,
    },
}

/// Settings for a packing list session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingConfig {
    /// Largest quantity the add form offers
    pub max_quantity: u32,
    /// Initial sort order
    pub default_sort: SortKey,
    /// Seed the list with the starter items
    pub starter_items: bool,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            max_quantity: DEFAULT_MAX_QUANTITY,
            default_sort: SortKey::Insertion,
            starter_items: true,
        }
    }
}

impl PackingConfig {
    /// Load from process environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for any set but unparseable variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` to read variables
    ///
    /// Unset and blank variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for any set but unparseable variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let max_quantity = match read(MAX_QUANTITY_VAR) {
            Some(value) => {
                let parsed = value.trim().parse::<u32>().ok().filter(|max| *max >= 1);
                parsed.ok_or_else(|| ConfigError::Invalid {
                    var: MAX_QUANTITY_VAR,
                    value: value.clone(),
                    reason: "expected a whole number of at least 1",
                })?
            }
            None => defaults.max_quantity,
        };

        let default_sort = match read(SORT_VAR) {
            Some(value) => value.parse::<SortKey>().map_err(|_| ConfigError::Invalid {
                var: SORT_VAR,
                value: value.clone(),
                reason: "expected input, description or packed",
            })?,
            None => defaults.default_sort,
        };

        let starter_items = match read(STARTER_ITEMS_VAR) {
            Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
                var: STARTER_ITEMS_VAR,
                value: value.clone(),
                reason: "expected true, false, 1 or 0",
            })?,
            None => defaults.starter_items,
        };

        Ok(Self {
            max_quantity,
            default_sort,
            starter_items,
        })
    }

    /// The state a new session starts from
    #[must_use]
    pub fn initial_state(&self) -> PackingState {
        if self.starter_items {
            PackingState::starter()
        } else {
            PackingState::new()
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
