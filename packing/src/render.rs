//! Plain-text rendering for terminals.

use crate::types::Entry;
use crate::view::Statistics;

/// One entry as `[x] 2 Passports (#1)`
#[must_use]
pub fn entry_line(entry: &Entry) -> String {
    let mark = if entry.packed { 'x' } else { ' ' };
    format!(
        "[{mark}] {} {} (#{})",
        entry.quantity, entry.description, entry.id
    )
}

/// Every entry on its own line, in the given order
#[must_use]
pub fn entry_list(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "(no items)".to_string();
    }

    entries
        .iter()
        .map(|entry| entry_line(entry))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The footer line under the list
#[must_use]
pub fn statistics_line(stats: &Statistics) -> String {
    match stats {
        Statistics::Empty => "Start by adding items to your packing list".to_string(),
        _ if stats.is_complete() => "You are ready to go!".to_string(),
        Statistics::Progress {
            total,
            packed,
            percentage,
        } => format!(
            "You have {total} items on your list, and you already packed {packed} ({percentage}%)"
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{EntryId, Quantity};

    fn entry(id: u64, description: &str, quantity: u32, packed: bool) -> Entry {
        Entry {
            id: EntryId::new(id),
            description: description.to_string(),
            quantity: Quantity::new(quantity).unwrap(),
            packed,
        }
    }

    #[test]
    fn entry_lines() {
        assert_eq!(
            entry_line(&entry(1, "Passports", 2, false)),
            "[ ] 2 Passports (#1)"
        );
        assert_eq!(entry_line(&entry(3, "Charger", 1, true)), "[x] 1 Charger (#3)");
    }

    #[test]
    fn entry_list_joins_lines() {
        let a = entry(1, "Socks", 12, false);
        let b = entry(2, "Hat", 1, true);
        assert_eq!(
            entry_list(&[&a, &b]),
            "[ ] 12 Socks (#1)\n[x] 1 Hat (#2)"
        );
        assert_eq!(entry_list(&[]), "(no items)");
    }

    #[test]
    fn statistics_lines() {
        assert_eq!(
            statistics_line(&Statistics::Empty),
            "Start by adding items to your packing list"
        );
        assert_eq!(
            statistics_line(&Statistics::Progress {
                total: 3,
                packed: 1,
                percentage: 33
            }),
            "You have 3 items on your list, and you already packed 1 (33%)"
        );
        assert_eq!(
            statistics_line(&Statistics::Progress {
                total: 2,
                packed: 2,
                percentage: 100
            }),
            "You are ready to go!"
        );
    }

    #[test]
    fn rounding_to_100_is_not_ready() {
        let line = statistics_line(&Statistics::Progress {
            total: 200,
            packed: 199,
            percentage: 100,
        });
        assert!(line.starts_with("You have 200 items"));
    }
}
