//! Location display names and lenient lookup.
//!
//! Presentation-layer conveniences the engine itself does not provide:
//! a sorted directory of display names (owner appended when notable) and
//! fuzzy resolution of user-supplied names back to exact location names.
//! The engine requires exact names; everything lenient lives here.

use crate::domain::owner_is_notable;
use crate::graph::WorldGraph;

/// One directory entry.
#[derive(Debug, Clone)]
struct DirectoryEntry {
    /// Exact location name, as the engine knows it.
    name: String,
    /// Name shown to users, possibly with the owner appended.
    display: String,
}

/// A sorted directory of known locations.
#[derive(Debug, Clone, Default)]
pub struct LocationDirectory {
    entries: Vec<DirectoryEntry>,
}

impl LocationDirectory {
    /// Build the directory from a graph's location tables.
    ///
    /// The display name is `"Name (Owner)"` when the owner is notable,
    /// otherwise just the name. Entries are sorted by display name.
    pub fn from_graph(graph: &WorldGraph) -> Self {
        let mut entries: Vec<DirectoryEntry> = graph
            .locations()
            .map(|(name, owner)| {
                let display = match owner {
                    Some(owner) if owner_is_notable(owner, name) => {
                        format!("{name} ({owner})")
                    }
                    _ => name.to_string(),
                };
                DirectoryEntry {
                    name: name.to_string(),
                    display,
                }
            })
            .collect();
        entries.sort_by(|a, b| a.display.cmp(&b.display));
        Self { entries }
    }

    /// Sorted display names for selection widgets.
    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.display.as_str())
    }

    /// Number of known locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a user-supplied name to an exact location name.
    ///
    /// Tries, in order: the query with any `" (Owner)"` suffix stripped
    /// as an exact name, then case-insensitive substring containment in
    /// either direction, first match in display order.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        let stripped = strip_owner_suffix(query);

        if let Some(entry) = self.entries.iter().find(|e| e.name == stripped) {
            return Some(&entry.name);
        }

        let needle = stripped.to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|e| {
                let candidate = e.name.to_lowercase();
                candidate.contains(&needle) || needle.contains(&candidate)
            })
            .map(|e| e.name.as_str())
    }

    /// Display names matching a search query, case-insensitively.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.display.to_lowercase().contains(&needle))
            .map(|e| e.display.as_str())
            .take(limit)
            .collect()
    }
}

/// Strip a trailing `" (Owner)"` from a display name.
fn strip_owner_suffix(display: &str) -> &str {
    match display.find(" (") {
        Some(idx) if display.ends_with(')') => &display[..idx],
        _ => display,
    }
}
