//! Directory data
//!
//! Entries grouped by initial letter. Each group becomes one index-bar
//! section; its header is the sticky anchor.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Key for entries that do not start with a letter
pub const OTHER_KEY: &str = "#";

/// One group of entries under a marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Sidebar marker this group answers to
    pub key: String,
    /// Header text, also the value reported on selection
    pub title: String,
    pub entries: Vec<String>,
}

/// Grouped, sorted entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    pub groups: Vec<Group>,
}

#[derive(Deserialize)]
struct DirectoryFile {
    entries: Vec<String>,
}

impl Directory {
    /// Group entries by uppercase initial; non-letters go last under `#`
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut letters: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut other = Vec::new();

        for entry in entries {
            let entry: String = entry.into();
            let entry = entry.trim().to_string();
            let Some(first) = entry.chars().next() else {
                continue;
            };
            if first.is_ascii_alphabetic() {
                letters
                    .entry(first.to_ascii_uppercase().to_string())
                    .or_default()
                    .push(entry);
            } else {
                other.push(entry);
            }
        }

        let mut groups: Vec<Group> = letters
            .into_iter()
            .map(|(key, entries)| Group::new(key, entries))
            .collect();
        if !other.is_empty() {
            groups.push(Group::new(OTHER_KEY.to_string(), other));
        }
        Self { groups }
    }

    /// Load a TOML file of the form `entries = ["...", ...]`
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read directory file {}", path.display()))?;
        let file: DirectoryFile = toml::from_str(&source)
            .with_context(|| format!("Failed to parse directory file {}", path.display()))?;
        Ok(Self::from_entries(file.entries))
    }

    /// Built-in sample contacts
    pub fn sample() -> Self {
        Self::from_entries(SAMPLE_ENTRIES.iter().copied())
    }

    /// Marker keys in group order
    pub fn keys(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.key.clone()).collect()
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

impl Group {
    fn new(key: String, mut entries: Vec<String>) -> Self {
        entries.sort_by_key(|e| e.to_lowercase());
        let noun = if entries.len() == 1 { "entry" } else { "entries" };
        let title = format!("{} · {} {}", key, entries.len(), noun);
        Self {
            key,
            title,
            entries,
        }
    }
}

const SAMPLE_ENTRIES: &[&str] = &[
    "Ada Lovelace",
    "Alan Turing",
    "Alonzo Church",
    "Barbara Liskov",
    "Bjarne Stroustrup",
    "Brian Kernighan",
    "Charles Babbage",
    "Claude Shannon",
    "Dennis Ritchie",
    "Donald Knuth",
    "Edsger Dijkstra",
    "Frances Allen",
    "Fernando Corbato",
    "Grace Hopper",
    "Guido van Rossum",
    "Hedy Lamarr",
    "Ivan Sutherland",
    "John McCarthy",
    "John von Neumann",
    "Joan Clarke",
    "Ken Thompson",
    "Katherine Johnson",
    "Leslie Lamport",
    "Linus Torvalds",
    "Margaret Hamilton",
    "Niklaus Wirth",
    "Ole-Johan Dahl",
    "Peter Naur",
    "Radia Perlman",
    "Robin Milner",
    "Sophie Wilson",
    "Tony Hoare",
    "Ward Cunningham",
    "Whitfield Diffie",
    "Yukihiro Matsumoto",
    "8-bit Guy",
];

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_groups_sorted_by_letter() {
        let dir = Directory::from_entries(["bob", "Alice", "anna", "Carl"]);
        assert_eq!(dir.keys(), vec!["A", "B", "C"]);
        assert_eq!(dir.groups[0].entries, vec!["Alice", "anna"]);
        assert_eq!(dir.groups[0].title, "A · 2 entries");
        assert_eq!(dir.groups[1].title, "B · 1 entry");
    }

    #[test]
    fn test_non_letters_go_last() {
        let dir = Directory::from_entries(["42 Club", "Zed", "", "  "]);
        assert_eq!(dir.keys(), vec!["Z", OTHER_KEY]);
        assert_eq!(dir.entry_count(), 2);
    }

    #[test]
    fn test_sample_has_many_groups() {
        let dir = Directory::sample();
        assert!(dir.groups.len() > 15);
        assert_eq!(dir.groups.last().map(|g| g.key.as_str()), Some(OTHER_KEY));
    }

    #[test]
    fn test_load_toml_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("people.toml");
        std::fs::write(&path, "entries = [\"Mia\", \"Max\", \"Noor\"]\n").unwrap();
        let dir = Directory::load(&path).unwrap();
        assert_eq!(dir.keys(), vec!["M", "N"]);
    }

    #[test]
    fn test_load_bad_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("people.toml");
        std::fs::write(&path, "names = 3\n").unwrap();
        assert!(Directory::load(&path).is_err());
    }
}
