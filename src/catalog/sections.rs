//! Curated sections: fixed unions of canonical books

use serde::{Deserialize, Serialize};

use super::BibleCatalog;
use super::books::{BOOKS, NEW_TESTAMENT_START};

/// A named group of books used for section-level achievements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Pentateuch,
    Gospels,
    OldTestament,
    NewTestament,
}

const PENTATEUCH: &[&str] = &["gn", "ex", "lv", "nm", "dt"];
const GOSPELS: &[&str] = &["mt", "mc", "lc", "jo"];

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pentateuch => "pentateuch",
            Self::Gospels => "gospels",
            Self::OldTestament => "old_testament",
            Self::NewTestament => "new_testament",
        }
    }

    /// Parse a section id (accepts `ot`/`nt` shorthands)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pentateuch" => Some(Self::Pentateuch),
            "gospels" => Some(Self::Gospels),
            "old_testament" | "ot" => Some(Self::OldTestament),
            "new_testament" | "nt" => Some(Self::NewTestament),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pentateuch => "Pentateuch",
            Self::Gospels => "Gospels",
            Self::OldTestament => "Old Testament",
            Self::NewTestament => "New Testament",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Self::Pentateuch,
            Self::Gospels,
            Self::OldTestament,
            Self::NewTestament,
        ]
    }

    /// Book abbreviations in canonical order
    pub fn books(&self) -> Vec<&'static str> {
        match self {
            Self::Pentateuch => PENTATEUCH.to_vec(),
            Self::Gospels => GOSPELS.to_vec(),
            Self::OldTestament => BOOKS[..NEW_TESTAMENT_START]
                .iter()
                .map(|b| b.abbrev)
                .collect(),
            Self::NewTestament => BOOKS[NEW_TESTAMENT_START..]
                .iter()
                .map(|b| b.abbrev)
                .collect(),
        }
    }

    /// Every chapter ref of every book in the section
    pub fn chapter_refs(&self, catalog: &BibleCatalog) -> Vec<String> {
        self.books()
            .into_iter()
            .flat_map(|abbrev| catalog.chapters_for_book(abbrev))
            .collect()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
