//! Bible catalog: books, chapter refs and the chronological ordering
//!
//! The catalog is static reference data built once on first use. Chapter
//! refs are strings of the form `"<abbrev>-<chapter>"`, e.g. `"gn-1"`.

mod books;
mod chronological;
mod sections;

pub use books::{BOOKS, BookEntry, NEW_TESTAMENT_START};
pub use chronological::{
    CHRONOLOGICAL_TABLE, ChronologicalPlanEntry, PlanTableError, parse_day, parse_table,
};
pub use sections::Section;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInfo {
    pub abbrev: String,
    pub name: String,
    pub chapter_count: u32,
}

/// Canonical structural facts about the text being read
#[derive(Debug, Clone)]
pub struct BibleCatalog {
    entries: &'static [BookEntry],
    books: Vec<BookInfo>,
    /// Lower-cased localized name or abbreviation -> index into `books`
    names: HashMap<String, usize>,
    chronological_plan: Vec<ChronologicalPlanEntry>,
    chronological_order: Vec<String>,
}

static CATALOG: Lazy<BibleCatalog> = Lazy::new(BibleCatalog::bundled);

/// Lower-case and collapse internal whitespace
fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl BibleCatalog {
    /// The shared catalog built from the bundled tables
    pub fn global() -> &'static BibleCatalog {
        &CATALOG
    }

    fn bundled() -> Self {
        Self::from_tables(BOOKS, CHRONOLOGICAL_TABLE)
    }

    /// Build a catalog from a book table and a chronological day table.
    ///
    /// Malformed day rows are skipped; the build never fails.
    pub fn from_tables(books: &'static [BookEntry], table: &[(u32, &str)]) -> Self {
        let mut names = HashMap::new();
        let infos: Vec<BookInfo> = books
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                names.insert(normalize_name(entry.abbrev), idx);
                for alias in entry.aliases {
                    names.insert(normalize_name(alias), idx);
                }
                BookInfo {
                    abbrev: entry.abbrev.to_lowercase(),
                    name: entry.name.to_string(),
                    chapter_count: entry.chapters,
                }
            })
            .collect();

        let resolve = |name: &str| {
            names
                .get(&normalize_name(name))
                .map(|&idx| (books[idx].abbrev, books[idx].chapters))
        };
        let chronological_plan = parse_table(table, resolve);
        let chronological_order = chronological_plan
            .iter()
            .flat_map(|day| day.chapter_refs.iter().cloned())
            .collect();

        tracing::debug!(
            "Built catalog: {} books, {} chronological days",
            infos.len(),
            chronological_plan.len()
        );

        Self {
            entries: books,
            books: infos,
            names,
            chronological_plan,
            chronological_order,
        }
    }

    /// Books in canonical order
    pub fn book_list(&self) -> &[BookInfo] {
        &self.books
    }

    pub fn total_chapters(&self) -> u32 {
        self.books.iter().map(|b| b.chapter_count).sum()
    }

    /// Case-insensitive lookup by abbreviation
    pub fn book(&self, abbrev: &str) -> Option<&BookInfo> {
        let abbrev = abbrev.trim().to_lowercase();
        self.books.iter().find(|b| b.abbrev == abbrev)
    }

    /// `["<abbrev>-1", ..., "<abbrev>-N"]`, or empty for an unknown book
    pub fn chapters_for_book(&self, abbrev: &str) -> Vec<String> {
        match self.book(abbrev) {
            Some(book) => (1..=book.chapter_count)
                .map(|n| format!("{}-{}", book.abbrev, n))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Resolve a localized book name (or an abbreviation) to its entry
    pub fn resolve_book_name(&self, name: &str) -> Option<&BookInfo> {
        self.names
            .get(&normalize_name(name))
            .map(|&idx| &self.books[idx])
    }

    /// Check that a chapter ref names a real book and chapter
    pub fn is_valid_ref(&self, chapter_ref: &str) -> bool {
        let Some((abbrev, chapter)) = chapter_ref.rsplit_once('-') else {
            return false;
        };
        let Ok(chapter) = chapter.parse::<u32>() else {
            return false;
        };
        self.book(abbrev)
            .is_some_and(|b| b.abbrev == abbrev && (1..=b.chapter_count).contains(&chapter))
    }

    /// Expand a reading such as `"Genesis 1-3, 5"` or `"gn 50"` into chapter refs
    pub fn parse_reading(&self, text: &str) -> Result<Vec<String>, PlanTableError> {
        parse_day(text, |name| {
            self.names
                .get(&normalize_name(name))
                .map(|&idx| (self.entries[idx].abbrev, self.entries[idx].chapters))
        })
    }

    pub fn chronological_plan(&self) -> &[ChronologicalPlanEntry] {
        &self.chronological_plan
    }

    /// All chapter refs in historical reading order
    pub fn chronological_chapter_order(&self) -> &[String] {
        &self.chronological_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_book_list_order_and_totals() {
        let catalog = BibleCatalog::global();
        let books = catalog.book_list();
        assert_eq!(books.len(), 66);
        assert_eq!(books[0].abbrev, "gn");
        assert_eq!(books[65].abbrev, "ap");
        assert_eq!(catalog.total_chapters(), 1189);
    }

    #[test]
    fn test_abbrevs_unique_and_lowercase() {
        let catalog = BibleCatalog::global();
        let mut seen = HashSet::new();
        for book in catalog.book_list() {
            assert_eq!(book.abbrev, book.abbrev.to_lowercase());
            assert!(seen.insert(book.abbrev.clone()), "duplicate {}", book.abbrev);
        }
    }

    #[test]
    fn test_chapters_for_every_book() {
        let catalog = BibleCatalog::global();
        for book in catalog.book_list() {
            let refs = catalog.chapters_for_book(&book.abbrev);
            assert_eq!(refs.len() as u32, book.chapter_count);
            assert_eq!(refs[0], format!("{}-1", book.abbrev));
        }
    }

    #[test]
    fn test_chapters_for_book_case_insensitive() {
        let catalog = BibleCatalog::global();
        let refs = catalog.chapters_for_book("GN");
        assert_eq!(refs.len(), 50);
        assert_eq!(refs[49], "gn-50");
        assert!(catalog.chapters_for_book("xyz").is_empty());
    }

    #[test]
    fn test_resolve_localized_names() {
        let catalog = BibleCatalog::global();
        assert_eq!(catalog.resolve_book_name("Gênesis").unwrap().abbrev, "gn");
        assert_eq!(catalog.resolve_book_name("genesis").unwrap().abbrev, "gn");
        assert_eq!(catalog.resolve_book_name("1  Reis").unwrap().abbrev, "1rs");
        assert_eq!(catalog.resolve_book_name("Song of Songs").unwrap().abbrev, "ct");
        assert_eq!(catalog.resolve_book_name("ap").unwrap().abbrev, "ap");
        assert!(catalog.resolve_book_name("Maccabees").is_none());
    }

    #[test]
    fn test_chronological_order_covers_every_chapter_once() {
        let catalog = BibleCatalog::global();
        let order = catalog.chronological_chapter_order();
        assert_eq!(order.len(), 1189);
        let unique: HashSet<_> = order.iter().collect();
        assert_eq!(unique.len(), 1189);
        assert!(order.iter().all(|r| catalog.is_valid_ref(r)));
        assert_eq!(catalog.chronological_plan().len(), 365);
        assert_eq!(order[0], "gn-1");
        // Job is read between Genesis 11 and 12
        assert_eq!(order[11], "job-1");
    }

    #[test]
    fn test_is_valid_ref() {
        let catalog = BibleCatalog::global();
        assert!(catalog.is_valid_ref("gn-50"));
        assert!(catalog.is_valid_ref("1jo-5"));
        assert!(!catalog.is_valid_ref("gn-51"));
        assert!(!catalog.is_valid_ref("gn-0"));
        assert!(!catalog.is_valid_ref("GN-1"));
        assert!(!catalog.is_valid_ref("gn"));
    }

    #[test]
    fn test_malformed_rows_skipped_in_catalog_build() {
        let table = [(1, "Genesis 1-2"), (2, "Genesis 80"), (3, "Exodus 1")];
        let catalog = BibleCatalog::from_tables(BOOKS, &table);
        assert_eq!(catalog.chronological_plan().len(), 2);
        assert_eq!(
            catalog.chronological_chapter_order(),
            &["gn-1".to_string(), "gn-2".to_string(), "ex-1".to_string()]
        );
    }

    #[test]
    fn test_parse_reading() {
        let catalog = BibleCatalog::global();
        assert_eq!(
            catalog.parse_reading("Genesis 1-2, 4").unwrap(),
            vec!["gn-1", "gn-2", "gn-4"]
        );
        assert_eq!(catalog.parse_reading("1jo 5").unwrap(), vec!["1jo-5"]);
        assert!(matches!(
            catalog.parse_reading("Genesis 51"),
            Err(PlanTableError::BadRange { .. })
        ));
        assert!(catalog.parse_reading("Nowhere 1").is_err());
    }
}
