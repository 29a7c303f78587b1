//! Books command implementation

use anyhow::Result;

use lectio::catalog::{BibleCatalog, NEW_TESTAMENT_START, Section};

/// Print the book catalog with chapter counts
pub fn books_command(section: Option<String>) -> Result<()> {
    let catalog = BibleCatalog::global();
    let books = catalog.book_list();

    if let Some(name) = section {
        let Some(section) = Section::from_str(&name) else {
            eprintln!("Unknown section: {}", name);
            return Ok(());
        };
        let abbrevs = section.books();
        println!("{}:\n", section.label());
        for book in books
            .iter()
            .filter(|b| abbrevs.iter().any(|a| *a == b.abbrev))
        {
            println!("  {:<4} {:<18} {:>3}", book.abbrev, book.name, book.chapter_count);
        }
        return Ok(());
    }

    for (idx, book) in books.iter().enumerate() {
        if idx == 0 {
            println!("{}:", Section::OldTestament.label());
        } else if idx == NEW_TESTAMENT_START {
            println!("\n{}:", Section::NewTestament.label());
        }
        println!("  {:<4} {:<18} {:>3}", book.abbrev, book.name, book.chapter_count);
    }
    println!(
        "\n{} books, {} chapters",
        books.len(),
        catalog.total_chapters()
    );
    Ok(())
}
