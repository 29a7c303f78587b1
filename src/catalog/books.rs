//! Canonical book table
//!
//! Books are listed in canonical order. Abbreviations are lower-case and
//! unique; they are the prefix of every chapter ref (`"gn-1"`).

/// A static catalog row. `aliases` are the localized names that resolve
/// to this book when parsing reading tables.
#[derive(Debug, Clone, Copy)]
pub struct BookEntry {
    pub abbrev: &'static str,
    pub name: &'static str,
    pub chapters: u32,
    pub aliases: &'static [&'static str],
}

/// Index of the first New Testament book (Matthew) in [`BOOKS`]
pub const NEW_TESTAMENT_START: usize = 39;

pub static BOOKS: &[BookEntry] = &[
    // === OLD TESTAMENT ===
    BookEntry {
        abbrev: "gn",
        name: "Genesis",
        chapters: 50,
        aliases: &["Genesis", "Gênesis"],
    },
    BookEntry {
        abbrev: "ex",
        name: "Exodus",
        chapters: 40,
        aliases: &["Exodus", "Êxodo"],
    },
    BookEntry {
        abbrev: "lv",
        name: "Leviticus",
        chapters: 27,
        aliases: &["Leviticus", "Levítico"],
    },
    BookEntry {
        abbrev: "nm",
        name: "Numbers",
        chapters: 36,
        aliases: &["Numbers", "Números"],
    },
    BookEntry {
        abbrev: "dt",
        name: "Deuteronomy",
        chapters: 34,
        aliases: &["Deuteronomy", "Deuteronômio"],
    },
    BookEntry {
        abbrev: "js",
        name: "Joshua",
        chapters: 24,
        aliases: &["Joshua", "Josué"],
    },
    BookEntry {
        abbrev: "jz",
        name: "Judges",
        chapters: 21,
        aliases: &["Judges", "Juízes"],
    },
    BookEntry {
        abbrev: "rt",
        name: "Ruth",
        chapters: 4,
        aliases: &["Ruth", "Rute"],
    },
    BookEntry {
        abbrev: "1sm",
        name: "1 Samuel",
        chapters: 31,
        aliases: &["1 Samuel"],
    },
    BookEntry {
        abbrev: "2sm",
        name: "2 Samuel",
        chapters: 24,
        aliases: &["2 Samuel"],
    },
    BookEntry {
        abbrev: "1rs",
        name: "1 Kings",
        chapters: 22,
        aliases: &["1 Kings", "1 Reis"],
    },
    BookEntry {
        abbrev: "2rs",
        name: "2 Kings",
        chapters: 25,
        aliases: &["2 Kings", "2 Reis"],
    },
    BookEntry {
        abbrev: "1cr",
        name: "1 Chronicles",
        chapters: 29,
        aliases: &["1 Chronicles", "1 Crônicas"],
    },
    BookEntry {
        abbrev: "2cr",
        name: "2 Chronicles",
        chapters: 36,
        aliases: &["2 Chronicles", "2 Crônicas"],
    },
    BookEntry {
        abbrev: "ed",
        name: "Ezra",
        chapters: 10,
        aliases: &["Ezra", "Esdras"],
    },
    BookEntry {
        abbrev: "ne",
        name: "Nehemiah",
        chapters: 13,
        aliases: &["Nehemiah", "Neemias"],
    },
    BookEntry {
        abbrev: "et",
        name: "Esther",
        chapters: 10,
        aliases: &["Esther", "Ester"],
    },
    BookEntry {
        abbrev: "job",
        name: "Job",
        chapters: 42,
        aliases: &["Job", "Jó"],
    },
    BookEntry {
        abbrev: "sl",
        name: "Psalms",
        chapters: 150,
        aliases: &["Psalms", "Salmos"],
    },
    BookEntry {
        abbrev: "pv",
        name: "Proverbs",
        chapters: 31,
        aliases: &["Proverbs", "Provérbios"],
    },
    BookEntry {
        abbrev: "ec",
        name: "Ecclesiastes",
        chapters: 12,
        aliases: &["Ecclesiastes", "Eclesiastes"],
    },
    BookEntry {
        abbrev: "ct",
        name: "Song of Songs",
        chapters: 8,
        aliases: &["Song of Songs", "Cânticos"],
    },
    BookEntry {
        abbrev: "is",
        name: "Isaiah",
        chapters: 66,
        aliases: &["Isaiah", "Isaías"],
    },
    BookEntry {
        abbrev: "jr",
        name: "Jeremiah",
        chapters: 52,
        aliases: &["Jeremiah", "Jeremias"],
    },
    BookEntry {
        abbrev: "lm",
        name: "Lamentations",
        chapters: 5,
        aliases: &["Lamentations", "Lamentações"],
    },
    BookEntry {
        abbrev: "ez",
        name: "Ezekiel",
        chapters: 48,
        aliases: &["Ezekiel", "Ezequiel"],
    },
    BookEntry {
        abbrev: "dn",
        name: "Daniel",
        chapters: 12,
        aliases: &["Daniel"],
    },
    BookEntry {
        abbrev: "os",
        name: "Hosea",
        chapters: 14,
        aliases: &["Hosea", "Oséias"],
    },
    BookEntry {
        abbrev: "jl",
        name: "Joel",
        chapters: 3,
        aliases: &["Joel"],
    },
    BookEntry {
        abbrev: "am",
        name: "Amos",
        chapters: 9,
        aliases: &["Amos", "Amós"],
    },
    BookEntry {
        abbrev: "ob",
        name: "Obadiah",
        chapters: 1,
        aliases: &["Obadiah", "Obadias"],
    },
    BookEntry {
        abbrev: "jn",
        name: "Jonah",
        chapters: 4,
        aliases: &["Jonah", "Jonas"],
    },
    BookEntry {
        abbrev: "mq",
        name: "Micah",
        chapters: 7,
        aliases: &["Micah", "Miquéias"],
    },
    BookEntry {
        abbrev: "na",
        name: "Nahum",
        chapters: 3,
        aliases: &["Nahum", "Naum"],
    },
    BookEntry {
        abbrev: "hc",
        name: "Habakkuk",
        chapters: 3,
        aliases: &["Habakkuk", "Habacuque"],
    },
    BookEntry {
        abbrev: "sf",
        name: "Zephaniah",
        chapters: 3,
        aliases: &["Zephaniah", "Sofonias"],
    },
    BookEntry {
        abbrev: "ag",
        name: "Haggai",
        chapters: 2,
        aliases: &["Haggai", "Ageu"],
    },
    BookEntry {
        abbrev: "zc",
        name: "Zechariah",
        chapters: 14,
        aliases: &["Zechariah", "Zacarias"],
    },
    BookEntry {
        abbrev: "ml",
        name: "Malachi",
        chapters: 4,
        aliases: &["Malachi", "Malaquias"],
    },
    // === NEW TESTAMENT ===
    BookEntry {
        abbrev: "mt",
        name: "Matthew",
        chapters: 28,
        aliases: &["Matthew", "Mateus"],
    },
    BookEntry {
        abbrev: "mc",
        name: "Mark",
        chapters: 16,
        aliases: &["Mark", "Marcos"],
    },
    BookEntry {
        abbrev: "lc",
        name: "Luke",
        chapters: 24,
        aliases: &["Luke", "Lucas"],
    },
    BookEntry {
        abbrev: "jo",
        name: "John",
        chapters: 21,
        aliases: &["John", "João"],
    },
    BookEntry {
        abbrev: "at",
        name: "Acts",
        chapters: 28,
        aliases: &["Acts", "Atos"],
    },
    BookEntry {
        abbrev: "rm",
        name: "Romans",
        chapters: 16,
        aliases: &["Romans", "Romanos"],
    },
    BookEntry {
        abbrev: "1co",
        name: "1 Corinthians",
        chapters: 16,
        aliases: &["1 Corinthians", "1 Coríntios"],
    },
    BookEntry {
        abbrev: "2co",
        name: "2 Corinthians",
        chapters: 13,
        aliases: &["2 Corinthians", "2 Coríntios"],
    },
    BookEntry {
        abbrev: "gl",
        name: "Galatians",
        chapters: 6,
        aliases: &["Galatians", "Gálatas"],
    },
    BookEntry {
        abbrev: "ef",
        name: "Ephesians",
        chapters: 6,
        aliases: &["Ephesians", "Efésios"],
    },
    BookEntry {
        abbrev: "fp",
        name: "Philippians",
        chapters: 4,
        aliases: &["Philippians", "Filipenses"],
    },
    BookEntry {
        abbrev: "cl",
        name: "Colossians",
        chapters: 4,
        aliases: &["Colossians", "Colossenses"],
    },
    BookEntry {
        abbrev: "1ts",
        name: "1 Thessalonians",
        chapters: 5,
        aliases: &["1 Thessalonians", "1 Tessalonicenses"],
    },
    BookEntry {
        abbrev: "2ts",
        name: "2 Thessalonians",
        chapters: 3,
        aliases: &["2 Thessalonians", "2 Tessalonicenses"],
    },
    BookEntry {
        abbrev: "1tm",
        name: "1 Timothy",
        chapters: 6,
        aliases: &["1 Timothy", "1 Timóteo"],
    },
    BookEntry {
        abbrev: "2tm",
        name: "2 Timothy",
        chapters: 4,
        aliases: &["2 Timothy", "2 Timóteo"],
    },
    BookEntry {
        abbrev: "tt",
        name: "Titus",
        chapters: 3,
        aliases: &["Titus", "Tito"],
    },
    BookEntry {
        abbrev: "fm",
        name: "Philemon",
        chapters: 1,
        aliases: &["Philemon", "Filemom"],
    },
    BookEntry {
        abbrev: "hb",
        name: "Hebrews",
        chapters: 13,
        aliases: &["Hebrews", "Hebreus"],
    },
    BookEntry {
        abbrev: "tg",
        name: "James",
        chapters: 5,
        aliases: &["James", "Tiago"],
    },
    BookEntry {
        abbrev: "1pe",
        name: "1 Peter",
        chapters: 5,
        aliases: &["1 Peter", "1 Pedro"],
    },
    BookEntry {
        abbrev: "2pe",
        name: "2 Peter",
        chapters: 3,
        aliases: &["2 Peter", "2 Pedro"],
    },
    BookEntry {
        abbrev: "1jo",
        name: "1 John",
        chapters: 5,
        aliases: &["1 John", "1 João"],
    },
    BookEntry {
        abbrev: "2jo",
        name: "2 John",
        chapters: 1,
        aliases: &["2 John", "2 João"],
    },
    BookEntry {
        abbrev: "3jo",
        name: "3 John",
        chapters: 1,
        aliases: &["3 John", "3 João"],
    },
    BookEntry {
        abbrev: "jd",
        name: "Jude",
        chapters: 1,
        aliases: &["Jude", "Judas"],
    },
    BookEntry {
        abbrev: "ap",
        name: "Revelation",
        chapters: 22,
        aliases: &["Revelation", "Apocalipse"],
    },
];
