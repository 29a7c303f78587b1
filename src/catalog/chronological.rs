//! Chronological reading plan
//!
//! The plan is stored as a day-keyed table whose text field lists one or
//! more book/chapter references, e.g. `"Genesis 11, Job 1-2"`. Tokens are
//! comma separated; each is a bare chapter number or an inclusive `A-B`
//! range, optionally preceded by a book name. A book name carries forward
//! to later tokens until another name appears.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One day of the chronological plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronologicalPlanEntry {
    pub day_index: u32,
    pub chapter_refs: Vec<String>,
}

/// Error for a single malformed table row
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlanTableError {
    #[error("Empty reading text")]
    Empty,

    #[error("Unrecognized token: {0:?}")]
    BadToken(String),

    #[error("Chapter reference without a book: {0:?}")]
    MissingBook(String),

    #[error("Unknown book name: {0:?}")]
    UnknownBook(String),

    #[error("Invalid chapter range {start}-{end} for {book}")]
    BadRange { book: String, start: u32, end: u32 },
}

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?P<book>.*?\D)\s+)?(?P<start>\d+)(?:\s*-\s*(?P<end>\d+))?$")
        .expect("valid chapter token regex")
});

/// Parse one row of the table into chapter refs.
///
/// `resolve` maps a localized book name to `(abbrev, chapter_count)`.
pub fn parse_day<F>(text: &str, resolve: F) -> Result<Vec<String>, PlanTableError>
where
    F: Fn(&str) -> Option<(&'static str, u32)>,
{
    if text.trim().is_empty() {
        return Err(PlanTableError::Empty);
    }

    let mut refs = Vec::new();
    let mut current: Option<(&'static str, u32)> = None;

    for token in text.split(',') {
        let token = token.trim();
        let caps = TOKEN_RE
            .captures(token)
            .ok_or_else(|| PlanTableError::BadToken(token.to_string()))?;

        if let Some(book) = caps.name("book") {
            let name = book.as_str().trim();
            current = Some(
                resolve(name).ok_or_else(|| PlanTableError::UnknownBook(name.to_string()))?,
            );
        }

        let (abbrev, chapters) =
            current.ok_or_else(|| PlanTableError::MissingBook(token.to_string()))?;

        let start: u32 = caps["start"]
            .parse()
            .map_err(|_| PlanTableError::BadToken(token.to_string()))?;
        let end: u32 = match caps.name("end") {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| PlanTableError::BadToken(token.to_string()))?,
            None => start,
        };

        if start == 0 || end < start || end > chapters {
            return Err(PlanTableError::BadRange {
                book: abbrev.to_string(),
                start,
                end,
            });
        }

        refs.extend((start..=end).map(|n| format!("{}-{}", abbrev, n)));
    }

    Ok(refs)
}

/// Parse a whole day table. Malformed rows are logged and skipped.
pub fn parse_table<F>(rows: &[(u32, &str)], resolve: F) -> Vec<ChronologicalPlanEntry>
where
    F: Fn(&str) -> Option<(&'static str, u32)>,
{
    rows.iter()
        .filter_map(|&(day_index, text)| match parse_day(text, &resolve) {
            Ok(chapter_refs) => Some(ChronologicalPlanEntry {
                day_index,
                chapter_refs,
            }),
            Err(e) => {
                tracing::warn!("Skipping chronological plan day {}: {}", day_index, e);
                None
            }
        })
        .collect()
}

/// Bundled 365-day chronological plan
pub static CHRONOLOGICAL_TABLE: &[(u32, &str)] = &[
    (1, "Genesis 1-3"),
    (2, "Genesis 4-7"),
    (3, "Genesis 8-10"),
    (4, "Genesis 11, Job 1-2"),
    (5, "Job 3-5"),
    (6, "Job 6-9"),
    (7, "Job 10-12"),
    (8, "Job 13-15"),
    (9, "Job 16-18"),
    (10, "Job 19-22"),
    (11, "Job 23-25"),
    (12, "Job 26-28"),
    (13, "Job 29-31"),
    (14, "Job 32-35"),
    (15, "Job 36-38"),
    (16, "Job 39-41"),
    (17, "Job 42, Genesis 12,13"),
    (18, "Genesis 14-17"),
    (19, "Genesis 18-20"),
    (20, "Genesis 21-23"),
    (21, "Genesis 24-26"),
    (22, "Genesis 27-30"),
    (23, "Genesis 31-33"),
    (24, "Genesis 34-36"),
    (25, "Genesis 37-39"),
    (26, "Genesis 40-43"),
    (27, "Genesis 44-46"),
    (28, "Genesis 47-49"),
    (29, "Genesis 50, Exodus 1,2"),
    (30, "Exodus 3-6"),
    (31, "Exodus 7-9"),
    (32, "Exodus 10-12"),
    (33, "Exodus 13-15"),
    (34, "Exodus 16-19"),
    (35, "Exodus 20-22"),
    (36, "Exodus 23-25"),
    (37, "Exodus 26-29"),
    (38, "Exodus 30-32"),
    (39, "Exodus 33-35"),
    (40, "Exodus 36-38"),
    (41, "Exodus 39,40, Leviticus 1,2"),
    (42, "Leviticus 3-5"),
    (43, "Leviticus 6-8"),
    (44, "Leviticus 9-11"),
    (45, "Leviticus 12-15"),
    (46, "Leviticus 16-18"),
    (47, "Leviticus 19-21"),
    (48, "Leviticus 22-24"),
    (49, "Leviticus 25-27, Numbers 1"),
    (50, "Numbers 2-4"),
    (51, "Numbers 5-7"),
    (52, "Numbers 8-10"),
    (53, "Numbers 11-14"),
    (54, "Numbers 15-17"),
    (55, "Numbers 18-20"),
    (56, "Numbers 21-23"),
    (57, "Numbers 24-27"),
    (58, "Numbers 28-30"),
    (59, "Numbers 31-33"),
    (60, "Numbers 34-36"),
    (61, "Deuteronomy 1-4"),
    (62, "Deuteronomy 5-7"),
    (63, "Deuteronomy 8-10"),
    (64, "Deuteronomy 11-13"),
    (65, "Deuteronomy 14-17"),
    (66, "Deuteronomy 18-20"),
    (67, "Deuteronomy 21-23"),
    (68, "Deuteronomy 24-27"),
    (69, "Deuteronomy 28-30"),
    (70, "Deuteronomy 31-33"),
    (71, "Deuteronomy 34, Psalms 90, Joshua 1"),
    (72, "Joshua 2-5"),
    (73, "Joshua 6-8"),
    (74, "Joshua 9-11"),
    (75, "Joshua 12-14"),
    (76, "Joshua 15-18"),
    (77, "Joshua 19-21"),
    (78, "Joshua 22-24"),
    (79, "Judges 1-3"),
    (80, "Judges 4-7"),
    (81, "Judges 8-10"),
    (82, "Judges 11-13"),
    (83, "Judges 14-16"),
    (84, "Judges 17-20"),
    (85, "Judges 21, Ruth 1,2"),
    (86, "Ruth 3-4, 1 Samuel 1"),
    (87, "1 Samuel 2-4"),
    (88, "1 Samuel 5-8"),
    (89, "1 Samuel 9-11"),
    (90, "1 Samuel 12-14"),
    (91, "1 Samuel 15-17"),
    (92, "1 Samuel 18-21"),
    (93, "1 Samuel 22-24"),
    (94, "1 Samuel 25-27"),
    (95, "1 Samuel 28-30"),
    (96, "1 Samuel 31, 1 Chronicles 1-3"),
    (97, "1 Chronicles 4-6"),
    (98, "1 Chronicles 7-9"),
    (99, "2 Samuel 1-3"),
    (100, "2 Samuel 4-7"),
    (101, "2 Samuel 8-10"),
    (102, "2 Samuel 11-13"),
    (103, "2 Samuel 14-17"),
    (104, "2 Samuel 18-20"),
    (105, "2 Samuel 21-23"),
    (106, "2 Samuel 24, 1 Chronicles 10-11"),
    (107, "1 Chronicles 12-15"),
    (108, "1 Chronicles 16-18"),
    (109, "1 Chronicles 19-21"),
    (110, "1 Chronicles 22-24"),
    (111, "1 Chronicles 25-28"),
    (112, "1 Chronicles 29, Psalms 1-2"),
    (113, "Psalms 3-5"),
    (114, "Psalms 6-8"),
    (115, "Psalms 9-12"),
    (116, "Psalms 13-15"),
    (117, "Psalms 16-18"),
    (118, "Psalms 19-21"),
    (119, "Psalms 22-25"),
    (120, "Psalms 26-28"),
    (121, "Psalms 29-31"),
    (122, "Psalms 32-34"),
    (123, "Psalms 35-38"),
    (124, "Psalms 39-41"),
    (125, "Psalms 42-44"),
    (126, "Psalms 45-47"),
    (127, "Psalms 48-51"),
    (128, "Psalms 52-54"),
    (129, "Psalms 55-57"),
    (130, "Psalms 58-60"),
    (131, "Psalms 61-64"),
    (132, "Psalms 65-67"),
    (133, "Psalms 68-70"),
    (134, "Psalms 71-74"),
    (135, "Psalms 75-77"),
    (136, "Psalms 78-80"),
    (137, "Psalms 81-83"),
    (138, "Psalms 84-87"),
    (139, "Psalms 88,89, 91"),
    (140, "Psalms 92-94"),
    (141, "Psalms 95-97"),
    (142, "Psalms 98-101"),
    (143, "Psalms 102-104"),
    (144, "Psalms 105-107"),
    (145, "Psalms 108-110"),
    (146, "Psalms 111-114"),
    (147, "Psalms 115-117"),
    (148, "Psalms 118-120"),
    (149, "Psalms 121-123"),
    (150, "Psalms 124-127"),
    (151, "Psalms 128-130"),
    (152, "Psalms 131-133"),
    (153, "Psalms 134-136"),
    (154, "Psalms 137-140"),
    (155, "Psalms 141-143"),
    (156, "Psalms 144-146"),
    (157, "Psalms 147-149"),
    (158, "Psalms 150, 1 Kings 1-3"),
    (159, "1 Kings 4-6"),
    (160, "1 Kings 7-9"),
    (161, "1 Kings 10,11, 2 Chronicles 1"),
    (162, "2 Chronicles 2-5"),
    (163, "2 Chronicles 6-8"),
    (164, "2 Chronicles 9, Proverbs 1-2"),
    (165, "Proverbs 3-5"),
    (166, "Proverbs 6-9"),
    (167, "Proverbs 10-12"),
    (168, "Proverbs 13-15"),
    (169, "Proverbs 16-19"),
    (170, "Proverbs 20-22"),
    (171, "Proverbs 23-25"),
    (172, "Proverbs 26-28"),
    (173, "Proverbs 29-31, Ecclesiastes 1"),
    (174, "Ecclesiastes 2-4"),
    (175, "Ecclesiastes 5-7"),
    (176, "Ecclesiastes 8-10"),
    (177, "Ecclesiastes 11,12, Song of Songs 1,2"),
    (178, "Song of Songs 3-5"),
    (179, "Song of Songs 6-8"),
    (180, "1 Kings 12-14"),
    (181, "1 Kings 15-18"),
    (182, "1 Kings 19-21"),
    (183, "1 Kings 22, 2 Chronicles 10,11"),
    (184, "2 Chronicles 12-14"),
    (185, "2 Chronicles 15-18"),
    (186, "2 Chronicles 19-20, 2 Kings 1"),
    (187, "2 Kings 2-4"),
    (188, "2 Kings 5-7"),
    (189, "2 Kings 8-11"),
    (190, "2 Kings 12-14"),
    (191, "2 Kings 15-17"),
    (192, "2 Chronicles 21-23"),
    (193, "2 Chronicles 24-27"),
    (194, "2 Chronicles 28, Obadiah 1, Joel 1"),
    (195, "Joel 2,3, Jonah 1"),
    (196, "Jonah 2-4"),
    (197, "Amos 1-4"),
    (198, "Amos 5-7"),
    (199, "Amos 8,9, Hosea 1"),
    (200, "Hosea 2-5"),
    (201, "Hosea 6-8"),
    (202, "Hosea 9-11"),
    (203, "Hosea 12-14"),
    (204, "Isaiah 1-4"),
    (205, "Isaiah 5-7"),
    (206, "Isaiah 8-10"),
    (207, "Isaiah 11-13"),
    (208, "Isaiah 14-17"),
    (209, "Isaiah 18-20"),
    (210, "Isaiah 21-23"),
    (211, "Isaiah 24-26"),
    (212, "Isaiah 27-30"),
    (213, "Isaiah 31-33"),
    (214, "Isaiah 34-36"),
    (215, "Isaiah 37-39"),
    (216, "Isaiah 40-43"),
    (217, "Isaiah 44-46"),
    (218, "Isaiah 47-49"),
    (219, "Isaiah 50-52"),
    (220, "Isaiah 53-56"),
    (221, "Isaiah 57-59"),
    (222, "Isaiah 60-62"),
    (223, "Isaiah 63-65"),
    (224, "Isaiah 66, Micah 1-3"),
    (225, "Micah 4-6"),
    (226, "Micah 7, 2 Kings 18-19"),
    (227, "2 Kings 20-22"),
    (228, "2 Kings 23-25, 2 Chronicles 29"),
    (229, "2 Chronicles 30-32"),
    (230, "2 Chronicles 33-35"),
    (231, "2 Chronicles 36, Nahum 1,2"),
    (232, "Nahum 3, Zephaniah 1-3"),
    (233, "Habakkuk 1-3"),
    (234, "Jeremiah 1-3"),
    (235, "Jeremiah 4-7"),
    (236, "Jeremiah 8-10"),
    (237, "Jeremiah 11-13"),
    (238, "Jeremiah 14-16"),
    (239, "Jeremiah 17-20"),
    (240, "Jeremiah 21-23"),
    (241, "Jeremiah 24-26"),
    (242, "Jeremiah 27-29"),
    (243, "Jeremiah 30-33"),
    (244, "Jeremiah 34-36"),
    (245, "Jeremiah 37-39"),
    (246, "Jeremiah 40-42"),
    (247, "Jeremiah 43-46"),
    (248, "Jeremiah 47-49"),
    (249, "Jeremiah 50-52"),
    (250, "Lamentations 1-3"),
    (251, "Lamentations 4,5, Ezekiel 1,2"),
    (252, "Ezekiel 3-5"),
    (253, "Ezekiel 6-8"),
    (254, "Ezekiel 9-11"),
    (255, "Ezekiel 12-15"),
    (256, "Ezekiel 16-18"),
    (257, "Ezekiel 19-21"),
    (258, "Ezekiel 22-24"),
    (259, "Ezekiel 25-28"),
    (260, "Ezekiel 29-31"),
    (261, "Ezekiel 32-34"),
    (262, "Ezekiel 35-37"),
    (263, "Ezekiel 38-41"),
    (264, "Ezekiel 42-44"),
    (265, "Ezekiel 45-47"),
    (266, "Ezekiel 48, Daniel 1-3"),
    (267, "Daniel 4-6"),
    (268, "Daniel 7-9"),
    (269, "Daniel 10-12"),
    (270, "Ezra 1-4"),
    (271, "Ezra 5,6, Haggai 1"),
    (272, "Haggai 2, Zechariah 1-2"),
    (273, "Zechariah 3-5"),
    (274, "Zechariah 6-9"),
    (275, "Zechariah 10-12"),
    (276, "Zechariah 13-14, Esther 1"),
    (277, "Esther 2-4"),
    (278, "Esther 5-8"),
    (279, "Esther 9,10, Ezra 7"),
    (280, "Ezra 8-10"),
    (281, "Nehemiah 1-3"),
    (282, "Nehemiah 4-7"),
    (283, "Nehemiah 8-10"),
    (284, "Nehemiah 11-13"),
    (285, "Malachi 1-3"),
    (286, "Malachi 4, Luke 1-2, Matthew 1"),
    (287, "Matthew 2-4"),
    (288, "Matthew 5-7"),
    (289, "Matthew 8-10"),
    (290, "Matthew 11-14"),
    (291, "Matthew 15-17"),
    (292, "Matthew 18-20"),
    (293, "Matthew 21-23"),
    (294, "Matthew 24-27"),
    (295, "Matthew 28, Mark 1,2"),
    (296, "Mark 3-5"),
    (297, "Mark 6-8"),
    (298, "Mark 9-12"),
    (299, "Mark 13-15"),
    (300, "Mark 16, Luke 3-4"),
    (301, "Luke 5-8"),
    (302, "Luke 9-11"),
    (303, "Luke 12-14"),
    (304, "Luke 15-17"),
    (305, "Luke 18-21"),
    (306, "Luke 22-24"),
    (307, "John 1-3"),
    (308, "John 4-6"),
    (309, "John 7-10"),
    (310, "John 11-13"),
    (311, "John 14-16"),
    (312, "John 17-19"),
    (313, "John 20,21, Acts 1,2"),
    (314, "Acts 3-5"),
    (315, "Acts 6-8"),
    (316, "Acts 9-11"),
    (317, "Acts 12, James 1-3"),
    (318, "James 4-5, Acts 13"),
    (319, "Acts 14, Galatians 1,2"),
    (320, "Galatians 3-5"),
    (321, "Galatians 6, Acts 15-17"),
    (322, "1 Thessalonians 1-3"),
    (323, "1 Thessalonians 4,5, 2 Thessalonians 1"),
    (324, "2 Thessalonians 2-3, Acts 18"),
    (325, "Acts 19, 1 Corinthians 1-3"),
    (326, "1 Corinthians 4-6"),
    (327, "1 Corinthians 7-9"),
    (328, "1 Corinthians 10-12"),
    (329, "1 Corinthians 13-16"),
    (330, "2 Corinthians 1-3"),
    (331, "2 Corinthians 4-6"),
    (332, "2 Corinthians 7-10"),
    (333, "2 Corinthians 11-13"),
    (334, "Acts 20, Romans 1-2"),
    (335, "Romans 3-5"),
    (336, "Romans 6-9"),
    (337, "Romans 10-12"),
    (338, "Romans 13-15"),
    (339, "Romans 16, Acts 21,22"),
    (340, "Acts 23-26"),
    (341, "Acts 27,28, Ephesians 1"),
    (342, "Ephesians 2-4"),
    (343, "Ephesians 5,6, Colossians 1"),
    (344, "Colossians 2-4, Philemon 1"),
    (345, "Philippians 1-3"),
    (346, "Philippians 4, 1 Timothy 1-2"),
    (347, "1 Timothy 3-5"),
    (348, "1 Timothy 6, Titus 1-3"),
    (349, "1 Peter 1-3"),
    (350, "1 Peter 4-5, Hebrews 1"),
    (351, "Hebrews 2-4"),
    (352, "Hebrews 5-8"),
    (353, "Hebrews 9-11"),
    (354, "Hebrews 12-13, 2 Timothy 1"),
    (355, "2 Timothy 2-4"),
    (356, "2 Peter 1-3, Jude 1"),
    (357, "1 John 1-3"),
    (358, "1 John 4-5, 2 John 1"),
    (359, "3 John 1, Revelation 1,2"),
    (360, "Revelation 3-6"),
    (361, "Revelation 7-9"),
    (362, "Revelation 10-12"),
    (363, "Revelation 13-15"),
    (364, "Revelation 16-19"),
    (365, "Revelation 20-22"),
];
