//! Chapters-per-day rate derived from a plan style

use super::PlanStyle;
use crate::catalog::BibleCatalog;

/// Average month length used for duration plans
pub const DAYS_PER_MONTH: f64 = 30.4375;
/// Average year length used for chronological plans
pub const DAYS_PER_YEAR: f64 = 365.25;

/// `numerator / denominator`, or 0 when the result would not be a finite non-negative number
fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator.is_finite() && denominator > 0.0 {
        non_negative(numerator / denominator)
    } else {
        0.0
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Chapters per day the plan expects. Never negative; 0 means the plan is unusable.
pub fn rate(style: &PlanStyle, catalog: &BibleCatalog) -> f64 {
    match style {
        PlanStyle::ChaptersPerDay { chapters } | PlanStyle::Custom { chapters, .. } => {
            non_negative(*chapters)
        }
        PlanStyle::TotalDuration { months } => {
            safe_div(catalog.total_chapters() as f64, months * DAYS_PER_MONTH)
        }
        PlanStyle::Chronological { years } => safe_div(
            catalog.chronological_chapter_order().len() as f64,
            years * DAYS_PER_YEAR,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BOOKS;

    #[test]
    fn test_chapters_per_day_is_exact() {
        let catalog = BibleCatalog::global();
        assert_eq!(rate(&PlanStyle::ChaptersPerDay { chapters: 2.0 }, catalog), 2.0);

        // Independent of the catalog size
        let tiny = BibleCatalog::from_tables(&BOOKS[..1], &[]);
        assert_eq!(rate(&PlanStyle::ChaptersPerDay { chapters: 2.0 }, &tiny), 2.0);
    }

    #[test]
    fn test_custom_uses_chapters() {
        let style = PlanStyle::Custom {
            chapters: 4.0,
            start_book: Some("mt".to_string()),
        };
        assert_eq!(rate(&style, BibleCatalog::global()), 4.0);
    }

    #[test]
    fn test_total_duration() {
        let r = rate(&PlanStyle::TotalDuration { months: 12.0 }, BibleCatalog::global());
        assert!((r - 1189.0 / (12.0 * 30.4375)).abs() < 1e-9);
    }

    #[test]
    fn test_chronological() {
        let r = rate(&PlanStyle::Chronological { years: 1.0 }, BibleCatalog::global());
        assert!((r - 1189.0 / 365.25).abs() < 1e-9);
    }

    #[test]
    fn test_zero_or_invalid_denominator_yields_zero() {
        let catalog = BibleCatalog::global();
        assert_eq!(rate(&PlanStyle::TotalDuration { months: 0.0 }, catalog), 0.0);
        assert_eq!(rate(&PlanStyle::TotalDuration { months: -3.0 }, catalog), 0.0);
        assert_eq!(rate(&PlanStyle::Chronological { years: f64::NAN }, catalog), 0.0);
        assert_eq!(rate(&PlanStyle::ChaptersPerDay { chapters: -1.0 }, catalog), 0.0);
    }

    #[test]
    fn test_chronological_with_empty_order() {
        let catalog = BibleCatalog::from_tables(BOOKS, &[]);
        assert_eq!(rate(&PlanStyle::Chronological { years: 1.0 }, &catalog), 0.0);
    }
}
