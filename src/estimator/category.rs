//! Mapping between minute estimates and line categories

use crate::types::LineCategory;

/// Inclusive upper bound in minutes for every category but the last
pub const CATEGORY_THRESHOLDS: [(u32, LineCategory); 4] = [
    (0, LineCategory::NoLine),
    (4, LineCategory::Short),
    (15, LineCategory::Medium),
    (30, LineCategory::Long),
];

/// Map a rounded minute estimate onto its category
pub fn category_for_minutes(minutes: u32) -> LineCategory {
    CATEGORY_THRESHOLDS
        .iter()
        .find(|(upper, _)| minutes <= *upper)
        .map(|(_, category)| *category)
        .unwrap_or(LineCategory::VeryLong)
}

/// Representative minutes for a report that only carries a category.
/// Each value falls inside its own category's range.
pub fn default_minutes(category: LineCategory) -> u32 {
    match category {
        LineCategory::NoLine => 0,
        LineCategory::Short => 4,
        LineCategory::Medium => 10,
        LineCategory::Long => 20,
        LineCategory::VeryLong => 45,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(category_for_minutes(0), LineCategory::NoLine);
        assert_eq!(category_for_minutes(1), LineCategory::Short);
        assert_eq!(category_for_minutes(4), LineCategory::Short);
        assert_eq!(category_for_minutes(5), LineCategory::Medium);
        assert_eq!(category_for_minutes(15), LineCategory::Medium);
        assert_eq!(category_for_minutes(16), LineCategory::Long);
        assert_eq!(category_for_minutes(30), LineCategory::Long);
        assert_eq!(category_for_minutes(31), LineCategory::VeryLong);
        assert_eq!(category_for_minutes(u32::MAX), LineCategory::VeryLong);
    }

    #[test]
    fn test_categories_are_monotonic_without_gaps() {
        let mut previous = category_for_minutes(0);
        for minutes in 1..=200 {
            let current = category_for_minutes(minutes);
            assert!(current >= previous, "category went backwards at {}", minutes);
            previous = current;
        }
        assert_eq!(previous, LineCategory::VeryLong);
    }

    #[test]
    fn test_default_minutes_round_trip_to_own_category() {
        for category in LineCategory::ALL {
            assert_eq!(category_for_minutes(default_minutes(category)), category);
        }
    }
}
