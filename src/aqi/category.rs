use std::fmt;

/// Air-quality category bucket for a predicted AQI score.
///
/// A closed set with static display attributes; every finite score maps to
/// exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Good,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
}

impl Category {
    /// All buckets in ascending score order, as shown in the reference table.
    pub const ALL: [Category; 5] = [
        Category::Good,
        Category::Moderate,
        Category::Poor,
        Category::VeryPoor,
        Category::Severe,
    ];

    /// Maps a predicted score to its bucket.
    ///
    /// Upper bounds are inclusive, so ties resolve to the better category.
    /// The score is not clamped first: a negative score lands in `Good`.
    pub fn classify(score: f64) -> Category {
        if score <= 50.0 {
            Category::Good
        } else if score <= 100.0 {
            Category::Moderate
        } else if score <= 200.0 {
            Category::Poor
        } else if score <= 300.0 {
            Category::VeryPoor
        } else {
            Category::Severe
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::Poor => "Poor",
            Category::VeryPoor => "Very Poor",
            Category::Severe => "Severe",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Good => "green",
            Category::Moderate => "yellow",
            Category::Poor => "orange",
            Category::VeryPoor => "red",
            Category::Severe => "purple",
        }
    }

    /// Colored indicator shown next to the category name.
    pub fn badge(self) -> &'static str {
        match self {
            Category::Good => "🟢",
            Category::Moderate => "🟡",
            Category::Poor => "🟠",
            Category::VeryPoor => "🔴",
            Category::Severe => "🟣",
        }
    }

    pub fn face(self) -> &'static str {
        match self {
            Category::Good => "😊",
            Category::Moderate => "😐",
            Category::Poor => "😷",
            Category::VeryPoor => "🤢",
            Category::Severe => "😵‍💫",
        }
    }

    /// Score range label for the reference table.
    pub fn range_label(self) -> &'static str {
        match self {
            Category::Good => "0-50",
            Category::Moderate => "51-100",
            Category::Poor => "101-200",
            Category::VeryPoor => "201-300",
            Category::Severe => "301+",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive_on_the_upper_end() {
        assert_eq!(Category::classify(50.0), Category::Good);
        assert_eq!(Category::classify(51.0), Category::Moderate);
        assert_eq!(Category::classify(100.0), Category::Moderate);
        assert_eq!(Category::classify(101.0), Category::Poor);
        assert_eq!(Category::classify(200.0), Category::Poor);
        assert_eq!(Category::classify(201.0), Category::VeryPoor);
        assert_eq!(Category::classify(300.0), Category::VeryPoor);
        assert_eq!(Category::classify(300.01), Category::Severe);
    }

    #[test]
    fn negative_scores_fall_into_good() {
        assert_eq!(Category::classify(-1.0), Category::Good);
        assert_eq!(Category::classify(-1000.0), Category::Good);
    }

    #[test]
    fn arbitrarily_large_scores_are_severe() {
        assert_eq!(Category::classify(1e12), Category::Severe);
        assert_eq!(Category::classify(f64::MAX), Category::Severe);
    }

    #[test]
    fn display_attributes_match_the_bucket_definitions() {
        assert_eq!(Category::Good.color(), "green");
        assert_eq!(Category::Good.face(), "😊");
        assert_eq!(Category::VeryPoor.name(), "Very Poor");
        assert_eq!(Category::Severe.color(), "purple");
        assert_eq!(Category::Severe.badge(), "🟣");
    }

    #[test]
    fn reference_order_is_ascending() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.range_label()).collect();
        assert_eq!(labels, ["0-50", "51-100", "101-200", "201-300", "301+"]);
    }
}
