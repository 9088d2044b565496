pub mod category;

pub use category::Category;

/// Cosmetic progress proxy for a predicted score: `min(floor(score / 5), 100)`.
///
/// Saturates at 100 however large the score gets. The low end is deliberately
/// left unclamped, so negative scores produce negative progress values.
pub fn progress(score: f64) -> i64 {
    ((score / 5.0).floor() as i64).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_a_fifth_of_the_score_rounded_down() {
        assert_eq!(progress(0.0), 0);
        assert_eq!(progress(250.0), 50);
        assert_eq!(progress(310.0), 62);
        assert_eq!(progress(4.9), 0);
    }

    #[test]
    fn progress_saturates_at_one_hundred() {
        assert_eq!(progress(500.0), 100);
        assert_eq!(progress(600.0), 100);
        assert_eq!(progress(1e15), 100);
    }

    #[test]
    fn progress_is_unclamped_below_zero() {
        assert_eq!(progress(-10.0), -2);
    }
}
