//! Relative-difference scoring for servings and cooking times.

/// Score returned when either side is unknown.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Proximity of two optional quantities in `[0, 1]`.
///
/// Missing values are neutral (0.5). Otherwise the score falls off with the
/// absolute difference relative to the mean of the two values.
pub fn numeric_proximity(a: Option<f64>, b: Option<f64>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return NEUTRAL_SCORE;
    };

    if a == b {
        return 1.0;
    }

    let mean = (a + b) / 2.0;
    if mean <= 0.0 {
        return 0.0;
    }
    (1.0 - (a - b).abs() / mean).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_missing_is_neutral() {
        assert_eq!(numeric_proximity(None, Some(4.0)), 0.5);
        assert_eq!(numeric_proximity(Some(4.0), None), 0.5);
        assert_eq!(numeric_proximity(None, None), 0.5);
    }

    #[test]
    fn test_equal_is_one() {
        assert_eq!(numeric_proximity(Some(4.0), Some(4.0)), 1.0);
        assert_eq!(numeric_proximity(Some(0.0), Some(0.0)), 1.0);
    }

    #[test]
    fn test_relative_difference() {
        // |4 - 6| / 5 = 0.4
        assert_abs_diff_eq!(numeric_proximity(Some(4.0), Some(6.0)), 0.6);
        assert_abs_diff_eq!(numeric_proximity(Some(6.0), Some(4.0)), 0.6);
    }

    #[test]
    fn test_floors_at_zero() {
        // |1 - 10| / 5.5 > 1
        assert_eq!(numeric_proximity(Some(1.0), Some(10.0)), 0.0);
        assert_eq!(numeric_proximity(Some(0.0), Some(3.0)), 0.0);
    }
}
