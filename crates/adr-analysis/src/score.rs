//! Score arithmetic
//!
//! Every reported score goes through [`finish`]: clamped to [0, 100] and
//! rounded to one decimal. Empty denominators yield 0.

/// Clamp to [0, 100]; NaN becomes 0
#[inline]
#[must_use]
pub(crate) fn clamp(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

/// Round to one decimal
#[inline]
#[must_use]
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamp then round
#[inline]
#[must_use]
pub(crate) fn finish(score: f64) -> f64 {
    round1(clamp(score))
}

/// `num / den`, 0 when `den` is 0
#[inline]
#[must_use]
pub(crate) fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Arithmetic mean, 0 for no values
#[must_use]
pub(crate) fn mean(values: &[f64]) -> f64 {
    ratio(values.iter().sum(), values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_clamps_and_rounds() {
        assert!((finish(123.0) - 100.0).abs() < f64::EPSILON);
        assert!(finish(-4.0).abs() < f64::EPSILON);
        assert!(finish(f64::NAN).abs() < f64::EPSILON);
        assert!((finish(33.333) - 33.3).abs() < 1e-9);
        assert!((finish(66.66) - 66.7).abs() < 1e-9);
    }

    #[test]
    fn empty_denominators() {
        assert!(ratio(5.0, 0.0).abs() < f64::EPSILON);
        assert!(mean(&[]).abs() < f64::EPSILON);
        assert!((mean(&[10.0, 20.0]) - 15.0).abs() < f64::EPSILON);
    }
}
