pub mod error;
pub mod linear;
pub mod ticks;

/// Largest finite value in `values`, ignoring NaN. `None` for empty input.
pub fn max_finite(values: impl IntoIterator<Item = f32>) -> Option<f32> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .map(ordered_float::OrderedFloat)
        .max()
        .map(|v| v.0)
}

/// Smallest finite value in `values`, ignoring NaN. `None` for empty input.
pub fn min_finite(values: impl IntoIterator<Item = f32>) -> Option<f32> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .map(ordered_float::OrderedFloat)
        .min()
        .map(|v| v.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_min_finite() {
        assert_eq!(max_finite([1.0, f32::NAN, 7.0, -2.0]), Some(7.0));
        assert_eq!(min_finite([1.0, f32::INFINITY, -2.0]), Some(-2.0));
        assert_eq!(max_finite(Vec::<f32>::new()), None);
    }
}
