use crate::error::ChartScaleError;

fn validate(max: f32, count: usize) -> Result<f32, ChartScaleError> {
    if count < 2 {
        return Err(ChartScaleError::TooFewTicks(count));
    }
    if !max.is_finite() {
        return Err(ChartScaleError::NonFiniteDomain(max));
    }
    Ok(max / (count - 1) as f32)
}

/// `count` evenly spaced values from 0 to `max`, each rounded to the
/// nearest integer. The last tick is `round(max)` up to rounding error of
/// the step, which is left uncorrected.
pub fn rounded_ticks(max: f32, count: usize) -> Result<Vec<f32>, ChartScaleError> {
    let step = validate(max, count)?;
    // `+ 0.0` turns the -0.0 of a negative step into 0.0
    Ok((0..count).map(|i| (i as f32 * step).round() + 0.0).collect())
}

/// `count` evenly spaced values from 0 to `max` without rounding:
/// `max / (count - 1) * i`.
pub fn even_ticks(max: f32, count: usize) -> Result<Vec<f32>, ChartScaleError> {
    let step = validate(max, count)?;
    Ok((0..count).map(|i| step * i as f32 + 0.0).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_rounded_ticks() {
        assert_eq!(rounded_ticks(200.0, 3).unwrap(), vec![0.0, 100.0, 200.0]);
        assert_eq!(rounded_ticks(10.0, 4).unwrap(), vec![0.0, 3.0, 7.0, 10.0]);
    }

    #[test]
    fn test_even_ticks_are_not_rounded() {
        let ticks = even_ticks(10.0, 4).unwrap();
        assert_eq!(ticks[0], 0.0);
        assert!((ticks[1] - 10.0 / 3.0).abs() < 1e-6);
        assert_eq!(ticks[3], 10.0);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn test_too_few_ticks(#[case] count: usize) {
        assert_eq!(
            rounded_ticks(100.0, count),
            Err(ChartScaleError::TooFewTicks(count))
        );
        assert_eq!(
            even_ticks(100.0, count),
            Err(ChartScaleError::TooFewTicks(count))
        );
    }

    #[test]
    fn test_non_finite_max() {
        assert!(matches!(
            rounded_ticks(f32::NAN, 5),
            Err(ChartScaleError::NonFiniteDomain(_))
        ));
    }

    #[test]
    fn test_negative_max_starts_at_positive_zero() {
        let rounded = rounded_ticks(-50.0, 3).unwrap();
        assert_eq!(rounded, vec![0.0, -25.0, -50.0]);
        assert!(rounded[0].is_sign_positive());
        assert!(even_ticks(-50.0, 3).unwrap()[0].is_sign_positive());
    }

    #[test]
    fn test_zero_max() {
        assert_eq!(rounded_ticks(0.0, 3).unwrap(), vec![0.0, 0.0, 0.0]);
    }
}
