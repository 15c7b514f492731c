/// Maps a numeric domain interval onto a pixel range interval.
///
/// `scale(v) = range_start + t * (range_end - range_start)` with
/// `t = (v - domain_start) / (domain_end - domain_start)`, evaluated as
/// `range_start * (1 - t) + range_end * t` so both domain endpoints map
/// exactly onto the range endpoints. A zero-width (or NaN) domain maps
/// every value to `range_start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
}

impl LinearScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    pub fn domain(&self) -> (f32, f32) {
        (self.domain_start, self.domain_end)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.range_start, self.range_end)
    }

    fn is_degenerate_domain(&self) -> bool {
        self.domain_start == self.domain_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
    }

    /// Maps a domain value to the range
    pub fn scale(&self, value: f32) -> f32 {
        if self.is_degenerate_domain() {
            return self.range_start;
        }
        let t = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start * (1.0 - t) + self.range_end * t
    }

    pub fn scale_all(&self, values: &[f32]) -> Vec<f32> {
        values.iter().map(|v| self.scale(*v)).collect()
    }

    /// Maps a range value back to the domain
    pub fn invert(&self, value: f32) -> f32 {
        if self.range_start == self.range_end
            || self.range_start.is_nan()
            || self.range_end.is_nan()
        {
            return self.domain_start;
        }
        let t = (value - self.range_start) / (self.range_end - self.range_start);
        self.domain_start * (1.0 - t) + self.domain_end * t
    }

    /// Pixel distance from the scaled domain start to the scaled value
    pub fn extent(&self, value: f32) -> f32 {
        (self.scale(value) - self.scale(self.domain_start)).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_scale_interpolates() {
        let scale = LinearScale::new((10.0, 30.0), (0.0, 100.0));
        assert_approx_eq!(f32, scale.scale(15.0), 25.0);
        assert_approx_eq!(f32, scale.scale(20.0), 50.0);
        // no clamping
        assert_approx_eq!(f32, scale.scale(40.0), 150.0);
    }

    #[test]
    fn test_inverted_range() {
        let scale = LinearScale::new((0.0, 200.0), (360.0, 40.0));
        assert_eq!(scale.scale(0.0), 360.0);
        assert_eq!(scale.scale(200.0), 40.0);
        assert_approx_eq!(f32, scale.scale(100.0), 200.0);
    }

    #[test]
    fn test_scale_degenerate() {
        let scale = LinearScale::new((10.0, 10.0), (0.0, 100.0));
        for v in [0.0, 10.0, 20.0] {
            assert_eq!(scale.scale(v), 0.0);
        }

        let scale = LinearScale::new((f32::NAN, 1.0), (5.0, 100.0));
        assert_eq!(scale.scale(0.5), 5.0);
    }

    #[test]
    fn test_invert() {
        let scale = LinearScale::new((10.0, 30.0), (0.0, 100.0));
        assert_approx_eq!(f32, scale.invert(50.0), 20.0);
        assert_approx_eq!(f32, scale.invert(-25.0), 5.0);

        let scale = LinearScale::new((0.0, 10.0), (1.0, 1.0));
        assert_eq!(scale.invert(1.0), 0.0);
    }

    #[test]
    fn test_extent_ignores_direction() {
        let scale = LinearScale::new((0.0, 200.0), (360.0, 40.0));
        assert_approx_eq!(f32, scale.extent(100.0), 160.0);
    }
}
