use unicode_segmentation::UnicodeSegmentation;

use super::{TextBounds, TextMeasurementConfig, TextMeasurer};

/// Deterministic measurer that gives every grapheme the same advance,
/// `font_size * advance_ratio`. Used for headless layout and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthTextMeasurer {
    pub advance_ratio: f32,
}

impl FixedWidthTextMeasurer {
    pub fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }
}

impl Default for FixedWidthTextMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasurer for FixedWidthTextMeasurer {
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds {
        let graphemes = config.text.graphemes(true).count() as f32;
        TextBounds {
            width: graphemes * config.font_size * self.advance_ratio,
            ..TextBounds::empty(config.font_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FontSpec;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_width_scales_with_length_and_size() {
        let measurer = FixedWidthTextMeasurer::new(0.5);
        let font = FontSpec::sans_serif(10.0);
        assert_approx_eq!(f32, measurer.measure_width("abcd", &font), 20.0);

        let font = FontSpec::sans_serif(20.0);
        assert_approx_eq!(f32, measurer.measure_width("abcd", &font), 40.0);
    }

    #[test]
    fn test_counts_graphemes_not_bytes() {
        let measurer = FixedWidthTextMeasurer::new(1.0);
        let font = FontSpec::sans_serif(10.0);
        assert_approx_eq!(f32, measurer.measure_width("₹é", &font), 20.0);
    }
}
