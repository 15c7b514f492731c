use crate::types::{FontSpec, FontStyle, FontWeight, TextAlign, TextBaseline};

#[cfg(feature = "cosmic-text")]
extern crate lazy_static;

#[cfg(feature = "cosmic-text")]
pub mod cosmic;

pub mod fixed;

/// Measures rendered text. Layout depends on font metrics only through
/// this trait, so it can be swapped for a deterministic stub in tests.
pub trait TextMeasurer: Send + Sync {
    /// Measures the bounding dimensions for a text string with given configuration
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds;

    /// Pixel width of `text` rendered in `font`
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.measure_text_bounds(&TextMeasurementConfig::from_font(text, font))
            .width
    }
}

/// Configuration needed for text measurement
#[derive(Debug, Clone)]
pub struct TextMeasurementConfig<'a> {
    /// The text string to measure
    pub text: &'a str,
    /// Font family name
    pub font: &'a str,
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (normal, bold, or numeric)
    pub font_weight: &'a FontWeight,
    /// Font style (normal or italic)
    pub font_style: &'a FontStyle,
}

impl<'a> TextMeasurementConfig<'a> {
    pub fn from_font(text: &'a str, font: &'a FontSpec) -> Self {
        Self {
            text,
            font: &font.family,
            font_size: font.size,
            font_weight: &font.weight,
            font_style: &font.style,
        }
    }
}

/// Results from text measurement
#[derive(Debug, Clone, PartialEq)]
pub struct TextBounds {
    /// Total width of the text
    pub width: f32,
    /// Total height from top to bottom
    pub height: f32,
    /// Distance from top to baseline
    pub ascent: f32,
    /// Distance from bottom to baseline
    pub descent: f32,
    /// Distance from top to where the top of the next line would be
    pub line_height: f32,
}

impl TextBounds {
    /// Calculate the origin (top-left) point of the text box based on alignment and baseline
    pub fn calculate_origin(
        &self,
        position: [f32; 2],
        align: &TextAlign,
        baseline: &TextBaseline,
    ) -> [f32; 2] {
        let x = match align {
            TextAlign::Left => position[0],
            TextAlign::Center => position[0] - self.width / 2.0,
            TextAlign::Right => position[0] - self.width,
        };

        let y = match baseline {
            TextBaseline::Alphabetic => position[1] - self.ascent,
            TextBaseline::Top => position[1],
            TextBaseline::Middle => position[1] - self.height / 2.0,
            TextBaseline::Bottom => position[1] - self.height,
        };

        [x, y]
    }

    pub fn empty(font_size: f32) -> Self {
        TextBounds {
            width: 0.0,
            height: font_size,
            ascent: font_size * 0.8,
            descent: font_size * 0.2,
            line_height: font_size * 1.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bounds_calculate_origin() {
        let bounds = TextBounds {
            width: 100.0,
            height: 20.0,
            ascent: 15.0,
            descent: 5.0,
            line_height: 25.0,
        };

        let origin = bounds.calculate_origin([10.0, 10.0], &TextAlign::Left, &TextBaseline::Top);
        assert_eq!(origin, [10.0, 10.0]);

        let origin =
            bounds.calculate_origin([10.0, 10.0], &TextAlign::Center, &TextBaseline::Middle);
        assert_eq!(origin, [-40.0, 0.0]);

        let origin =
            bounds.calculate_origin([10.0, 10.0], &TextAlign::Right, &TextBaseline::Bottom);
        assert_eq!(origin, [-90.0, -10.0]);

        let origin =
            bounds.calculate_origin([10.0, 10.0], &TextAlign::Left, &TextBaseline::Alphabetic);
        assert_eq!(origin, [10.0, -5.0]);
    }

    struct ConstantMeasurer;

    impl TextMeasurer for ConstantMeasurer {
        fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds {
            TextBounds {
                width: 42.0,
                ..TextBounds::empty(config.font_size)
            }
        }
    }

    #[test]
    fn test_measure_width_skips_empty_text() {
        let font = FontSpec::sans_serif(11.0);
        assert_eq!(ConstantMeasurer.measure_width("", &font), 0.0);
        assert_eq!(ConstantMeasurer.measure_width("Revenue", &font), 42.0);
    }
}
