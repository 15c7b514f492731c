use cosmic_text::{fontdb::Database, Attrs, Buffer, Family, FontSystem, Metrics};
use std::{collections::HashSet, sync::Mutex};

use super::{TextBounds, TextMeasurementConfig, TextMeasurer};
use crate::types::{FontStyle, FontWeight, FontWeightNameSpec};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref FONT_SYSTEM: Mutex<FontSystem> = Mutex::new(build_font_system());
}

fn build_font_system() -> FontSystem {
    let mut font_system = FontSystem::new();
    setup_default_fonts(font_system.db_mut());
    font_system
}

fn setup_default_fonts(fontdb: &mut Database) {
    let families: HashSet<String> = fontdb
        .faces()
        .flat_map(|face| {
            face.families
                .iter()
                .map(|(fam, _lang)| fam.clone())
                .collect::<Vec<_>>()
        })
        .collect();

    for family in ["Helvetica", "Arial", "Liberation Sans", "DejaVu Sans"] {
        if families.contains(family) {
            fontdb.set_sans_serif_family(family);
            break;
        }
    }

    for family in ["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif"] {
        if families.contains(family) {
            fontdb.set_serif_family(family);
            break;
        }
    }
}

/// Measures text with the system fonts, matching what a browser canvas
/// `measureText` would report for the same font shorthand.
#[derive(Default)]
pub struct CosmicTextMeasurer {}

impl CosmicTextMeasurer {
    pub fn new() -> Self {
        Self {}
    }
}

impl TextMeasurer for CosmicTextMeasurer {
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds {
        // A poisoned lock still holds a usable font database
        let mut font_system = match FONT_SYSTEM.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let buffer = make_cosmic_text_buffer(config, &mut font_system);
        measure_text_buffer(&buffer, config.font_size)
    }
}

fn measure_text_buffer(buffer: &Buffer, font_size: f32) -> TextBounds {
    let runs = buffer.layout_runs().collect::<Vec<_>>();
    if runs.is_empty() {
        return TextBounds::empty(font_size);
    }

    let mut max_ascent = 0.0;
    let mut max_descent = 0.0;
    let mut max_line_height = 0.0;
    for run in &runs {
        let ascent = run.line_y - run.line_top;
        let descent = run.line_height - ascent;
        max_ascent = f32::max(max_ascent, ascent);
        max_descent = f32::max(max_descent, descent);
        max_line_height = f32::max(max_line_height, run.line_height);
    }

    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    for run in runs {
        for glyph in run.glyphs {
            min_x = min_x.min(glyph.x);
            max_x = max_x.max(glyph.x + glyph.w);
        }
    }
    let width = if min_x == f32::MAX { 0.0 } else { max_x - min_x };

    TextBounds {
        width,
        height: max_ascent + max_descent,
        ascent: max_ascent,
        descent: max_descent,
        line_height: max_line_height,
    }
}

fn make_cosmic_text_buffer(config: &TextMeasurementConfig, font_system: &mut FontSystem) -> Buffer {
    let mut attrs = Attrs::new();
    attrs.family = match config.font.to_lowercase().as_str() {
        "serif" => Family::Serif,
        "sans serif" | "sans-serif" => Family::SansSerif,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        "monospace" => Family::Monospace,
        _ => Family::Name(config.font),
    };
    attrs.weight = match config.font_weight {
        FontWeight::Name(FontWeightNameSpec::Bold) => cosmic_text::Weight::BOLD,
        FontWeight::Name(FontWeightNameSpec::Normal) => cosmic_text::Weight::NORMAL,
        FontWeight::Number(w) => cosmic_text::Weight(*w as u16),
    };
    attrs.style = match config.font_style {
        FontStyle::Normal => cosmic_text::Style::Normal,
        FontStyle::Italic => cosmic_text::Style::Italic,
    };

    let metrics = Metrics::new(config.font_size, config.font_size);
    let mut buffer = Buffer::new(font_system, metrics);
    buffer.set_text(font_system, config.text, attrs, cosmic_text::Shaping::Advanced);
    buffer.set_size(font_system, Some(4096.0), Some(512.0));
    buffer.shape_until_scroll(font_system, false);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FontSpec;

    #[test]
    fn test_longer_text_is_wider() {
        let measurer = CosmicTextMeasurer::new();
        let font = FontSpec::sans_serif(11.0);
        let short = measurer.measure_width("Rev", &font);
        let long = measurer.measure_width("Revenue (USD)", &font);
        assert!(long >= short);
    }
}
