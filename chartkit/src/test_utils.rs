use chartkit_scenegraph::marks::mark::SceneMark;
use chartkit_text::measurement::fixed::FixedWidthTextMeasurer;

use crate::layout::ChartLayout;

/// Advance of 0.5em per grapheme, so an 11px glyph is 5.5px wide
pub fn half_em_measurer() -> FixedWidthTextMeasurer {
    FixedWidthTextMeasurer::new(0.5)
}

/// The mark called `name` inside the top-level `layer`
pub fn find_mark<'a>(layout: &'a ChartLayout, layer: &str, name: &str) -> Option<&'a SceneMark> {
    layout
        .scene
        .group(layer)?
        .marks
        .iter()
        .find(|mark| mark.name() == name)
}
