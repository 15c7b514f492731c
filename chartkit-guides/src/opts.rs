use chartkit_common::types::{rgb8, Rgba};
use chartkit_text::types::FontSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Vertical value axis; the group origin sits on the axis line
    Left,
    /// Horizontal value axis; the group origin sits on the axis line
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub orientation: AxisOrientation,
    pub font: FontSpec,
    pub tick_length: f32,
    pub show_ticks: bool,
    pub tick_color: Rgba,
    pub label_color: Rgba,
}

impl AxisConfig {
    pub fn new(orientation: AxisOrientation, font: FontSpec) -> Self {
        Self {
            orientation,
            font,
            tick_length: 6.0,
            show_ticks: true,
            tick_color: rgb8(0, 0, 0),
            label_color: rgb8(0, 0, 0),
        }
    }

    pub fn with_ticks(mut self, show_ticks: bool) -> Self {
        self.show_ticks = show_ticks;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub stroke: Rgba,
    pub stroke_dash: Vec<f32>,
    pub stroke_width: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            stroke: rgb8(0xee, 0xee, 0xee),
            stroke_dash: vec![4.0, 2.0],
            stroke_width: 1.0,
        }
    }
}
