use chartkit_common::types::Rgba;

// Fixed offsets used by the column and line layouts, in pixels

pub const TITLE_Y: f32 = 24.0;
pub const SUBTITLE_Y: f32 = 42.0;

pub const AXIS_TITLE_FONT_SIZE: f32 = 11.0;
pub const VALUE_LABEL_FONT_SIZE: f32 = 10.0;
pub const TRENDLINE_LABEL_FONT_SIZE: f32 = 10.0;

pub const BASELINE_COLOR: Rgba = [0.8, 0.8, 0.8, 1.0]; // #ccc
pub const MUTED_TEXT_COLOR: Rgba = [0.4, 0.4, 0.4, 1.0]; // #666
pub const TRENDLINE_DASH: [f32; 2] = [4.0, 2.0];
pub const TRENDLINE_LABEL_LIFT: f32 = 4.0;

// Column chart
pub const BAR_VALUE_LABEL_LIFT: f32 = 5.0;
pub const BAR_VALUE_LABEL_GAP: f32 = 5.0;
pub const BAR_VALUE_LABEL_SHIFT: f32 = 3.0;
pub const COLUMN_CATEGORY_LABEL_OFFSET: f32 = 15.0;
pub const ROW_LABEL_GAP: f32 = 8.0;
pub const ROW_LABEL_SHIFT: f32 = 4.0;
pub const COLUMN_X_TITLE_INSET: f32 = 5.0;

// Line chart
pub const LINE_CATEGORY_LABEL_OFFSET: f32 = 16.0;
pub const LINE_VALUE_LABEL_LIFT: f32 = 6.0;
pub const LINE_X_TITLE_INSET: f32 = 8.0;
pub const LINE_Y_TITLE_INSET: f32 = 35.0;
/// Left padding of a line chart beyond the y label offset
pub const LINE_LEFT_GUTTER: f32 = 40.0;
pub const POINT_HIT_SLOP: f32 = 2.0;

// Reveal timing for targets that animate
pub const PATH_REVEAL_MS: u32 = 800;
pub const POINT_REVEAL_MS: u32 = 500;
pub const POINT_REVEAL_STAGGER_MS: u32 = 100;
