use css_color_parser::Color;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantNames;

/// Straight RGBA color with components in `[0, 1]`
pub type Rgba = [f32; 4];

pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];
pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];

/// Opaque color from 8-bit channels
pub fn rgb8(r: u8, g: u8, b: u8) -> Rgba {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid CSS color: `{0}`")]
pub struct ColorError(pub String);

/// Parse any CSS color string (`#4e79a7`, `red`, `rgba(0,0,0,0.5)`)
pub fn parse_color(color: &str) -> Result<Rgba, ColorError> {
    let parsed = color
        .trim()
        .parse::<Color>()
        .map_err(|_| ColorError(color.to_string()))?;
    Ok([
        parsed.r as f32 / 255.0,
        parsed.g as f32 / 255.0,
        parsed.b as f32 / 255.0,
        parsed.a,
    ])
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum StrokeJoin {
    Bevel,
    #[default]
    Miter,
    Round,
}
