use std::fmt;
use std::str::FromStr;

use ordered_float::OrderedFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use crate::error::ChartTextError;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "snake_case")]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Top,
    Middle,
    Bottom,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, VariantNames)]
#[cfg_attr(feature = "serde", serde(untagged))]
#[strum(serialize_all = "snake_case")]
pub enum FontWeight {
    Name(FontWeightNameSpec),
    Number(f32),
}

impl std::hash::Hash for FontWeight {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Name(spec) => spec.hash(state),
            Self::Number(num) => OrderedFloat::from(*num).hash(state),
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::Name(FontWeightNameSpec::Normal)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "snake_case")]
pub enum FontWeightNameSpec {
    #[default]
    Normal,
    Bold,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, VariantNames)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// A resolved font, parsed from a CSS font shorthand such as
/// `"12px sans-serif"` or `"bold 14px Arial"`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontSpec {
    pub fn new(size: f32, family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            size,
            weight: Default::default(),
            style: Default::default(),
        }
    }

    pub fn sans_serif(size: f32) -> Self {
        Self::new(size, DEFAULT_FONT_FAMILY)
    }
}

impl FromStr for FontSpec {
    type Err = ChartTextError;

    /// Accepts `[style] [weight] <size>[px] [family...]`. The family
    /// defaults to sans-serif when omitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = FontStyle::Normal;
        let mut weight = FontWeight::default();
        let mut tokens = s.split_whitespace();

        let size_token = loop {
            let Some(token) = tokens.next() else {
                return Err(ChartTextError::InvalidFont(s.to_string()));
            };
            match token.to_ascii_lowercase().as_str() {
                "italic" | "oblique" => style = FontStyle::Italic,
                "normal" => {}
                "bold" | "bolder" => weight = FontWeight::Name(FontWeightNameSpec::Bold),
                t if t.len() == 3 && t.ends_with("00") && t.parse::<f32>().is_ok() => {
                    // Numeric weights are always three digits (100..900)
                    weight = FontWeight::Number(t.parse::<f32>().unwrap_or(400.0));
                }
                _ => break token,
            }
        };

        let number = size_token.strip_suffix("px").unwrap_or(size_token);
        let size = number
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or_else(|| ChartTextError::InvalidFontSize {
                font: s.to_string(),
                size: size_token.to_string(),
            })?;

        let family = tokens.collect::<Vec<_>>().join(" ");
        let family = if family.is_empty() {
            DEFAULT_FONT_FAMILY.to_string()
        } else {
            family
        };

        Ok(Self {
            family,
            size,
            weight,
            style,
        })
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style == FontStyle::Italic {
            write!(f, "italic ")?;
        }
        match self.weight {
            FontWeight::Name(FontWeightNameSpec::Bold) => write!(f, "bold ")?,
            FontWeight::Number(w) => write!(f, "{w} ")?,
            FontWeight::Name(FontWeightNameSpec::Normal) => {}
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}
