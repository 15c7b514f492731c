use serde::{Deserialize, Serialize};

use crate::error::LayoutWarning;

/// A number as it arrives in chart data: either a JSON number or a string
/// that should parse as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Number(f64),
    Text(String),
}

impl NumberLike {
    /// The finite numeric value, if there is one. Strings must parse in
    /// full after trimming; `"12abc"` is not a number.
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            NumberLike::Number(n) => *n,
            NumberLike::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    pub fn raw(&self) -> String {
        match self {
            NumberLike::Number(n) => n.to_string(),
            NumberLike::Text(s) => s.clone(),
        }
    }
}

impl Default for NumberLike {
    fn default() -> Self {
        NumberLike::Number(0.0)
    }
}

impl From<f64> for NumberLike {
    fn from(value: f64) -> Self {
        NumberLike::Number(value)
    }
}

impl From<f32> for NumberLike {
    // Widen through the shortest decimal so 0.1f32 stays 0.1
    fn from(value: f32) -> Self {
        NumberLike::Number(value.to_string().parse().unwrap_or(value as f64))
    }
}

impl From<i32> for NumberLike {
    fn from(value: i32) -> Self {
        NumberLike::Number(value as f64)
    }
}

impl From<&str> for NumberLike {
    fn from(value: &str) -> Self {
        NumberLike::Text(value.to_string())
    }
}

/// One bar of a column chart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnDatum {
    pub label: String,
    pub value: NumberLike,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ColumnDatum {
    pub fn new(label: impl Into<String>, value: impl Into<NumberLike>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            color: None,
            description: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One vertex of a line chart. When every point carries `x`, the points
/// are positioned by `x` instead of by index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePoint {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    pub value: NumberLike,
}

impl LinePoint {
    pub fn new(label: impl Into<String>, value: impl Into<NumberLike>) -> Self {
        Self {
            label: label.into(),
            x: None,
            value: value.into(),
        }
    }

    pub fn at(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }
}

/// Either `true` or the string `"1"` switches a flag on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    pub fn is_set(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Text(s) => s.trim() == "1",
        }
    }
}

impl Default for Flag {
    fn default() -> Self {
        Flag::Bool(false)
    }
}

/// A horizontal reference line at a fixed data value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trendline {
    pub startvalue: NumberLike,
    #[serde(default)]
    pub displayvalue: String,
    #[serde(default)]
    pub value_on_right: Flag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f32>,
}

impl Trendline {
    pub fn new(startvalue: impl Into<NumberLike>, displayvalue: impl Into<String>) -> Self {
        Self {
            startvalue: startvalue.into(),
            displayvalue: displayvalue.into(),
            ..Default::default()
        }
    }

    pub fn on_right(mut self) -> Self {
        self.value_on_right = Flag::Bool(true);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = Some(thickness);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendlineGroup {
    #[serde(default)]
    pub line: Vec<Trendline>,
}

impl TrendlineGroup {
    pub fn new(line: Vec<Trendline>) -> Self {
        Self { line }
    }
}

/// Numeric values for a series, in input order, at full precision for
/// labels. Anything that does not parse becomes 0 and is reported.
pub(crate) fn coerce_values<'a>(
    points: impl Iterator<Item = (&'a str, &'a NumberLike)>,
    warnings: &mut Vec<LayoutWarning>,
) -> Vec<f64> {
    points
        .enumerate()
        .map(|(index, (label, value))| {
            value.parse().unwrap_or_else(|| {
                LayoutWarning::UnparsableValue {
                    index,
                    label: label.to_string(),
                    raw: value.raw(),
                }
                .report(warnings);
                0.0
            })
        })
        .collect()
}
