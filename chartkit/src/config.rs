use std::fmt;
use std::sync::Arc;

use chartkit_common::types::{parse_color, Rgba};
use chartkit_text::types::FontSpec;
use serde::Deserialize;

use crate::constants::LINE_LEFT_GUTTER;
use crate::data::TrendlineGroup;
use crate::error::ChartConfigError;
use crate::interaction::ChartEvents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Column,
    Line,
}

/// Bar direction. Any string other than `"horizontal"` reads as vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl From<String> for Orientation {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("horizontal") {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Chart width or height: a fixed pixel count, or any other value
/// (conventionally `"100%"`) to fill the observed container.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Fixed(f32),
    Auto(String),
}

impl Dimension {
    pub fn fill() -> Self {
        Dimension::Auto("100%".to_string())
    }

    pub fn resolve(&self, observed: f32) -> f32 {
        match self {
            Dimension::Fixed(px) => *px,
            Dimension::Auto(_) => observed,
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::fill()
    }
}

/// Formats value-axis tick labels
#[derive(Clone)]
pub struct ValueFormatter(Arc<dyn Fn(f32) -> String + Send + Sync>);

impl ValueFormatter {
    pub fn new(f: impl Fn(f32) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn format(&self, value: f32) -> String {
        (self.0)(value)
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(format_value)
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter")
    }
}

/// Shortest decimal form of an axis value. Negative zero prints as `0`.
pub fn format_value(value: f32) -> String {
    (value + 0.0).to_string()
}

/// Value label text for a data point, kept at input precision
pub fn format_datum(value: f64) -> String {
    (value + 0.0).to_string()
}

#[derive(Debug, Clone)]
pub struct AxisOptions {
    pub y_ticks: usize,
    pub format_y: ValueFormatter,
    pub x_label_font: String,
    pub y_label_font: String,
    /// Distance from the plot edge to the value-axis labels column
    pub y_axis_label_offset: f32,
    pub y_axis_title_padding: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorOptions {
    pub bar: String,
    pub hover: String,
    pub line: String,
    pub trendline: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarOptions {
    pub radius: f32,
    pub spacing: f32,
    /// Explicit bar thickness. Derived from the band when unset.
    pub width: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineOptions {
    pub point_radius: f32,
    pub animate: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AxisNames {
    pub x: String,
    pub y: String,
}

/// Fully resolved chart configuration. Build one with
/// [`ChartConfig::defaults`] and [`ChartConfig::merge`].
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub width: Dimension,
    pub height: Dimension,
    pub padding_left: f32,
    pub padding_right: f32,
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub background_color: String,
    pub title: String,
    pub subtitle: String,
    pub caption_font: String,
    pub sub_caption_font: String,
    pub axis_names: AxisNames,
    pub show_x_axis_line: bool,
    pub show_y_axis_line: bool,
    pub orientation: Orientation,
    pub show_description: bool,
    pub show_trendlines: bool,
    pub show_values: bool,
    pub show_grid: bool,
    pub number_prefix: String,
    pub line_thickness: f32,
    pub colors: ColorOptions,
    pub bar: BarOptions,
    pub axis: AxisOptions,
    pub line: LineOptions,
    pub trendlines: Vec<TrendlineGroup>,
    pub events: ChartEvents,
}

impl ChartConfig {
    pub fn defaults(kind: ChartKind) -> Self {
        let (padding_left, trendline, y_label_font, show_grid) = match kind {
            ChartKind::Column => (60.0, "red", "10px sans-serif", true),
            ChartKind::Line => (45.0 + LINE_LEFT_GUTTER, "#1aaf5d", "12px sans-serif", false),
        };
        Self {
            kind,
            width: Dimension::fill(),
            height: Dimension::fill(),
            padding_left,
            padding_right: 40.0,
            padding_top: 40.0,
            padding_bottom: 40.0,
            background_color: "#ffffff".to_string(),
            title: String::new(),
            subtitle: String::new(),
            caption_font: "16px sans-serif".to_string(),
            sub_caption_font: "12px sans-serif".to_string(),
            axis_names: AxisNames::default(),
            show_x_axis_line: true,
            show_y_axis_line: true,
            orientation: Orientation::Vertical,
            show_description: true,
            show_trendlines: true,
            show_values: true,
            show_grid,
            number_prefix: String::new(),
            line_thickness: 2.0,
            colors: ColorOptions {
                bar: "#4e79a7".to_string(),
                hover: "#7aa1d2".to_string(),
                line: "#3498db".to_string(),
                trendline: trendline.to_string(),
            },
            bar: BarOptions {
                radius: 4.0,
                spacing: 8.0,
                width: None,
            },
            axis: AxisOptions {
                y_ticks: 5,
                format_y: ValueFormatter::default(),
                x_label_font: "12px sans-serif".to_string(),
                y_label_font: y_label_font.to_string(),
                y_axis_label_offset: 45.0,
                y_axis_title_padding: 10.0,
            },
            line: LineOptions {
                point_radius: 3.0,
                animate: true,
            },
            trendlines: vec![],
            events: ChartEvents::default(),
        }
    }

    /// Overlay `overrides` on `base`. Top-level fields and the `axis`,
    /// `colors`, `bar` and `line` groups merge field by field. Lists,
    /// `axisNames` and `events` replace the base value wholesale.
    pub fn merge(base: &ChartConfig, overrides: &ChartOverrides) -> ChartConfig {
        let mut config = base.clone();

        macro_rules! overlay {
            ($target:expr, $source:expr) => {
                if let Some(value) = &$source {
                    $target = value.clone();
                }
            };
        }

        overlay!(config.width, overrides.width);
        overlay!(config.height, overrides.height);
        overlay!(config.padding_left, overrides.padding_left);
        overlay!(config.padding_right, overrides.padding_right);
        overlay!(config.padding_top, overrides.padding_top);
        overlay!(config.padding_bottom, overrides.padding_bottom);
        overlay!(config.background_color, overrides.background_color);
        overlay!(config.title, overrides.title);
        overlay!(config.subtitle, overrides.subtitle);
        overlay!(config.caption_font, overrides.caption_font);
        overlay!(config.sub_caption_font, overrides.sub_caption_font);
        overlay!(config.axis_names, overrides.axis_names);
        overlay!(config.axis_names.x, overrides.x_axis_name);
        overlay!(config.axis_names.y, overrides.y_axis_name);
        overlay!(config.show_x_axis_line, overrides.show_x_axis_line);
        overlay!(config.show_y_axis_line, overrides.show_y_axis_line);
        overlay!(config.orientation, overrides.orientation);
        overlay!(config.show_description, overrides.show_description);
        overlay!(config.show_trendlines, overrides.show_trendlines);
        overlay!(config.show_values, overrides.show_values);
        overlay!(config.show_grid, overrides.show_grid);
        overlay!(config.number_prefix, overrides.number_prefix);
        overlay!(config.line_thickness, overrides.line_thickness);
        overlay!(config.trendlines, overrides.trendlines);
        overlay!(config.events, overrides.events);

        if let Some(colors) = &overrides.colors {
            overlay!(config.colors.bar, colors.bar);
            overlay!(config.colors.hover, colors.hover);
            overlay!(config.colors.line, colors.line);
            overlay!(config.colors.trendline, colors.trendline);
        }
        if let Some(bar) = &overrides.bar {
            overlay!(config.bar.radius, bar.radius);
            overlay!(config.bar.spacing, bar.spacing);
            if bar.width.is_some() {
                config.bar.width = bar.width;
            }
        }
        if let Some(axis) = &overrides.axis {
            overlay!(config.axis.y_ticks, axis.y_ticks);
            overlay!(config.axis.format_y, axis.format_y);
            overlay!(config.axis.x_label_font, axis.label_font);
            overlay!(config.axis.y_label_font, axis.label_font);
            overlay!(config.axis.x_label_font, axis.x_label_font);
            overlay!(config.axis.y_label_font, axis.y_label_font);
            overlay!(config.axis.y_axis_label_offset, axis.y_axis_label_offset);
            overlay!(config.axis.y_axis_title_padding, axis.y_axis_title_padding);

            // Line charts follow the label offset unless paddingLeft is pinned
            if config.kind == ChartKind::Line && overrides.padding_left.is_none() {
                if let Some(offset) = axis.y_axis_label_offset {
                    config.padding_left = offset + LINE_LEFT_GUTTER;
                }
            }
        }
        if let Some(line) = &overrides.line {
            overlay!(config.line.point_radius, line.point_radius);
            overlay!(config.line.animate, line.animate);
        }

        config
    }

    /// Defaults for `kind` merged with `overrides`, then validated
    pub fn resolve(kind: ChartKind, overrides: &ChartOverrides) -> Result<Self, ChartConfigError> {
        let config = Self::merge(&Self::defaults(kind), overrides);
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric, color and font field, returning the parsed
    /// values layout draws with.
    pub fn validate(&self) -> Result<ResolvedStyle, ChartConfigError> {
        if self.axis.y_ticks < 2 {
            return Err(ChartConfigError::TooFewTicks(self.axis.y_ticks));
        }

        let lengths = [
            ("paddingLeft", self.padding_left),
            ("paddingRight", self.padding_right),
            ("paddingTop", self.padding_top),
            ("paddingBottom", self.padding_bottom),
            ("lineThickness", self.line_thickness),
            ("bar.radius", self.bar.radius),
            ("bar.spacing", self.bar.spacing),
            ("line.pointRadius", self.line.point_radius),
            ("axis.yAxisLabelOffset", self.axis.y_axis_label_offset),
            ("axis.yAxisTitlePadding", self.axis.y_axis_title_padding),
            ("width", self.width.resolve(0.0)),
            ("height", self.height.resolve(0.0)),
        ];
        if let Some((field, value)) = lengths
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(ChartConfigError::InvalidLength { field, value });
        }
        if let Some(width) = self.bar.width {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartConfigError::InvalidBarWidth(width));
            }
        }

        let color = |field: &'static str, value: &str| {
            parse_color(value).map_err(|source| ChartConfigError::InvalidColor { field, source })
        };
        let font = |field: &'static str, value: &str| {
            value
                .parse::<FontSpec>()
                .map_err(|source| ChartConfigError::InvalidFont { field, source })
        };

        Ok(ResolvedStyle {
            background: color("backgroundColor", &self.background_color)?,
            bar: color("colors.bar", &self.colors.bar)?,
            hover: color("colors.hover", &self.colors.hover)?,
            line: color("colors.line", &self.colors.line)?,
            trendline: color("colors.trendline", &self.colors.trendline)?,
            caption_font: font("captionFont", &self.caption_font)?,
            sub_caption_font: font("subCaptionFont", &self.sub_caption_font)?,
            x_label_font: font("axis.xLabelFont", &self.axis.x_label_font)?,
            y_label_font: font("axis.yLabelFont", &self.axis.y_label_font)?,
        })
    }
}

/// Colors and fonts of a validated configuration, parsed once per layout
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub background: Rgba,
    pub bar: Rgba,
    pub hover: Rgba,
    pub line: Rgba,
    pub trendline: Rgba,
    pub caption_font: FontSpec,
    pub sub_caption_font: FontSpec,
    pub x_label_font: FontSpec,
    pub y_label_font: FontSpec,
}

/// Partial configuration as supplied by callers. Every field is optional;
/// absent fields keep the default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOverrides {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub padding_left: Option<f32>,
    pub padding_right: Option<f32>,
    pub padding_top: Option<f32>,
    pub padding_bottom: Option<f32>,
    pub background_color: Option<String>,
    #[serde(alias = "caption")]
    pub title: Option<String>,
    #[serde(alias = "subCaption")]
    pub subtitle: Option<String>,
    pub caption_font: Option<String>,
    pub sub_caption_font: Option<String>,
    pub axis_names: Option<AxisNames>,
    pub x_axis_name: Option<String>,
    pub y_axis_name: Option<String>,
    pub show_x_axis_line: Option<bool>,
    pub show_y_axis_line: Option<bool>,
    pub orientation: Option<Orientation>,
    pub show_description: Option<bool>,
    pub show_trendlines: Option<bool>,
    pub show_values: Option<bool>,
    pub show_grid: Option<bool>,
    pub number_prefix: Option<String>,
    pub line_thickness: Option<f32>,
    pub colors: Option<ColorOverrides>,
    pub bar: Option<BarOverrides>,
    pub axis: Option<AxisOverrides>,
    pub line: Option<LineOverrides>,
    pub trendlines: Option<Vec<TrendlineGroup>>,
    #[serde(skip)]
    pub events: Option<ChartEvents>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorOverrides {
    pub bar: Option<String>,
    pub hover: Option<String>,
    pub line: Option<String>,
    pub trendline: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarOverrides {
    pub radius: Option<f32>,
    pub spacing: Option<f32>,
    pub width: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisOverrides {
    pub y_ticks: Option<usize>,
    #[serde(skip)]
    pub format_y: Option<ValueFormatter>,
    /// Sets both label fonts unless a specific one is also given
    pub label_font: Option<String>,
    pub x_label_font: Option<String>,
    pub y_label_font: Option<String>,
    pub y_axis_label_offset: Option<f32>,
    pub y_axis_title_padding: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineOverrides {
    pub point_radius: Option<f32>,
    pub animate: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Trendline;
    use rstest::rstest;

    #[test]
    fn test_missing_fields_keep_defaults() {
        let overrides = ChartOverrides {
            axis: Some(AxisOverrides {
                y_ticks: Some(3),
                ..Default::default()
            }),
            bar: Some(BarOverrides {
                spacing: Some(12.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = ChartConfig::resolve(ChartKind::Column, &overrides).unwrap();
        assert_eq!(config.axis.y_ticks, 3);
        assert_eq!(config.axis.y_axis_label_offset, 45.0);
        assert_eq!(config.axis.y_label_font, "10px sans-serif");
        assert_eq!(config.bar.spacing, 12.0);
        assert_eq!(config.bar.radius, 4.0);
        assert_eq!(config.bar.width, None);
        assert_eq!(config.colors.bar, "#4e79a7");
        assert_eq!(config.padding_left, 60.0);
    }

    #[test]
    fn test_kind_defaults_differ() {
        let column = ChartConfig::defaults(ChartKind::Column);
        let line = ChartConfig::defaults(ChartKind::Line);
        assert_eq!(column.colors.trendline, "red");
        assert_eq!(line.colors.trendline, "#1aaf5d");
        assert_eq!(line.padding_left, 85.0);
        assert!(column.show_grid);
        assert!(!line.show_grid);
    }

    #[test]
    fn test_line_padding_follows_label_offset() {
        let overrides: ChartOverrides =
            serde_json::from_str(r#"{"axis": {"yAxisLabelOffset": 60}}"#).unwrap();
        let line = ChartConfig::resolve(ChartKind::Line, &overrides).unwrap();
        assert_eq!(line.padding_left, 100.0);
        let column = ChartConfig::resolve(ChartKind::Column, &overrides).unwrap();
        assert_eq!(column.padding_left, 60.0);

        let pinned: ChartOverrides = serde_json::from_str(
            r#"{"paddingLeft": 70, "axis": {"yAxisLabelOffset": 60}}"#,
        )
        .unwrap();
        let line = ChartConfig::resolve(ChartKind::Line, &pinned).unwrap();
        assert_eq!(line.padding_left, 70.0);
    }

    #[test]
    fn test_lists_replace_wholesale() {
        let mut base = ChartConfig::defaults(ChartKind::Column);
        base.trendlines = vec![TrendlineGroup::new(vec![Trendline::new(1, "a")])];
        base.axis_names = AxisNames {
            x: "Month".to_string(),
            y: "Sales".to_string(),
        };

        let overrides: ChartOverrides = serde_json::from_str(
            r#"{"trendlines": [], "axisNames": {"y": "Revenue"}}"#,
        )
        .unwrap();
        let merged = ChartConfig::merge(&base, &overrides);
        assert!(merged.trendlines.is_empty());
        // axisNames is not merged per field: the missing `x` resets
        assert_eq!(merged.axis_names.x, "");
        assert_eq!(merged.axis_names.y, "Revenue");
    }

    #[test]
    fn test_events_replace_wholesale() {
        let mut base = ChartConfig::defaults(ChartKind::Column);
        base.events = ChartEvents::default().on_bar_click(|_| {});
        let overrides = ChartOverrides {
            events: Some(ChartEvents::default().on_bar_hover(|_| {})),
            ..Default::default()
        };
        let merged = ChartConfig::merge(&base, &overrides);
        assert!(merged.events.on_bar_click.is_none());
        assert!(merged.events.on_bar_hover.is_some());
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let base = ChartConfig::defaults(ChartKind::Line);
        let overrides = ChartOverrides {
            title: Some("Sales".to_string()),
            ..Default::default()
        };
        let merged = ChartConfig::merge(&base, &overrides);
        assert_eq!(merged.title, "Sales");
        assert_eq!(base.title, "");
        assert_eq!(overrides.title.as_deref(), Some("Sales"));
    }

    #[test]
    fn test_deserialize_json_overrides() {
        let overrides: ChartOverrides = serde_json::from_str(
            r##"{
                "width": 600,
                "height": "100%",
                "caption": "Monthly",
                "subCaption": "2024",
                "orientation": "sideways",
                "xAxisName": "Month",
                "showValues": false,
                "numberPrefix": "$",
                "colors": {"bar": "#123456"},
                "axis": {"labelFont": "14px serif", "yTicks": 4},
                "exportFileName": "ignored"
            }"##,
        )
        .unwrap();
        let config = ChartConfig::resolve(ChartKind::Line, &overrides).unwrap();
        assert_eq!(config.width, Dimension::Fixed(600.0));
        assert_eq!(config.height, Dimension::fill());
        assert_eq!(config.title, "Monthly");
        assert_eq!(config.subtitle, "2024");
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.axis_names.x, "Month");
        assert!(!config.show_values);
        assert_eq!(config.number_prefix, "$");
        assert_eq!(config.colors.bar, "#123456");
        assert_eq!(config.colors.hover, "#7aa1d2");
        assert_eq!(config.axis.x_label_font, "14px serif");
        assert_eq!(config.axis.y_label_font, "14px serif");
        assert_eq!(config.axis.y_ticks, 4);
    }

    #[test]
    fn test_custom_formatter() {
        let overrides = ChartOverrides {
            axis: Some(AxisOverrides {
                format_y: Some(ValueFormatter::new(|v| format!("{}k", v / 1000.0))),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = ChartConfig::resolve(ChartKind::Column, &overrides).unwrap();
        assert_eq!(config.axis.format_y.format(250000.0), "250k");
        assert_eq!(ValueFormatter::default().format(1.5), "1.5");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_datum(-0.0), "0");
    }

    #[test]
    fn test_datum_keeps_input_precision() {
        assert_eq!(format_datum(123456789.0), "123456789");
        assert_eq!(format_datum(16777217.0), "16777217");
        assert_eq!(format_datum(0.1), "0.1");
    }

    #[rstest]
    #[case(r#"{"axis": {"yTicks": 1}}"#, ChartConfigError::TooFewTicks(1))]
    #[case(r#"{"axis": {"yTicks": 0}}"#, ChartConfigError::TooFewTicks(0))]
    #[case(
        r#"{"paddingLeft": -5}"#,
        ChartConfigError::InvalidLength { field: "paddingLeft", value: -5.0 }
    )]
    #[case(
        r#"{"bar": {"spacing": -1}}"#,
        ChartConfigError::InvalidLength { field: "bar.spacing", value: -1.0 }
    )]
    #[case(r#"{"bar": {"width": 0}}"#, ChartConfigError::InvalidBarWidth(0.0))]
    fn test_validate_rejects(#[case] json: &str, #[case] expected: ChartConfigError) {
        let overrides: ChartOverrides = serde_json::from_str(json).unwrap();
        let err = ChartConfig::resolve(ChartKind::Column, &overrides).unwrap_err();
        assert_eq!(err, expected);
    }

    #[test]
    fn test_validate_rejects_bad_color_and_font() {
        let overrides: ChartOverrides =
            serde_json::from_str(r#"{"colors": {"bar": "not-a-color"}}"#).unwrap();
        let err = ChartConfig::resolve(ChartKind::Column, &overrides).unwrap_err();
        assert!(matches!(
            err,
            ChartConfigError::InvalidColor { field: "colors.bar", .. }
        ));

        let overrides: ChartOverrides =
            serde_json::from_str(r#"{"captionFont": "huge"}"#).unwrap();
        let err = ChartConfig::resolve(ChartKind::Column, &overrides).unwrap_err();
        assert!(matches!(
            err,
            ChartConfigError::InvalidFont { field: "captionFont", .. }
        ));
    }
}
