use std::fmt;

use chartkit_common::types::ColorError;
use chartkit_scales::error::ChartScaleError;
use chartkit_text::error::ChartTextError;
use serde::Serialize;
use thiserror::Error;

use crate::observer::TargetId;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ChartConfigError),

    #[error("Scale error: `{0}`")]
    Scale(#[from] ChartScaleError),

    #[error("Observer error: `{0}`")]
    Observer(#[from] ObserverError),

    #[error("Invalid chart definition: {0}")]
    Definition(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartConfigError {
    #[error("axis.yTicks must be at least 2, got {0}")]
    TooFewTicks(usize),

    #[error("`{field}` is not a valid color: {source}")]
    InvalidColor {
        field: &'static str,
        source: ColorError,
    },

    #[error("`{field}` is not a valid font: {source}")]
    InvalidFont {
        field: &'static str,
        source: ChartTextError,
    },

    #[error("`{field}` must be a finite, non-negative number, got {value}")]
    InvalidLength { field: &'static str, value: f32 },

    #[error("bar.width must be positive when set, got {0}")]
    InvalidBarWidth(f32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    #[error("Target {0} already has an active size subscription")]
    AlreadyObserved(TargetId),
}

/// A recoverable input problem. Layout substitutes a safe value and
/// carries on; the warning is logged and reported on the layout result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutWarning {
    /// Data value that is not a finite number, laid out as 0
    UnparsableValue {
        index: usize,
        label: String,
        raw: String,
    },
    /// Trendline threshold that is not a finite number, not drawn
    UnparsableTrendline {
        group: usize,
        line: usize,
        raw: String,
    },
    /// Per-point or per-trendline color that failed to parse, default used
    InvalidColor { index: usize, color: String },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutWarning::UnparsableValue { index, label, raw } => write!(
                f,
                "value `{raw}` of point {index} (`{label}`) is not a number; using 0"
            ),
            LayoutWarning::UnparsableTrendline { group, line, raw } => write!(
                f,
                "trendline {group}.{line} start value `{raw}` is not a number; skipping"
            ),
            LayoutWarning::InvalidColor { index, color } => {
                write!(f, "color `{color}` at index {index} is invalid; using default")
            }
        }
    }
}

impl LayoutWarning {
    pub(crate) fn report(self, warnings: &mut Vec<LayoutWarning>) {
        log::warn!("{self}");
        warnings.push(self);
    }
}
