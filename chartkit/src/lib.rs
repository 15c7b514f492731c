pub mod chart;
pub mod column;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod line;
pub mod observer;
pub mod shell;
mod trendline;

// Re-export the types most callers need
pub use crate::chart::{compute_layout, Chart, ChartData};
pub use crate::config::{ChartConfig, ChartKind, ChartOverrides};
pub use crate::error::{ChartError, LayoutWarning};
pub use crate::layout::ChartLayout;
pub use chartkit_common::canvas::ContainerSize;

#[cfg(test)]
pub mod test_utils;
