use chartkit_common::canvas::ContainerSize;
use chartkit_text::measurement::TextMeasurer;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::column::layout_column;
use crate::config::{ChartConfig, ChartKind, ChartOverrides, ResolvedStyle};
use crate::data::{ColumnDatum, LinePoint};
use crate::error::ChartError;
use crate::interaction::{hit_test, DatumCallback, DatumRef};
use crate::layout::ChartLayout;
use crate::line::layout_line;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "data")]
pub enum ChartData {
    Column(Vec<ColumnDatum>),
    Line(Vec<LinePoint>),
}

impl ChartData {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartData::Column(_) => ChartKind::Column,
            ChartData::Line(_) => ChartKind::Line,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ChartData::Column(data) => data.len(),
            ChartData::Line(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn datum(&self, index: usize) -> Option<DatumRef<'_>> {
        match self {
            ChartData::Column(data) => data.get(index).map(DatumRef::Column),
            ChartData::Line(points) => points.get(index).map(DatumRef::Line),
        }
    }
}

/// JSON chart definition: `{"chart": {...overrides}, "data": [...]}`
#[derive(Debug, Deserialize)]
struct ChartDefinition<T> {
    #[serde(default)]
    chart: ChartOverrides,
    data: Vec<T>,
}

/// A validated chart: data plus resolved configuration. Layout is a pure
/// function of the chart and the observed container size.
#[derive(Debug, Clone)]
pub struct Chart {
    data: ChartData,
    config: ChartConfig,
    style: ResolvedStyle,
}

impl Chart {
    pub fn new(data: ChartData, config: ChartConfig) -> Result<Self, ChartError> {
        let style = config.validate()?;
        Ok(Self {
            data,
            config,
            style,
        })
    }

    pub fn column(data: Vec<ColumnDatum>, overrides: &ChartOverrides) -> Result<Self, ChartError> {
        let config = ChartConfig::merge(&ChartConfig::defaults(ChartKind::Column), overrides);
        Self::new(ChartData::Column(data), config)
    }

    pub fn line(points: Vec<LinePoint>, overrides: &ChartOverrides) -> Result<Self, ChartError> {
        let config = ChartConfig::merge(&ChartConfig::defaults(ChartKind::Line), overrides);
        Self::new(ChartData::Line(points), config)
    }

    /// Parse a JSON chart definition of the given kind
    pub fn from_json(kind: ChartKind, json: &str) -> Result<Self, ChartError> {
        fn parse<T: DeserializeOwned>(json: &str) -> Result<ChartDefinition<T>, ChartError> {
            Ok(serde_json::from_str(json)?)
        }
        match kind {
            ChartKind::Column => {
                let def = parse::<ColumnDatum>(json)?;
                Self::column(def.data, &def.chart)
            }
            ChartKind::Line => {
                let def = parse::<LinePoint>(json)?;
                Self::line(def.data, &def.chart)
            }
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.data.kind()
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Chart size for an observed container: fixed dimensions win over
    /// the observation
    pub fn resolve_size(&self, observed: ContainerSize) -> ContainerSize {
        ContainerSize::new(
            self.config.width.resolve(observed.width),
            self.config.height.resolve(observed.height),
        )
    }

    /// Lay the chart out for the observed container size. An unmeasured
    /// container or empty data gives an empty placeholder.
    pub fn layout(
        &self,
        observed: ContainerSize,
        measurer: &dyn TextMeasurer,
    ) -> Result<ChartLayout, ChartError> {
        let size = self.resolve_size(observed);
        if !size.is_measured() || self.data.is_empty() {
            log::debug!(
                "placeholder layout: {} points at {}x{}",
                self.data.len(),
                size.width,
                size.height
            );
            return Ok(ChartLayout::placeholder(size));
        }

        log::debug!(
            "{:?} layout: {} points at {}x{}",
            self.kind(),
            self.data.len(),
            size.width,
            size.height
        );
        match &self.data {
            ChartData::Column(data) => layout_column(data, &self.config, &self.style, size, measurer),
            ChartData::Line(points) => layout_line(points, &self.config, &self.style, size),
        }
    }

    pub fn datum(&self, index: usize) -> Option<DatumRef<'_>> {
        self.data.datum(index)
    }

    /// Invoke the click callback for the datum under `position`
    pub fn dispatch_click(&self, layout: &ChartLayout, position: [f32; 2]) -> Option<usize> {
        self.dispatch(self.config.events.on_bar_click.as_ref(), layout, position)
    }

    /// Invoke the hover callback for the datum under `position`
    pub fn dispatch_hover(&self, layout: &ChartLayout, position: [f32; 2]) -> Option<usize> {
        self.dispatch(self.config.events.on_bar_hover.as_ref(), layout, position)
    }

    fn dispatch(
        &self,
        callback: Option<&DatumCallback>,
        layout: &ChartLayout,
        position: [f32; 2],
    ) -> Option<usize> {
        let index = hit_test(layout, position)?;
        let datum = self.datum(index)?;
        if let Some(callback) = callback {
            callback(datum);
        }
        Some(index)
    }
}

/// Validate `config` and lay `data` out in one step
pub fn compute_layout(
    data: &ChartData,
    config: &ChartConfig,
    observed: ContainerSize,
    measurer: &dyn TextMeasurer,
) -> Result<ChartLayout, ChartError> {
    Chart::new(data.clone(), config.clone())?.layout(observed, measurer)
}
