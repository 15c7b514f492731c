use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::data::{ColumnDatum, LinePoint};
use crate::layout::ChartLayout;

/// The input record behind a bar or point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DatumRef<'a> {
    Column(&'a ColumnDatum),
    Line(&'a LinePoint),
}

impl DatumRef<'_> {
    pub fn label(&self) -> &str {
        match self {
            DatumRef::Column(d) => &d.label,
            DatumRef::Line(p) => &p.label,
        }
    }
}

pub type DatumCallback = Arc<dyn Fn(DatumRef<'_>) + Send + Sync>;

/// Optional pointer callbacks, invoked with the datum under the pointer
#[derive(Clone, Default)]
pub struct ChartEvents {
    pub on_bar_click: Option<DatumCallback>,
    pub on_bar_hover: Option<DatumCallback>,
}

impl ChartEvents {
    pub fn on_bar_click(mut self, f: impl Fn(DatumRef<'_>) + Send + Sync + 'static) -> Self {
        self.on_bar_click = Some(Arc::new(f));
        self
    }

    pub fn on_bar_hover(mut self, f: impl Fn(DatumRef<'_>) + Send + Sync + 'static) -> Self {
        self.on_bar_hover = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for ChartEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartEvents")
            .field("on_bar_click", &self.on_bar_click.is_some())
            .field("on_bar_hover", &self.on_bar_hover.is_some())
            .finish()
    }
}

/// Pointer-sensitive area of one datum, in chart coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum HitRegion {
    Rect { index: usize, bounds: [f32; 4] },
    Circle { index: usize, center: [f32; 2], radius: f32 },
}

impl HitRegion {
    pub fn index(&self) -> usize {
        match self {
            HitRegion::Rect { index, .. } | HitRegion::Circle { index, .. } => *index,
        }
    }

    pub fn contains(&self, [x, y]: [f32; 2]) -> bool {
        match self {
            HitRegion::Rect {
                bounds: [x0, y0, x1, y1],
                ..
            } => x >= *x0 && x <= *x1 && y >= *y0 && y <= *y1,
            HitRegion::Circle {
                center: [cx, cy],
                radius,
                ..
            } => (x - cx).powi(2) + (y - cy).powi(2) <= radius.powi(2),
        }
    }
}

/// Index of the datum under `position`. Later regions paint on top, so
/// they win when regions overlap.
pub fn hit_test(layout: &ChartLayout, position: [f32; 2]) -> Option<usize> {
    layout
        .hit_regions
        .iter()
        .rev()
        .find(|region| region.contains(position))
        .map(HitRegion::index)
}
