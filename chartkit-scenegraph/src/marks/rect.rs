use super::mark::SceneMark;
use chartkit_common::types::{Rgba, TRANSPARENT};
use chartkit_common::value::ScalarOrArray;
use itertools::izip;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRectMark {
    pub name: String,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub width: ScalarOrArray<f32>,
    pub height: ScalarOrArray<f32>,
    pub fill: ScalarOrArray<Rgba>,
    pub stroke: ScalarOrArray<Rgba>,
    pub stroke_width: ScalarOrArray<f32>,
    pub corner_radius: ScalarOrArray<f32>,
    /// Fill applied to the instance under the pointer
    pub hover_fill: Option<Rgba>,
    /// Hover / tooltip text per instance
    pub tooltip: Option<ScalarOrArray<String>>,
    pub zindex: Option<i32>,
}

impl SceneRectMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize)
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize)
    }

    pub fn width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.width.as_iter(self.len as usize)
    }

    pub fn height_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.height.as_iter(self.len as usize)
    }

    pub fn fill_iter(&self) -> Box<dyn Iterator<Item = &Rgba> + '_> {
        self.fill.as_iter(self.len as usize)
    }

    pub fn corner_radius_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.corner_radius.as_iter(self.len as usize)
    }

    pub fn height_vec(&self) -> Vec<f32> {
        self.height_iter().cloned().collect()
    }

    pub fn width_vec(&self) -> Vec<f32> {
        self.width_iter().cloned().collect()
    }

    /// Axis-aligned `[x0, y0, x1, y1]` for each instance
    pub fn bounds_iter(&self) -> impl Iterator<Item = [f32; 4]> + '_ {
        izip!(
            self.x_iter(),
            self.y_iter(),
            self.width_iter(),
            self.height_iter()
        )
        .map(|(x, y, w, h)| {
            [
                f32::min(*x, x + w),
                f32::min(*y, y + h),
                f32::max(*x, x + w),
                f32::max(*y, y + h),
            ]
        })
    }
}

impl Default for SceneRectMark {
    fn default() -> Self {
        Self {
            name: "rect_mark".to_string(),
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            width: ScalarOrArray::new_scalar(0.0),
            height: ScalarOrArray::new_scalar(0.0),
            fill: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke_width: ScalarOrArray::new_scalar(0.0),
            corner_radius: ScalarOrArray::new_scalar(0.0),
            hover_fill: None,
            tooltip: None,
            zindex: None,
        }
    }
}

impl From<SceneRectMark> for SceneMark {
    fn from(mark: SceneRectMark) -> Self {
        SceneMark::Rect(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_normalize_negative_extent() {
        let mark = SceneRectMark {
            len: 2,
            x: vec![10.0, 50.0].into(),
            y: vec![20.0, 80.0].into(),
            width: 5.0.into(),
            height: vec![30.0, -10.0].into(),
            ..Default::default()
        };
        let bounds: Vec<_> = mark.bounds_iter().collect();
        assert_eq!(bounds[0], [10.0, 20.0, 15.0, 50.0]);
        assert_eq!(bounds[1], [50.0, 70.0, 55.0, 80.0]);
    }
}
