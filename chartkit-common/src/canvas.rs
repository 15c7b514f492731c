#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a rendering container.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size reported before the first measurement arrives
    pub fn unmeasured() -> Self {
        Self::default()
    }

    /// A container is ready for layout once both dimensions are positive
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
