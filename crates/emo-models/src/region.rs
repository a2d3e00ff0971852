//! Face regions in source-image pixel coordinates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An axis-aligned face rectangle in source-image pixel coordinates.
///
/// Regions are derived per request by the face locator and discarded after
/// the response is built; nothing owns them beyond a request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FaceRegion {
    /// Left edge x-coordinate
    pub x: i32,
    /// Top edge y-coordinate
    pub y: i32,
    /// Box width
    pub width: i32,
    /// Box height
    pub height: i32,
}

impl FaceRegion {
    /// Create a new face region.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The `[x, y, w, h]` form used on the wire.
    pub fn bbox(&self) -> [i32; 4] {
        [self.x, self.y, self.width, self.height]
    }

    /// Box area in pixels.
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Check that the region has positive extent and a non-negative origin.
    pub fn is_valid(&self) -> bool {
        self.x >= 0 && self.y >= 0 && self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_order_is_x_y_w_h() {
        let region = FaceRegion::new(12, 34, 56, 78);
        assert_eq!(region.bbox(), [12, 34, 56, 78]);
    }

    #[test]
    fn validity() {
        assert!(FaceRegion::new(0, 0, 30, 30).is_valid());
        assert!(!FaceRegion::new(-1, 0, 30, 30).is_valid());
        assert!(!FaceRegion::new(0, 0, 0, 30).is_valid());
    }
}
