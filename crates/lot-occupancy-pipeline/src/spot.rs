use lot_occupancy_core::quad_signed_area;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Rejections at the spot-geometry boundary.
///
/// The rectifier maps corners to patch corners by index, so a quad supplied
/// in the wrong order would warp into a mirrored or sheared patch with no
/// error anywhere. Validation here turns that silent corruption into a
/// loud reject at configuration time.
#[derive(thiserror::Error, Debug)]
pub enum QuadValidationError {
    #[error("corner {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("corners are counter-clockwise (signed area {area:.3}); expected top-left, top-right, bottom-right, bottom-left")]
    WrongWinding { area: f32 },
    #[error("corner order produces a self-intersecting quadrilateral")]
    SelfIntersecting,
}

/// One parking spot's boundary: four corners in frame pixel coordinates,
/// ordered **top-left, top-right, bottom-right, bottom-left** (clockwise on
/// screen).
///
/// Zero-area quads are accepted here and rejected later by the rectifier:
/// a degenerate entry must surface as a per-spot failure during a survey,
/// not kill the whole configuration at load time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[[f32; 2]; 4]", into = "[[f32; 2]; 4]")]
pub struct SpotQuad {
    corners: [Point2<f32>; 4],
}

impl SpotQuad {
    /// Validate and wrap four corners.
    pub fn new(corners: [Point2<f32>; 4]) -> Result<Self, QuadValidationError> {
        for (index, p) in corners.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(QuadValidationError::NonFinite { index });
            }
        }

        // Canonical order gives a positive shoelace area in y-down pixel
        // coordinates. Degenerate (zero-area) quads pass through.
        let area = quad_signed_area(&corners);
        if area < 0.0 {
            return Err(QuadValidationError::WrongWinding { area });
        }

        // A bowtie ordering flips the turn direction mid-way: consecutive
        // edge cross products with mixed signs.
        let mut pos = false;
        let mut neg = false;
        for k in 0..4 {
            let a = corners[k];
            let b = corners[(k + 1) % 4];
            let c = corners[(k + 2) % 4];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            if cross > 0.0 {
                pos = true;
            } else if cross < 0.0 {
                neg = true;
            }
        }
        if pos && neg {
            return Err(QuadValidationError::SelfIntersecting);
        }

        Ok(Self { corners })
    }

    /// Convenience constructor from `[x, y]` pairs.
    pub fn from_pixels(pts: [[f32; 2]; 4]) -> Result<Self, QuadValidationError> {
        Self::new(pts.map(|[x, y]| Point2::new(x, y)))
    }

    #[inline]
    pub fn corners(&self) -> &[Point2<f32>; 4] {
        &self.corners
    }
}

impl TryFrom<[[f32; 2]; 4]> for SpotQuad {
    type Error = QuadValidationError;

    fn try_from(pts: [[f32; 2]; 4]) -> Result<Self, Self::Error> {
        Self::from_pixels(pts)
    }
}

impl From<SpotQuad> for [[f32; 2]; 4] {
    fn from(q: SpotQuad) -> Self {
        q.corners.map(|p| [p.x, p.y])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_clockwise_order_is_accepted() {
        let q = SpotQuad::from_pixels([[0.0, 0.0], [10.0, 0.0], [10.0, 8.0], [0.0, 8.0]]);
        assert!(q.is_ok());
    }

    #[test]
    fn counter_clockwise_order_is_rejected() {
        let err = SpotQuad::from_pixels([[0.0, 0.0], [0.0, 8.0], [10.0, 8.0], [10.0, 0.0]])
            .unwrap_err();
        assert!(matches!(err, QuadValidationError::WrongWinding { .. }));
    }

    #[test]
    fn bowtie_order_is_rejected() {
        // TL, TR, BL, BR: edges cross in the middle.
        let err = SpotQuad::from_pixels([[0.0, 0.0], [10.0, 0.0], [0.0, 8.0], [10.0, 8.0]])
            .unwrap_err();
        assert!(matches!(err, QuadValidationError::SelfIntersecting));
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let err = SpotQuad::from_pixels([[0.0, 0.0], [f32::NAN, 0.0], [10.0, 8.0], [0.0, 8.0]])
            .unwrap_err();
        assert!(matches!(err, QuadValidationError::NonFinite { index: 1 }));
    }

    #[test]
    fn degenerate_quad_passes_validation() {
        // Collinear corners: zero area, caught later by the rectifier.
        let q = SpotQuad::from_pixels([[0.0, 0.0], [5.0, 5.0], [10.0, 10.0], [15.0, 15.0]]);
        assert!(q.is_ok());
    }

    #[test]
    fn deserializes_from_nested_pairs() {
        let json = "[[80.8,185.5],[165.3,186.7],[110.6,253.8],[24.9,241.4]]";
        let q: SpotQuad = serde_json::from_str(json).expect("valid quad json");
        assert!((q.corners()[0].x - 80.8).abs() < 1e-4);
        assert!((q.corners()[3].y - 241.4).abs() < 1e-4);
    }

    #[test]
    fn deserialization_rejects_bad_winding() {
        let json = "[[0,0],[0,8],[10,8],[10,0]]";
        assert!(serde_json::from_str::<SpotQuad>(json).is_err());
    }
}
