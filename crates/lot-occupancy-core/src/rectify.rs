use crate::{homography_from_4pt, warp_perspective_rgb, RgbFrame, RgbFrameView};
use nalgebra::Point2;

/// Minimum quad area in px^2 below which rectification is refused.
///
/// Collinear or coincident corners give exactly zero; the small threshold
/// also rejects quads too thin to yield a meaningful patch.
pub const MIN_QUAD_AREA: f32 = 1.0;

#[derive(thiserror::Error, Debug)]
pub enum RectifyError {
    #[error("degenerate quadrilateral (area {area:.3} px^2)")]
    DegenerateGeometry { area: f32 },
    #[error("homography estimation failed")]
    HomographyFailed,
}

/// Signed area of the quad via the shoelace formula.
///
/// In y-down pixel coordinates the canonical corner order (top-left,
/// top-right, bottom-right, bottom-left, i.e. clockwise on screen) yields a
/// positive value.
pub fn quad_signed_area(corners: &[Point2<f32>; 4]) -> f32 {
    let mut sum = 0.0_f32;
    for k in 0..4 {
        let p = corners[k];
        let q = corners[(k + 1) % 4];
        sum += p.x * q.y - q.x * p.y;
    }
    0.5 * sum
}

/// Side lengths of the destination rectangle: the wider of the two
/// horizontal edges by the taller of the two vertical edges, so no part of
/// the source region is squeezed below its native resolution.
fn natural_patch_size(corners: &[Point2<f32>; 4]) -> (usize, usize) {
    let d = |a: Point2<f32>, b: Point2<f32>| ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
    let top = d(corners[0], corners[1]);
    let bottom = d(corners[3], corners[2]);
    let left = d(corners[0], corners[3]);
    let right = d(corners[1], corners[2]);
    let w = top.max(bottom).round().max(1.0) as usize;
    let h = left.max(right).round().max(1.0) as usize;
    (w, h)
}

/// Rectify one quadrilateral region of the frame into a fronto-parallel
/// rectangle.
///
/// Corner correspondence is by index, never by geometric sorting. The
/// expected order is **top-left, top-right, bottom-right, bottom-left**
/// (clockwise on screen): `corners[0]` maps to the patch origin, `corners[1]`
/// to its top-right corner, and so on. A quad supplied in a different order
/// still warps, but mirrored or sheared; validate ordering upstream.
///
/// The output rectangle takes its size from the quad's edge lengths (see
/// [`natural_patch_size`]); destination pixels whose preimage falls outside
/// the frame are zero-filled (black).
pub fn rectify_quad(
    frame: &RgbFrameView<'_>,
    corners: &[Point2<f32>; 4],
) -> Result<RgbFrame, RectifyError> {
    let area = quad_signed_area(corners).abs();
    if area < MIN_QUAD_AREA {
        return Err(RectifyError::DegenerateGeometry { area });
    }

    let (out_w, out_h) = natural_patch_size(corners);
    let rect = [
        Point2::new(0.0_f32, 0.0),
        Point2::new(out_w as f32, 0.0),
        Point2::new(out_w as f32, out_h as f32),
        Point2::new(0.0_f32, out_h as f32),
    ];

    let h_img_from_rect =
        homography_from_4pt(&rect, corners).ok_or(RectifyError::HomographyFailed)?;

    Ok(warp_perspective_rgb(frame, h_img_from_rect, out_w, out_h))
}
