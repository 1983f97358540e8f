use crate::{sample_bilinear_rgb_u8, RgbFrame, RgbFrameView};
use nalgebra::{Matrix3, Point2, SMatrix, SVector, Vector3};

/// Plane projective transform in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Homography {
    pub h: Matrix3<f64>,
}

impl Homography {
    pub fn new(h: Matrix3<f64>) -> Self {
        Self { h }
    }

    #[inline]
    pub fn apply(&self, p: Point2<f32>) -> Point2<f32> {
        let v = self.h * Vector3::new(p.x as f64, p.y as f64, 1.0);
        let w = v[2];
        Point2::new((v[0] / w) as f32, (v[1] / w) as f32)
    }

    pub fn inverse(&self) -> Option<Self> {
        self.h.try_inverse().map(Self::new)
    }
}

/// Hartley conditioning: translate points to their centroid and scale so the
/// mean distance from it is sqrt(2). Keeps the 8x8 solve well conditioned for
/// quads far from the image origin.
fn condition_points4(pts: &[Point2<f32>; 4]) -> ([Point2<f64>; 4], Matrix3<f64>) {
    let mut cx = 0.0_f64;
    let mut cy = 0.0_f64;
    for p in pts {
        cx += p.x as f64;
        cy += p.y as f64;
    }
    cx /= 4.0;
    cy /= 4.0;

    let mut mean_dist = 0.0_f64;
    for p in pts {
        let dx = p.x as f64 - cx;
        let dy = p.y as f64 - cy;
        mean_dist += (dx * dx + dy * dy).sqrt();
    }
    mean_dist /= 4.0;

    let s = if mean_dist > 1e-12 {
        (2.0_f64).sqrt() / mean_dist
    } else {
        1.0
    };
    let t = Matrix3::<f64>::new(s, 0.0, -s * cx, 0.0, s, -s * cy, 0.0, 0.0, 1.0);

    let mut out = [Point2::new(0.0_f64, 0.0_f64); 4];
    for (i, p) in pts.iter().enumerate() {
        let v = t * Vector3::new(p.x as f64, p.y as f64, 1.0);
        out[i] = Point2::new(v[0], v[1]);
    }
    (out, t)
}

/// Compute H such that `dst ~ H * src` from 4 point correspondences.
///
/// Corner correspondence is by index: `src[k]` maps to `dst[k]`. Returns
/// `None` when the correspondences are degenerate (collinear points make the
/// linear system singular).
pub fn homography_from_4pt(src: &[Point2<f32>; 4], dst: &[Point2<f32>; 4]) -> Option<Homography> {
    // Unknowns [h11 h12 h13 h21 h22 h23 h31 h32] with h33 = 1. Each
    // correspondence (x,y)->(u,v) contributes:
    //   h11 x + h12 y + h13 - u h31 x - u h32 y = u
    //   h21 x + h22 y + h23 - v h31 x - v h32 y = v
    let (src_n, t_src) = condition_points4(src);
    let (dst_n, t_dst) = condition_points4(dst);

    let mut a = SMatrix::<f64, 8, 8>::zeros();
    let mut b = SVector::<f64, 8>::zeros();

    for k in 0..4 {
        let x = src_n[k].x;
        let y = src_n[k].y;
        let u = dst_n[k].x;
        let v = dst_n[k].y;

        let r0 = 2 * k;
        a[(r0, 0)] = x;
        a[(r0, 1)] = y;
        a[(r0, 2)] = 1.0;
        a[(r0, 6)] = -u * x;
        a[(r0, 7)] = -u * y;
        b[r0] = u;

        let r1 = 2 * k + 1;
        a[(r1, 3)] = x;
        a[(r1, 4)] = y;
        a[(r1, 5)] = 1.0;
        a[(r1, 6)] = -v * x;
        a[(r1, 7)] = -v * y;
        b[r1] = v;
    }

    let x = a.lu().solve(&b)?;

    let hn = Matrix3::<f64>::new(
        x[0], x[1], x[2], //
        x[3], x[4], x[5], //
        x[6], x[7], 1.0,
    );

    // Undo conditioning: H = T_dst^{-1} * Hn * T_src, scaled so h33 = 1.
    let h = t_dst.try_inverse()? * hn * t_src;
    let s = h[(2, 2)];
    if s.abs() < 1e-12 {
        return None;
    }
    Some(Homography::new(h / s))
}

/// Warp the source frame into a `out_w x out_h` rectangle: each destination
/// pixel center is mapped through `h_img_from_rect` and bilinearly sampled.
/// Destination pixels whose preimage falls outside the frame come out black.
pub fn warp_perspective_rgb(
    src: &RgbFrameView<'_>,
    h_img_from_rect: Homography,
    out_w: usize,
    out_h: usize,
) -> RgbFrame {
    let mut out = RgbFrame::new(out_w, out_h);

    for y in 0..out_h {
        for x in 0..out_w {
            let pr = Point2::new(x as f32 + 0.5, y as f32 + 0.5);
            let pi = h_img_from_rect.apply(pr);
            out.put_pixel(x, y, sample_bilinear_rgb_u8(src, pi.x, pi.y));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point2<f32>, b: Point2<f32>, tol: f32) {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        assert!(
            dx < tol && dy < tol,
            "expected ({:.6},{:.6}) ~ ({:.6},{:.6}) within {}",
            a.x,
            a.y,
            b.x,
            b.y,
            tol
        );
    }

    #[test]
    fn inverse_round_trips_points() {
        let h = Homography::new(Matrix3::new(
            1.1, 0.08, 12.0, //
            -0.03, 0.95, 7.0, //
            0.0008, 0.0004, 1.0,
        ));
        let inv = h.inverse().expect("invertible");

        for p in [
            Point2::new(0.0_f32, 0.0),
            Point2::new(64.0_f32, -10.0),
            Point2::new(500.0_f32, 320.0),
        ] {
            assert_close(inv.apply(h.apply(p)), p, 1e-3);
        }
    }

    #[test]
    fn four_point_solve_recovers_known_transform() {
        let ground_truth = Homography::new(Matrix3::new(
            0.9, 0.04, 220.0, //
            -0.02, 1.05, 95.0, //
            0.0007, -0.0003, 1.0,
        ));

        let rect = [
            Point2::new(0.0_f32, 0.0),
            Point2::new(128.0_f32, 0.0),
            Point2::new(128.0_f32, 128.0),
            Point2::new(0.0_f32, 128.0),
        ];
        let dst = rect.map(|p| ground_truth.apply(p));

        let recovered = homography_from_4pt(&rect, &dst).expect("recoverable");

        for p in [
            Point2::new(0.0_f32, 0.0),
            Point2::new(30.0, 100.0),
            Point2::new(127.0, 64.0),
        ] {
            assert_close(recovered.apply(p), ground_truth.apply(p), 1e-3);
        }
    }

    #[test]
    fn solved_transform_maps_corners_exactly() {
        let rect = [
            Point2::new(0.0_f32, 0.0),
            Point2::new(128.0_f32, 0.0),
            Point2::new(128.0_f32, 128.0),
            Point2::new(0.0_f32, 128.0),
        ];
        let quad = [
            Point2::new(80.8_f32, 185.5),
            Point2::new(165.3_f32, 186.7),
            Point2::new(110.6_f32, 253.8),
            Point2::new(24.9_f32, 241.4),
        ];
        let h = homography_from_4pt(&rect, &quad).expect("solvable");
        for (r, q) in rect.iter().zip(quad.iter()) {
            assert_close(h.apply(*r), *q, 1e-2);
        }
    }

    #[test]
    fn half_pixel_shift_warp_reproduces_source() {
        let mut src = RgbFrame::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                src.put_pixel(x, y, [(x * 60) as u8, (y * 60) as u8, 9]);
            }
        }
        // Destination centers (x+0.5, y+0.5) land exactly on source pixel
        // (x, y), so the warp copies pixels verbatim.
        let h = Homography::new(Matrix3::new(
            1.0, 0.0, -0.5, //
            0.0, 1.0, -0.5, //
            0.0, 0.0, 1.0,
        ));
        let out = warp_perspective_rgb(&src.as_view(), h, 4, 4);
        assert_eq!(out, src);
    }
}
