/// Borrowed view over an interleaved 8-bit RGB raster, row-major,
/// `data.len() == width * height * 3`.
#[derive(Clone, Copy, Debug)]
pub struct RgbFrameView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8],
}

/// Owned interleaved 8-bit RGB raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RgbFrame {
    /// Allocate a black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * 3],
        }
    }

    #[inline]
    pub fn as_view(&self) -> RgbFrameView<'_> {
        RgbFrameView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let off = (y * self.width + x) * 3;
        self.data[off..off + 3].copy_from_slice(&rgb);
    }
}

#[inline]
fn get_rgb(src: &RgbFrameView<'_>, x: i32, y: i32) -> [u8; 3] {
    if x < 0 || y < 0 || x >= src.width as i32 || y >= src.height as i32 {
        return [0, 0, 0];
    }
    let off = (y as usize * src.width + x as usize) * 3;
    [src.data[off], src.data[off + 1], src.data[off + 2]]
}

/// Bilinear sample at a fractional position. Out-of-bounds taps read black,
/// so samples past the frame border fade to zero.
#[inline]
pub fn sample_bilinear_rgb(src: &RgbFrameView<'_>, x: f32, y: f32) -> [f32; 3] {
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = get_rgb(src, x0, y0);
    let p10 = get_rgb(src, x0 + 1, y0);
    let p01 = get_rgb(src, x0, y0 + 1);
    let p11 = get_rgb(src, x0 + 1, y0 + 1);

    let mut out = [0.0f32; 3];
    for c in 0..3 {
        let a = p00[c] as f32 + fx * (p10[c] as f32 - p00[c] as f32);
        let b = p01[c] as f32 + fx * (p11[c] as f32 - p01[c] as f32);
        out[c] = a + fy * (b - a);
    }
    out
}

#[inline]
pub fn sample_bilinear_rgb_u8(src: &RgbFrameView<'_>, x: f32, y: f32) -> [u8; 3] {
    let v = sample_bilinear_rgb(src, x, y);
    [
        v[0].clamp(0.0, 255.0) as u8,
        v[1].clamp(0.0, 255.0) as u8,
        v[2].clamp(0.0, 255.0) as u8,
    ]
}

/// Resize with bilinear interpolation, sampling source pixel centers.
pub fn resize_bilinear(src: &RgbFrameView<'_>, out_w: usize, out_h: usize) -> RgbFrame {
    let mut out = RgbFrame::new(out_w, out_h);
    if out_w == 0 || out_h == 0 {
        return out;
    }

    let sx = src.width as f32 / out_w as f32;
    let sy = src.height as f32 / out_h as f32;

    for y in 0..out_h {
        for x in 0..out_w {
            let px = (x as f32 + 0.5) * sx - 0.5;
            let py = (y as f32 + 0.5) * sy - 0.5;
            out.put_pixel(x, y, sample_bilinear_rgb_u8(src, px, py));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: usize, height: usize) -> RgbFrame {
        let mut f = RgbFrame::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                f.put_pixel(x, y, [v, v, v]);
            }
        }
        f
    }

    #[test]
    fn sample_at_integer_position_returns_pixel() {
        let f = checker(4, 4);
        assert_eq!(sample_bilinear_rgb_u8(&f.as_view(), 0.0, 0.0), [255, 255, 255]);
        assert_eq!(sample_bilinear_rgb_u8(&f.as_view(), 1.0, 0.0), [0, 0, 0]);
    }

    #[test]
    fn sample_outside_frame_is_black() {
        let f = checker(4, 4);
        assert_eq!(sample_bilinear_rgb_u8(&f.as_view(), -5.0, 2.0), [0, 0, 0]);
        assert_eq!(sample_bilinear_rgb_u8(&f.as_view(), 2.0, 100.0), [0, 0, 0]);
    }

    #[test]
    fn resize_preserves_constant_color() {
        let mut f = RgbFrame::new(8, 6);
        for y in 0..6 {
            for x in 0..8 {
                f.put_pixel(x, y, [40, 90, 200]);
            }
        }
        let small = resize_bilinear(&f.as_view(), 3, 3);
        assert_eq!(small.width, 3);
        assert_eq!(small.height, 3);
        assert!(small.data.chunks(3).all(|p| p == [40, 90, 200]));
    }

    #[test]
    fn resize_to_target_dimensions() {
        let f = checker(10, 7);
        let r = resize_bilinear(&f.as_view(), 128, 128);
        assert_eq!((r.width, r.height), (128, 128));
        assert_eq!(r.data.len(), 128 * 128 * 3);
    }
}
