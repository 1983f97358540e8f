//! Decoding compressed frames into the core raster type.
//!
//! Decode failures are frame-level and fatal to a run: they surface here,
//! before any spot processing starts.

use std::path::Path;

use lot_occupancy_core::{RgbFrame, RgbFrameView};

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("could not decode input image: {0}")]
    InputDecode(#[from] image::ImageError),
}

/// Decode compressed image bytes (JPEG, PNG, ...) into an RGB frame.
pub fn decode_frame(bytes: &[u8]) -> Result<RgbFrame, DecodeError> {
    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    Ok(RgbFrame {
        width: rgb.width() as usize,
        height: rgb.height() as usize,
        data: rgb.into_raw(),
    })
}

/// Read and decode an image file.
pub fn load_frame(path: impl AsRef<Path>) -> Result<RgbFrame, DecodeError> {
    let bytes = std::fs::read(path)?;
    decode_frame(&bytes)
}

/// Borrow an `image::RgbImage` as the lightweight core view type.
pub fn frame_view(img: &image::RgbImage) -> RgbFrameView<'_> {
    RgbFrameView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_frame(&[0u8, 1, 2, 3, 4]).unwrap_err();
        assert!(matches!(err, DecodeError::InputDecode(_)));
    }

    #[test]
    fn png_round_trips_through_decode() {
        let mut img = image::RgbImage::new(6, 4);
        img.put_pixel(2, 1, image::Rgb([10, 20, 30]));

        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .expect("encode png");

        let frame = decode_frame(&bytes).expect("decode png");
        assert_eq!((frame.width, frame.height), (6, 4));
        let off = (1 * 6 + 2) * 3;
        assert_eq!(&frame.data[off..off + 3], &[10, 20, 30]);
    }

    #[test]
    fn view_borrows_image_buffer() {
        let img = image::RgbImage::new(8, 3);
        let v = frame_view(&img);
        assert_eq!((v.width, v.height), (8, 3));
        assert_eq!(v.data.len(), 8 * 3 * 3);
    }
}
