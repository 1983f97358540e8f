//! Core raster and projective-geometry utilities for parking-lot occupancy
//! detection.
//!
//! This crate is intentionally small and purely geometric. It knows nothing
//! about spot lists, classifiers or transports: it turns one quadrilateral
//! region of an RGB frame into a fronto-parallel rectangular patch and leaves
//! everything else to the crates built on top of it.

mod frame;
mod homography;
mod logger;
mod rectify;

pub use frame::{resize_bilinear, sample_bilinear_rgb, sample_bilinear_rgb_u8, RgbFrame, RgbFrameView};
pub use homography::{homography_from_4pt, warp_perspective_rgb, Homography};
pub use rectify::{quad_signed_area, rectify_quad, RectifyError, MIN_QUAD_AREA};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
