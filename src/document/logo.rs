//! Employer logo loading.
//!
//! A logo is optional decoration. Every failure here (missing file, unknown
//! format, corrupt data, empty image) is logged and reported as `None`, and
//! the stub is laid out without a logo.

use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::models::LogoImage;

fn into_logo(image: DynamicImage) -> Option<LogoImage> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    LogoImage::new(width, height, rgb.into_raw())
}

/// Loads and decodes the logo at `path`.
///
/// # Example
///
/// ```
/// use paystub_engine::document::load_logo;
///
/// assert!(load_logo("does/not/exist.png").is_none());
/// ```
pub fn load_logo(path: impl AsRef<Path>) -> Option<LogoImage> {
    let path = path.as_ref();
    match image::open(path) {
        Ok(image) => {
            let logo = into_logo(image);
            if logo.is_none() {
                debug!(path = %path.display(), "Logo image is empty, continuing without logo");
            }
            logo
        }
        Err(err) => {
            debug!(
                path = %path.display(),
                error = %err,
                "Logo unavailable, continuing without logo"
            );
            None
        }
    }
}

/// Decodes a logo from encoded image bytes.
pub fn decode_logo(bytes: &[u8]) -> Option<LogoImage> {
    match image::load_from_memory(bytes) {
        Ok(image) => into_logo(image),
        Err(err) => {
            debug!(error = %err, "Logo bytes could not be decoded, continuing without logo");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_load_logo_from_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paystub.png");
        RgbImage::from_pixel(40, 10, Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let logo = load_logo(&path).unwrap();
        assert_eq!(logo.width(), 40);
        assert_eq!(logo.height(), 10);
        assert_eq!(&logo.pixels()[..3], &[10, 20, 30]);
    }

    #[test]
    fn test_missing_logo_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_logo(dir.path().join("paystub.png")).is_none());
    }

    #[test]
    fn test_corrupt_logo_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paystub.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(load_logo(&path).is_none());
        assert!(decode_logo(b"not an image").is_none());
    }
}
