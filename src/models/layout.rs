//! Layout models for the pay stub document.
//!
//! Coordinates are millimetres on an A4 portrait page with the origin at the
//! top-left corner; `y` is the text baseline.

use serde::{Deserialize, Serialize};

/// A single positioned text-drawing directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInstruction {
    /// The text to draw.
    pub text: String,
    /// Horizontal position of the text start.
    pub x: f64,
    /// Vertical position of the text baseline.
    pub y: f64,
    /// Font size in points.
    pub font_size: f64,
}

impl LayoutInstruction {
    /// Creates a new instruction.
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
        }
    }
}

/// A decoded employer logo as 8-bit RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl LogoImage {
    /// Creates a logo from raw RGB pixels.
    ///
    /// Returns `None` for an empty image or when `pixels` does not hold
    /// exactly `width * height * 3` bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use paystub_engine::models::LogoImage;
    ///
    /// assert!(LogoImage::new(2, 1, vec![0; 6]).is_some());
    /// assert!(LogoImage::new(0, 1, vec![]).is_none());
    /// ```
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(3)?;
        if width == 0 || height == 0 || pixels.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Height over width.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

/// Where the logo is drawn on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogoPlacement {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Drawn width.
    pub width: f64,
    /// Drawn height.
    pub height: f64,
}

/// A fully laid out pay stub page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StubDocument {
    /// File name the document is saved under.
    pub file_name: String,
    /// Logo position, when a logo is present.
    pub logo: Option<LogoPlacement>,
    /// Text instructions in drawing order.
    pub instructions: Vec<LayoutInstruction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_rejects_mismatched_pixel_buffer() {
        assert!(LogoImage::new(2, 2, vec![0; 11]).is_none());
        assert!(LogoImage::new(2, 0, vec![]).is_none());
    }

    #[test]
    fn test_logo_aspect_ratio() {
        let logo = LogoImage::new(4, 2, vec![255; 24]).unwrap();
        assert_eq!(logo.aspect_ratio(), 0.5);
        assert_eq!(logo.pixels().len(), 24);
    }

    #[test]
    fn test_instruction_serialization() {
        let instruction = LayoutInstruction::new("Earnings", 14.0, 52.0, 11.0);
        let json = serde_json::to_value(&instruction).unwrap();

        assert_eq!(json["text"], "Earnings");
        assert_eq!(json["font_size"], 11.0);
    }
}
