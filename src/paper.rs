//! On-screen width of physical paper sizes.

use crate::consts::{CSS_PIXELS_PER_INCH, MM_PER_INCH};
use crate::prelude::*;

/// Common paper sizes in portrait orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

impl PaperSize {
    /// Portrait width in millimetres.
    pub const fn width_mm(self) -> f64 {
        match self {
            Self::A3 => 297.0,
            Self::A4 => 210.0,
            Self::A5 => 148.0,
            Self::Letter | Self::Legal => 215.9,
        }
    }

    pub fn width_inches(self) -> f64 {
        self.width_mm() / MM_PER_INCH
    }
}

/// Pixel density of a screen with the given device pixel ratio.
///
/// Ratios that are not finite and positive count as 1.
pub fn pixels_per_inch(device_pixel_ratio: f64) -> f64 {
    let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    CSS_PIXELS_PER_INCH * ratio
}

/// Width of `paper` in whole device pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn pixel_width(paper: PaperSize, device_pixel_ratio: f64) -> u32 {
    // positive and finite; `as` saturates at u32::MAX
    (paper.width_inches() * pixels_per_inch(device_pixel_ratio)).round() as u32
}

pub fn a4_pixel_width(device_pixel_ratio: f64) -> u32 {
    pixel_width(PaperSize::A4, device_pixel_ratio)
}
