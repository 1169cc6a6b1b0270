//! # Unit Conversion
//!
//! Pure conversions between physical measurements and printer dots.
//!
//! ## Units
//!
//! | Unit | Definition |
//! |------|------------|
//! | dot | One addressable point on the print head grid |
//! | mm | Millimeter |
//! | point | 1/72 inch (25.4/72 mm) |
//! | pixel | Preview pixel: one tenth of a millimeter |
//!
//! ## Calculations
//!
//! ```text
//! dots   = round(mm * dots_per_mm)
//! mm     = dots / dots_per_mm
//! pixels = round(dots / dots_per_mm * 10)
//!
//! For 203 DPI (8 dots/mm):
//!   10mm  = 80 dots
//!   80 dots = 100 pixels
//! ```
//!
//! Conversions are lossy: the dot grid is discrete, so values only
//! round-trip to within one dot.

use crate::printer::Density;

/// Millimeters per point (1 pt = 1/72 inch)
pub const MM_PER_POINT: f32 = 25.4 / 72.0;

/// Preview pixels per millimeter
pub const PIXELS_PER_MM: f32 = 10.0;

/// Convert millimeters to dots
///
/// ## Example
///
/// ```
/// use zpl_label::printer::Density;
/// use zpl_label::units::dots_from_mm;
///
/// assert_eq!(dots_from_mm(10.0, Density::Dpi203), 80);
/// assert_eq!(dots_from_mm(10.0, Density::Dpi300), 118);
/// ```
#[inline]
pub fn dots_from_mm(mm: f32, density: Density) -> i32 {
    (mm * density.dots_per_mm()).round() as i32
}

/// Convert dots to millimeters
#[inline]
pub fn mm_from_dots(dots: i32, density: Density) -> f32 {
    dots as f32 / density.dots_per_mm()
}

/// Convert points (1/72 inch) to dots
#[inline]
pub fn dots_from_points(points: f32, density: Density) -> i32 {
    dots_from_mm(points * MM_PER_POINT, density)
}

/// Convert dots to points
#[inline]
pub fn points_from_dots(dots: i32, density: Density) -> f32 {
    mm_from_dots(dots, density) / MM_PER_POINT
}

/// Convert dots to preview pixels (tenths of a millimeter)
///
/// Only the preview uses this scale; it has no meaning on the wire.
#[inline]
pub fn pixels_from_dots(dots: i32, density: Density) -> i32 {
    (mm_from_dots(dots, density) * PIXELS_PER_MM).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_from_mm() {
        assert_eq!(dots_from_mm(10.0, Density::Dpi152), 60);
        assert_eq!(dots_from_mm(10.0, Density::Dpi203), 80);
        assert_eq!(dots_from_mm(10.0, Density::Dpi300), 118);
        assert_eq!(dots_from_mm(10.0, Density::Dpi600), 240);
    }

    #[test]
    fn test_dots_from_mm_rounds_half_up() {
        // 0.0625mm * 8 = 0.5 dots
        assert_eq!(dots_from_mm(0.0625, Density::Dpi203), 1);
        // 1mm * 11.8 = 11.8 dots
        assert_eq!(dots_from_mm(1.0, Density::Dpi300), 12);
    }

    #[test]
    fn test_mm_from_dots() {
        assert!((mm_from_dots(80, Density::Dpi203) - 10.0).abs() < 1e-4);
        assert!((mm_from_dots(240, Density::Dpi600) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_round_trip_within_one_dot() {
        for density in Density::ALL {
            let one_dot_mm = 1.0 / density.dots_per_mm();
            let mut mm = 0.0f32;
            while mm < 200.0 {
                let back = mm_from_dots(dots_from_mm(mm, density), density);
                assert!(
                    (back - mm).abs() <= one_dot_mm,
                    "{:?}: {}mm came back as {}mm",
                    density,
                    mm,
                    back
                );
                mm += 0.37;
            }
        }
    }

    #[test]
    fn test_points() {
        // 72pt = 1 inch = 25.4mm = 203.2 dots at 8 dots/mm
        assert_eq!(dots_from_points(72.0, Density::Dpi203), 203);
        assert!((points_from_dots(203, Density::Dpi203) - 72.0).abs() < 0.1);
    }

    #[test]
    fn test_pixels_from_dots() {
        // 80 dots = 10mm = 100 tenths
        assert_eq!(pixels_from_dots(80, Density::Dpi203), 100);
        assert_eq!(pixels_from_dots(203, Density::Dpi203), 254);
        assert_eq!(pixels_from_dots(0, Density::Dpi600), 0);
    }
}
