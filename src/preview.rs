//! # Label Preview
//!
//! Draws an approximate grayscale picture of a label so the layout can be
//! checked without a printer. The preview reads element positions and types,
//! never the encoded ZPL, and does not reflect what a printer will produce
//! pixel for pixel.
//!
//! ## Scale
//!
//! One preview pixel is a tenth of a millimeter (see
//! [`pixels_from_dots`]), so a 50x25mm label renders at 500x250 pixels
//! regardless of density.
//!
//! ## What Gets Drawn
//!
//! | Element | Drawing |
//! |---------|---------|
//! | QR code | Real modules via the `qrcode` crate |
//! | Graphic box | Its outline (or fill, when the border covers it) |
//! | Everything else | A 100x20 placeholder outline |

use std::path::Path;

use image::{GrayImage, Luma};
use log::debug;
use qrcode::{EcLevel, QrCode};

use crate::elements::{Element, GraphicBox, LabelElement};
use crate::error::LabelError;
use crate::label::Label;
use crate::printer::Density;
use crate::protocol::qr::QrErrorCorrection;
use crate::protocol::tokens::LineColor;
use crate::units::pixels_from_dots;

const WHITE: Luma<u8> = Luma([255]);
const BLACK: Luma<u8> = Luma([0]);

/// Placeholder size in pixels
const PLACEHOLDER_W: i32 = 100;
const PLACEHOLDER_H: i32 = 20;

/// Magnification printers use when `^BQ` leaves it empty
const DEFAULT_QR_MAGNIFICATION: i32 = 2;

/// Render a preview of the label.
///
/// ## Errors
///
/// Returns [`LabelError::PreviewUnavailable`] unless both width and height
/// are set.
pub fn render(label: &Label) -> Result<GrayImage, LabelError> {
    let (Some(width), Some(height)) = (label.width(), label.height()) else {
        return Err(LabelError::PreviewUnavailable);
    };

    let density = label.config().density;
    let width_px = pixels_from_dots(width, density).max(1) as u32;
    let height_px = pixels_from_dots(height, density).max(1) as u32;

    debug!(
        "preview: {}x{} dots -> {}x{} px, {} elements",
        width,
        height,
        width_px,
        height_px,
        label.elements().len()
    );

    let mut canvas = GrayImage::from_pixel(width_px, height_px, WHITE);

    for element in label.elements() {
        let pos = element.position();
        let left = pixels_from_dots(pos.x.unwrap_or(0), density);
        let top = pixels_from_dots(pos.y.unwrap_or(0), density);

        match element {
            Element::QrCode(qr) => {
                let module = qr_module_pixels(&qr.options.magnification, density);
                if !draw_qr(&mut canvas, left, top, module, &qr.text, qr.options.error_correction)
                {
                    draw_placeholder(&mut canvas, left, top);
                }
            }
            Element::GraphicBox(graphic) => draw_graphic_box(&mut canvas, left, top, graphic, density),
            _ => draw_placeholder(&mut canvas, left, top),
        }
    }

    Ok(canvas)
}

/// Render the preview and write it as a PNG.
pub fn save_png<P: AsRef<Path>>(label: &Label, path: P) -> Result<(), LabelError> {
    let image = render(label)?;
    image
        .save(path.as_ref())
        .map_err(|e| LabelError::Image(format!("{}: {}", path.as_ref().display(), e)))
}

fn qr_module_pixels(magnification: &str, density: Density) -> i32 {
    let dots = magnification
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|m| *m > 0)
        .unwrap_or(DEFAULT_QR_MAGNIFICATION);
    pixels_from_dots(dots, density).max(1)
}

/// Draw QR modules; returns false if the payload cannot be encoded.
fn draw_qr(
    canvas: &mut GrayImage,
    left: i32,
    top: i32,
    module: i32,
    text: &str,
    level: QrErrorCorrection,
) -> bool {
    let ec_level = match level {
        QrErrorCorrection::HighDensity => EcLevel::L,
        QrErrorCorrection::Standard => EcLevel::M,
        QrErrorCorrection::High => EcLevel::Q,
        QrErrorCorrection::UltraHigh => EcLevel::H,
    };

    let code = match QrCode::with_error_correction_level(text, ec_level) {
        Ok(code) => code,
        Err(e) => {
            debug!("preview: QR payload not encodable: {}", e);
            return false;
        }
    };

    let size = code.width();
    for qy in 0..size {
        for qx in 0..size {
            if code[(qx, qy)] == qrcode::Color::Dark {
                fill_rect(
                    canvas,
                    left.saturating_add((qx as i32).saturating_mul(module)),
                    top.saturating_add((qy as i32).saturating_mul(module)),
                    module,
                    module,
                    BLACK,
                );
            }
        }
    }
    true
}

fn draw_graphic_box(canvas: &mut GrayImage, left: i32, top: i32, graphic: &GraphicBox, density: Density) {
    let color = match graphic.color {
        LineColor::Black => BLACK,
        LineColor::White => WHITE,
    };
    let w = pixels_from_dots(graphic.width, density).max(1);
    let h = pixels_from_dots(graphic.height, density).max(1);
    let t = pixels_from_dots(graphic.thickness, density).max(1);
    draw_outline(canvas, left, top, w, h, t, color);
}

fn draw_placeholder(canvas: &mut GrayImage, left: i32, top: i32) {
    draw_outline(canvas, left, top, PLACEHOLDER_W, PLACEHOLDER_H, 1, BLACK);
}

fn draw_outline(canvas: &mut GrayImage, x: i32, y: i32, w: i32, h: i32, t: i32, color: Luma<u8>) {
    let t = t.min(w).min(h);
    fill_rect(canvas, x, y, w, t, color);
    fill_rect(canvas, x, y.saturating_add(h - t), w, t, color);
    fill_rect(canvas, x, y, t, h, color);
    fill_rect(canvas, x.saturating_add(w - t), y, t, h, color);
}

/// Fill a rectangle, clipped to the canvas.
fn fill_rect(canvas: &mut GrayImage, x: i32, y: i32, w: i32, h: i32, color: Luma<u8>) {
    let clip = |start: i32, len: i32, limit: u32| {
        let lo = i64::from(start).clamp(0, i64::from(limit));
        let hi = (i64::from(start) + i64::from(len)).clamp(0, i64::from(limit));
        (lo as u32, hi as u32)
    };
    let (x0, x1) = clip(x, w, canvas.width());
    let (y0, y1) = clip(y, h, canvas.height());

    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px, py, color);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
