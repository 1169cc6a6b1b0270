//! # Graphic Box Element
//!
//! Boxes and lines (a line is a box one dimension of which equals the
//! border thickness).

use serde::{Deserialize, Serialize};

use super::{LabelElement, Position, field_origin};
use crate::printer::PrinterConfig;
use crate::protocol::commands::{GRAPHIC_BOX, command, field_separator};
use crate::protocol::tokens::LineColor;

fn default_thickness() -> i32 {
    1
}

/// A `^GB` graphic box.
///
/// ```text
/// [^FO<x>,<y>]^GB<width>,<height>,<thickness>,<color>,<rounding>^FS
/// ```
///
/// Values are passed through unvalidated; the printer clamps them.
///
/// ## Example
///
/// ```
/// use zpl_label::elements::{GraphicBox, LabelElement};
/// use zpl_label::printer::PrinterConfig;
///
/// let frame = GraphicBox::new(400, 200).at(0, 0).thickness(3);
/// assert_eq!(
///     frame.encode(&PrinterConfig::default()),
///     "^FO0,0^GB400,200,3,B,0^FS\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicBox {
    /// Upper-left corner
    #[serde(flatten)]
    pub position: Position,
    /// Width in dots
    pub width: i32,
    /// Height in dots
    pub height: i32,
    /// Border thickness in dots
    #[serde(default = "default_thickness")]
    pub thickness: i32,
    /// Line color
    #[serde(default)]
    pub color: LineColor,
    /// Corner rounding, 0 (square) to 8
    #[serde(default)]
    pub rounding: u8,
}

impl GraphicBox {
    /// Black square-cornered box with a one-dot border
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            position: Position::default(),
            width,
            height,
            thickness: default_thickness(),
            color: LineColor::Black,
            rounding: 0,
        }
    }

    /// Horizontal line
    pub fn horizontal_line(length: i32, thickness: i32) -> Self {
        Self::new(length, thickness).thickness(thickness)
    }

    /// Vertical line
    pub fn vertical_line(length: i32, thickness: i32) -> Self {
        Self::new(thickness, length).thickness(thickness)
    }

    /// Set the upper-left corner.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// Set the border thickness.
    pub fn thickness(mut self, thickness: i32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the line color.
    pub fn color(mut self, color: LineColor) -> Self {
        self.color = color;
        self
    }

    /// Set the corner rounding.
    pub fn rounding(mut self, rounding: u8) -> Self {
        self.rounding = rounding;
        self
    }
}

impl LabelElement for GraphicBox {
    fn position(&self) -> &Position {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    fn encode(&self, _config: &PrinterConfig) -> String {
        let mut zpl = field_origin(&self.position);
        zpl.push_str(&command(
            GRAPHIC_BOX,
            &[
                &self.width,
                &self.height,
                &self.thickness,
                &self.color.token(),
                &self.rounding,
            ],
        ));
        zpl.push_str(&field_separator());
        zpl
    }
}
