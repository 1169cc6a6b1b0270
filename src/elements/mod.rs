//! # Label Elements
//!
//! Everything that can be placed on a label.
//!
//! ## Design
//!
//! Each variant is a plain struct carrying only its own fields and
//! implementing [`LabelElement`]. The closed [`Element`] enum wraps them so a
//! [`Label`](crate::label::Label) can hold a single ordered list and encode
//! it without knowing which variant is which. The same enum is the JSON
//! shape of an element (`"type": "qr_code"`, ...).
//!
//! ```
//! use zpl_label::elements::{CustomCommand, Element, LabelElement, QrCode};
//! use zpl_label::printer::PrinterConfig;
//!
//! let config = PrinterConfig::default();
//! let elements: Vec<Element> = vec![
//!     CustomCommand::new("FO", 50, 50, 0).into(),
//!     QrCode::new("HELLO").automatic().into(),
//! ];
//!
//! let zpl: String = elements.iter().map(|e| e.encode(&config)).collect();
//! assert_eq!(zpl, "^FO50,50,0^BQN,2,,M\n^FDMA,HELLO^FS\n");
//! ```
//!
//! ## Positions
//!
//! Positions are in dots and both coordinates are optional. A position is
//! only written to the wire when both are set; otherwise the element prints
//! at the printer's current field origin.

mod custom;
mod graphic;
mod native;
mod qr;
mod text;

pub use custom::*;
pub use graphic::*;
pub use native::*;
pub use qr::*;
pub use text::*;

use serde::{Deserialize, Serialize};

use crate::printer::{Density, PrinterConfig};
use crate::protocol::commands::{FIELD_ORIGIN, FIELD_TYPESET, command};
use crate::units::dots_from_mm;

/// Placement of an element, in dots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    /// Distance from the left edge
    pub x: Option<i32>,
    /// Distance from the top edge
    pub y: Option<i32>,
}

impl Position {
    /// Position with both coordinates set
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Position from millimeters on a printer of the given density
    ///
    /// ## Example
    ///
    /// ```
    /// use zpl_label::elements::Position;
    /// use zpl_label::printer::Density;
    ///
    /// let pos = Position::from_mm(10.0, 5.0, Density::Dpi203);
    /// assert_eq!(pos, Position::new(80, 40));
    /// ```
    pub fn from_mm(x_mm: f32, y_mm: f32, density: Density) -> Self {
        Self::new(dots_from_mm(x_mm, density), dots_from_mm(y_mm, density))
    }

    /// Both coordinates, if both are set
    pub fn resolved(&self) -> Option<(i32, i32)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

/// `^FT<x>,<y>` when the position is complete, empty otherwise.
///
/// Field typeset places the field by its baseline; text uses it.
pub fn field_typeset(position: &Position) -> String {
    match position.resolved() {
        Some((x, y)) => command(FIELD_TYPESET, &[&x, &y]),
        None => String::new(),
    }
}

/// `^FO<x>,<y>` when the position is complete, empty otherwise.
///
/// Field origin places the field by its upper-left corner; graphics use it.
pub fn field_origin(position: &Position) -> String {
    match position.resolved() {
        Some((x, y)) => command(FIELD_ORIGIN, &[&x, &y]),
        None => String::new(),
    }
}

/// Trait implemented by every placeable element.
///
/// The configuration is borrowed only for the duration of `encode`; elements
/// never keep it.
pub trait LabelElement {
    /// Where the element is placed
    fn position(&self) -> &Position;

    /// Mutable access to the placement
    fn position_mut(&mut self) -> &mut Position;

    /// ZPL fragment for this element, including its own terminators
    fn encode(&self, config: &PrinterConfig) -> String;
}

/// Any element a label can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Generic three-parameter positioned command
    CustomCommand(CustomCommand),
    /// QR Code symbol
    QrCode(QrCode),
    /// Text field
    Text(Text),
    /// Rectangle or line
    GraphicBox(GraphicBox),
    /// Raw ZPL passthrough
    Native(Native),
}

impl Element {
    fn inner(&self) -> &dyn LabelElement {
        match self {
            Element::CustomCommand(e) => e,
            Element::QrCode(e) => e,
            Element::Text(e) => e,
            Element::GraphicBox(e) => e,
            Element::Native(e) => e,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn LabelElement {
        match self {
            Element::CustomCommand(e) => e,
            Element::QrCode(e) => e,
            Element::Text(e) => e,
            Element::GraphicBox(e) => e,
            Element::Native(e) => e,
        }
    }

    /// Short variant name, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Element::CustomCommand(_) => "custom_command",
            Element::QrCode(_) => "qr_code",
            Element::Text(_) => "text",
            Element::GraphicBox(_) => "graphic_box",
            Element::Native(_) => "native",
        }
    }
}

impl LabelElement for Element {
    fn position(&self) -> &Position {
        self.inner().position()
    }

    fn position_mut(&mut self) -> &mut Position {
        self.inner_mut().position_mut()
    }

    fn encode(&self, config: &PrinterConfig) -> String {
        self.inner().encode(config)
    }
}

macro_rules! element_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Element {
                fn from(element: $variant) -> Self {
                    Element::$variant(element)
                }
            }
        )*
    };
}

element_from!(CustomCommand, QrCode, Text, GraphicBox, Native);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_position_is_not_serialized() {
        assert_eq!(field_typeset(&Position::default()), "");
        assert_eq!(
            field_typeset(&Position {
                x: Some(10),
                y: None
            }),
            ""
        );
        assert_eq!(
            field_origin(&Position {
                x: None,
                y: Some(10)
            }),
            ""
        );
    }

    #[test]
    fn test_complete_position() {
        let pos = Position::new(30, 45);
        assert_eq!(field_typeset(&pos), "^FT30,45");
        assert_eq!(field_origin(&pos), "^FO30,45");
    }

    #[test]
    fn test_position_from_mm() {
        assert_eq!(
            Position::from_mm(10.0, 10.0, Density::Dpi300),
            Position::new(118, 118)
        );
    }

    #[test]
    fn test_position_mut_through_enum() {
        let mut element: Element = Text::new("Hi").into();
        *element.position_mut() = Position::new(5, 6);
        assert_eq!(element.position(), &Position::new(5, 6));
        assert_eq!(element.kind(), "text");
    }

    #[test]
    fn test_enum_dispatch_encodes_variant() {
        let config = PrinterConfig::default();
        let element: Element = Native::new("^PQ2\n").into();
        assert_eq!(element.encode(&config), "^PQ2\n");
    }

    #[test]
    fn test_json_tagging() {
        let element: Element = serde_json::from_str(
            r#"{"type":"custom_command","mnemonic":"FO","x":1,"y":2,"z":3}"#,
        )
        .unwrap();
        assert_eq!(element, Element::from(CustomCommand::new("FO", 1, 2, 3)));

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "custom_command");
        assert_eq!(json["x"], 1);
    }
}
