//! # Text Element
//!
//! A single line of text placed by its baseline.

use serde::{Deserialize, Serialize};

use super::{LabelElement, Position, field_typeset};
use crate::printer::PrinterConfig;
use crate::protocol::commands::{FONT, command, field_data, field_separator};
use crate::protocol::font::{Font, size_in_dots};
use crate::protocol::tokens::Rotation;

/// A text field.
///
/// ```text
/// [^FT<x>,<y>][^A<font><rotation>,<h>,<h>]^FD<content>^FS
/// ```
///
/// The `^A` font selection is written only when both a font and a size are
/// set; otherwise the label's default font (`^CF`) applies. The size is a
/// nominal point size converted with the density of the configuration the
/// text is encoded against.
///
/// ## Example
///
/// ```
/// use zpl_label::elements::{LabelElement, Text};
/// use zpl_label::printer::PrinterConfig;
/// use zpl_label::protocol::font::Font;
///
/// let text = Text::new("Order 1234").at(20, 60).font(Font::Zero, 14);
/// assert_eq!(
///     text.encode(&PrinterConfig::default()),
///     "^FT20,60^A0N,40,40^FDOrder 1234^FS\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Text {
    /// Baseline placement
    #[serde(flatten)]
    pub position: Position,
    /// Font override
    #[serde(default)]
    pub font: Option<Font>,
    /// Font size override, nominal points
    #[serde(default)]
    pub font_size: Option<u32>,
    /// Orientation of the glyphs
    #[serde(default)]
    pub rotation: Rotation,
    /// Text, written verbatim
    pub content: String,
}

impl Text {
    /// Text in the label's default font
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Set the baseline position.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// Override the font and its nominal size.
    pub fn font(mut self, font: Font, size: u32) -> Self {
        self.font = Some(font);
        self.font_size = Some(size);
        self
    }

    /// Set the glyph orientation.
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }
}

impl LabelElement for Text {
    fn position(&self) -> &Position {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    fn encode(&self, config: &PrinterConfig) -> String {
        let mut zpl = field_typeset(&self.position);

        if let (Some(font), Some(size)) = (self.font, self.font_size) {
            let dots = size_in_dots(size, config.density);
            let name = format!("{}{}", font, self.rotation);
            zpl.push_str(&command(FONT, &[&name, &dots, &dots]));
        }

        zpl.push_str(&field_data(&self.content));
        zpl.push_str(&field_separator());
        zpl
    }
}
