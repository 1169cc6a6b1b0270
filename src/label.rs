//! # Label Composer
//!
//! A [`Label`] owns its canvas size, print mode, printer configuration and
//! an ordered list of elements, and turns them into one ZPL program.
//!
//! ## Program Layout
//!
//! ```text
//! ^XA                     start format
//! ^MMT                    print mode
//! ^PW<width>              only if a width is set
//! ^LL<height>             only if a height is set
//! ^CF<font>,<dots>        only if the default font is complete
//! <element fragments>     in insertion order
//! ^XZ                     end format
//! ```
//!
//! ## Example
//!
//! ```
//! use zpl_label::elements::{CustomCommand, QrCode};
//! use zpl_label::label::Label;
//!
//! let mut label = Label::new().with_size(406, 203);
//! label.add_element(CustomCommand::new("FO", 20, 20, 0));
//! label.add_element(QrCode::new("HELLO").automatic());
//!
//! assert_eq!(
//!     label.encode(),
//!     "^XA\n^MMT\n^PW406\n^LL203\n^FO20,20,0^BQN,2,,M\n^FDMA,HELLO^FS\n^XZ\n"
//! );
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::elements::{Element, LabelElement};
use crate::error::LabelError;
use crate::printer::PrinterConfig;
use crate::protocol::commands::{
    CHANGE_FONT, LABEL_LENGTH, PRINT_WIDTH, command_line, end_format, start_format,
};
use crate::protocol::font::Font;
use crate::protocol::tokens::PrintMode;
use crate::units::dots_from_mm;

/// A printable label.
///
/// Encoding is pure: calling [`Label::encode`] any number of times on an
/// unchanged label yields the same text. Elements are encoded against the
/// configuration as it is at encode time, so changing the default font
/// after adding elements affects the whole label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Label {
    /// Width in dots
    #[serde(default)]
    width: Option<i32>,

    /// Height (label length) in dots
    #[serde(default)]
    height: Option<i32>,

    #[serde(default)]
    print_mode: PrintMode,

    #[serde(default)]
    config: PrinterConfig,

    #[serde(default)]
    elements: Vec<Element>,
}

impl Label {
    /// Empty label with no size, tear-off mode and the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty label with the given configuration
    pub fn with_config(config: PrinterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set width and height in dots.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set width and height in millimeters, converted with the density of
    /// the current configuration.
    ///
    /// ```
    /// use zpl_label::label::Label;
    ///
    /// let label = Label::new().with_size_mm(50.0, 25.0);
    /// assert_eq!(label.width(), Some(400));
    /// assert_eq!(label.height(), Some(200));
    /// ```
    pub fn with_size_mm(self, width_mm: f32, height_mm: f32) -> Self {
        let density = self.config.density;
        self.with_size(
            dots_from_mm(width_mm, density),
            dots_from_mm(height_mm, density),
        )
    }

    /// Set the print mode.
    pub fn with_print_mode(mut self, mode: PrintMode) -> Self {
        self.print_mode = mode;
        self
    }

    /// Append an element, builder style.
    pub fn element(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Append an element. Elements are drawn and encoded in insertion order.
    pub fn add_element(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    /// Set the default font on the label's configuration.
    pub fn set_default_font(&mut self, font: Font, size: u32) -> &mut Self {
        self.config.default_font = Some(font);
        self.config.default_font_size = Some(size);
        self
    }

    /// Set or clear the width.
    pub fn set_width(&mut self, width: Option<i32>) -> &mut Self {
        self.width = width;
        self
    }

    /// Set or clear the height.
    pub fn set_height(&mut self, height: Option<i32>) -> &mut Self {
        self.height = height;
        self
    }

    /// Set the print mode.
    pub fn set_print_mode(&mut self, mode: PrintMode) -> &mut Self {
        self.print_mode = mode;
        self
    }

    /// Width in dots
    pub fn width(&self) -> Option<i32> {
        self.width
    }

    /// Height in dots
    pub fn height(&self) -> Option<i32> {
        self.height
    }

    /// Print mode
    pub fn print_mode(&self) -> PrintMode {
        self.print_mode
    }

    /// Printer configuration
    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Mutable printer configuration
    pub fn config_mut(&mut self) -> &mut PrinterConfig {
        &mut self.config
    }

    /// Elements in insertion order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// # Encode to ZPL
    ///
    /// Builds the complete program in memory. Never fails; dimensions are
    /// optional.
    pub fn encode(&self) -> String {
        let mut zpl = start_format();
        zpl.push_str(&self.print_mode.zpl());

        if let Some(width) = self.width {
            zpl.push_str(&command_line(PRINT_WIDTH, &[&width]));
        }

        if let Some(height) = self.height {
            zpl.push_str(&command_line(LABEL_LENGTH, &[&height]));
        }

        if let Some((font, dots)) = self.config.resolve_default_font() {
            zpl.push_str(&command_line(CHANGE_FONT, &[&font, &dots]));
        }

        for (i, element) in self.elements.iter().enumerate() {
            let fragment = element.encode(&self.config);
            trace!("element {} ({}): {:?}", i, element.kind(), fragment);
            zpl.push_str(&fragment);
        }

        zpl.push_str(&end_format());

        debug!(
            "encoded label: {} elements, {} bytes at {}",
            self.elements.len(),
            zpl.len(),
            self.config.density
        );
        zpl
    }

    /// Parse a label from its JSON document form.
    ///
    /// ```
    /// use zpl_label::label::Label;
    ///
    /// let label = Label::from_json(r#"{
    ///     "width": 203,
    ///     "elements": [{ "type": "text", "content": "Hi" }]
    /// }"#)?;
    /// assert_eq!(label.encode(), "^XA\n^MMT\n^PW203\n^FDHi^FS\n^XZ\n");
    /// # Ok::<(), zpl_label::error::LabelError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LabelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the label to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LabelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{CustomCommand, QrCode, Text};
    use crate::printer::Density;
    use crate::protocol::qr::QrCharacterMode;

    #[test]
    fn test_empty_sized_label() {
        let label = Label::new().with_size(203, 203);
        assert_eq!(label.encode(), "^XA\n^MMT\n^PW203\n^LL203\n^XZ\n");
    }

    #[test]
    fn test_unsized_label() {
        assert_eq!(Label::new().encode(), "^XA\n^MMT\n^XZ\n");
    }

    #[test]
    fn test_width_only() {
        let mut label = Label::new();
        label.set_width(Some(300));
        assert_eq!(label.encode(), "^XA\n^MMT\n^PW300\n^XZ\n");
    }

    #[test]
    fn test_height_only() {
        let mut label = Label::new();
        label.set_height(Some(150));
        assert_eq!(label.encode(), "^XA\n^MMT\n^LL150\n^XZ\n");
    }

    #[test]
    fn test_print_mode_line() {
        let label = Label::new().with_print_mode(PrintMode::Cutter);
        assert_eq!(label.encode(), "^XA\n^MMC\n^XZ\n");
    }

    #[test]
    fn test_default_font_line() {
        let config = PrinterConfig::new(Density::Dpi203).with_default_font(Font::Zero, 11);
        let label = Label::with_config(config).with_size(400, 200);
        assert_eq!(
            label.encode(),
            "^XA\n^MMT\n^PW400\n^LL200\n^CF0,31\n^XZ\n"
        );
    }

    #[test]
    fn test_half_default_font_is_omitted() {
        let mut label = Label::new();
        label.config_mut().default_font = Some(Font::A);
        assert_eq!(label.encode(), "^XA\n^MMT\n^XZ\n");

        label.config_mut().default_font = None;
        label.config_mut().default_font_size = Some(12);
        assert_eq!(label.encode(), "^XA\n^MMT\n^XZ\n");
    }

    #[test]
    fn test_elements_in_insertion_order() {
        let mut label = Label::new();
        label
            .add_element(Text::new("first"))
            .add_element(Text::new("second"))
            .add_element(Text::new("first"));

        assert_eq!(
            label.encode(),
            "^XA\n^MMT\n^FDfirst^FS\n^FDsecond^FS\n^FDfirst^FS\n^XZ\n"
        );
    }

    #[test]
    fn test_config_read_at_encode_time() {
        let mut label = Label::new();
        label.add_element(Text::new("A").font(Font::Zero, 11));
        label.set_default_font(Font::B, 14);
        label.add_element(Text::new("B"));
        label.config_mut().density = Density::Dpi300;

        // Both the ^CF line and the text added before the change use 300 dpi
        assert_eq!(
            label.encode(),
            "^XA\n^MMT\n^CFB,58\n^A0N,46,46^FDA^FS\n^FDB^FS\n^XZ\n"
        );
    }

    #[test]
    fn test_encode_is_idempotent() {
        let label = Label::new()
            .with_size(406, 203)
            .element(CustomCommand::new("FO", 10, 10, 0))
            .element(QrCode::new("X").manual(QrCharacterMode::Byte));
        let first = label.encode();
        let second = label.encode();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_mm_uses_density() {
        let label = Label::with_config(PrinterConfig::new(Density::Dpi600)).with_size_mm(10.0, 5.0);
        assert_eq!(label.width(), Some(240));
        assert_eq!(label.height(), Some(120));
    }

    #[test]
    fn test_json_round_trip_preserves_output() {
        let label = Label::with_config(
            PrinterConfig::new(Density::Dpi300).with_default_font(Font::Zero, 12),
        )
        .with_size(600, 300)
        .with_print_mode(PrintMode::PeelOff)
        .element(CustomCommand::new("FO", 30, 30, 0))
        .element(QrCode::new("https://example.com").magnification("4"))
        .element(Text::new("caption").at(30, 280));

        let json = label.to_json().unwrap();
        let back = Label::from_json(&json).unwrap();
        assert_eq!(back, label);
        assert_eq!(back.encode(), label.encode());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Label::from_json("{\"width\": \"wide\"}"),
            Err(LabelError::Json(_))
        ));
    }
}
