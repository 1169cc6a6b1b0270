//! # QR Code Element
//!
//! Encodes a QR Code symbol as two command lines:
//!
//! ```text
//! ^BQN,2,,M
//! ^FDMM,AHELLO^FS
//! ```
//!
//! The first line configures the symbol (orientation, model,
//! magnification, error correction). The second carries the data, prefixed
//! by the error correction letter again, the input mode, a comma, and in
//! manual mode the character mode letter.
//!
//! The repeated error correction letter is what printers expect in the
//! `^FD` of a QR field and is reproduced as-is.

use serde::{Deserialize, Deserializer, Serialize};

use super::{LabelElement, Position};
use crate::printer::PrinterConfig;
use crate::protocol::commands::{NEWLINE, QR_CODE, command, field_data, field_separator};
use crate::protocol::qr::{QrCharacterMode, QrErrorCorrection, QrInputMode, QrModel};
use crate::protocol::tokens::Rotation;

/// # QR Code Settings
///
/// Every symbol setting with its default in one inspectable value.
///
/// | Setting | Default |
/// |---------|---------|
/// | rotation | normal |
/// | model | 2 |
/// | input mode | manual |
/// | character mode | alphanumeric |
/// | error correction | standard (M) |
/// | magnification | empty (printer picks by density) |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    /// Field orientation
    pub rotation: Rotation,
    /// Symbol model
    pub model: QrModel,
    /// Data input mode
    pub input_mode: QrInputMode,
    /// Character mode, written only in manual input mode
    pub character_mode: QrCharacterMode,
    /// Error correction level
    pub error_correction: QrErrorCorrection,
    /// Magnification factor `1`-`10`; empty leaves it to the printer.
    /// Not validated.
    #[serde(deserialize_with = "string_or_number")]
    pub magnification: String,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            rotation: Rotation::Normal,
            model: QrModel::Model2,
            input_mode: QrInputMode::Manual,
            character_mode: QrCharacterMode::Alphanumeric,
            error_correction: QrErrorCorrection::Standard,
            magnification: String::new(),
        }
    }
}

/// Accept `"4"` or `4` for magnification.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u32),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// A QR code element.
///
/// ## Example
///
/// ```
/// use zpl_label::elements::{LabelElement, QrCode};
/// use zpl_label::printer::PrinterConfig;
/// use zpl_label::protocol::qr::QrErrorCorrection;
///
/// let qr = QrCode::new("https://example.com")
///     .automatic()
///     .error_correction(QrErrorCorrection::High)
///     .magnification("5");
///
/// assert_eq!(
///     qr.encode(&PrinterConfig::default()),
///     "^BQN,2,5,Q\n^FDQA,https://example.com^FS\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QrCode {
    /// Placement, used by previews only; place the symbol on the wire
    /// with a preceding field origin command
    #[serde(flatten)]
    pub position: Position,
    /// Symbol settings
    #[serde(flatten)]
    pub options: QrOptions,
    /// Payload, written verbatim
    pub text: String,
}

impl QrCode {
    /// QR code with default settings
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            options: QrOptions::default(),
            text: text.into(),
        }
    }

    /// QR code with explicit settings
    pub fn with_options(text: impl Into<String>, options: QrOptions) -> Self {
        Self {
            options,
            ..Self::new(text)
        }
    }

    /// Set the preview position.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// Set the field orientation.
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.options.rotation = rotation;
        self
    }

    /// Set the symbol model.
    pub fn model(mut self, model: QrModel) -> Self {
        self.options.model = model;
        self
    }

    /// Let the printer pick the character mode.
    pub fn automatic(mut self) -> Self {
        self.options.input_mode = QrInputMode::Automatic;
        self
    }

    /// Use manual input with the given character mode.
    pub fn manual(mut self, character_mode: QrCharacterMode) -> Self {
        self.options.input_mode = QrInputMode::Manual;
        self.options.character_mode = character_mode;
        self
    }

    /// Set the error correction level.
    pub fn error_correction(mut self, level: QrErrorCorrection) -> Self {
        self.options.error_correction = level;
        self
    }

    /// Set the magnification factor (`""` for the printer default).
    pub fn magnification(mut self, magnification: impl Into<String>) -> Self {
        self.options.magnification = magnification.into();
        self
    }
}

impl LabelElement for QrCode {
    fn position(&self) -> &Position {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    fn encode(&self, _config: &PrinterConfig) -> String {
        let opts = &self.options;
        let ec = opts.error_correction.token();

        let mut zpl = command(
            QR_CODE,
            &[
                &opts.rotation,
                &opts.model,
                &opts.magnification,
                &ec,
            ],
        );
        zpl.push_str(NEWLINE);

        let mut data = String::with_capacity(self.text.len() + 4);
        data.push_str(ec);
        data.push_str(opts.input_mode.token());
        data.push(',');
        if opts.input_mode == QrInputMode::Manual {
            data.push_str(opts.character_mode.token());
        }
        data.push_str(&self.text);

        zpl.push_str(&field_data(&data));
        zpl.push_str(&field_separator());
        zpl
    }
}

// ============================================================================
// TESTS
// ============================================================================
