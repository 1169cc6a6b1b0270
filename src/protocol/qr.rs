//! # QR Code Parameters (^BQ)
//!
//! Wire tokens for the QR Code bar code command and its field data.
//!
//! ## Format
//!
//! ```text
//! ^BQa,b,c,d
//! ^FD<ec><input>,[<char mode>]<data>^FS
//! ```
//!
//! | Param | Meaning | Values |
//! |-------|---------|--------|
//! | a | orientation | `N` only honored by printers |
//! | b | model | `1` legacy, `2` enhanced (default) |
//! | c | magnification | `1`-`10`, empty = per-density default |
//! | d | error correction | `H` `Q` `M` `L` |
//!
//! The field data repeats the error correction letter, then the input mode
//! (`A` automatic, `M` manual). In manual mode a character mode letter
//! (`N` numeric, `A` alphanumeric, `B` 8-bit byte, `K` Kanji) precedes the
//! data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// QR Code model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrModel {
    /// Model 1, the legacy symbology
    Model1,
    /// Model 2, enhanced (recommended)
    #[default]
    Model2,
}

impl QrModel {
    /// Model digit on the wire
    pub fn token(self) -> &'static str {
        match self {
            QrModel::Model1 => "1",
            QrModel::Model2 => "2",
        }
    }
}

/// QR Code error correction level
///
/// | Level | Name | Recovery |
/// |-------|------|----------|
/// | H | ultra-high reliability | ~30% |
/// | Q | high reliability | ~25% |
/// | M | standard | ~15% |
/// | L | high density | ~7% |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrErrorCorrection {
    /// H
    UltraHigh,
    /// Q
    High,
    /// M
    #[default]
    Standard,
    /// L
    HighDensity,
}

impl QrErrorCorrection {
    /// Every level, most redundant first
    pub const ALL: [QrErrorCorrection; 4] = [
        QrErrorCorrection::UltraHigh,
        QrErrorCorrection::High,
        QrErrorCorrection::Standard,
        QrErrorCorrection::HighDensity,
    ];

    /// Level letter on the wire
    pub fn token(self) -> &'static str {
        match self {
            QrErrorCorrection::UltraHigh => "H",
            QrErrorCorrection::High => "Q",
            QrErrorCorrection::Standard => "M",
            QrErrorCorrection::HighDensity => "L",
        }
    }
}

/// QR Code data input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrInputMode {
    /// A: printer picks the character mode
    Automatic,
    /// M: character mode given explicitly
    #[default]
    Manual,
}

impl QrInputMode {
    /// Mode letter on the wire
    pub fn token(self) -> &'static str {
        match self {
            QrInputMode::Automatic => "A",
            QrInputMode::Manual => "M",
        }
    }
}

/// QR Code character mode (manual input only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrCharacterMode {
    /// N: digits 0-9
    Numeric,
    /// A: digits, uppercase, space and `$%*+-./:`
    #[default]
    Alphanumeric,
    /// B: 8-bit byte data
    Byte,
    /// K: Kanji
    Kanji,
}

impl QrCharacterMode {
    /// Every character mode
    pub const ALL: [QrCharacterMode; 4] = [
        QrCharacterMode::Numeric,
        QrCharacterMode::Alphanumeric,
        QrCharacterMode::Byte,
        QrCharacterMode::Kanji,
    ];

    /// Mode letter on the wire
    pub fn token(self) -> &'static str {
        match self {
            QrCharacterMode::Numeric => "N",
            QrCharacterMode::Alphanumeric => "A",
            QrCharacterMode::Byte => "B",
            QrCharacterMode::Kanji => "K",
        }
    }
}

macro_rules! display_token {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.token())
                }
            }
        )*
    };
}

display_token!(QrModel, QrErrorCorrection, QrInputMode, QrCharacterMode);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_tokens() {
        assert_eq!(QrModel::Model1.token(), "1");
        assert_eq!(QrModel::Model2.token(), "2");
        assert_eq!(QrModel::default(), QrModel::Model2);
    }

    #[test]
    fn test_error_correction_tokens() {
        let tokens: Vec<&str> = QrErrorCorrection::ALL.iter().map(|e| e.token()).collect();
        assert_eq!(tokens, vec!["H", "Q", "M", "L"]);
        assert_eq!(QrErrorCorrection::default().token(), "M");
    }

    #[test]
    fn test_input_mode_tokens() {
        assert_eq!(QrInputMode::Automatic.token(), "A");
        assert_eq!(QrInputMode::Manual.token(), "M");
    }

    #[test]
    fn test_character_mode_tokens() {
        let tokens: Vec<&str> = QrCharacterMode::ALL.iter().map(|c| c.token()).collect();
        assert_eq!(tokens, vec!["N", "A", "B", "K"]);
    }

    #[test]
    fn test_display_matches_token() {
        assert_eq!(QrErrorCorrection::High.to_string(), "Q");
        assert_eq!(QrCharacterMode::Kanji.to_string(), "K");
        assert_eq!(QrInputMode::Manual.to_string(), "M");
        assert_eq!(QrModel::Model1.to_string(), "1");
    }
}
