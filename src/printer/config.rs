//! # Printer Configuration
//!
//! This module defines printer density profiles and the per-label printer
//! configuration every element is encoded against.
//!
//! ## Density Profiles
//!
//! | Profile | Resolution | Dots per mm |
//! |---------|------------|-------------|
//! | Dpi152 | 152 DPI | 6 |
//! | Dpi203 | 203 DPI | 8 |
//! | Dpi300 | 300 DPI | 11.8 |
//! | Dpi600 | 600 DPI | 24 |
//!
//! ## Usage
//!
//! ```
//! use zpl_label::printer::{Density, PrinterConfig};
//! use zpl_label::protocol::font::Font;
//!
//! let config = PrinterConfig::new(Density::Dpi203)
//!     .with_default_font(Font::Zero, 11);
//!
//! assert_eq!(config.resolve_default_font(), Some((Font::Zero, 31)));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;
use crate::protocol::font::{Font, size_in_dots};

/// # Density Profile
///
/// The print head resolution class of a printer. Selected once per
/// configuration; all dot math goes through [`Density::dots_per_mm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    /// 6 dots/mm, 152 dots/inch
    Dpi152,
    /// 8 dots/mm, 203 dots/inch
    #[default]
    Dpi203,
    /// 11.8 dots/mm, 300 dots/inch
    Dpi300,
    /// 24 dots/mm, 608 dots/inch
    Dpi600,
}

impl Density {
    /// Every supported profile, lowest resolution first
    pub const ALL: [Density; 4] = [
        Density::Dpi152,
        Density::Dpi203,
        Density::Dpi300,
        Density::Dpi600,
    ];

    /// Dots per millimeter for this profile
    ///
    /// ## Example
    ///
    /// ```
    /// use zpl_label::printer::Density;
    ///
    /// assert_eq!(Density::Dpi203.dots_per_mm(), 8.0);
    /// ```
    #[inline]
    pub fn dots_per_mm(self) -> f32 {
        match self {
            Density::Dpi152 => 6.0,
            Density::Dpi203 => 8.0,
            Density::Dpi300 => 11.8,
            Density::Dpi600 => 24.0,
        }
    }

    /// Nominal resolution in dots per inch
    #[inline]
    pub fn dpi(self) -> u16 {
        match self {
            Density::Dpi152 => 152,
            Density::Dpi203 => 203,
            Density::Dpi300 => 300,
            Density::Dpi600 => 600,
        }
    }

    /// Column in the font-size table
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Density::Dpi152 => 0,
            Density::Dpi203 => 1,
            Density::Dpi300 => 2,
            Density::Dpi600 => 3,
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} dpi", self.dpi())
    }
}

impl FromStr for Density {
    type Err = LabelError;

    /// Parse `"203"`, `"203dpi"`, `"dpi203"` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let digits = lower
            .trim_start_matches("dpi")
            .trim_end_matches("dpi")
            .trim_matches('_')
            .trim();

        match digits {
            "152" => Ok(Density::Dpi152),
            "203" => Ok(Density::Dpi203),
            "300" => Ok(Density::Dpi300),
            "600" | "608" => Ok(Density::Dpi600),
            _ => Err(LabelError::InvalidDensity(format!(
                "'{}' (expected one of 152, 203, 300, 600)",
                s
            ))),
        }
    }
}

/// # Printer Configuration
///
/// Density plus an optional default font. Owned by a
/// [`Label`](crate::label::Label); elements borrow it while encoding.
///
/// The default font is only emitted when both the family and the size are
/// set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Print head density
    #[serde(default)]
    pub density: Density,

    /// Default font family (`^CF`)
    #[serde(default)]
    pub default_font: Option<Font>,

    /// Default font size, nominal points (not dots)
    #[serde(default)]
    pub default_font_size: Option<u32>,
}

impl PrinterConfig {
    /// Configuration for the given density with no default font
    pub fn new(density: Density) -> Self {
        Self {
            density,
            default_font: None,
            default_font_size: None,
        }
    }

    /// Set both halves of the default font.
    pub fn with_default_font(mut self, font: Font, size: u32) -> Self {
        self.default_font = Some(font);
        self.default_font_size = Some(size);
        self
    }

    /// Resolve the default font to `(font, height in dots)`.
    ///
    /// Returns `None` unless both family and size are set.
    pub fn resolve_default_font(&self) -> Option<(Font, i32)> {
        match (self.default_font, self.default_font_size) {
            (Some(font), Some(size)) => Some((font, size_in_dots(size, self.density))),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
