//! # Resident Fonts
//!
//! ZPL printers ship with a fixed set of resident fonts, each named by a
//! single character. Font `0` is the scalable CG Triumvirate Bold Condensed;
//! the lettered fonts are bitmaps that the printer magnifies.
//!
//! ## Font Sizes
//!
//! Font sizes are requested in nominal points (like a word processor) and
//! converted to dots through a fixed preset table per density. Sizes are
//! discrete presets, not a continuous scale: a size that is not in the table
//! snaps to the nearest preset, with ties going to the smaller one.
//!
//! | Nominal | 152 dpi | 203 dpi | 300 dpi | 600 dpi |
//! |---------|---------|---------|---------|---------|
//! | 8 | 17 | 23 | 33 | 68 |
//! | 11 | 23 | 31 | 46 | 93 |
//! | 14 | 30 | 40 | 58 | 119 |
//! | 24 | 51 | 68 | 100 | 203 |
//! | 72 | 152 | 203 | 300 | 610 |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::printer::Density;

/// A resident printer font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    /// Font 0: scalable CG Triumvirate Bold Condensed
    #[default]
    Zero,
    /// Font A: 9x5 bitmap
    A,
    /// Font B: 11x7 bitmap, uppercase only
    B,
    /// Font C: 18x10 bitmap
    C,
    /// Font D: 18x10 bitmap
    D,
    /// Font E: 28x15 OCR-B
    E,
    /// Font F: 26x13 bitmap
    F,
    /// Font G: 60x40 bitmap
    G,
    /// Font H: 21x13 OCR-A
    H,
    /// Font P: 20x18 scalable
    P,
    /// Font Q: 28x24 scalable
    Q,
    /// Font R: 35x31 scalable
    R,
    /// Font S: 40x35 scalable
    S,
    /// Font T: 51x46 scalable
    T,
    /// Font U: 64x59 scalable
    U,
    /// Font V: 80x74 scalable
    V,
}

impl Font {
    /// Every resident font
    pub const ALL: [Font; 16] = [
        Font::Zero,
        Font::A,
        Font::B,
        Font::C,
        Font::D,
        Font::E,
        Font::F,
        Font::G,
        Font::H,
        Font::P,
        Font::Q,
        Font::R,
        Font::S,
        Font::T,
        Font::U,
        Font::V,
    ];

    /// Single-character font name on the wire
    pub fn token(self) -> &'static str {
        match self {
            Font::Zero => "0",
            Font::A => "A",
            Font::B => "B",
            Font::C => "C",
            Font::D => "D",
            Font::E => "E",
            Font::F => "F",
            Font::G => "G",
            Font::H => "H",
            Font::P => "P",
            Font::Q => "Q",
            Font::R => "R",
            Font::S => "S",
            Font::T => "T",
            Font::U => "U",
            Font::V => "V",
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Nominal size presets and their height in dots for
/// 152, 203, 300 and 600 dpi.
const SIZE_PRESETS: [(u32, [i32; 4]); 18] = [
    (6, [13, 17, 25, 51]),
    (7, [15, 20, 29, 59]),
    (8, [17, 23, 33, 68]),
    (9, [19, 25, 37, 76]),
    (10, [21, 28, 42, 85]),
    (11, [23, 31, 46, 93]),
    (12, [25, 34, 50, 102]),
    (13, [28, 37, 54, 110]),
    (14, [30, 40, 58, 119]),
    (16, [34, 45, 67, 135]),
    (18, [38, 51, 75, 152]),
    (20, [42, 56, 83, 169]),
    (24, [51, 68, 100, 203]),
    (28, [59, 79, 117, 237]),
    (32, [68, 90, 133, 271]),
    (36, [76, 102, 150, 305]),
    (48, [102, 135, 200, 406]),
    (72, [152, 203, 300, 610]),
];

/// Convert a nominal font size to a character height in dots.
///
/// ## Example
///
/// ```
/// use zpl_label::printer::Density;
/// use zpl_label::protocol::font::size_in_dots;
///
/// assert_eq!(size_in_dots(11, Density::Dpi203), 31);
/// // 15 is not a preset: ties snap down to 14
/// assert_eq!(size_in_dots(15, Density::Dpi203), 40);
/// ```
pub fn size_in_dots(nominal: u32, density: Density) -> i32 {
    let column = density.index();
    let mut best = &SIZE_PRESETS[0];

    for preset in SIZE_PRESETS.iter() {
        // Strictly closer wins; presets are ascending so ties keep the smaller
        if preset.0.abs_diff(nominal) < best.0.abs_diff(nominal) {
            best = preset;
        }
    }

    best.1[column]
}
