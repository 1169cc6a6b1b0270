//! # Shared Wire Tokens
//!
//! Closed sets of parameter values used by several commands. Each enum maps
//! a semantic value to its exact wire token through `token()`.
//!
//! | Enum | Command | Tokens |
//! |------|---------|--------|
//! | [`Rotation`] | `^A`, `^BQ` | `N` `R` `I` `B` |
//! | [`PrintMode`] | `^MM` | `T` `P` `R` `A` `C` `D` `K` |
//! | [`LineColor`] | `^GB` | `B` `W` |

use std::fmt;

use serde::{Deserialize, Serialize};

use super::commands::{PRINT_MODE, command_line};

/// Field orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// N: normal
    #[default]
    Normal,
    /// R: rotated 90 degrees clockwise
    Rotated,
    /// I: inverted 180 degrees
    Inverted,
    /// B: read from bottom up, 270 degrees
    BottomUp,
}

impl Rotation {
    /// Every rotation
    pub const ALL: [Rotation; 4] = [
        Rotation::Normal,
        Rotation::Rotated,
        Rotation::Inverted,
        Rotation::BottomUp,
    ];

    /// Orientation letter on the wire
    pub fn token(self) -> &'static str {
        match self {
            Rotation::Normal => "N",
            Rotation::Rotated => "R",
            Rotation::Inverted => "I",
            Rotation::BottomUp => "B",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// # Print Mode (^MM)
///
/// What the printer does with the media once a label is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintMode {
    /// T: stop so the label can be torn off
    #[default]
    TearOff,
    /// P: peel the label off the liner
    PeelOff,
    /// R: rewind media onto the take-up spindle
    Rewind,
    /// A: hand off to an applicator
    Applicator,
    /// C: cut after each label
    Cutter,
    /// D: delayed cut
    DelayedCut,
    /// K: kiosk presentation
    Kiosk,
}

impl PrintMode {
    /// Every print mode
    pub const ALL: [PrintMode; 7] = [
        PrintMode::TearOff,
        PrintMode::PeelOff,
        PrintMode::Rewind,
        PrintMode::Applicator,
        PrintMode::Cutter,
        PrintMode::DelayedCut,
        PrintMode::Kiosk,
    ];

    /// Mode letter on the wire
    pub fn token(self) -> &'static str {
        match self {
            PrintMode::TearOff => "T",
            PrintMode::PeelOff => "P",
            PrintMode::Rewind => "R",
            PrintMode::Applicator => "A",
            PrintMode::Cutter => "C",
            PrintMode::DelayedCut => "D",
            PrintMode::Kiosk => "K",
        }
    }

    /// The full `^MM` line, e.g. `^MMT\n`
    pub fn zpl(self) -> String {
        command_line(PRINT_MODE, &[&self.token()])
    }
}

/// Line color for graphic fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineColor {
    /// B
    #[default]
    Black,
    /// W
    White,
}

impl LineColor {
    /// Color letter on the wire
    pub fn token(self) -> &'static str {
        match self {
            LineColor::Black => "B",
            LineColor::White => "W",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_tokens() {
        let tokens: Vec<&str> = Rotation::ALL.iter().map(|r| r.token()).collect();
        assert_eq!(tokens, vec!["N", "R", "I", "B"]);
        assert_eq!(Rotation::default(), Rotation::Normal);
    }

    #[test]
    fn test_print_mode_tokens() {
        let tokens: Vec<&str> = PrintMode::ALL.iter().map(|m| m.token()).collect();
        assert_eq!(tokens, vec!["T", "P", "R", "A", "C", "D", "K"]);
    }

    #[test]
    fn test_print_mode_lines() {
        assert_eq!(PrintMode::default().zpl(), "^MMT\n");
        assert_eq!(PrintMode::Cutter.zpl(), "^MMC\n");
        assert_eq!(PrintMode::Rewind.zpl(), "^MMR\n");
    }

    #[test]
    fn test_line_color_tokens() {
        assert_eq!(LineColor::Black.token(), "B");
        assert_eq!(LineColor::White.token(), "W");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&PrintMode::TearOff).unwrap(),
            "\"tear_off\""
        );
        assert_eq!(
            serde_json::from_str::<Rotation>("\"bottom_up\"").unwrap(),
            Rotation::BottomUp
        );
    }
}
