//! # Custom Positioned Command
//!
//! A generic command taking three numeric parameters, such as `^FOx,y,z`
//! (field origin with justification) or `^BYw,r,h` (bar code defaults).

use serde::{Deserialize, Serialize};

use super::{LabelElement, Position};
use crate::printer::PrinterConfig;
use crate::protocol::commands::command;

/// A `^<mnemonic>x,y,z` command.
///
/// The position is rolled into the parameter list rather than emitted as a
/// separate field origin. A missing parameter is written as an empty token
/// so the printer falls back to its default for that slot.
///
/// No line terminator is added: the fragment is meant to be followed
/// directly by the field it configures.
///
/// ## Example
///
/// ```
/// use zpl_label::elements::{CustomCommand, LabelElement};
/// use zpl_label::printer::PrinterConfig;
///
/// let origin = CustomCommand::new("FO", 100, 40, 0);
/// assert_eq!(origin.encode(&PrinterConfig::default()), "^FO100,40,0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomCommand {
    /// Two-letter mnemonic without the caret
    pub mnemonic: String,
    /// First and second parameters
    #[serde(flatten)]
    pub position: Position,
    /// Third parameter
    #[serde(default)]
    pub z: Option<i32>,
}

impl CustomCommand {
    /// Command with all three parameters set
    pub fn new(mnemonic: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            position: Position::new(x, y),
            z: Some(z),
        }
    }

    /// Command with only a mnemonic; parameters are left empty
    pub fn bare(mnemonic: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            ..Default::default()
        }
    }
}

fn param(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl LabelElement for CustomCommand {
    fn position(&self) -> &Position {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    fn encode(&self, _config: &PrinterConfig) -> String {
        command(
            &self.mnemonic,
            &[
                &param(self.position.x),
                &param(self.position.y),
                &param(self.z),
            ],
        )
    }
}
