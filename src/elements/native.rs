//! # Native ZPL Element
//!
//! Escape hatch for commands the element set does not model.

use serde::{Deserialize, Serialize};

use super::{LabelElement, Position};
use crate::printer::PrinterConfig;

/// Raw ZPL written to the label unchanged.
///
/// The caller owns any terminators (`^FS`, line breaks). The position is
/// only used by previews.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Native {
    /// Preview placement
    #[serde(flatten)]
    pub position: Position,
    /// ZPL text
    pub zpl: String,
}

impl Native {
    /// Wrap raw ZPL
    pub fn new(zpl: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            zpl: zpl.into(),
        }
    }
}

impl LabelElement for Native {
    fn position(&self) -> &Position {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    fn encode(&self, _config: &PrinterConfig) -> String {
        self.zpl.clone()
    }
}
