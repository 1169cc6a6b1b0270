//! # ZPL Command Primitives
//!
//! This module implements the token syntax of ZPL II, the command language
//! of Zebra label printers.
//!
//! ## Command Structure
//!
//! Every format command is a caret, a two-letter mnemonic, and an optional
//! comma-separated parameter list:
//!
//! ```text
//! ^XA                 start format, no parameters
//! ^PW406              one parameter
//! ^BQN,2,,M           four parameters, the third left empty
//! ```
//!
//! An empty parameter is still a parameter: the printer substitutes its own
//! default, so `^BQN,2,,M` and `^BQN,2,M` mean different things.
//!
//! ## Line Termination
//!
//! The printer ignores line breaks, but structural commands (start/end
//! format, width, length, default font, print mode) are emitted on their own
//! line so generated programs stay readable and diffable.
//!
//! ## Field Data
//!
//! `^FD` payloads are forwarded verbatim. Reserved characters (`^`, `~`) are
//! NOT escaped, so a payload containing a caret will start a new command on
//! the printer.

use std::fmt::Display;

// ============================================================================
// COMMAND MNEMONICS
// ============================================================================

/// Format command prefix
pub const CARET: char = '^';

/// Line terminator for standalone commands
pub const NEWLINE: &str = "\n";

/// ^XA - Start Format
pub const START_FORMAT: &str = "XA";

/// ^XZ - End Format
pub const END_FORMAT: &str = "XZ";

/// ^FD - Field Data
pub const FIELD_DATA: &str = "FD";

/// ^FS - Field Separator
pub const FIELD_SEPARATOR: &str = "FS";

/// ^FO - Field Origin (upper-left corner of the field)
pub const FIELD_ORIGIN: &str = "FO";

/// ^FT - Field Typeset (baseline origin of the field)
pub const FIELD_TYPESET: &str = "FT";

/// ^BQ - QR Code bar code
pub const QR_CODE: &str = "BQ";

/// ^PW - Print Width
pub const PRINT_WIDTH: &str = "PW";

/// ^LL - Label Length
pub const LABEL_LENGTH: &str = "LL";

/// ^CF - Change Alphanumeric Default Font
pub const CHANGE_FONT: &str = "CF";

/// ^MM - Print Mode
pub const PRINT_MODE: &str = "MM";

/// ^GB - Graphic Box
pub const GRAPHIC_BOX: &str = "GB";

/// ^A - Scalable/Bitmapped Font (single letter; the font name follows directly)
pub const FONT: &str = "A";

// ============================================================================
// FORMATTING
// ============================================================================

/// # Format a Command
///
/// Renders `^<mnemonic><p1>,<p2>,...` with no terminator.
///
/// ## Example
///
/// ```
/// use zpl_label::protocol::commands::command;
///
/// assert_eq!(command("XA", &[]), "^XA");
/// assert_eq!(command("PW", &[&406]), "^PW406");
/// assert_eq!(command("BQ", &[&"N", &2, &"", &"M"]), "^BQN,2,,M");
/// ```
pub fn command(mnemonic: &str, params: &[&dyn Display]) -> String {
    let mut zpl = String::with_capacity(1 + mnemonic.len() + params.len() * 4);
    zpl.push(CARET);
    zpl.push_str(mnemonic);

    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            zpl.push(',');
        }
        zpl.push_str(&param.to_string());
    }

    zpl
}

/// # Format a Standalone Command Line
///
/// Same as [`command`], followed by a line break.
///
/// ## Example
///
/// ```
/// use zpl_label::protocol::commands::command_line;
///
/// assert_eq!(command_line("XZ", &[]), "^XZ\n");
/// assert_eq!(command_line("CF", &[&"0", &31]), "^CF0,31\n");
/// ```
pub fn command_line(mnemonic: &str, params: &[&dyn Display]) -> String {
    let mut zpl = command(mnemonic, params);
    zpl.push_str(NEWLINE);
    zpl
}

/// # Field Data (^FD)
///
/// Forwards the payload unchanged after the `^FD` mnemonic.
///
/// ## Example
///
/// ```
/// use zpl_label::protocol::commands::field_data;
///
/// assert_eq!(field_data("Hello, World"), "^FDHello, World");
/// ```
pub fn field_data(text: &str) -> String {
    let mut zpl = command(FIELD_DATA, &[]);
    zpl.push_str(text);
    zpl
}

/// Field separator on its own line: `^FS\n`
#[inline]
pub fn field_separator() -> String {
    command_line(FIELD_SEPARATOR, &[])
}

/// Start of label format: `^XA\n`
#[inline]
pub fn start_format() -> String {
    command_line(START_FORMAT, &[])
}

/// End of label format: `^XZ\n`
#[inline]
pub fn end_format() -> String {
    command_line(END_FORMAT, &[])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_without_params() {
        assert_eq!(command(START_FORMAT, &[]), "^XA");
        assert_eq!(command(FIELD_SEPARATOR, &[]), "^FS");
    }

    #[test]
    fn test_command_joins_params() {
        assert_eq!(command(FIELD_ORIGIN, &[&50, &60]), "^FO50,60");
        assert_eq!(command(FIELD_ORIGIN, &[&50, &60, &0]), "^FO50,60,0");
    }

    #[test]
    fn test_params_use_display() {
        assert_eq!(command(FIELD_ORIGIN, &[&-5, &1.5, &'Z']), "^FO-5,1.5,Z");
    }

    #[test]
    fn test_empty_param_keeps_its_slot() {
        assert_eq!(command(QR_CODE, &[&"N", &2, &"", &"M"]), "^BQN,2,,M");
        assert_eq!(command(FIELD_ORIGIN, &[&"", &"", &""]), "^FO,,");
    }

    #[test]
    fn test_command_line() {
        assert_eq!(command_line(PRINT_WIDTH, &[&203]), "^PW203\n");
        assert_eq!(command_line(LABEL_LENGTH, &[&812]), "^LL812\n");
    }

    #[test]
    fn test_structural_lines() {
        assert_eq!(start_format(), "^XA\n");
        assert_eq!(end_format(), "^XZ\n");
        assert_eq!(field_separator(), "^FS\n");
    }

    #[test]
    fn test_field_data_is_verbatim() {
        assert_eq!(field_data(""), "^FD");
        assert_eq!(field_data("A,B;C"), "^FDA,B;C");
        // Reserved characters pass through unescaped
        assert_eq!(field_data("50^ off ~"), "^FD50^ off ~");
    }
}
