//! # ZPL Protocol Implementation
//!
//! This module provides the command builders and wire tokens of ZPL II,
//! the command language of Zebra label printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Mnemonics and the command/line formatting primitives
//! - [`tokens`]: Rotation, print mode and line color tokens
//! - [`font`]: Resident fonts and the font-size table
//! - [`qr`]: QR Code parameters
//!
//! ## Usage Example
//!
//! ```
//! use zpl_label::protocol::commands::{self, command_line};
//! use zpl_label::protocol::tokens::PrintMode;
//!
//! let mut zpl = String::new();
//! zpl.push_str(&commands::start_format());
//! zpl.push_str(&PrintMode::TearOff.zpl());
//! zpl.push_str(&command_line(commands::PRINT_WIDTH, &[&406]));
//! zpl.push_str(&commands::end_format());
//!
//! assert_eq!(zpl, "^XA\n^MMT\n^PW406\n^XZ\n");
//! ```
//!
//! ## Protocol Reference
//!
//! Based on the "ZPL II Programming Guide" by Zebra Technologies.

pub mod commands;
pub mod font;
pub mod qr;
pub mod tokens;
