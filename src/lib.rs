//! # zpl-label - ZPL Label Encoder
//!
//! zpl-label is a Rust library for describing labels in memory and encoding
//! them as ZPL II, the command language of Zebra thermal label printers. It
//! provides:
//!
//! - **Label model**: a fixed-size canvas with positioned elements
//! - **Encoder**: byte-exact ZPL generation, pure and repeatable
//! - **Unit conversion**: millimeters, points and pixels to printer dots
//! - **Preview**: approximate grayscale rendering for layout checks
//! - **Transport**: writing the result to a device or any byte sink
//!
//! ## Quick Start
//!
//! ```
//! use zpl_label::{
//!     elements::{CustomCommand, QrCode, Text},
//!     label::Label,
//!     printer::{Density, PrinterConfig},
//!     protocol::font::Font,
//! };
//!
//! let config = PrinterConfig::new(Density::Dpi203).with_default_font(Font::Zero, 11);
//!
//! let mut label = Label::with_config(config).with_size_mm(50.0, 25.0);
//! label
//!     .add_element(Text::new("SHIP TO").at(20, 40))
//!     .add_element(CustomCommand::new("FO", 250, 20, 0))
//!     .add_element(QrCode::new("PO-1234").automatic().magnification("4"));
//!
//! let zpl = label.encode();
//! assert!(zpl.starts_with("^XA\n^MMT\n^PW400\n^LL200\n^CF0,31\n"));
//! assert!(zpl.ends_with("^XZ\n"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`label`] | Label composer |
//! | [`elements`] | Placeable elements |
//! | [`protocol`] | ZPL command builders and wire tokens |
//! | [`printer`] | Density profiles and printer configuration |
//! | [`units`] | Unit conversion |
//! | [`preview`] | Raster preview |
//! | [`transport`] | Byte-sink output |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Any printer that speaks ZPL II at 152, 203, 300 or 600 dpi.

pub mod elements;
pub mod error;
pub mod label;
pub mod preview;
pub mod printer;
pub mod protocol;
pub mod transport;
pub mod units;

// Re-exports for convenience
pub use elements::{Element, LabelElement, Position};
pub use error::LabelError;
pub use label::Label;
pub use printer::{Density, PrinterConfig};
