//! # Printer Module
//!
//! This module provides printer density profiles and the configuration
//! shared by every element of a label.
//!
//! ## Modules
//!
//! - [`config`]: Density profiles and default font settings

pub mod config;

pub use config::{Density, PrinterConfig};
