//! # zpl-label CLI
//!
//! Command-line interface for encoding, previewing and printing labels
//! described as JSON documents.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a label to ZPL on stdout
//! zpl-label encode shipping.json
//!
//! # Encode for a 300 dpi printer, writing to a file
//! zpl-label encode --density 300 -o shipping.zpl shipping.json
//!
//! # Render a layout preview
//! zpl-label preview --png shipping.png shipping.json
//!
//! # Send to a USB printer
//! zpl-label print --device /dev/usb/lp0 shipping.json
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `-v`) to see what the encoder does.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{LevelFilter, info};

use zpl_label::{
    Density, Label, LabelError, preview,
    transport::{DEFAULT_DEVICE, DeviceTransport},
};

/// zpl-label - ZPL label encoder for Zebra printers
#[derive(Parser, Debug)]
#[command(name = "zpl-label")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log encoder activity (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a JSON label document to ZPL
    Encode {
        /// JSON label document
        file: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Override the document's printer density (152, 203, 300, 600)
        #[arg(long)]
        density: Option<Density>,
    },

    /// Render a layout preview PNG
    Preview {
        /// JSON label document
        file: PathBuf,

        /// Output PNG file
        #[arg(long, value_name = "FILE")]
        png: PathBuf,
    },

    /// Encode a label and send it to a printer device
    Print {
        /// JSON label document
        file: PathBuf,

        /// Printer device path
        #[arg(long, default_value = DEFAULT_DEVICE)]
        device: PathBuf,

        /// Override the document's printer density (152, 203, 300, 600)
        #[arg(long)]
        density: Option<Density>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), LabelError> {
    match command {
        Commands::Encode {
            file,
            output,
            density,
        } => {
            let label = load_label(&file, density)?;
            let zpl = label.encode();

            match output {
                Some(path) => {
                    fs::write(&path, &zpl)?;
                    info!("wrote {} bytes to {}", zpl.len(), path.display());
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(zpl.as_bytes())?;
                    stdout.flush()?;
                }
            }
        }
        Commands::Preview { file, png } => {
            let label = load_label(&file, None)?;
            preview::save_png(&label, &png)?;
            println!("Saved preview to {}", png.display());
        }
        Commands::Print {
            file,
            device,
            density,
        } => {
            let label = load_label(&file, density)?;
            let mut transport = DeviceTransport::open(&device)?;
            transport.send(&label)?;
            println!("Sent {} to {}", file.display(), device.display());
        }
    }

    Ok(())
}

/// Read a JSON label document, optionally forcing its density.
fn load_label(path: &Path, density: Option<Density>) -> Result<Label, LabelError> {
    let json = fs::read_to_string(path)?;
    let mut label = Label::from_json(&json)?;

    if let Some(density) = density {
        label.config_mut().density = density;
    }

    info!(
        "loaded {} ({} elements, {})",
        path.display(),
        label.elements().len(),
        label.config().density
    );
    Ok(label)
}
