//! # Printer Transport
//!
//! Writes encoded labels to a byte sink. This is deliberately thin: it does
//! not queue, retry, or talk to the network. Anything that accepts raw bytes
//! works, such as a USB printer device node, a serial port, a file, or a
//! socket the caller already opened.
//!
//! ## Device Setup (Linux)
//!
//! USB Zebra printers show up as a line printer device once the `usblp`
//! module is loaded:
//!
//! ```bash
//! $ ls /dev/usb/
//! lp0
//! # Add yourself to the lp group to write without root
//! $ sudo usermod -aG lp $USER
//! ```

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::LabelError;
use crate::label::Label;

/// Default USB line printer device path
pub const DEFAULT_DEVICE: &str = "/dev/usb/lp0";

/// # Device Transport
///
/// An open device (or file) the printer listens on.
///
/// ## Example
///
/// ```no_run
/// use zpl_label::elements::Text;
/// use zpl_label::label::Label;
/// use zpl_label::transport::DeviceTransport;
///
/// let label = Label::new().with_size(406, 203).element(Text::new("Hello").at(20, 60));
///
/// let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
/// transport.send(&label)?;
/// # Ok::<(), zpl_label::error::LabelError>(())
/// ```
pub struct DeviceTransport {
    file: File,
}

impl DeviceTransport {
    /// Open a device for writing.
    ///
    /// Regular files are created if missing and appended to, so several
    /// labels can be captured into one file.
    ///
    /// ## Errors
    ///
    /// Returns [`LabelError::Transport`] if the path cannot be opened
    /// (missing device, permission denied).
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, LabelError> {
        let path = device.as_ref();

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| {
                LabelError::Transport(format!("Failed to open {}: {}", path.display(), e))
            })?;

        debug!("opened printer device {}", path.display());
        Ok(Self { file })
    }

    /// Encode a label and write it.
    pub fn send(&mut self, label: &Label) -> Result<(), LabelError> {
        send_to(&mut self.file, label)
    }

    /// Write raw bytes and flush.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), LabelError> {
        self.file.write_all(data)?;
        self.file.flush()?;
        Ok(())
    }
}

/// Encode a label and write it to any byte sink, then flush.
///
/// ```
/// use zpl_label::label::Label;
/// use zpl_label::transport::send_to;
///
/// let mut sink = Vec::new();
/// send_to(&mut sink, &Label::new())?;
/// assert_eq!(sink, b"^XA\n^MMT\n^XZ\n");
/// # Ok::<(), zpl_label::error::LabelError>(())
/// ```
pub fn send_to<W: Write>(writer: &mut W, label: &Label) -> Result<(), LabelError> {
    let zpl = label.encode();
    writer.write_all(zpl.as_bytes())?;
    writer.flush()?;
    debug!("sent {} bytes", zpl.len());
    Ok(())
}
