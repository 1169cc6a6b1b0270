//! # Golden Tests
//!
//! These tests ensure that label encoding produces byte-identical ZPL.
//!
//! ## Test Coverage
//!
//! - **Document tests** (`.json` -> `.zpl`): every JSON label document in
//!   `tests/golden` is encoded and compared with its `.zpl` twin.
//! - **API tests**: the same kind of labels built through the Rust API.
//!
//! ## Regenerating Golden Files
//!
//! To regenerate all golden files after an intentional wire change:
//! ```bash
//! UPDATE_GOLDEN=1 cargo test --test golden_tests
//! ```

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

use zpl_label::elements::{CustomCommand, GraphicBox, Native, QrCode, Text};
use zpl_label::protocol::font::Font;
use zpl_label::protocol::qr::{QrCharacterMode, QrErrorCorrection};
use zpl_label::protocol::tokens::PrintMode;
use zpl_label::{Density, Label, PrinterConfig, preview, transport};

/// Path to golden test directory
const GOLDEN_DIR: &str = "tests/golden";

/// Golden documents, by file stem
const DOCUMENTS: &[&str] = &["empty_203", "shipping", "qr_manual_300"];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn load(name: &str) -> Label {
    let path = Path::new(GOLDEN_DIR).join(format!("{}.json", name));
    let json = fs::read_to_string(&path).unwrap();
    Label::from_json(&json).unwrap()
}

fn check_golden(name: &str, actual: &str) {
    let path = Path::new(GOLDEN_DIR).join(format!("{}.zpl", name));

    if std::env::var_os("UPDATE_GOLDEN").is_some() {
        fs::write(&path, actual).unwrap();
        return;
    }

    let expected = fs::read_to_string(&path).unwrap();
    assert_eq!(expected, actual, "golden mismatch for {}", name);
}

// ============================================================================
// DOCUMENT TESTS
// ============================================================================

#[test]
fn golden_documents() {
    for name in DOCUMENTS {
        check_golden(name, &load(name).encode());
    }
}

#[test]
fn golden_documents_are_stable() {
    for name in DOCUMENTS {
        let label = load(name);
        assert_eq!(label.encode(), label.encode());
    }
}

#[test]
fn golden_documents_survive_json_round_trip() {
    for name in DOCUMENTS {
        let label = load(name);
        let back = Label::from_json(&label.to_json().unwrap()).unwrap();
        assert_eq!(back.encode(), label.encode());
    }
}

// ============================================================================
// API TESTS
// ============================================================================

#[test]
fn shipping_label_built_in_rust_matches_document() {
    let config = PrinterConfig::new(Density::Dpi203).with_default_font(Font::Zero, 11);
    let label = Label::with_config(config)
        .with_size(812, 406)
        .with_print_mode(PrintMode::Cutter)
        .element(GraphicBox::new(792, 386).at(10, 10).thickness(3))
        .element(Text::new("SHIP TO").at(30, 70).font(Font::Zero, 24))
        .element(Text::new("ACME Corp, 1 Main St").at(30, 120))
        .element(CustomCommand::new("FO", 560, 40, 0))
        .element(
            QrCode::new("PO-000123")
                .at(560, 40)
                .automatic()
                .magnification("5")
                .error_correction(QrErrorCorrection::High),
        )
        .element(GraphicBox::horizontal_line(500, 2).at(30, 150))
        .element(Native::new("^PQ2\n"));

    assert_eq!(label, load("shipping"));
    check_golden("shipping", &label.encode());
}

#[test]
fn minimal_label_layout() {
    let label = Label::new().with_size(203, 203);
    assert_eq!(label.encode(), "^XA\n^MMT\n^PW203\n^LL203\n^XZ\n");
}

#[test]
fn qr_automatic_field_data() {
    let label = Label::new().element(QrCode::new("HELLO").automatic());
    let zpl = label.encode();
    assert!(zpl.contains("^BQN,2,,M\n^FDMA,HELLO^FS\n"));
}

#[test]
fn qr_manual_field_data() {
    let label = Label::new().element(QrCode::new("HELLO").manual(QrCharacterMode::Alphanumeric));
    assert!(label.encode().contains("^FDMM,AHELLO^FS\n"));
}

#[test]
fn default_font_change_applies_to_earlier_elements() {
    let mut label = Label::new();
    label.add_element(Text::new("before").font(Font::A, 8));
    label.config_mut().density = Density::Dpi600;
    label.set_default_font(Font::Zero, 8);
    label.add_element(Text::new("after"));

    assert_eq!(
        label.encode(),
        "^XA\n^MMT\n^CF0,68\n^AAN,68,68^FDbefore^FS\n^FDafter^FS\n^XZ\n"
    );
}

#[test]
fn transport_writes_encoded_label() {
    let label = load("qr_manual_300");
    let mut sink = Vec::new();
    transport::send_to(&mut sink, &label).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), label.encode());
}

#[test]
fn preview_of_golden_documents() {
    // Sized documents preview, unsized ones report it
    assert!(preview::render(&load("shipping")).is_ok());
    assert!(preview::render(&load("empty_203")).is_ok());
    assert!(preview::render(&load("qr_manual_300")).is_err());
}
