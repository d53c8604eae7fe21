//! Unit tests for HID report building and serialization.
//!
//! These tests run on the host (not embedded) and verify the pure
//! logic of report construction and the wire layout.

use super::keyboard::{
    caps_lock_from_output, KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE,
};
use crate::resolver::resolve_symbols;

// ═══════════════════════════════════════════════════════════════════════════
// Keyboard Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_released() {
    let report = KeyboardReport::released();
    assert!(report.is_empty());
    assert_eq!(report.modifier, 0);
    assert_eq!(report.keycodes, [0; 6]);
    assert_eq!(report, KeyboardReport::default());
}

#[test]
fn keyboard_report_held_carries_slot() {
    let (slot, _) = resolve_symbols(["CTRL", "ALT", "DELETE"]);
    let report = KeyboardReport::held(&slot);

    // Modifiers travel in the key array; the modifier byte stays zero.
    assert_eq!(report.modifier, 0);
    assert_eq!(report.keycodes, [0xE0, 0xE2, 0x4C, 0x00, 0x00, 0x00]);
    assert!(!report.is_empty());
}

#[test]
fn keyboard_report_held_for_unknown_only_is_empty() {
    let (slot, _) = resolve_symbols(["nope"]);
    assert!(KeyboardReport::held(&slot).is_empty());
}

#[test]
fn keyboard_report_wire_layout() {
    let (slot, _) = resolve_symbols(["a", "b", "c"]);
    let bytes = KeyboardReport::held(&slot).to_bytes();

    assert_eq!(bytes.len(), KEYBOARD_REPORT_SIZE);
    assert_eq!(bytes, [0x00, 0x00, 0x04, 0x05, 0x06, 0x00, 0x00, 0x00]);
}

#[test]
fn released_report_is_all_zero_on_the_wire() {
    assert_eq!(KeyboardReport::released().to_bytes(), [0u8; KEYBOARD_REPORT_SIZE]);
}

// ═══════════════════════════════════════════════════════════════════════════
// LED Output Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn caps_lock_bit_is_decoded() {
    assert_eq!(caps_lock_from_output(&[0x02]), Some(true));
    assert_eq!(caps_lock_from_output(&[0x03]), Some(true));
    assert_eq!(caps_lock_from_output(&[0x01]), Some(false));
    assert_eq!(caps_lock_from_output(&[0x00, 0xFF]), Some(false));
    assert_eq!(caps_lock_from_output(&[]), None);
}

// ═══════════════════════════════════════════════════════════════════════════
// Descriptor Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn descriptor_is_a_single_keyboard_collection() {
    assert_eq!(&KEYBOARD_REPORT_DESCRIPTOR[..6], &[0x05, 0x01, 0x09, 0x06, 0xA1, 0x01]);
    assert_eq!(KEYBOARD_REPORT_DESCRIPTOR.last(), Some(&0xC0));
}
