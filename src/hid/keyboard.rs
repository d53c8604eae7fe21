//! Boot keyboard reports as the keypad sends them.
//!
//! ```text
//! [0]    modifier bitfield, left at 0x00
//! [1]    reserved
//! [2..8] key array; modifiers ride here as usages 0xE0-0xE7
//! ```
//!
//! The host answers with a one-byte LED output report.

use crate::resolver::KeycodeSlot;

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// LED output report bit for Caps Lock.
pub const LED_CAPS_LOCK: u8 = 1 << 1;

/// One 8-byte input report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifier: u8,
    pub reserved: u8,
    pub keycodes: [u8; 6],
}

impl KeyboardReport {
    /// All keys up.
    pub const fn released() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [0; 6],
        }
    }

    /// Report asserting every key of a button's slot.
    pub fn held(slot: &KeycodeSlot) -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: slot.codes(),
        }
    }

    /// Wire bytes for the interrupt IN endpoint.
    pub fn to_bytes(&self) -> [u8; KEYBOARD_REPORT_SIZE] {
        let mut out = [0u8; KEYBOARD_REPORT_SIZE];
        out[0] = self.modifier;
        out[1] = self.reserved;
        out[2..].copy_from_slice(&self.keycodes);
        out
    }

    /// `true` for the all-zero release report.
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes == [0; 6]
    }
}

/// Extract the Caps Lock state from an LED output report.
///
/// Returns `None` for an empty report.
pub fn caps_lock_from_output(data: &[u8]) -> Option<bool> {
    data.first().map(|leds| leds & LED_CAPS_LOCK != 0)
}

/// Boot-compatible keyboard descriptor: modifier bits, a reserved byte,
/// five LED outputs and a six-entry key array.
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    // modifiers
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    // reserved
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x01, //   Input (Constant) - padding
    // LEDs
    0x05, 0x08, //   Usage Page (LEDs)
    0x19, 0x01, //   Usage Minimum (Num Lock)
    0x29, 0x05, //   Usage Maximum (Kana)
    0x95, 0x05, //   Report Count (5)
    0x75, 0x01, //   Report Size (1)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x03, //   Report Size (3)
    0x91, 0x01, //   Output (Constant) - padding
    // key array
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0xFF, //   Usage Maximum (255)
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x95, 0x06, //   Report Count (6)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x00, //   Input (Data, Array)
    0xC0, // End Collection
];
