//! Application-wide constants and compile-time configuration.
//!
//! All hardware line assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "macropad";
pub const USB_PRODUCT: &str = "SD Macro Keypad";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID endpoint polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 10;

// Dispatch

/// Interval between two button polls (ms). Also the only debounce.
pub const POLL_INTERVAL_MS: u64 = 10;

/// Maximum number of simultaneous non-modifier keys in a boot report.
pub const MAX_KEYS_PER_BUTTON: usize = 6;

/// Upper bound on configured buttons, independent of the board wiring.
pub const MAX_BUTTONS: usize = 16;

// GPIO line assignments (Raspberry Pi Pico)
//
// The Nth configuration group binds to the Nth entry.  The actual
// `embassy_rp::peripherals::PIN_*` types are selected in `main.rs`;
// keep both lists in the same order.
//
//   Button 0 → GP26      SD SCK  → GP18
//   Button 1 → GP27      SD MOSI → GP19
//   Button 2 → GP28      SD MISO → GP16
//   Button 3 → GP22      SD CS   → GP17
//   Button 4 → GP21      LED     → GP25
//   Button 5 → GP20

/// Hardware line identifiers available for buttons, in binding order.
pub const BUTTON_LINES: [u8; 6] = [26, 27, 28, 22, 21, 20];

// Configuration file

/// Size of the configuration line buffer, including the terminator slot.
pub const CONFIG_BUF_LEN: usize = 100;

/// Name of the configuration file in the root of FAT volume 0.
pub const CONFIG_FILE_NAME: &str = "KEYPAD.TXT";

/// SPI clock used while talking to the SD card (Hz).
pub const SD_SPI_FREQUENCY_HZ: u32 = 400_000;

// Status LED

/// Blink period while the host has not configured the device (ms).
pub const BLINK_NOT_MOUNTED_MS: u64 = 250;

/// Blink period while mounted and running (ms).
pub const BLINK_MOUNTED_MS: u64 = 1000;

/// Blink period while the bus is suspended (ms).
pub const BLINK_SUSPENDED_MS: u64 = 2500;
