//! HID report types for the keypad's single keyboard interface.

pub mod keyboard;

#[cfg(test)]
mod tests;

pub use keyboard::KeyboardReport;
