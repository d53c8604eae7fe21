//! USB subsystem - the keyboard HID device and the link state it exposes
//! to the dispatch loop.

pub mod hid_device;
pub mod link;
