//! Host-testable library interface for macropad.
//!
//! Everything that decides *what* the keypad sends lives here: the
//! configuration grammar, the key symbol table, the keycode resolver, the
//! button registry and the per-button report state machine.  None of it
//! touches hardware, so the whole pipeline runs under `cargo test --lib`.
//!
//! Note: The embedded binary (main.rs, `#![no_std]` + `#![no_main]`) owns the
//! hardware adapters (USB, SD card, GPIO, LED) and drives this library.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod hid;
pub mod keymap;
pub mod keypad;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod status_logic;
pub mod storage_logic;

pub use dispatch::{HidTransport, LineReader, ReportState, TickSummary};
pub use keypad::Keypad;
pub use registry::{BuildReport, ButtonRegistry};
pub use resolver::{ButtonConfig, KeycodeSlot, LineId, Resolution};

// ═══════════════════════════════════════════════════════════════════════════
// Pipeline Tests - config text in, reports out
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::hid::KeyboardReport;
    use super::keymap::NO_KEY;
    use super::*;

    struct Lines(u32);

    impl LineReader for Lines {
        fn is_pressed(&mut self, line: LineId) -> bool {
            self.0 & (1u32 << line) != 0
        }
    }

    #[derive(Default)]
    struct Link {
        busy: bool,
        suspended: bool,
        sent: std::vec::Vec<[u8; 8]>,
        wakeups: usize,
    }

    impl HidTransport for Link {
        fn is_ready(&self) -> bool {
            !self.busy
        }

        fn is_suspended(&self) -> bool {
            self.suspended
        }

        fn send_report(&mut self, report: &KeyboardReport) -> bool {
            self.sent.push(report.to_bytes());
            true
        }

        fn request_remote_wakeup(&mut self) {
            self.wakeups += 1;
        }
    }

    #[test]
    fn unknown_symbol_degrades_to_no_key() {
        let (keypad, report) = Keypad::from_config(b"a+CTRL+ZZZ", &config::BUTTON_LINES).unwrap();
        let slot = keypad.registry().get(0).unwrap().slot;
        assert_eq!(slot.as_slice(), &[0x04, 0xE0, NO_KEY]);
        assert_eq!(report.symbols.unresolved, 1);
        assert_eq!(report.groups_rejected, 0);
    }

    #[test]
    fn ctrl_alt_delete_button_end_to_end() {
        let (mut keypad, report) =
            Keypad::from_config(b"a CTRL+ALT+DELETE", &config::BUTTON_LINES).unwrap();
        assert!(report.is_clean());

        let mut link = Link::default();
        let mut lines = Lines(1 << 27);
        keypad.poll(&mut lines, &mut link);
        keypad.poll(&mut lines, &mut link);
        lines.0 = 0;
        keypad.poll(&mut lines, &mut link);

        assert_eq!(
            link.sent,
            vec![
                [0x00, 0x00, 0xE0, 0xE2, 0x4C, 0x00, 0x00, 0x00],
                [0x00; 8],
            ]
        );
    }

    #[test]
    fn readiness_gap_sends_exactly_one_report_when_ready() {
        let (mut keypad, _) = Keypad::from_config(b"a", &config::BUTTON_LINES).unwrap();
        let mut link = Link {
            busy: true,
            ..Link::default()
        };
        let mut lines = Lines(1 << 26);

        for _ in 0..7 {
            keypad.poll(&mut lines, &mut link);
        }
        assert!(link.sent.is_empty());

        link.busy = false;
        keypad.poll(&mut lines, &mut link);
        keypad.poll(&mut lines, &mut link);
        assert_eq!(link.sent.len(), 1);
    }

    #[test]
    fn suspended_link_only_wakes() {
        let (mut keypad, _) = Keypad::from_config(b"a b", &config::BUTTON_LINES).unwrap();
        let mut link = Link {
            suspended: true,
            ..Link::default()
        };
        let mut lines = Lines((1 << 26) | (1 << 27));

        let summary = keypad.poll(&mut lines, &mut link);
        assert_eq!(summary.wakeups, 2);
        assert_eq!(link.wakeups, 2);
        assert!(link.sent.is_empty());
    }

    #[test]
    fn more_groups_than_lines() {
        let (keypad, report) =
            Keypad::from_config(b"a b c d e f g h", &config::BUTTON_LINES).unwrap();
        assert_eq!(keypad.registry().len(), config::BUTTON_LINES.len());
        assert_eq!(report.groups_rejected, 2);
    }

    #[test]
    fn board_line_list_is_unique() {
        let parsed = parser::parse(b"");
        assert!(ButtonRegistry::build(&parsed, &config::BUTTON_LINES).is_ok());
    }
}
