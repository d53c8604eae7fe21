//! Integration tests for macropad host-testable logic.

use macropad::config::BUTTON_LINES;
use macropad::hid::KeyboardReport;
use macropad::storage_logic::config_line;
use macropad::{HidTransport, Keypad, LineId, LineReader, ReportState};

struct Board {
    held: Vec<LineId>,
}

impl LineReader for Board {
    fn is_pressed(&mut self, line: LineId) -> bool {
        self.held.contains(&line)
    }
}

#[derive(Default)]
struct Host {
    reports: Vec<KeyboardReport>,
}

impl HidTransport for Host {
    fn is_ready(&self) -> bool {
        true
    }

    fn is_suspended(&self) -> bool {
        false
    }

    fn send_report(&mut self, report: &KeyboardReport) -> bool {
        self.reports.push(*report);
        true
    }

    fn request_remote_wakeup(&mut self) {}
}

#[test]
fn config_file_to_reports() {
    // What a user saves on the SD card, Windows line ending included.
    let file = b"CTRL+c CTRL+v CTRL+SHIFT+ESC\r\n# ignored second line\n";
    let line = config_line(file);
    let (mut keypad, report) = Keypad::from_config(&line, &BUTTON_LINES).expect("unique lines");

    assert!(report.is_clean());
    assert_eq!(keypad.registry().len(), 3);

    let mut board = Board { held: vec![27] };
    let mut host = Host::default();
    keypad.poll(&mut board, &mut host);
    board.held.clear();
    keypad.poll(&mut board, &mut host);

    assert_eq!(host.reports.len(), 2);
    assert_eq!(host.reports[0].keycodes, [0xE0, 0x19, 0, 0, 0, 0]);
    assert!(host.reports[1].is_empty());
    assert_eq!(keypad.state(1), Some(ReportState::Released));
}

#[test]
fn sloppy_config_still_boots() {
    let file = b"a++b  VOLUMEKNOB+a+b+c+d+e+f+g \n";
    let line = config_line(file);
    let (keypad, report) = Keypad::from_config(&line, &BUTTON_LINES).expect("unique lines");

    // "a++b", "", "VOLUMEKNOB+...", "" -> four buttons.
    assert_eq!(keypad.registry().len(), 4);
    assert_eq!(report.symbols.empty, 3);
    assert_eq!(report.symbols.unresolved, 1);
    assert_eq!(report.symbols.dropped, 2);
    assert!(!report.is_clean());
}

#[test]
fn nul_padded_file_keeps_every_group() {
    // UTF-16LE as saved by some editors: every ASCII byte followed by NUL.
    let file = b"a\0 \0b\0+\0c\0\r\0\n\0";
    let line = config_line(file);
    let (mut keypad, report) = Keypad::from_config(&line, &BUTTON_LINES).expect("unique lines");

    assert_eq!(keypad.registry().len(), 2);
    assert!(report.is_clean());

    let mut board = Board { held: vec![27] };
    let mut host = Host::default();
    keypad.poll(&mut board, &mut host);

    assert_eq!(host.reports.len(), 1);
    assert_eq!(host.reports[0].keycodes, [0x05, 0x06, 0, 0, 0, 0]);
}
