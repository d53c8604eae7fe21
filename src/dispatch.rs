//! Report dispatch engine - per-button press/release state machine.
//!
//! Every poll tick each registered button is visited in registry order:
//!
//! | line     | link      | state    | action                        |
//! |----------|-----------|----------|-------------------------------|
//! | pressed  | suspended | any      | request remote wakeup         |
//! | released | suspended | any      | nothing (release after resume)|
//! | any      | busy      | any      | nothing, retried next tick    |
//! | pressed  | ready     | Released | send keys-held → Pressed      |
//! | released | ready     | Pressed  | send all-zero → Released      |
//! | (other)  | ready     | -        | nothing                       |
//!
//! Reports are edge-triggered: one press report and one release report
//! per physical transition, however long the button is held.  Nothing is
//! queued; a skipped tick re-reads the line fresh on the next one.

use crate::config::MAX_BUTTONS;
use crate::hid::KeyboardReport;
use crate::registry::ButtonRegistry;
use crate::resolver::LineId;
use heapless::Vec;

/// Outbound side of the USB link, as seen by the dispatcher.
///
/// All methods must return immediately.
pub trait HidTransport {
    /// `true` if a keyboard report can be accepted right now.
    fn is_ready(&self) -> bool;

    /// `true` while the host has suspended the bus.
    fn is_suspended(&self) -> bool;

    /// Hand a report to the link.  Returns `false` if it was not taken.
    fn send_report(&mut self, report: &KeyboardReport) -> bool;

    /// Ask the host to resume the bus.  Stateless and idempotent.
    fn request_remote_wakeup(&mut self);
}

/// Digital input lines, addressed by [`LineId`].
pub trait LineReader {
    /// `true` if the button on `line` is currently pressed.
    fn is_pressed(&mut self, line: LineId) -> bool;
}

/// Whether a keys-held report is outstanding for a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportState {
    /// No keys reported (or the release was already sent).
    #[default]
    Released,
    /// Keys-held report sent; a release is owed.
    Pressed,
}

/// Counters for one poll tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickSummary {
    /// Keys-held reports sent.
    pub presses: u8,
    /// All-zero reports sent.
    pub releases: u8,
    /// Remote wakeups requested.
    pub wakeups: u8,
    /// Buttons with a pending transition skipped because the link was busy.
    pub deferred: u8,
}

impl TickSummary {
    /// Total reports handed to the transport.
    pub fn reports(&self) -> u8 {
        self.presses + self.releases
    }
}

/// Per-button report state for a whole registry.
#[derive(Clone, Debug)]
pub struct DispatchEngine {
    states: Vec<ReportState, MAX_BUTTONS>,
}

impl DispatchEngine {
    /// One `Released` state per registered button.
    pub fn new(registry: &ButtonRegistry) -> Self {
        let mut states = Vec::new();
        for _ in 0..registry.len() {
            // Cannot overflow: the registry holds at most MAX_BUTTONS.
            let _ = states.push(ReportState::Released);
        }
        Self { states }
    }

    /// State of the button at `index`.
    pub fn state(&self, index: usize) -> Option<ReportState> {
        self.states.get(index).copied()
    }

    /// Run one poll tick over every registered button.
    pub fn poll<L, T>(
        &mut self,
        registry: &ButtonRegistry,
        lines: &mut L,
        transport: &mut T,
    ) -> TickSummary
    where
        L: LineReader,
        T: HidTransport,
    {
        let mut summary = TickSummary::default();

        for (button, state) in registry.iter().zip(self.states.iter_mut()) {
            let pressed = lines.is_pressed(button.line);

            if transport.is_suspended() {
                if pressed {
                    transport.request_remote_wakeup();
                    summary.wakeups += 1;
                }
                continue;
            }

            let report = match (pressed, *state) {
                (true, ReportState::Released) => KeyboardReport::held(&button.slot),
                (false, ReportState::Pressed) => KeyboardReport::released(),
                _ => continue,
            };

            if !transport.is_ready() || !transport.send_report(&report) {
                summary.deferred += 1;
                continue;
            }

            if pressed {
                *state = ReportState::Pressed;
                summary.presses += 1;
            } else {
                *state = ReportState::Released;
                summary.releases += 1;
            }

            #[cfg(feature = "defmt")]
            defmt::trace!("line {}: {}", button.line, *state);
        }

        summary
    }
}
