//! Keypad - boot-time configuration plus run-time dispatch in one owner.
//!
//! Built once from the configuration line, then polled by the control
//! loop.  Nothing here is global; the firmware holds one `Keypad` in the
//! dispatch task.

use crate::dispatch::{DispatchEngine, HidTransport, LineReader, ReportState, TickSummary};
use crate::error::RegistryError;
use crate::parser;
use crate::registry::{BuildReport, ButtonRegistry};
use crate::resolver::LineId;

/// The configured keypad: its button registry plus per-button report state.
pub struct Keypad {
    registry: ButtonRegistry,
    engine: DispatchEngine,
}

impl Keypad {
    /// Parse `raw`, resolve it and bind it to `lines`.
    pub fn from_config(raw: &[u8], lines: &[LineId]) -> Result<(Self, BuildReport), RegistryError> {
        let parsed = parser::parse(raw);
        let (registry, report) = ButtonRegistry::build(&parsed, lines)?;
        let engine = DispatchEngine::new(&registry);
        Ok((Self { registry, engine }, report))
    }

    pub fn registry(&self) -> &ButtonRegistry {
        &self.registry
    }

    /// Report state of the button at `index`.
    pub fn state(&self, index: usize) -> Option<ReportState> {
        self.engine.state(index)
    }

    /// One poll tick over all buttons.
    pub fn poll<L: LineReader, T: HidTransport>(
        &mut self,
        lines: &mut L,
        transport: &mut T,
    ) -> TickSummary {
        self.engine.poll(&self.registry, lines, transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_reports_diagnostics() {
        let (keypad, report) = Keypad::from_config(b"a+ZZZ b c", &[26, 27]).unwrap();
        assert_eq!(keypad.registry().len(), 2);
        assert_eq!(report.groups_rejected, 1);
        assert_eq!(report.symbols.unresolved, 1);
        assert_eq!(keypad.state(0), Some(ReportState::Released));
    }

    #[test]
    fn from_config_propagates_wiring_errors() {
        let err = Keypad::from_config(b"a", &[1, 1]).err();
        assert_eq!(err, Some(RegistryError::DuplicateLine(1)));
    }
}
