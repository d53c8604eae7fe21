//! Button registry - the authoritative list of configured buttons.
//!
//! Group `i` of the parsed configuration binds to `lines[i]` of the
//! hardware line list.  Groups without a line are rejected and counted,
//! never indexed out of range.

use crate::config::MAX_BUTTONS;
use crate::error::RegistryError;
use crate::parser::ParsedConfig;
use crate::resolver::{self, ButtonConfig, LineId, Resolution};
use heapless::Vec;

/// Boot-time diagnostics for one registry build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BuildReport {
    /// Groups found in the configuration text.
    pub groups_parsed: usize,
    /// Buttons bound to a line.
    pub buttons_bound: usize,
    /// Groups rejected for lack of a line.
    pub groups_rejected: usize,
    /// Symbol diagnostics summed over bound buttons.
    pub symbols: Resolution,
}

impl BuildReport {
    /// Returns `true` if the configuration was used without any loss.
    pub fn is_clean(&self) -> bool {
        self.groups_rejected == 0 && self.symbols.is_clean()
    }
}

/// Ordered, immutable list of configured buttons.
#[derive(Clone, Debug, Default)]
pub struct ButtonRegistry {
    buttons: Vec<ButtonConfig, MAX_BUTTONS>,
}

impl ButtonRegistry {
    /// Resolve `parsed` and bind it to `lines` in order.
    ///
    /// At most `min(lines.len(), MAX_BUTTONS)` groups are bound; the rest
    /// are reported in [`BuildReport::groups_rejected`].  A line listed
    /// twice is a wiring error and fails the build.
    pub fn build(
        parsed: &ParsedConfig,
        lines: &[LineId],
    ) -> Result<(Self, BuildReport), RegistryError> {
        check_unique(lines)?;

        let capacity = lines.len().min(MAX_BUTTONS);
        let mut registry = Self::default();
        let mut report = BuildReport {
            groups_parsed: parsed.group_count(),
            ..BuildReport::default()
        };

        for (index, group) in parsed.groups().enumerate() {
            if index >= capacity {
                report.groups_rejected += 1;
                continue;
            }
            let (button, outcome) = resolver::resolve(group, lines[index]);
            report.symbols.accumulate(outcome);
            // Cannot overflow: index < capacity <= MAX_BUTTONS.
            let _ = registry.buttons.push(button);
        }
        report.buttons_bound = registry.buttons.len();

        #[cfg(feature = "defmt")]
        {
            if report.groups_rejected > 0 {
                defmt::warn!(
                    "{} groups configured but only {} lines available; {} rejected",
                    report.groups_parsed,
                    capacity,
                    report.groups_rejected
                );
            }
        }

        Ok((registry, report))
    }

    /// Number of configured buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Button at `index`, in configuration order.
    pub fn get(&self, index: usize) -> Option<&ButtonConfig> {
        self.buttons.get(index)
    }

    /// Iterate over buttons in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &ButtonConfig> {
        self.buttons.iter()
    }

    /// Lines in use, in configuration order.
    pub fn lines(&self) -> impl Iterator<Item = LineId> + '_ {
        self.buttons.iter().map(|b| b.line)
    }
}

fn check_unique(lines: &[LineId]) -> Result<(), RegistryError> {
    for (i, line) in lines.iter().enumerate() {
        if lines[..i].contains(line) {
            return Err(RegistryError::DuplicateLine(*line));
        }
    }
    Ok(())
}
