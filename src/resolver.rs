//! Keycode resolver - turns a parsed group into a fixed-capacity slot.
//!
//! Resolution never fails.  Unknown names become [`NO_KEY`] in place,
//! symbols past the slot capacity are dropped, and both are counted in
//! the returned [`Resolution`] so the degrade can be observed.

use crate::config::MAX_KEYS_PER_BUTTON;
use crate::keymap::{self, NO_KEY};
use crate::parser::Group;

/// Identifier of a physical input line (GPIO number).
pub type LineId = u8;

/// Keycodes asserted by one button.
///
/// Holds at most [`MAX_KEYS_PER_BUTTON`] entries; positions past `len`
/// always hold [`NO_KEY`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeycodeSlot {
    codes: [u8; MAX_KEYS_PER_BUTTON],
    len: u8,
}

impl KeycodeSlot {
    /// An empty slot.
    pub const fn new() -> Self {
        Self {
            codes: [NO_KEY; MAX_KEYS_PER_BUTTON],
            len: 0,
        }
    }

    /// Append a keycode; returns `false` when the slot is full.
    pub fn push(&mut self, keycode: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.codes[self.len as usize] = keycode;
        self.len += 1;
        true
    }

    /// Number of occupied positions (unresolved entries included).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == MAX_KEYS_PER_BUTTON
    }

    /// Occupied positions only.
    pub fn as_slice(&self) -> &[u8] {
        &self.codes[..self.len()]
    }

    /// All positions, zero-padded, as they go on the wire.
    pub fn codes(&self) -> [u8; MAX_KEYS_PER_BUTTON] {
        self.codes
    }

    /// Returns `true` if no position asserts an actual key.
    pub fn is_silent(&self) -> bool {
        self.as_slice().iter().all(|&k| k == NO_KEY)
    }
}

/// What happened while resolving one group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Resolution {
    /// Non-empty names missing from the key table.
    pub unresolved: u8,
    /// Empty names (from `++`, a leading/trailing `+` or an empty group).
    pub empty: u8,
    /// Names past the slot capacity.
    pub dropped: u8,
}

impl Resolution {
    /// Returns `true` if every symbol mapped to a key.
    pub fn is_clean(&self) -> bool {
        self.unresolved == 0 && self.empty == 0 && self.dropped == 0
    }

    pub(crate) fn accumulate(&mut self, other: Resolution) {
        self.unresolved = self.unresolved.saturating_add(other.unresolved);
        self.empty = self.empty.saturating_add(other.empty);
        self.dropped = self.dropped.saturating_add(other.dropped);
    }
}

/// Button binding: a physical line and the keys it asserts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    pub line: LineId,
    pub slot: KeycodeSlot,
}

/// Resolve every symbol of `symbols` into a slot.
pub fn resolve_symbols<'a>(symbols: impl IntoIterator<Item = &'a str>) -> (KeycodeSlot, Resolution) {
    let mut slot = KeycodeSlot::new();
    let mut outcome = Resolution::default();

    for symbol in symbols {
        if slot.is_full() {
            outcome.dropped = outcome.dropped.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("slot full, dropping {=str}", symbol);
            continue;
        }
        let keycode = match keymap::lookup(symbol) {
            Some(code) => code,
            None if symbol.is_empty() => {
                outcome.empty = outcome.empty.saturating_add(1);
                NO_KEY
            }
            None => {
                outcome.unresolved = outcome.unresolved.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("unknown key name {=str}", symbol);
                NO_KEY
            }
        };
        slot.push(keycode);
    }

    (slot, outcome)
}

/// Resolve one parsed group and bind it to `line`.
pub fn resolve(group: Group<'_>, line: LineId) -> (ButtonConfig, Resolution) {
    let (slot, outcome) = resolve_symbols(group.symbols());
    (ButtonConfig { line, slot }, outcome)
}
