//! GPIO button lines.
//!
//! Buttons are active-high with the internal pull-down enabled.  Only the
//! lines the registry actually binds are configured as inputs; the rest of
//! the header is left untouched.

use defmt::{debug, warn};
use embassy_rp::gpio::{AnyPin, Input, Pull};
use heapless::Vec;
use macropad::config::MAX_BUTTONS;
use macropad::{ButtonRegistry, LineId, LineReader};

pub struct ButtonLines {
    inputs: Vec<(LineId, Input<'static>), MAX_BUTTONS>,
}

impl ButtonLines {
    /// Configure every pin the registry uses as a digital input.
    pub fn new(registry: &ButtonRegistry, pins: impl IntoIterator<Item = (LineId, AnyPin)>) -> Self {
        let mut inputs = Vec::new();
        for (line, pin) in pins {
            if !registry.lines().any(|used| used == line) {
                continue;
            }
            let input = Input::new(pin, Pull::Down);
            debug!("Button line GP{} configured", line);
            // Cannot overflow: the registry holds at most MAX_BUTTONS lines.
            let _ = inputs.push((line, input));
        }
        if inputs.len() != registry.len() {
            warn!(
                "{} buttons registered but only {} lines wired",
                registry.len(),
                inputs.len()
            );
        }
        Self { inputs }
    }
}

impl LineReader for ButtonLines {
    fn is_pressed(&mut self, line: LineId) -> bool {
        self.inputs
            .iter()
            .find(|(id, _)| *id == line)
            .is_some_and(|(_, input)| input.is_high())
    }
}
