//! Status LED - blink rate shows the USB link state, Caps Lock holds it on.

use crate::usb::link;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Timer};
use macropad::status_logic::LedPattern;

/// How often a solid LED re-checks the pattern.
const SOLID_RECHECK_MS: u64 = 100;

pub async fn led_task(mut led: Output<'static>) -> ! {
    loop {
        match LedPattern::for_state(link::link_state(), link::caps_lock()) {
            LedPattern::Solid => {
                led.set_high();
                Timer::after(Duration::from_millis(SOLID_RECHECK_MS)).await;
            }
            LedPattern::Blink { half_period_ms } => {
                led.toggle();
                Timer::after(Duration::from_millis(half_period_ms)).await;
            }
        }
    }
}
