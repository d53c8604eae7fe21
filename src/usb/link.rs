//! Link state shared between the USB stack and the dispatch loop.
//!
//! The USB stack's handler writes plain flags; the dispatcher reads them
//! at poll time through [`UsbLink`].  Reports cross to the HID writer
//! task through a one-slot channel, so "ready" means the previous report
//! has been picked up.

use core::sync::atomic::{AtomicBool, Ordering};
use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use macropad::hid::KeyboardReport;
use macropad::status_logic::LinkState;
use macropad::HidTransport;

static CONFIGURED: AtomicBool = AtomicBool::new(false);
static SUSPENDED: AtomicBool = AtomicBool::new(false);
static CAPS_LOCK: AtomicBool = AtomicBool::new(false);

/// Remote-wakeup requests from the dispatcher to the USB device task.
static REMOTE_WAKEUP: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Keyboard reports from the dispatcher to the HID writer task.
pub static REPORTS: Channel<CriticalSectionRawMutex, KeyboardReport, 1> = Channel::new();

pub fn set_configured(configured: bool) {
    if CONFIGURED.swap(configured, Ordering::Relaxed) != configured {
        info!("USB: configured={}", configured);
    }
}

pub fn set_suspended(suspended: bool) {
    if SUSPENDED.swap(suspended, Ordering::Relaxed) != suspended {
        info!("USB: suspended={}", suspended);
    }
}

pub fn set_caps_lock(on: bool) {
    CAPS_LOCK.store(on, Ordering::Relaxed);
}

pub fn caps_lock() -> bool {
    CAPS_LOCK.load(Ordering::Relaxed)
}

pub fn link_state() -> LinkState {
    LinkState::from_flags(
        CONFIGURED.load(Ordering::Relaxed),
        SUSPENDED.load(Ordering::Relaxed),
    )
}

/// Forget a stale wakeup request (one made while the bus was running).
pub fn clear_remote_wakeup() {
    REMOTE_WAKEUP.reset();
}

/// Wait until the dispatcher asks for a remote wakeup.
pub async fn remote_wakeup_requested() {
    REMOTE_WAKEUP.wait().await
}

/// Dispatcher-side view of the USB link.
pub struct UsbLink;

impl HidTransport for UsbLink {
    fn is_ready(&self) -> bool {
        link_state() == LinkState::Mounted && !REPORTS.is_full()
    }

    fn is_suspended(&self) -> bool {
        SUSPENDED.load(Ordering::Relaxed)
    }

    fn send_report(&mut self, report: &KeyboardReport) -> bool {
        REPORTS.try_send(*report).is_ok()
    }

    fn request_remote_wakeup(&mut self) {
        REMOTE_WAKEUP.signal(());
    }
}
