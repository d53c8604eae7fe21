//! macropad firmware entry point.
//!
//! Boot sequence:
//!   1. Read the configuration line from `KEYPAD.TXT` on the SD card.
//!   2. Parse and resolve it into the button registry.
//!   3. Configure the bound button lines and the status LED.
//!   4. Bring up the USB HID keyboard and spawn its tasks.
//!   5. Poll the buttons forever at `POLL_INTERVAL_MS`.
//!
//! A missing card or unreadable file halts here; there is no fallback
//! configuration.

#![no_std]
#![no_main]

mod buttons;
mod status_led;
mod storage;
mod usb;

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Duration, Ticker};
use embedded_hal_bus::spi::ExclusiveDevice;
use macropad::config::{BUTTON_LINES, POLL_INTERVAL_MS, SD_SPI_FREQUENCY_HZ};
use macropad::error::Error;
use macropad::keymap::symbol_for;
use macropad::Keypad;
use {defmt_rtt as _, panic_probe as _};

use crate::buttons::ButtonLines;
use crate::usb::hid_device::{self, UsbDriver};
use crate::usb::link::UsbLink;

// Task wrappers - Embassy tasks cannot be generic.

#[embassy_executor::task]
async fn usb_task(device: embassy_usb::UsbDevice<'static, UsbDriver>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn hid_writer(writer: embassy_usb::class::hid::HidWriter<'static, UsbDriver, 8>) -> ! {
    hid_device::hid_writer_task(writer).await
}

#[embassy_executor::task]
async fn led_reader(reader: embassy_usb::class::hid::HidReader<'static, UsbDriver, 1>) -> ! {
    hid_device::led_reader_task(reader).await
}

#[embassy_executor::task]
async fn led_task(led: Output<'static>) -> ! {
    status_led::led_task(led).await
}

/// Park the core after a fatal boot error.
fn halt(err: Error) -> ! {
    error!("Fatal: {:?}", err);
    loop {
        cortex_m::asm::wfi();
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("macropad starting");

    let p = embassy_rp::init(Default::default());

    // - SD card & configuration ------------------------------
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SD_SPI_FREQUENCY_HZ;
    let spi_bus = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let sd = ExclusiveDevice::new(spi_bus, cs, Delay).unwrap_or_else(|e| match e {});

    let line = match storage::load_config(sd, Delay) {
        Ok(line) => line,
        Err(e) => halt(e.into()),
    };

    let (mut keypad, report) = match Keypad::from_config(&line, &BUTTON_LINES) {
        Ok(built) => built,
        Err(e) => halt(e.into()),
    };
    if report.is_clean() {
        info!("Configuration: {}", report);
    } else {
        warn!("Configuration loaded with losses: {}", report);
    }
    for button in keypad.registry().iter() {
        if button.slot.is_silent() {
            warn!("GP{}: no keys", button.line);
            continue;
        }
        for &code in button.slot.as_slice() {
            info!("GP{}: {=str}", button.line, symbol_for(code).unwrap_or("?"));
        }
    }

    // - GPIO -------------------------------------------
    // Same order as `BUTTON_LINES`.
    let pins = [
        p.PIN_26.degrade(),
        p.PIN_27.degrade(),
        p.PIN_28.degrade(),
        p.PIN_22.degrade(),
        p.PIN_21.degrade(),
        p.PIN_20.degrade(),
    ];
    let mut lines = ButtonLines::new(keypad.registry(), BUTTON_LINES.into_iter().zip(pins));

    let led = Output::new(p.PIN_25, Level::Low);
    spawner.must_spawn(led_task(led));

    // - USB --------------------------------------------
    let usb = hid_device::init(p.USB);
    spawner.must_spawn(usb_task(usb.device));
    spawner.must_spawn(hid_writer(usb.keyboard_writer));
    spawner.must_spawn(led_reader(usb.led_reader));

    // - Dispatch loop -----------------------------------
    info!("Polling {} buttons every {} ms", keypad.registry().len(), POLL_INTERVAL_MS);
    let mut transport = UsbLink;
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    loop {
        let summary = keypad.poll(&mut lines, &mut transport);
        if summary.deferred > 0 {
            defmt::trace!("{} button reports deferred", summary.deferred);
        }
        ticker.next().await;
    }
}
