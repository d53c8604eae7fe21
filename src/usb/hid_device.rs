//! USB HID keyboard device.
//!
//! Initialises the Embassy USB stack on the RP2040 USB peripheral and
//! exposes one boot-protocol keyboard interface (input reports out,
//! LED output reports in).

use super::link;
use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler};
use embassy_rp::{self, bind_interrupts};
use embassy_usb::class::hid::{
    Config as HidConfig, HidReader, HidReaderWriter, HidWriter, ReportId, RequestHandler, State,
};
use embassy_usb::control::OutResponse;
use embassy_usb::{Builder, Config, Handler, UsbDevice};
use macropad::config;
use macropad::hid::keyboard::{caps_lock_from_output, KEYBOARD_REPORT_DESCRIPTOR};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => InterruptHandler<USB>;
});

pub type UsbDriver = Driver<'static, USB>;

static KB_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static USB_STATE_HANDLER: StaticCell<UsbStateHandler> = StaticCell::new();

/// Mirrors bus events into the shared link flags.
struct UsbStateHandler;

impl Handler for UsbStateHandler {
    fn enabled(&mut self, enabled: bool) {
        if !enabled {
            link::set_configured(false);
            link::set_suspended(false);
        }
    }

    fn reset(&mut self) {
        link::set_configured(false);
    }

    fn configured(&mut self, configured: bool) {
        link::set_configured(configured);
    }

    fn suspended(&mut self, suspended: bool) {
        link::set_suspended(suspended);
    }
}

/// Handles the keyboard LED output report.
struct LedReportHandler;

impl RequestHandler for LedReportHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, _id: ReportId, data: &[u8]) -> OutResponse {
        if let Some(caps) = caps_lock_from_output(data) {
            link::set_caps_lock(caps);
        }
        OutResponse::Accepted
    }
}

/// Build result containing the USB device runner and the HID endpoints.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, UsbDriver>,
    pub keyboard_writer: HidWriter<'static, UsbDriver, 8>,
    pub led_reader: HidReader<'static, UsbDriver, 1>,
}

/// Initialise the USB stack and create the keyboard device.
///
/// Panics if called twice; the descriptor buffers are static.
pub fn init(usb: USB) -> UsbHidDevice {
    let driver = Driver::new(usb, Irqs);

    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;
    usb_config.supports_remote_wakeup = true;

    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 64]);

    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    let state_handler = USB_STATE_HANDLER.init(UsbStateHandler);
    builder.handler(state_handler);

    let kb_state = KB_STATE.init(State::new());
    let kb_config = HidConfig {
        report_descriptor: KEYBOARD_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
    };
    let keyboard = HidReaderWriter::<_, 1, 8>::new(&mut builder, kb_state, kb_config);
    let (led_reader, keyboard_writer) = keyboard.split();

    let device = builder.build();

    info!("USB HID keyboard initialised");

    UsbHidDevice {
        device,
        keyboard_writer,
        led_reader,
    }
}

/// Drive enumeration and endpoint servicing.  While suspended it waits
/// for either the host to resume or the dispatcher to request a remote
/// wakeup.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device running");
    loop {
        device.run_until_suspend().await;
        link::clear_remote_wakeup();

        match select(device.wait_resume(), link::remote_wakeup_requested()).await {
            Either::First(()) => {}
            Either::Second(()) => {
                info!("USB: remote wakeup");
                if let Err(e) = device.remote_wakeup().await {
                    warn!("USB remote wakeup failed: {:?}", e);
                }
            }
        }
    }
}

/// Forward queued reports from the dispatcher to the IN endpoint.
pub async fn hid_writer_task(mut keyboard: HidWriter<'static, UsbDriver, 8>) -> ! {
    info!("Keyboard report writer running");

    loop {
        let report = link::REPORTS.receive().await;
        if let Err(e) = keyboard.write(&report.to_bytes()).await {
            warn!("USB keyboard write failed: {:?}", e);
        }
    }
}

/// LED output report task.
pub async fn led_reader_task(reader: HidReader<'static, UsbDriver, 1>) -> ! {
    let mut handler = LedReportHandler;
    reader.run(false, &mut handler).await
}
