//! libusb-backed device transport.
//!
//! Opens the G102/G203 by its fixed vendor/product ID and performs the HID
//! SET_REPORT control transfers that carry lighting packets. Wireless
//! receivers use a different PID and protocol and are out of scope.

use std::time::Duration;

use rusb::{Context, DeviceHandle, UsbContext};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::lighting::Packet;
use crate::transport::ControlTransport;
use crate::{pids, LOGITECH_VID};

/// bmRequestType: host-to-device, class request, interface recipient.
pub const CONTROL_REQUEST_TYPE: u8 = 0x21;
/// bRequest: HID SET_REPORT.
pub const CONTROL_REQUEST: u8 = 0x09;
/// wValue: output report, report ID 0x11.
pub const CONTROL_VALUE: u16 = 0x0211;
/// wIndex: the HID++ interface.
pub const CONTROL_INDEX: u16 = 0x01;

/// Upper bound on a single transfer. libusb requires one; the tool adds no
/// cancellation of its own.
const CONTROL_TIMEOUT: Duration = Duration::from_secs(5);

/// Map the CLI debug level (0..=3) onto libusb verbosity.
fn log_level(debug_level: u8) -> rusb::LogLevel {
    match debug_level {
        0 => rusb::LogLevel::None,
        1 => rusb::LogLevel::Error,
        2 => rusb::LogLevel::Warning,
        _ => rusb::LogLevel::Info,
    }
}

/// An open handle to the mouse.
///
/// The claimed interface is released and the device closed when the handle
/// drops, on every exit path.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
}

impl UsbTransport {
    /// Open the G102/G203 and claim its HID++ interface.
    ///
    /// `debug_level` (0..=3) sets libusb verbosity and is threaded in here
    /// rather than held as global state.
    pub fn open(debug_level: u8) -> Result<Self> {
        let mut context = Context::new().map_err(|e| Error::Usb(format!("libusb init: {e}")))?;
        context.set_log_level(log_level(debug_level));

        let mut handle = context
            .open_device_with_vid_pid(LOGITECH_VID, pids::G203_PRODIGY)
            .ok_or_else(|| {
                Error::DeviceNotFound(format!(
                    "no G102/G203 mouse (VID=0x{LOGITECH_VID:04X} PID=0x{:04X}) — \
                     is it plugged in?",
                    pids::G203_PRODIGY
                ))
            })?;

        // Not supported on all platforms; libusb claims through the OS
        // driver there instead.
        match handle.set_auto_detach_kernel_driver(true) {
            Ok(()) | Err(rusb::Error::NotSupported) => {}
            Err(e) => return Err(map_usb_error("auto-detach kernel driver", e)),
        }

        handle
            .claim_interface(CONTROL_INDEX as u8)
            .map_err(|e| map_usb_error("claim interface", e))?;

        info!(
            vid = format_args!("0x{:04X}", LOGITECH_VID),
            pid = format_args!("0x{:04X}", pids::G203_PRODIGY),
            interface = CONTROL_INDEX,
            "device opened"
        );

        Ok(Self { handle })
    }
}

impl ControlTransport for UsbTransport {
    fn control_write(&self, packet: &Packet) -> Result<usize> {
        let n = self
            .handle
            .write_control(
                CONTROL_REQUEST_TYPE,
                CONTROL_REQUEST,
                CONTROL_VALUE,
                CONTROL_INDEX,
                packet,
                CONTROL_TIMEOUT,
            )
            .map_err(|e| map_usb_error("control transfer", e))?;
        debug!(bytes = n, "control transfer complete");
        Ok(n)
    }
}

fn map_usb_error(op: &str, e: rusb::Error) -> Error {
    match e {
        rusb::Error::Access => Error::PermissionDenied(format!("{op}: {e}")),
        rusb::Error::NoDevice | rusb::Error::NotFound => {
            Error::DeviceNotFound(format!("{op}: {e}"))
        }
        other => Error::Usb(format!("{op}: {other}")),
    }
}
