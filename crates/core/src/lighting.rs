//! Lighting protocol packet construction.
//!
//! The G102/G203 accepts HID++ long reports (20 bytes, report ID 0x11)
//! addressed to the LED feature at index 0x0E. Every lighting change is two
//! packets: a software-control enable packet (command 0x50), then a mode
//! packet (command 0x10). Layout knowledge comes from OpenRGB's controller
//! for this device.
//!
//! Construction is pure: no I/O, no side effects.

use crate::params::{Brightness, Color, Rate, Toggle};

/// Every packet is exactly this long.
pub const PACKET_SIZE: usize = 20;

/// A fixed-size wire packet.
pub type Packet = [u8; PACKET_SIZE];

/// HID++ long report ID.
const REPORT_ID: u8 = 0x11;
/// Device index for a wired device.
const DEVICE_INDEX: u8 = 0xFF;
/// Feature index of the LED controller.
const LED_FEATURE_INDEX: u8 = 0x0E;

/// Enable software control of the lighting.
const CMD_SOFTWARE_CONTROL: u8 = 0x50;
/// Set the active lighting mode.
const CMD_SET_MODE: u8 = 0x10;
/// Toggle the power-on lighting effect. Not part of OpenRGB's SetMode
/// logic; undocumented, preserved exactly as captured.
const CMD_STARTUP_EFFECT: u8 = 0x5B;

/// Offset of the end marker in mode packets.
const END_MARKER_OFFSET: usize = 16;

/// Build the common packet header: report ID, device index, LED feature
/// index, command, command parameter. Remaining bytes are zero.
fn header(command: u8, param: u8) -> Packet {
    let mut packet = [0u8; PACKET_SIZE];
    packet[0] = REPORT_ID;
    packet[1] = DEVICE_INDEX;
    packet[2] = LED_FEATURE_INDEX;
    packet[3] = command;
    packet[4] = param;
    packet
}

/// The constant packet that switches the device into software-controlled
/// lighting mode. Sent before every mode packet.
pub fn software_control_packet() -> Packet {
    let mut packet = header(CMD_SOFTWARE_CONTROL, 0x01);
    packet[5] = 0x03;
    packet[6] = 0x07;
    packet
}

/// A lighting effect the device can run on its own once programmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fixed single color.
    Solid(Color),
    /// Cycle through all hues. The device ignores color in this mode.
    Cycle { rate: Rate, brightness: Brightness },
    /// Single color breathing.
    Breathe {
        color: Color,
        rate: Rate,
        brightness: Brightness,
    },
}

impl Effect {
    /// Device mode code carried at byte 5 of the mode packet.
    pub fn mode_byte(&self) -> u8 {
        match self {
            Self::Solid(_) => 0x01,
            Self::Cycle { .. } => 0x02,
            Self::Breathe { .. } => 0x03,
        }
    }

    /// Encode into a mode packet.
    ///
    /// Field offsets depend on the mode: cycle carries its rate at bytes
    /// 11..13 and brightness at 13, breathe at 9..11 and 12.
    pub fn encode(&self) -> Packet {
        let mut packet = header(CMD_SET_MODE, 0x00);
        packet[5] = self.mode_byte();

        match *self {
            Self::Solid(color) => {
                packet[6] = color.r;
                packet[7] = color.g;
                packet[8] = color.b;
                packet[9] = 0x02;
            }
            Self::Cycle { rate, brightness } => {
                // Color bytes 6..9 stay zero.
                let [hi, lo] = rate.to_be_bytes();
                packet[11] = hi;
                packet[12] = lo;
                packet[13] = brightness.device_byte();
            }
            Self::Breathe {
                color,
                rate,
                brightness,
            } => {
                packet[6] = color.r;
                packet[7] = color.g;
                packet[8] = color.b;
                let [hi, lo] = rate.to_be_bytes();
                packet[9] = hi;
                packet[10] = lo;
                packet[12] = brightness.device_byte();
            }
        }

        packet[END_MARKER_OFFSET] = 0x01;
        packet
    }
}

/// Build the startup-effect toggle packet (command 0x5B).
pub fn startup_effect_packet(toggle: Toggle) -> Packet {
    let mut packet = header(CMD_STARTUP_EFFECT, 0x00);
    packet[5] = 0x01;
    packet[6] = toggle.device_byte();
    packet
}
