//! gled-core: lighting protocol encoding and USB transport for Logitech G mice.
//!
//! This crate provides the hardware-independent logic for programming the RGB
//! lighting of G102/G203 mice: validated argument value types, fixed 20-byte
//! packet construction, and a control-transfer transport abstraction with a
//! libusb-backed implementation.

pub mod device;
pub mod error;
pub mod lighting;
pub mod params;
pub mod transport;

/// Logitech USB Vendor ID.
pub const LOGITECH_VID: u16 = 0x046D;

/// Known product IDs speaking this lighting protocol.
pub mod pids {
    /// G102 / G203 Prodigy (the G203 Lightsync reports the same ID).
    pub const G203_PRODIGY: u16 = 0xC092;
}
