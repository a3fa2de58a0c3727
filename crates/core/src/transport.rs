//! Control-transfer transport abstraction.
//!
//! Provides a trait-based transport layer so that the real USB device and
//! mock devices share the same interface.

use crate::error::Result;
use crate::lighting::{software_control_packet, Packet};
use tracing::{debug, trace, warn};

/// Abstraction over a single HID control-transfer write.
pub trait ControlTransport: Send {
    /// Write one 20-byte packet and return the number of bytes transferred.
    fn control_write(&self, packet: &Packet) -> Result<usize>;
}

/// Send a mode or startup-effect packet to the device.
///
/// Always two sequential writes: the software-control enable packet first,
/// then the payload. Enable failure is non-fatal — the device may already be
/// in software-control mode — so it is logged and execution proceeds. Payload
/// failure is propagated.
pub fn apply_packet(transport: &dyn ControlTransport, packet: &Packet) -> Result<()> {
    let enable = software_control_packet();
    trace!(packet_hex = format_args!("{:02X?}", enable), "enable TX");
    match transport.control_write(&enable) {
        Ok(n) => debug!(bytes = n, "software control enabled"),
        Err(e) => warn!(
            error = %e,
            "failed to send software control enable packet; continuing"
        ),
    }

    trace!(packet_hex = format_args!("{:02X?}", packet), "payload TX");
    let n = transport.control_write(packet)?;
    debug!(bytes = n, "payload sent");
    Ok(())
}
