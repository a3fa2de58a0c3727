//! Error types for gled-core.

use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Argument string does not match the expected form.
    #[error("invalid {field}: {value:?} (expected {expected})")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Value outside the device's accepted range.
    #[error("value out of range: {field} = {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Device not found during USB enumeration.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// Permission denied opening or claiming the device (likely missing udev rules).
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// USB transport failure.
    #[error("USB error: {0}")]
    Usb(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
