//! Validated argument value types: color, rate, brightness, and toggle.
//!
//! All parsing happens here, BEFORE any USB communication — no invalid data
//! ever reaches the device. Parsers are pure functions returning typed errors
//! so the CLI can report and exit at the outermost boundary.

use crate::error::{Error, Result};

/// Effect rate bounds in milliseconds.
pub const RATE_MIN_MS: u16 = 100;
pub const RATE_MAX_MS: u16 = 60_000;
/// Rate used when the argument is omitted.
pub const DEFAULT_RATE_MS: u16 = 10_000;

/// Brightness bounds in percent.
pub const BRIGHTNESS_MIN: u8 = 1;
pub const BRIGHTNESS_MAX: u8 = 100;
/// Brightness used when the argument is omitted.
pub const DEFAULT_BRIGHTNESS: u8 = 100;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse a `RRGGBB` or `RGB` hex string, case-insensitive, with or
    /// without a leading `#`.
    ///
    /// The 3-digit form expands each nibble `d` to `d * 17`, i.e. duplicates
    /// the hex digit: `F0A` → `FF00AA`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidFormat {
            field: "color",
            value: s.to_string(),
            expected: "RRGGBB or RGB hex, e.g. FF0000",
        };

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => Ok(Self {
                r: u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?,
                g: u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?,
                b: u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?,
            }),
            3 => {
                let nibble = |range| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
                Ok(Self {
                    r: nibble(0..1)? * 17,
                    g: nibble(1..2)? * 17,
                    b: nibble(2..3)? * 17,
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Effect rate in milliseconds, within [100, 60000].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rate(u16);

impl Rate {
    /// Parse a rate argument. A missing or empty argument yields the
    /// 10000 ms default.
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        let s = match arg {
            None | Some("") => return Ok(Self(DEFAULT_RATE_MS)),
            Some(s) => s,
        };

        let value: i64 = s.parse().map_err(|_| Error::InvalidFormat {
            field: "rate",
            value: s.to_string(),
            expected: "integer milliseconds",
        })?;

        if !(i64::from(RATE_MIN_MS)..=i64::from(RATE_MAX_MS)).contains(&value) {
            return Err(Error::OutOfRange {
                field: "rate",
                value,
                min: i64::from(RATE_MIN_MS),
                max: i64::from(RATE_MAX_MS),
            });
        }

        Ok(Self(value as u16))
    }

    /// Rate in milliseconds.
    pub fn as_ms(self) -> u16 {
        self.0
    }

    /// Wire encoding: two bytes, high byte first, full 16-bit value.
    pub fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Brightness percentage, within [1, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness(u8);

impl Brightness {
    /// Parse a brightness argument. A missing or empty argument yields the
    /// 100% default.
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        let s = match arg {
            None | Some("") => return Ok(Self(DEFAULT_BRIGHTNESS)),
            Some(s) => s,
        };

        let value: i64 = s.parse().map_err(|_| Error::InvalidFormat {
            field: "brightness",
            value: s.to_string(),
            expected: "integer percentage",
        })?;

        if !(i64::from(BRIGHTNESS_MIN)..=i64::from(BRIGHTNESS_MAX)).contains(&value) {
            return Err(Error::OutOfRange {
                field: "brightness",
                value,
                min: i64::from(BRIGHTNESS_MIN),
                max: i64::from(BRIGHTNESS_MAX),
            });
        }

        Ok(Self(value as u8))
    }

    /// Brightness as a percentage.
    pub fn as_percent(self) -> u8 {
        self.0
    }

    /// Wire encoding: `percent * 5` truncated to one byte.
    ///
    /// The truncation is part of the vendor protocol: 100% encodes as
    /// 500 mod 256 = 244. Never clamp to 255.
    pub fn device_byte(self) -> u8 {
        (u16::from(self.0) * 5) as u8
    }
}

/// Startup-effect toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    /// Parse a case-insensitive `on`/`off` argument.
    pub fn from_arg(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(Error::InvalidFormat {
                field: "toggle",
                value: s.to_string(),
                expected: "'on' or 'off'",
            }),
        }
    }

    /// Wire encoding: 0x01 = on, 0x02 = off.
    pub fn device_byte(self) -> u8 {
        match self {
            Self::On => 0x01,
            Self::Off => 0x02,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_six_digits() {
        let c = Color::from_hex("FF0000").unwrap();
        assert_eq!(c, Color { r: 0xFF, g: 0, b: 0 });
        assert_eq!(
            Color::from_hex("12abCD").unwrap(),
            Color {
                r: 0x12,
                g: 0xAB,
                b: 0xCD
            }
        );
    }

    #[test]
    fn color_accepts_hash_prefix() {
        assert_eq!(
            Color::from_hex("#00FF00").unwrap(),
            Color { r: 0, g: 0xFF, b: 0 }
        );
        assert_eq!(
            Color::from_hex("#0f0").unwrap(),
            Color { r: 0, g: 0xFF, b: 0 }
        );
    }

    #[test]
    fn color_three_digit_duplicates_nibbles() {
        assert_eq!(
            Color::from_hex("F0A").unwrap(),
            Color {
                r: 0xFF,
                g: 0x00,
                b: 0xAA
            }
        );
        // Duplication law: "abc" parses like "aabbcc"
        assert_eq!(
            Color::from_hex("abc").unwrap(),
            Color::from_hex("aabbcc").unwrap()
        );
    }

    #[test]
    fn color_rejects_bad_length() {
        for s in ["", "F", "FF", "FFFF", "FFFFF", "FFFFFFF", "#FFFFFFF"] {
            assert!(Color::from_hex(s).is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn color_rejects_non_hex() {
        assert!(Color::from_hex("GG0000").is_err());
        assert!(Color::from_hex("F0Z").is_err());
        assert!(Color::from_hex("#12345!").is_err());
    }

    #[test]
    fn color_display_roundtrip() {
        let c = Color::from_hex("1a2b3c").unwrap();
        assert_eq!(c.to_string(), "#1A2B3C");
    }

    #[test]
    fn rate_defaults_when_omitted() {
        assert_eq!(Rate::from_arg(None).unwrap().as_ms(), DEFAULT_RATE_MS);
        assert_eq!(Rate::from_arg(Some("")).unwrap().as_ms(), DEFAULT_RATE_MS);
    }

    #[test]
    fn rate_accepts_bounds() {
        assert_eq!(Rate::from_arg(Some("100")).unwrap().as_ms(), 100);
        assert_eq!(Rate::from_arg(Some("60000")).unwrap().as_ms(), 60000);
    }

    #[test]
    fn rate_rejects_out_of_range() {
        assert!(matches!(
            Rate::from_arg(Some("99")),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            Rate::from_arg(Some("60001")),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            Rate::from_arg(Some("-5")),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn rate_rejects_non_numeric() {
        assert!(matches!(
            Rate::from_arg(Some("fast")),
            Err(Error::InvalidFormat { .. })
        ));
        assert!(matches!(
            Rate::from_arg(Some("10.5")),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rate_encodes_big_endian() {
        assert_eq!(Rate::from_arg(Some("10000")).unwrap().to_be_bytes(), [0x27, 0x10]);
        assert_eq!(Rate::from_arg(Some("5000")).unwrap().to_be_bytes(), [0x13, 0x88]);
        // Decode law: hi << 8 | lo recovers the rate
        for ms in [100u16, 255, 256, 4242, 60000] {
            let [hi, lo] = Rate::from_arg(Some(&ms.to_string())).unwrap().to_be_bytes();
            assert_eq!(u16::from(hi) << 8 | u16::from(lo), ms);
        }
    }

    #[test]
    fn brightness_defaults_when_omitted() {
        assert_eq!(
            Brightness::from_arg(None).unwrap().as_percent(),
            DEFAULT_BRIGHTNESS
        );
        assert_eq!(
            Brightness::from_arg(Some("")).unwrap().as_percent(),
            DEFAULT_BRIGHTNESS
        );
    }

    #[test]
    fn brightness_rejects_out_of_range() {
        assert!(matches!(
            Brightness::from_arg(Some("0")),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            Brightness::from_arg(Some("101")),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn brightness_rejects_non_numeric() {
        assert!(matches!(
            Brightness::from_arg(Some("max")),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[test]
    fn brightness_device_scale_truncates() {
        // percent * 5 mod 256, truncation intentional per vendor protocol
        assert_eq!(Brightness::from_arg(Some("1")).unwrap().device_byte(), 5);
        assert_eq!(Brightness::from_arg(Some("50")).unwrap().device_byte(), 250);
        assert_eq!(Brightness::from_arg(Some("51")).unwrap().device_byte(), 255);
        assert_eq!(Brightness::from_arg(Some("52")).unwrap().device_byte(), 4);
        assert_eq!(Brightness::from_arg(Some("100")).unwrap().device_byte(), 244);
    }

    #[test]
    fn toggle_parses_case_insensitive() {
        assert_eq!(Toggle::from_arg("on").unwrap(), Toggle::On);
        assert_eq!(Toggle::from_arg("ON").unwrap(), Toggle::On);
        assert_eq!(Toggle::from_arg("Off").unwrap(), Toggle::Off);
    }

    #[test]
    fn toggle_device_bytes() {
        assert_eq!(Toggle::On.device_byte(), 0x01);
        assert_eq!(Toggle::Off.device_byte(), 0x02);
    }

    #[test]
    fn toggle_rejects_unknown() {
        assert!(matches!(
            Toggle::from_arg("enable"),
            Err(Error::InvalidFormat { .. })
        ));
        assert!(Toggle::from_arg("").is_err());
    }
}
