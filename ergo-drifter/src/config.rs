//! Configurations of the ergo-drifter keyboard.
//!
//! The keyboard is configured in Rust, the host firmware reads [`ErgoDrifterConfig`] at startup.

use embedded_hal::digital::OutputPin;

/// USB identity reported to the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyboardUsbConfig<'a> {
    pub vid: u16,
    pub pid: u16,
    pub manufacturer: &'a str,
    pub product_name: &'a str,
    pub serial_number: &'a str,
}

impl Default for KeyboardUsbConfig<'_> {
    fn default() -> Self {
        Self {
            vid: 0x3297,
            pid: 0x4974,
            manufacturer: "ZSA Technology Labs",
            product_name: "ErgoDox EZ",
            serial_number: "ergo-drifter",
        }
    }
}

/// A single indicator LED and its polarity
pub struct LightPinConfig<O: OutputPin> {
    pub pin: O,
    pub low_active: bool,
}

impl<O: OutputPin> LightPinConfig<O> {
    pub fn new(pin: O, low_active: bool) -> Self {
        Self { pin, low_active }
    }
}

/// The three layer indicator LEDs on the right half
pub struct IndicatorConfig<L1: OutputPin, L2: OutputPin, L3: OutputPin> {
    pub led1: LightPinConfig<L1>,
    pub led2: LightPinConfig<L2>,
    pub led3: LightPinConfig<L3>,
}

/// All configurations of the keyboard
pub struct ErgoDrifterConfig<'a, L1: OutputPin, L2: OutputPin, L3: OutputPin> {
    pub usb_config: KeyboardUsbConfig<'a>,
    pub indicator_config: IndicatorConfig<L1, L2, L3>,
}

impl<L1: OutputPin, L2: OutputPin, L3: OutputPin> ErgoDrifterConfig<'_, L1, L2, L3> {
    /// Config with default USB identity and the given indicator LEDs
    pub fn new(indicator_config: IndicatorConfig<L1, L2, L3>) -> Self {
        Self {
            usb_config: KeyboardUsbConfig::default(),
            indicator_config,
        }
    }
}

/// Firmware version string
pub const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_usb_identity() {
        let usb = KeyboardUsbConfig::default();
        assert_eq!((usb.vid, usb.pid), (0x3297, 0x4974));
        assert_eq!(usb.manufacturer, "ZSA Technology Labs");
        assert_eq!(usb.product_name, "ErgoDox EZ");
        assert_eq!(usb.serial_number, "ergo-drifter");
    }
}
