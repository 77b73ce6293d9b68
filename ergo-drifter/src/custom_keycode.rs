//! Keycodes that are not part of the HID usage tables.

use crate::keycode::KeyCode;

/// Cycle the LED brightness level of the ErgoDox EZ.
pub const LED_LEVEL: KeyCode = KeyCode::Kb0;
/// Enable or disable per-layer RGB colors.
pub const TOGGLE_LAYER_COLOR: KeyCode = KeyCode::Kb1;

/// Keycodes owned by this keymap. They are allocated from the start of the user range.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeycode {
    /// Solid color RGB mode
    RgbSld,
}

impl CustomKeycode {
    /// First keycode that keymaps may allocate
    pub const SAFE_RANGE: KeyCode = KeyCode::User0;

    pub const fn keycode(self) -> KeyCode {
        match self {
            CustomKeycode::RgbSld => Self::SAFE_RANGE,
        }
    }

    pub fn from_keycode(keycode: KeyCode) -> Option<Self> {
        match keycode.user_index()? {
            0 => Some(CustomKeycode::RgbSld),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_keycode_allocation() {
        assert_eq!(KeyCode::from(0x0840), CustomKeycode::SAFE_RANGE);
        assert_eq!(CustomKeycode::RgbSld.keycode(), KeyCode::User0);
        assert_eq!(CustomKeycode::from_keycode(KeyCode::User0), Some(CustomKeycode::RgbSld));
        assert_eq!(CustomKeycode::from_keycode(KeyCode::User1), None);
        assert_eq!(CustomKeycode::from_keycode(LED_LEVEL), None);
    }
}
