//! Callbacks invoked by the host firmware.

use embedded_hal::digital::OutputPin;

use crate::action::{Action, KeyAction};
use crate::config::ErgoDrifterConfig;
use crate::custom_keycode::CustomKeycode;
use crate::event::KeyEvent;
use crate::indicator::LayerIndicator;
use crate::layer_state::LayerState;

/// User hooks into the host firmware's key processing.
///
/// Both hooks run synchronously on the firmware's event dispatch, once per key event
/// and once per layer state change.
pub trait KeymapHooks {
    /// Called for every key event before the default processing.
    /// Return `false` to stop the firmware from handling the key any further.
    fn process_record(&mut self, action: KeyAction, event: KeyEvent) -> bool {
        let _ = (action, event);
        true
    }

    /// Called when the layer state changes. The returned state is what the firmware keeps.
    fn layer_state_set(&mut self, state: LayerState) -> LayerState {
        state
    }
}

/// The ergo-drifter keyboard: layer indicator LEDs and no custom key handling.
pub struct ErgoDrifter<L1: OutputPin, L2: OutputPin, L3: OutputPin> {
    indicator: LayerIndicator<L1, L2, L3>,
}

impl<L1: OutputPin, L2: OutputPin, L3: OutputPin> ErgoDrifter<L1, L2, L3> {
    pub fn new(config: ErgoDrifterConfig<'_, L1, L2, L3>) -> Self {
        let usb = config.usb_config;
        info!(
            "ergo-drifter {}, {} {} ({:#x}:{:#x}), serial {}",
            crate::config::FIRMWARE_VERSION,
            usb.manufacturer,
            usb.product_name,
            usb.vid,
            usb.pid,
            usb.serial_number
        );
        Self {
            indicator: LayerIndicator::new(config.indicator_config),
        }
    }

    pub fn indicator(&self) -> &LayerIndicator<L1, L2, L3> {
        &self.indicator
    }

    pub fn into_indicator(self) -> LayerIndicator<L1, L2, L3> {
        self.indicator
    }
}

impl<L1: OutputPin, L2: OutputPin, L3: OutputPin> KeymapHooks for ErgoDrifter<L1, L2, L3> {
    fn process_record(&mut self, action: KeyAction, event: KeyEvent) -> bool {
        trace!("Process {:?} at ({}, {})", action, event.row, event.col);
        if let KeyAction::Single(Action::Key(keycode)) = action {
            if let Some(custom) = CustomKeycode::from_keycode(keycode) {
                // Custom keycodes have no behavior of their own, the firmware handles them
                debug!("Custom keycode {:?}, pressed: {}", custom, event.pressed);
            }
        }
        true
    }

    fn layer_state_set(&mut self, state: LayerState) -> LayerState {
        self.indicator.update(state);
        state
    }
}
