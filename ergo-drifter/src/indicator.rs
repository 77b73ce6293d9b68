//! Layer indicator LEDs.
//!
//! The right half of the ErgoDox has three status LEDs. Each layer from 1 to 7 lights a fixed
//! combination of them: layers 1..3 light a single LED, layers 4..6 light a pair and layer 7
//! lights all three.

use embedded_hal::digital::OutputPin;

use crate::config::IndicatorConfig;
use crate::gpio::OutputController;
use crate::layer_state::LayerState;

/// On/off state of the three indicator LEDs
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPattern {
    pub led1: bool,
    pub led2: bool,
    pub led3: bool,
}

impl LedPattern {
    pub const OFF: Self = Self::new(false, false, false);

    pub const fn new(led1: bool, led2: bool, led3: bool) -> Self {
        Self { led1, led2, led3 }
    }

    /// LED pattern of a layer. Layers without an assigned pattern keep all LEDs off.
    pub const fn for_layer(layer: u8) -> Self {
        match layer {
            1 => Self::new(true, false, false),
            2 => Self::new(false, true, false),
            3 => Self::new(false, false, true),
            4 => Self::new(true, true, false),
            5 => Self::new(true, false, true),
            6 => Self::new(false, true, true),
            7 => Self::new(true, true, true),
            _ => Self::OFF,
        }
    }

    pub const fn is_off(&self) -> bool {
        !self.led1 && !self.led2 && !self.led3
    }
}

/// Drives the three indicator LEDs from the layer state.
pub struct LayerIndicator<L1: OutputPin, L2: OutputPin, L3: OutputPin> {
    led1: OutputController<L1>,
    led2: OutputController<L2>,
    led3: OutputController<L3>,
    pattern: LedPattern,
}

impl<L1: OutputPin, L2: OutputPin, L3: OutputPin> LayerIndicator<L1, L2, L3> {
    /// Create the indicator. The LEDs are left untouched until the first layer change.
    pub fn new(config: IndicatorConfig<L1, L2, L3>) -> Self {
        Self {
            led1: OutputController::new(config.led1.pin, config.led1.low_active),
            led2: OutputController::new(config.led2.pin, config.led2.low_active),
            led3: OutputController::new(config.led3.pin, config.led3.low_active),
            pattern: LedPattern::OFF,
        }
    }

    /// Pattern shown by the last update
    pub fn pattern(&self) -> LedPattern {
        self.pattern
    }

    /// Switch all three LEDs off, then light the ones assigned to `layer`.
    pub fn show_layer(&mut self, layer: u8) {
        let pattern = LedPattern::for_layer(layer);
        debug!("Layer {} indicator: {:?}", layer, pattern);

        self.led1.deactivate();
        self.led2.deactivate();
        self.led3.deactivate();

        if pattern.led1 {
            self.led1.activate();
        }
        if pattern.led2 {
            self.led2.activate();
        }
        if pattern.led3 {
            self.led3.activate();
        }
        self.pattern = pattern;
    }

    /// Show the highest active layer of `state`
    pub fn update(&mut self, state: LayerState) {
        self.show_layer(state.highest_layer());
    }

    /// Give the LED pins back
    pub fn release(self) -> (L1, L2, L3) {
        (self.led1.release(), self.led2.release(), self.led3.release())
    }
}
