use embedded_hal::digital::OutputPin;

/// Wrapper for an `embedded-hal` output pin which drives an LED.
/// It hides the pin polarity: `activate` always lights the LED, whether the LED is low-active or high-active.
pub struct OutputController<P: OutputPin> {
    pin: P,
    low_active: bool,
}

impl<P: OutputPin> OutputController<P> {
    /// Create a new OutputController instance
    pub fn new(pin: P, low_active: bool) -> Self {
        Self { pin, low_active }
    }

    /// Activate the GPIO pin
    pub fn activate(&mut self) {
        if self.low_active {
            self.pin.set_low().ok();
        } else {
            self.pin.set_high().ok();
        }
    }

    /// Deactivate the GPIO pin
    pub fn deactivate(&mut self) {
        if self.low_active {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}
