#![allow(dead_code)]

use embedded_hal_mock::eh1::digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
use ergo_drifter::config::{ErgoDrifterConfig, IndicatorConfig, LightPinConfig};
use ergo_drifter::indicator::LedPattern;

pub type MockIndicatorConfig = IndicatorConfig<PinMock, PinMock, PinMock>;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Pin transactions of one indicator update: the LED is switched off, then on again if the pattern lights it.
pub fn led_transactions(on: bool, low_active: bool) -> Vec<PinTransaction> {
    let (active, inactive) = if low_active {
        (PinState::Low, PinState::High)
    } else {
        (PinState::High, PinState::Low)
    };
    let mut transactions = vec![PinTransaction::set(inactive)];
    if on {
        transactions.push(PinTransaction::set(active));
    }
    transactions
}

/// Build indicator pins that expect the given sequence of patterns to be shown
pub fn expect_patterns(patterns: &[LedPattern], low_active: bool) -> MockIndicatorConfig {
    let mut led1 = Vec::new();
    let mut led2 = Vec::new();
    let mut led3 = Vec::new();
    for pattern in patterns {
        led1.extend(led_transactions(pattern.led1, low_active));
        led2.extend(led_transactions(pattern.led2, low_active));
        led3.extend(led_transactions(pattern.led3, low_active));
    }
    IndicatorConfig {
        led1: LightPinConfig::new(PinMock::new(&led1), low_active),
        led2: LightPinConfig::new(PinMock::new(&led2), low_active),
        led3: LightPinConfig::new(PinMock::new(&led3), low_active),
    }
}

pub fn expect_config(patterns: &[LedPattern]) -> ErgoDrifterConfig<'static, PinMock, PinMock, PinMock> {
    ErgoDrifterConfig::new(expect_patterns(patterns, false))
}

/// Check that all expected pin transactions happened
pub fn verify_pins(pins: (PinMock, PinMock, PinMock)) {
    let (mut led1, mut led2, mut led3) = pins;
    led1.done();
    led2.done();
    led3.done();
}
