pub mod common;

use ergo_drifter::LayerState;
use ergo_drifter::indicator::{LayerIndicator, LedPattern};

use crate::common::{expect_patterns, verify_pins};

#[test]
fn test_each_layer_lights_its_leds() {
    let expected = [
        (0, LedPattern::new(false, false, false)),
        (1, LedPattern::new(true, false, false)),
        (2, LedPattern::new(false, true, false)),
        (3, LedPattern::new(false, false, true)),
        (4, LedPattern::new(true, true, false)),
        (5, LedPattern::new(true, false, true)),
        (6, LedPattern::new(false, true, true)),
        (7, LedPattern::new(true, true, true)),
    ];
    for (layer, pattern) in expected {
        assert_eq!(LedPattern::for_layer(layer), pattern);

        let mut indicator = LayerIndicator::new(expect_patterns(&[pattern], false));
        indicator.show_layer(layer);
        assert_eq!(indicator.pattern(), pattern);
        verify_pins(indicator.release());
    }
}

#[test]
fn test_layer_5_lights_led1_and_led3() {
    let mut indicator = LayerIndicator::new(expect_patterns(&[LedPattern::new(true, false, true)], false));
    indicator.update(LayerState::new(0b0010_0000));
    let pattern = indicator.pattern();
    assert!(pattern.led1);
    assert!(!pattern.led2);
    assert!(pattern.led3);
    verify_pins(indicator.release());
}

#[test]
fn test_highest_active_layer_wins() {
    // Layers 0, 1 and 3 are active, layer 3 is shown
    let mut indicator = LayerIndicator::new(expect_patterns(&[LedPattern::for_layer(3)], false));
    indicator.update(LayerState::new(0b0000_1011));
    verify_pins(indicator.release());
}

#[test]
fn test_empty_state_turns_leds_off() {
    let mut indicator = LayerIndicator::new(expect_patterns(&[LedPattern::OFF], false));
    indicator.update(LayerState::new(0));
    assert!(indicator.pattern().is_off());
    verify_pins(indicator.release());
}

#[test]
fn test_consecutive_updates_reset_leds() {
    let patterns = [LedPattern::for_layer(7), LedPattern::for_layer(2), LedPattern::for_layer(0)];
    let mut indicator = LayerIndicator::new(expect_patterns(&patterns, false));
    indicator.show_layer(7);
    indicator.show_layer(2);
    indicator.show_layer(0);
    verify_pins(indicator.release());
}

#[test]
fn test_low_active_leds() {
    let mut indicator = LayerIndicator::new(expect_patterns(&[LedPattern::for_layer(6)], true));
    indicator.show_layer(6);
    verify_pins(indicator.release());
}
