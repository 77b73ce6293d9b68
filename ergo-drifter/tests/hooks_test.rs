pub mod common;

use ergo_drifter::action::{Action, KeyAction};
use ergo_drifter::custom_keycode::CustomKeycode;
use ergo_drifter::event::KeyEvent;
use ergo_drifter::indicator::LedPattern;
use ergo_drifter::keymap::{BASE, KeyMap, MOUSE, NUMPAD, SYMBOL};
use ergo_drifter::{ErgoDrifter, KeymapHooks, LayerState, k};

use crate::common::{expect_config, verify_pins};

#[test]
fn test_process_record_continues() {
    let mut keyboard = ErgoDrifter::new(expect_config(&[]));
    let keymap = KeyMap::ergo_drifter();

    for layer in [BASE, SYMBOL, NUMPAD, MOUSE] {
        for row in 0..ergo_drifter::ROW {
            for col in 0..ergo_drifter::COL {
                let action = keymap.action_at(layer, row, col).unwrap();
                for pressed in [true, false] {
                    assert!(keyboard.process_record(action, KeyEvent::new(row as u8, col as u8, pressed)));
                }
            }
        }
    }
    // Custom keycodes are passed on too
    let rgb_sld = KeyAction::Single(Action::Key(CustomKeycode::RgbSld.keycode()));
    assert!(keyboard.process_record(rgb_sld, KeyEvent::new(0, 0, true)));

    // No layer change, so no LED was touched
    verify_pins(keyboard.into_indicator().release());
}

#[test]
fn test_layer_state_set_returns_state_unchanged() {
    let states = [0b0000_0001u8, 0b0000_0011, 0b0000_0101, 0b0010_0001, 0];
    let patterns = [
        LedPattern::OFF,
        LedPattern::new(true, false, false),
        LedPattern::new(false, true, false),
        LedPattern::new(true, false, true),
        LedPattern::OFF,
    ];
    let mut keyboard = ErgoDrifter::new(expect_config(&patterns));
    for bits in states {
        let state = LayerState::new(bits);
        assert_eq!(keyboard.layer_state_set(state), state);
    }
    assert_eq!(keyboard.indicator().pattern(), LedPattern::OFF);
    verify_pins(keyboard.into_indicator().release());
}

#[test]
fn test_default_hooks() {
    struct Passthrough;
    impl KeymapHooks for Passthrough {}

    let mut hooks = Passthrough;
    assert!(hooks.process_record(k!(A), KeyEvent::new(0, 0, true)));
    let state = LayerState::new(0b1000_0001);
    assert_eq!(hooks.layer_state_set(state), state);
}

#[test]
fn test_momentary_symbol_layer() {
    // Holding MO(1) on the base layer: layer 1 becomes active and LED1 lights up
    let keymap = KeyMap::ergo_drifter();
    let (row, col) = ergo_drifter::layout::PRETTY_ORDER[71];
    let action = keymap.action_at(BASE, row, col).unwrap();
    assert_eq!(action.held_layer(), Some(SYMBOL));

    let mut keyboard = ErgoDrifter::new(expect_config(&[LedPattern::new(true, false, false), LedPattern::OFF]));
    assert!(keyboard.process_record(action, KeyEvent::new(row as u8, col as u8, true)));
    let held = LayerState::new(1).activate(SYMBOL);
    assert_eq!(keyboard.layer_state_set(held), held);
    assert!(keyboard.process_record(action, KeyEvent::new(row as u8, col as u8, false)));
    let released = held.deactivate(SYMBOL);
    assert_eq!(keyboard.layer_state_set(released), released);
    verify_pins(keyboard.into_indicator().release());
}
