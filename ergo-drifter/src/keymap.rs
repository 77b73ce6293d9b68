use crate::action::KeyAction;
use crate::layout::{COL, ROW};
use crate::{a, k, layout_ergodox_pretty, lt, mo, mt, rshifted, shifted, tt};
use crate::modifier::ModifierCombination;

pub const NUM_LAYER: usize = 4;

/// Default layer, QWERTY
pub const BASE: u8 = 0;
/// Symbols, F-keys, arrows and media
pub const SYMBOL: u8 = 1;
/// F13-F20 and a numpad on the right half
pub const NUMPAD: u8 = 2;
/// Mouse keys and lighting controls
pub const MOUSE: u8 = 3;

pub const LAYER_NAMES: [&str; NUM_LAYER] = ["base", "symbol", "numpad", "mouse"];

const _______: KeyAction = a!(Transparent);

#[rustfmt::skip]
const DEFAULT_KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    layout_ergodox_pretty!(
        k!(Grave),  k!(Kc1),    k!(Kc2),    k!(Kc3),    k!(Kc4),    k!(Kc5),    k!(Minus),          k!(Equal),          k!(Kc6),    k!(Kc7),    k!(Kc8),    k!(Kc9),    k!(Kc0),            k!(Backspace),
        k!(Tab),    k!(Q),      k!(W),      k!(E),      k!(R),      k!(T),      k!(PrintScreen),    shifted!(Kc9),      k!(Y),      k!(U),      k!(I),      k!(O),      k!(P),              k!(Backslash),
        mt!(Escape, ModifierCombination::LCTRL), k!(A), k!(S), k!(D), k!(F),    k!(G),                                  k!(H),      k!(J),      k!(K),      k!(L),      k!(Semicolon),      k!(Quote),
        k!(LShift), k!(Z),      k!(X),      k!(C),      k!(V),      k!(B),      k!(Delete),         shifted!(Kc0),      k!(N),      k!(M),      k!(Comma),  k!(Dot),    k!(Slash),          k!(RShift),
        k!(LCtrl),  k!(LAlt),   _______,    k!(Home),   k!(End),                                                                    k!(LeftBracket), k!(RightBracket), shifted!(LeftBracket), shifted!(RightBracket), k!(RCtrl),
                                                                    tt!(2),     tt!(3),             k!(AudioVolUp),     k!(AudioMute),
                                                                                k!(LGui),           k!(AudioVolDown),
                                                        k!(Space),  mo!(1),     mt!(Escape, ModifierCombination::LALT), mt!(Tab, ModifierCombination::RGUI), lt!(1, Backspace), k!(Enter)
    ),
    layout_ergodox_pretty!(
        k!(Escape), k!(F1),     k!(F2),     k!(F3),     k!(F4),     k!(F5),     _______,            _______,            k!(F6),     k!(F7),     k!(F8),     k!(F9),     k!(F10),            k!(Backspace),
        _______,    shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), k!(Pause), k!(LeftBracket), shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Kc0), shifted!(Backslash),
        _______,    shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5),                        k!(Left),   k!(Down),   k!(Up),     k!(Right),  rshifted!(Semicolon), shifted!(Quote),
        _______,    k!(Kc1),    k!(Kc2),    k!(Kc3),    k!(Kc4),    k!(Kc5),    k!(Backspace),      k!(RightBracket),   k!(Kc6),    k!(Kc7),    k!(Kc8),    k!(Kc9),    k!(Kc0),            k!(RShift),
        _______,    _______,    _______,    k!(PageUp), k!(PageDown),                                                               k!(Home),   k!(End),    _______,    k!(RAlt),   k!(RCtrl),
                                                                    k!(MediaPrevTrack), k!(MediaNextTrack), k!(MediaPrevTrack), k!(MediaNextTrack),
                                                                                k!(MediaPlayPause), k!(MediaPlayPause),
                                                        _______,    _______,    _______,            _______,            _______,    _______
    ),
    layout_ergodox_pretty!(
        _______,    k!(F1),     k!(F2),     k!(F3),     k!(F4),     k!(F5),     _______,            _______,            shifted!(Kc6), shifted!(Kc7), shifted!(Kc5), shifted!(Kc4), _______, _______,
        _______,    k!(F6),     k!(F7),     k!(F8),     k!(F9),     k!(F10),    _______,            shifted!(Kc9),      k!(Up),     k!(Kc7),    k!(Kc8),    k!(Kc9),    k!(KpMinus),        _______,
        _______,    k!(F11),    k!(F12),    k!(F13),    k!(F14),    k!(F15),                                            k!(Down),   k!(Kc4),    k!(Kc5),    k!(Kc6),    k!(KpPlus),         _______,
        _______,    k!(F16),    k!(F17),    k!(F18),    k!(F19),    k!(F20),    _______,            shifted!(Kc0),      k!(Equal),  k!(Kc1),    k!(Kc2),    k!(Kc3),    k!(KpAsterisk),     _______,
        _______,    _______,    _______,    _______,    _______,                                                                    k!(Kc0),    k!(KpDot),  k!(KpComma), k!(KpSlash), _______,
                                                                    _______,    _______,            _______,            _______,
                                                                                _______,            _______,
                                                        _______,    _______,    _______,            _______,            _______,    _______
    ),
    layout_ergodox_pretty!(
        _______,    _______,    _______,    _______,    _______,    _______,    _______,            k!(Bootloader),     _______,    _______,    _______,    _______,    _______,            _______,
        _______,    _______,    k!(MouseWheelLeft), k!(MouseUp), k!(MouseWheelRight), k!(MouseWheelUp), _______, _______,   _______,    _______,    k!(Up),     _______,    _______,            _______,
        k!(Kb0),    _______,    k!(MouseLeft), k!(MouseDown), k!(MouseRight), k!(MouseWheelDown),                       _______,    k!(Left),   k!(Down),   k!(Right),  _______,            k!(Enter),
        k!(Kb1),    k!(RgbVad), k!(RgbVai), _______,    k!(RgbSpd), k!(RgbSpi), k!(Escape),         _______,            _______,    _______,    _______,    _______,    _______,            k!(RShift),
        _______,    _______,    _______,    _______,    _______,                                                                    _______,    _______,    _______,    k!(RAlt),   k!(RCtrl),
                                                                    _______,    _______,            _______,            _______,
                                                                                _______,            _______,
                                                        k!(MouseBtn1), k!(MouseBtn2), k!(MouseBtn3), k!(RGui),          _______,    k!(Space)
    ),
];

/// The ergo-drifter keymap. `Kb0`/`Kb1` on the mouse layer are
/// [`LED_LEVEL`](crate::custom_keycode::LED_LEVEL) and
/// [`TOGGLE_LAYER_COLOR`](crate::custom_keycode::TOGGLE_LAYER_COLOR).
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    DEFAULT_KEYMAP
}

/// Read-only view over a keymap table.
pub struct KeyMap<'a, const ROWS: usize, const COLS: usize, const LAYERS: usize> {
    layers: &'a [[[KeyAction; COLS]; ROWS]; LAYERS],
}

impl<'a, const ROWS: usize, const COLS: usize, const LAYERS: usize> KeyMap<'a, ROWS, COLS, LAYERS> {
    pub const fn new(layers: &'a [[[KeyAction; COLS]; ROWS]; LAYERS]) -> Self {
        Self { layers }
    }

    pub const fn num_layers(&self) -> usize {
        LAYERS
    }

    /// Get a whole layer, `None` if the layer doesn't exist
    pub fn layer(&self, layer: u8) -> Option<&'a [[KeyAction; COLS]; ROWS]> {
        self.layers.get(layer as usize)
    }

    /// Get the action stored at `(row, col)` of `layer`, without looking through transparent keys
    pub fn action_at(&self, layer: u8, row: usize, col: usize) -> Option<KeyAction> {
        self.layer(layer)?.get(row)?.get(col).copied()
    }
}

impl KeyMap<'static, ROW, COL, NUM_LAYER> {
    /// The ergo-drifter keymap
    pub const fn ergo_drifter() -> Self {
        Self::new(&DEFAULT_KEYMAP)
    }
}
