//! # ergo-drifter
//!
//! The ergo-drifter layout for the ErgoDox: a four layer keymap and layer indicator LEDs.
//!
//! The crate only describes the keyboard. Matrix scanning, debouncing, HID reporting and
//! layer switching are done by the host firmware, which reads the keymap from
//! [`keymap::get_default_keymap`] and calls the [`hooks::KeymapHooks`] implemented by
//! [`hooks::ErgoDrifter`].

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod action;
pub mod config;
pub mod custom_keycode;
pub mod event;
pub mod gpio;
pub mod hooks;
pub mod indicator;
pub mod keycode;
pub mod keymap;
pub mod layer_state;
pub mod layout;
pub mod layout_macro;
pub mod modifier;

pub use hooks::{ErgoDrifter, KeymapHooks};
pub use keymap::{KeyMap, NUM_LAYER, get_default_keymap};
pub use layer_state::LayerState;
pub use layout::{COL, ROW};
