/// Bitmask of active layers, bit `n` is set when layer `n` is active.
///
/// The host firmware owns the layer state machine, the keymap only ever reads this mask.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u8);

impl LayerState {
    /// Max number of layers an 8-bit mask can track
    pub const MAX_LAYERS: u8 = 8;

    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Index of the highest active layer. An empty mask yields layer 0.
    pub const fn highest_layer(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            7 - self.0.leading_zeros() as u8
        }
    }

    pub const fn is_active(self, layer: u8) -> bool {
        layer < Self::MAX_LAYERS && self.0 & (1 << layer) != 0
    }

    /// Return a new state with `layer` activated. Layers beyond the mask are ignored.
    #[must_use]
    pub const fn activate(self, layer: u8) -> Self {
        if layer < Self::MAX_LAYERS { Self(self.0 | (1 << layer)) } else { self }
    }

    #[must_use]
    pub const fn deactivate(self, layer: u8) -> Self {
        if layer < Self::MAX_LAYERS { Self(self.0 & !(1 << layer)) } else { self }
    }
}

impl From<u8> for LayerState {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<LayerState> for u8 {
    fn from(state: LayerState) -> Self {
        state.0
    }
}
