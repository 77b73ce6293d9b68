/// Raw key event from the key matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn new(row: u8, col: u8, pressed: bool) -> Self {
        Self { row, col, pressed }
    }
}
