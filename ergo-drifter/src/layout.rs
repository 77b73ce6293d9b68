//! Physical layout of the ErgoDox.
//!
//! The matrix is scanned as 14 rows of 6 columns, rows 0..7 belong to the left
//! half and rows 7..14 to the right half. Not every matrix slot has a switch, see
//! [`HOLES`].

/// Number of rows in the key matrix
pub const ROW: usize = 14;
/// Number of columns in the key matrix
pub const COL: usize = 6;
/// Number of physical keys
pub const NUM_KEYS: usize = 76;

/// Matrix positions without a switch. `layout_ergodox_pretty!` fills them with `KeyAction::No`.
pub const HOLES: [(usize, usize); ROW * COL - NUM_KEYS] = [
    (0, 5),
    (5, 4),
    (6, 2),
    (6, 4),
    (7, 2),
    (7, 4),
    (8, 4),
    (13, 5),
];

/// Matrix position `(row, col)` of each physical key, in the order `layout_ergodox_pretty!` takes them:
/// left and right halves row by row, then the two thumb clusters.
#[rustfmt::skip]
pub const PRETTY_ORDER: [(usize, usize); NUM_KEYS] = [
    (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0),
    (0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1), (7, 1), (8, 1), (9, 1), (10, 1), (11, 1), (12, 1), (13, 1),
    (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (8, 2), (9, 2), (10, 2), (11, 2), (12, 2), (13, 2),
    (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (6, 3), (7, 3), (8, 3), (9, 3), (10, 3), (11, 3), (12, 3), (13, 3),
    (0, 4), (1, 4), (2, 4), (3, 4), (4, 4), (9, 4), (10, 4), (11, 4), (12, 4), (13, 4),
    (5, 5), (6, 5), (7, 5), (8, 5),
    (4, 5), (9, 5),
    (3, 5), (2, 5), (1, 5), (12, 5), (11, 5), (10, 5),
];

/// Returns `true` if a switch is wired at the given matrix position
pub fn is_populated(row: usize, col: usize) -> bool {
    row < ROW && col < COL && !HOLES.contains(&(row, col))
}

/// Whether a matrix row belongs to the left half
pub fn is_left_hand(row: usize) -> bool {
    row < ROW / 2
}

/// Build one keymap layer from the 76 keys in the order they are printed on the board.
///
/// ```ignore
/// layout_ergodox_pretty!(
///     k!(Grave), k!(Kc1), /* ... */ k!(Enter)
/// )
/// ```
#[macro_export]
macro_rules! layout_ergodox_pretty {
    (
        $l00:expr, $l01:expr, $l02:expr, $l03:expr, $l04:expr, $l05:expr, $l06:expr, $r00:expr, $r01:expr, $r02:expr, $r03:expr, $r04:expr, $r05:expr, $r06:expr,
        $l10:expr, $l11:expr, $l12:expr, $l13:expr, $l14:expr, $l15:expr, $l16:expr, $r10:expr, $r11:expr, $r12:expr, $r13:expr, $r14:expr, $r15:expr, $r16:expr,
        $l20:expr, $l21:expr, $l22:expr, $l23:expr, $l24:expr, $l25:expr, $r21:expr, $r22:expr, $r23:expr, $r24:expr, $r25:expr, $r26:expr,
        $l30:expr, $l31:expr, $l32:expr, $l33:expr, $l34:expr, $l35:expr, $l36:expr, $r30:expr, $r31:expr, $r32:expr, $r33:expr, $r34:expr, $r35:expr, $r36:expr,
        $l40:expr, $l41:expr, $l42:expr, $l43:expr, $l44:expr, $r42:expr, $r43:expr, $r44:expr, $r45:expr, $r46:expr,
        $l55:expr, $l56:expr, $r50:expr, $r51:expr,
        $l54:expr, $r52:expr,
        $l53:expr, $l52:expr, $l51:expr, $r55:expr, $r54:expr, $r53:expr $(,)?
    ) => {
        [
            [$l00, $l10, $l20, $l30, $l40, $crate::action::KeyAction::No],
            [$l01, $l11, $l21, $l31, $l41, $l51],
            [$l02, $l12, $l22, $l32, $l42, $l52],
            [$l03, $l13, $l23, $l33, $l43, $l53],
            [$l04, $l14, $l24, $l34, $l44, $l54],
            [$l05, $l15, $l25, $l35, $crate::action::KeyAction::No, $l55],
            [$l06, $l16, $crate::action::KeyAction::No, $l36, $crate::action::KeyAction::No, $l56],
            [$r00, $r10, $crate::action::KeyAction::No, $r30, $crate::action::KeyAction::No, $r50],
            [$r01, $r11, $r21, $r31, $crate::action::KeyAction::No, $r51],
            [$r02, $r12, $r22, $r32, $r42, $r52],
            [$r03, $r13, $r23, $r33, $r43, $r53],
            [$r04, $r14, $r24, $r34, $r44, $r54],
            [$r05, $r15, $r25, $r35, $r45, $r55],
            [$r06, $r16, $r26, $r36, $r46, $crate::action::KeyAction::No],
        ]
    };
}
