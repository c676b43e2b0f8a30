/// Number of rounds each line runs per block.
pub const ROUNDS: usize = 80;

/// Number of consecutive rounds sharing one boolean function and one additive constant.
pub const BAND_LEN: usize = 16;

/// Left-rotate applied to the C register on every round of both lines.
pub const EXTRA_ROTATE: u32 = 10;

/// Line identifies one of the two parallel computations of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// The left line, running the boolean functions in ascending band order.
    Left = 0,
    /// The right line, running the boolean functions in mirrored band order.
    Right = 1,
}

impl Line {
    /// Both lines in the order their results feed the recombination.
    pub const ALL: [Line; 2] = [Line::Left, Line::Right];
}

#[rustfmt::skip]
pub(crate) const MESSAGE_INDEX: [[usize; ROUNDS]; 2] = [
    [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
        7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
        3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
        1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
        4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
    ],
    [
        5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
        6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
        15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
        8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
        12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
    ],
];

#[rustfmt::skip]
pub(crate) const ROTATION_AMOUNT: [[u32; ROUNDS]; 2] = [
    [
        11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
        7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
        11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
        11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
        9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
    ],
    [
        8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
        9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
        9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
        15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
        8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
    ],
];

const BAND_CONSTANT: [[u32; ROUNDS / BAND_LEN]; 2] = [
    [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e],
    [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000],
];

pub(crate) const ROUND_CONSTANT: [[u32; ROUNDS]; 2] = spread_bands(BAND_CONSTANT);

// one entry per round, so the compression loop indexes every table the same way
const fn spread_bands(bands: [[u32; ROUNDS / BAND_LEN]; 2]) -> [[u32; ROUNDS]; 2] {
    let mut out = [[0; ROUNDS]; 2];
    let mut line = 0;
    while line < 2 {
        let mut j = 0;
        while j < ROUNDS {
            out[line][j] = bands[line][j / BAND_LEN];
            j += 1;
        }
        line += 1;
    }
    out
}

#[inline]
fn check_round(round: usize) {
    assert!(
        round < ROUNDS,
        "invalid round index {}, expected 0..{}",
        round,
        ROUNDS
    );
}

/// message_index returns which of the sixteen block words the given round of a line consumes.
pub fn message_index(line: Line, round: usize) -> usize {
    check_round(round);
    MESSAGE_INDEX[line as usize][round]
}

/// rotation_amount returns the left-rotate applied to the round sum.
pub fn rotation_amount(line: Line, round: usize) -> u32 {
    check_round(round);
    ROTATION_AMOUNT[line as usize][round]
}

/// round_constant returns the additive constant of the band the round belongs to.
pub fn round_constant(line: Line, round: usize) -> u32 {
    check_round(round);
    ROUND_CONSTANT[line as usize][round]
}
