use crate::tables::{Line, BAND_LEN, ROUNDS};

/// RoundFunction is one of the five boolean combinators mixing three registers per round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundFunction {
    /// `x ^ y ^ z`
    Xor,
    /// `(x & y) | (!x & z)`
    ChooseX,
    /// `(x | !y) ^ z`
    OrNotXor,
    /// `(x & z) | (y & !z)`
    ChooseZ,
    /// `x ^ (y | !z)`
    XorOrNot,
}

impl RoundFunction {
    /// for_round selects the combinator of the band `round` falls into.
    ///
    /// Panics if `round` is not in `0..80`.
    pub fn for_round(round: usize) -> Self {
        match round / BAND_LEN {
            _ if round >= ROUNDS => panic!(
                "invalid round index {}, expected 0..{}",
                round, ROUNDS
            ),
            0 => RoundFunction::Xor,
            1 => RoundFunction::ChooseX,
            2 => RoundFunction::OrNotXor,
            3 => RoundFunction::ChooseZ,
            _ => RoundFunction::XorOrNot,
        }
    }

    /// for_line selects the combinator a line uses at `round`.
    /// The right line walks the bands backwards, using the function of round `79 - round`.
    pub fn for_line(line: Line, round: usize) -> Self {
        match line {
            Line::Left => Self::for_round(round),
            Line::Right => {
                if round >= ROUNDS {
                    panic!("invalid round index {}, expected 0..{}", round, ROUNDS);
                }
                Self::for_round(ROUNDS - 1 - round)
            }
        }
    }

    /// apply evaluates the combinator on three words.
    #[inline(always)]
    pub fn apply(self, x: u32, y: u32, z: u32) -> u32 {
        match self {
            RoundFunction::Xor => x ^ y ^ z,
            RoundFunction::ChooseX => (x & y) | (!x & z),
            RoundFunction::OrNotXor => (x | !y) ^ z,
            RoundFunction::ChooseZ => (x & z) | (y & !z),
            RoundFunction::XorOrNot => x ^ (y | !z),
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn bands() {
        let expected = [
            RoundFunction::Xor,
            RoundFunction::ChooseX,
            RoundFunction::OrNotXor,
            RoundFunction::ChooseZ,
            RoundFunction::XorOrNot,
        ];
        (0..ROUNDS).for_each(|j| {
            assert_eq!(
                RoundFunction::for_round(j),
                expected[j / BAND_LEN],
                "unexpected function at round {}",
                j
            )
        });
        assert_eq!(RoundFunction::for_round(15), RoundFunction::Xor);
        assert_eq!(RoundFunction::for_round(16), RoundFunction::ChooseX);
        assert_eq!(RoundFunction::for_round(79), RoundFunction::XorOrNot);
    }

    #[test]
    fn right_line_is_mirrored() {
        (0..ROUNDS).for_each(|j| {
            assert_eq!(
                RoundFunction::for_line(Line::Right, j),
                RoundFunction::for_round(79 - j)
            );
            assert_eq!(
                RoundFunction::for_line(Line::Left, j),
                RoundFunction::for_round(j)
            );
        });
        assert_eq!(
            RoundFunction::for_line(Line::Right, 0),
            RoundFunction::XorOrNot
        );
        assert_ne!(
            RoundFunction::for_line(Line::Left, 20),
            RoundFunction::for_line(Line::Right, 20)
        );
    }

    #[test]
    fn truth_tables() {
        let (x, y, z) = (0xf0f0f0f0u32, 0xcccccccc, 0xaaaaaaaa);

        assert_eq!(RoundFunction::Xor.apply(x, y, z), 0x96969696);
        assert_eq!(RoundFunction::ChooseX.apply(x, y, z), 0xcacacaca);
        assert_eq!(RoundFunction::OrNotXor.apply(x, y, z), 0x59595959);
        assert_eq!(RoundFunction::ChooseZ.apply(x, y, z), 0xe4e4e4e4);
        assert_eq!(RoundFunction::XorOrNot.apply(x, y, z), 0x2d2d2d2d);
    }

    #[test]
    #[should_panic(expected = "invalid round index 80")]
    fn out_of_range_round() {
        RoundFunction::for_round(80);
    }

    #[test]
    #[should_panic(expected = "invalid round index 81")]
    fn out_of_range_mirrored_round() {
        RoundFunction::for_line(Line::Right, 81);
    }
}
