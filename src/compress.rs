use crate::error::Error;
use crate::round::RoundFunction;
use crate::tables::{
    Line, EXTRA_ROTATE, MESSAGE_INDEX, ROTATION_AMOUNT, ROUNDS, ROUND_CONSTANT,
};
use std::thread;

/// Number of 32-bit words in a message block.
pub const BLOCK_WORDS: usize = 16;

/// Number of 32-bit words in the hash state.
pub const STATE_WORDS: usize = 5;

/// Initial chaining value h0..h4.
pub const INITIAL_STATE: [u32; STATE_WORDS] =
    [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// MessageBlock is one 512-bit block decoded into sixteen little-endian words.
pub type MessageBlock = [u32; BLOCK_WORDS];

/// Working registers A..E of one line.
type Registers = [u32; STATE_WORDS];

/// CompressionState is the five-word chaining value advanced once per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionState {
    h: [u32; STATE_WORDS],
}

impl Default for CompressionState {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressionState {
    /// new returns the state every message starts from.
    pub const fn new() -> Self {
        Self { h: INITIAL_STATE }
    }

    /// from_words resumes from an arbitrary chaining value.
    pub const fn from_words(h: [u32; STATE_WORDS]) -> Self {
        Self { h }
    }

    /// digest returns the state words in order h0..h4.
    pub fn digest(&self) -> [u32; STATE_WORDS] {
        self.h
    }

    /// compress folds one block into the state using the interleaved line schedule.
    ///
    /// The block must hold exactly sixteen words; otherwise InvalidBlockSize is returned and
    /// the state is left as it was.
    pub fn compress(&mut self, block: &[u32]) -> Result<(), Error> {
        self.compress_with(&Interleaved, block)
    }

    /// compress_with is compress with an explicit line schedule.
    pub fn compress_with<C: Compressor>(&mut self, c: &C, block: &[u32]) -> Result<(), Error> {
        let block: &MessageBlock = block.try_into().map_err(|_| {
            log::debug!(
                "rejecting block of {} words, expected {}",
                block.len(),
                BLOCK_WORDS
            );
            Error::InvalidBlockSize {
                expected: BLOCK_WORDS,
                actual: block.len(),
            }
        })?;
        c.compress(self, block);
        Ok(())
    }

    /// compress_block folds a block that is already known to have the right shape.
    pub fn compress_block(&mut self, block: &MessageBlock) {
        Interleaved.compress(self, block)
    }

    // The cross pattern pairs h1 with the left C and right D, h2 with left D and right E, and
    // so on, rotating the line registers but not the previous state index.
    fn recombine(&mut self, left: &Registers, right: &Registers) {
        let [h0, h1, h2, h3, h4] = self.h;
        let [al, bl, cl, dl, el] = *left;
        let [ar, br, cr, dr, er] = *right;

        self.h = [
            h1.wrapping_add(cl).wrapping_add(dr),
            h2.wrapping_add(dl).wrapping_add(er),
            h3.wrapping_add(el).wrapping_add(ar),
            h4.wrapping_add(al).wrapping_add(br),
            h0.wrapping_add(bl).wrapping_add(cr),
        ];
    }
}

/// Compressor schedules the two lines of a block and recombines them into the state.
pub trait Compressor {
    /// compress replaces `state` with its successor after absorbing `block`.
    fn compress(&self, state: &mut CompressionState, block: &MessageBlock);
}

/// Interleaved advances both lines in the same loop, one round of each per iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interleaved;

/// Threaded runs the left line on a scoped worker thread and the right line on the caller,
/// joining both before recombination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Threaded;

#[inline(always)]
fn step(regs: &mut Registers, f: RoundFunction, word: u32, k: u32, s: u32) {
    let [a, b, c, d, e] = *regs;
    let t = a
        .wrapping_add(f.apply(b, c, d))
        .wrapping_add(word)
        .wrapping_add(k)
        .rotate_left(s)
        .wrapping_add(e);
    *regs = [e, t, b, c.rotate_left(EXTRA_ROTATE), d];
}

#[inline(always)]
fn round(line: Line, regs: &mut Registers, block: &MessageBlock, j: usize) {
    let l = line as usize;
    step(
        regs,
        RoundFunction::for_line(line, j),
        block[MESSAGE_INDEX[l][j]],
        ROUND_CONSTANT[l][j],
        ROTATION_AMOUNT[l][j],
    );
}

/// run_line runs all 80 rounds of one line seeded from `h`, returning its final A..E.
pub fn run_line(line: Line, h: &[u32; STATE_WORDS], block: &MessageBlock) -> [u32; STATE_WORDS] {
    let mut regs = *h;
    (0..ROUNDS).for_each(|j| round(line, &mut regs, block, j));
    regs
}

impl Compressor for Interleaved {
    fn compress(&self, state: &mut CompressionState, block: &MessageBlock) {
        let mut left = state.h;
        let mut right = state.h;

        for j in 0..ROUNDS {
            round(Line::Left, &mut left, block, j);
            round(Line::Right, &mut right, block, j);
        }

        state.recombine(&left, &right);
    }
}

impl Compressor for Threaded {
    fn compress(&self, state: &mut CompressionState, block: &MessageBlock) {
        let h = state.h;
        let (left, right) = thread::scope(|s| {
            let left = s.spawn(|| run_line(Line::Left, &h, block));
            let right = run_line(Line::Right, &h, block);
            match left.join() {
                Ok(left) => (left, right),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        });

        state.recombine(&left, &right);
    }
}
