use crate::compress::{
    CompressionState, Compressor, Interleaved, MessageBlock, BLOCK_WORDS, STATE_WORDS,
};
use anyhow::{Context, Result};
use byteorder::{ByteOrder, LittleEndian};
use digest::{
    block_buffer::{BlockBuffer, Eager},
    typenum::U64,
};

/// The size in bytes of a RIPEMD-160 digest.
pub const DIGEST_SIZE: usize = 20;

/// Block size, in bytes, of the RIPEMD-160 hash function.
pub const DIGEST_BLOCK_SIZE: usize = 64;

fn decode_block(bytes: &[u8]) -> MessageBlock {
    let mut block = [0u32; BLOCK_WORDS];
    LittleEndian::read_u32_into(bytes, &mut block);
    block
}

/// pad splits a whole message into padded blocks: the message bytes, a 0x80 byte, zeros up
/// to 56 bytes mod 64, then the message length in bits as a little-endian u64.
pub fn pad(data: &[u8]) -> Vec<MessageBlock> {
    let mut buffer = BlockBuffer::<U64, Eager>::default();
    let mut blocks = Vec::with_capacity(data.len() / DIGEST_BLOCK_SIZE + 2);

    buffer.digest_blocks(data, |full| {
        blocks.extend(full.iter().map(|b| decode_block(b)));
    });

    let bitlen = (data.len() as u64) << 3; // number of input bits written
    buffer.len64_padding_le(bitlen, |b| blocks.push(decode_block(b)));

    log::trace!("padded {} bytes into {} blocks", data.len(), blocks.len());
    blocks
}

/// finalize serializes the state words h0..h4 as little-endian bytes.
pub fn finalize(state: &CompressionState) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    LittleEndian::write_u32_into(&state.digest(), &mut out);
    out
}

/// digest computes the RIPEMD-160 digest of a whole message.
pub fn digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
    digest_with(&Interleaved, data)
}

/// digest_with computes the digest using the given line schedule.
pub fn digest_with<C: Compressor>(c: &C, data: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut state = CompressionState::new();
    pad(data)
        .iter()
        .for_each(|block| c.compress(&mut state, block));
    finalize(&state)
}

/// hash_words folds already padded word blocks, in order, into a fresh state and returns
/// the final h0..h4.
///
/// Fails on the first block that does not hold exactly sixteen words, naming its position.
pub fn hash_words<B: AsRef<[u32]>>(blocks: &[B]) -> Result<[u32; STATE_WORDS]> {
    let mut state = CompressionState::new();
    for (i, block) in blocks.iter().enumerate() {
        state
            .compress(block.as_ref())
            .with_context(|| format!("could not compress block {} of {}", i, blocks.len()))?;
    }
    log::trace!("compressed {} blocks", blocks.len());
    Ok(state.digest())
}
