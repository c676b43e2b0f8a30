use anyhow::Result;
use rmd160::compress::{CompressionState, Interleaved, Threaded, BLOCK_WORDS};
use rmd160::ripemd160::{digest, digest_with, finalize, hash_words, pad};
use rmd160::Error;

/// Published RIPEMD-160 vectors
const VECTORS: &[(&str, &str)] = &[
    ("", "9c1185a5c5e9fc54612808977ee8f548b2258d31"),
    ("a", "0bdc9d2d256b3ee9daae347be6f4dc835a467ffe"),
    ("abc", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"),
    ("message digest", "5d0689ef49d2fae572b881b123a85ffa21595f36"),
    (
        "The quick brown fox jumps over the lazy dog",
        "37f332f68db77bd9d7edd4969571ad671cf9dd3b",
    ),
    (
        "The quick brown fox jumps over the lazy cog",
        "132072df690933835eb8b6ad0b77e7b6f14acad7",
    ),
];

#[test]
fn test_digest_vectors() {
    for (input, expected) in VECTORS {
        assert_eq!(
            hex::encode(digest(input.as_bytes())),
            *expected,
            "digest mismatch for {:?}",
            input
        );
        assert_eq!(
            hex::encode(digest_with(&Threaded, input.as_bytes())),
            *expected,
            "threaded digest mismatch for {:?}",
            input
        );
    }
}

#[test]
fn test_block_by_block() -> Result<()> {
    for (input, expected) in VECTORS {
        let mut state = CompressionState::new();
        for block in pad(input.as_bytes()) {
            state.compress_with(&Interleaved, &block)?;
        }
        assert_eq!(hex::encode(finalize(&state)), *expected);

        let words = hash_words(&pad(input.as_bytes())[..])?;
        assert_eq!(words, state.digest());
    }
    Ok(())
}

#[test]
fn test_wrong_block_size_leaves_state() {
    let mut state = CompressionState::new();
    state.compress(&pad(b"a")[0]).unwrap();
    let before = state;

    let long = [0u32; BLOCK_WORDS + 1];
    assert_eq!(
        state.compress(&long),
        Err(Error::InvalidBlockSize {
            expected: BLOCK_WORDS,
            actual: BLOCK_WORDS + 1
        })
    );
    assert_eq!(state, before);
    assert_eq!(
        hex::encode(finalize(&state)),
        "0bdc9d2d256b3ee9daae347be6f4dc835a467ffe"
    );
}
