#![warn(missing_docs)]
//! A Rust implementation of the [`RIPEMD-160`] compression function.
//!
//! The core is [`compress::CompressionState`], which folds one 512-bit block, already decoded
//! into sixteen little-endian words, through the two 80-round lines of RIPEMD-160 and
//! recombines them into the next chaining value. Padding and finalization for whole messages
//! live in [`ripemd160`]; there is no incremental API.
//!
//! # Example
//! ```
//! use rmd160::{compress::CompressionState, ripemd160};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let mut state = CompressionState::new();
//!   for block in ripemd160::pad("abc".as_bytes()) {
//!     state.compress(&block)?;
//!   }
//!   let output = ripemd160::finalize(&state);
//!   assert_eq!(hex::encode(output), "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
//!
//!   Ok(())
//! }
//! ```
//!
//! [`RIPEMD-160`]: https://homes.esat.kuleuven.be/~bosselae/ripemd160.html
/// `compress` holds the chaining state and the double-line compression step.
pub mod compress;
/// `error` lists the failures a caller can observe.
pub mod error;
/// `ripemd160` pads whole messages into blocks and serializes the final digest.
pub mod ripemd160;
/// `round` selects the boolean function of each round.
pub mod round;
/// `tables` holds the per-round word order, rotation amounts and additive constants.
pub mod tables;

pub use error::Error;
