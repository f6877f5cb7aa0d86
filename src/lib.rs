//! # numerus
//!
//! Arbitrary precision signed integer arithmetic.
//!
//! This crate provides:
//! - A decimal-chunked signed big integer ([`BigInt`])
//! - Karatsuba multiplication with a schoolbook fallback
//! - Knuth normalized long division
//!
//! ## Performance Notes
//!
//! - Magnitudes are stored as base-10^9 chunks, so decimal parsing and
//!   formatting are single linear passes
//! - Multiplication re-bases to 10^6 chunks and runs in O(n^1.585)
//! - Division runs one bounded-correction estimate per dividend chunk

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod algorithms;
pub mod error;
pub mod integer;
mod magnitude;

#[cfg(test)]
mod proptests;

pub use error::BigIntError;
pub use integer::BigInt;
