//! Arithmetic algorithms.
//!
//! This module contains the performance-sensitive implementations of:
//! - Karatsuba multiplication over re-based magnitudes
//! - Knuth normalized long division (Algorithm D)

pub(crate) mod division;
pub(crate) mod karatsuba;
