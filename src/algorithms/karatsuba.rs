//! Karatsuba multiplication over re-based magnitudes.
//!
//! Base-10^9 chunks cannot be accumulated pairwise in i64 without
//! overflowing on long operands, so magnitudes are regrouped to 6-digit
//! chunks, multiplied in that base, then regrouped back.

use crate::magnitude::{self, CHUNK_DIGITS};

/// Chunk width used inside the multiplication, in decimal digits.
const MUL_DIGITS: usize = 6;

/// Numeric base of one multiplication chunk.
const MUL_BASE: i64 = 1_000_000;

/// Karatsuba recursion threshold.
///
/// At or below this length, schoolbook accumulation is faster.
pub(crate) const KARATSUBA_THRESHOLD: usize = 32;

/// Multiplies two trimmed magnitudes, returning a trimmed magnitude.
pub(crate) fn multiply(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut lhs = widen(&magnitude::convert_base(a, CHUNK_DIGITS, MUL_DIGITS));
    let mut rhs = widen(&magnitude::convert_base(b, CHUNK_DIGITS, MUL_DIGITS));

    // The recursive split needs equal power-of-two lengths.
    let size = lhs.len().max(rhs.len()).next_power_of_two();
    lhs.resize(size, 0);
    rhs.resize(size, 0);

    let product = karatsuba_mul(&lhs, &rhs);

    // Propagate carries in the smaller base.
    let mut chunks = Vec::with_capacity(product.len());
    let mut carry = 0;
    for coefficient in product {
        let current = coefficient + carry;
        chunks.push((current % MUL_BASE) as u32);
        carry = current / MUL_BASE;
    }
    debug_assert_eq!(carry, 0);

    magnitude::convert_base(&chunks, MUL_DIGITS, CHUNK_DIGITS)
}

fn widen(chunks: &[u32]) -> Vec<i64> {
    chunks.iter().copied().map(i64::from).collect()
}

/// Karatsuba recursion over equal-length power-of-two coefficient slices.
///
/// Returns a length-`2n` coefficient buffer; carries are not propagated.
fn karatsuba_mul(a: &[i64], b: &[i64]) -> Vec<i64> {
    let n = a.len();
    let mut result = vec![0; 2 * n];

    // Base case: direct accumulation is safe in the smaller chunk base.
    if n <= KARATSUBA_THRESHOLD {
        for i in 0..n {
            for j in 0..n {
                result[i + j] += a[i] * b[j];
            }
        }
        return result;
    }

    let half = n / 2;
    let (a_lo, a_hi) = a.split_at(half);
    let (b_lo, b_hi) = b.split_at(half);

    let lo = karatsuba_mul(a_lo, b_lo);
    let hi = karatsuba_mul(a_hi, b_hi);

    let a_sum: Vec<i64> = a_lo.iter().zip(a_hi).map(|(x, y)| x + y).collect();
    let b_sum: Vec<i64> = b_lo.iter().zip(b_hi).map(|(x, y)| x + y).collect();

    // Middle term: (a_lo + a_hi)(b_lo + b_hi) - lo - hi.
    let mut middle = karatsuba_mul(&a_sum, &b_sum);
    for (m, c) in middle.iter_mut().zip(&lo) {
        *m -= *c;
    }
    for (m, c) in middle.iter_mut().zip(&hi) {
        *m -= *c;
    }

    // Overlapping placements are summed, not overwritten.
    for (i, c) in lo.into_iter().enumerate() {
        result[i] += c;
    }
    for (i, c) in middle.into_iter().enumerate() {
        result[i + half] += c;
    }
    for (i, c) in hi.into_iter().enumerate() {
        result[i + n] += c;
    }
    result
}
