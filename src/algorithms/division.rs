//! Knuth normalized long division (Algorithm D).
//!
//! Both operands are scaled so the divisor's leading chunk is close to the
//! chunk base, which keeps the per-position quotient estimate within a
//! bounded correction distance of the true digit.

use num_traits::Zero;

use crate::magnitude::CHUNK_BASE;
use crate::BigInt;

/// Computes `(quotient, remainder)` truncating toward zero.
///
/// The quotient takes the product of the operand signs; the remainder
/// follows the dividend's sign. [`BigInt::div_rem`] is the fallible entry
/// point.
///
/// # Panics
///
/// Panics if `divisor` is zero.
pub(crate) fn divmod(dividend: &BigInt, divisor: &BigInt) -> (BigInt, BigInt) {
    assert!(!divisor.is_zero(), "division by zero");
    if dividend.is_zero() {
        return (BigInt::zero(), BigInt::zero());
    }

    let top = i64::from(divisor.digits[divisor.digits.len() - 1]);
    let norm = i64::from(CHUNK_BASE) / (top + 1);
    let a = dividend.abs() * norm;
    let b = divisor.abs() * norm;
    let b_len = b.digits.len();
    let b_top = i64::from(b.digits[b_len - 1]);

    let mut quotient_digits = vec![0u32; a.digits.len()];
    let mut remainder = BigInt::zero();

    for i in (0..a.digits.len()).rev() {
        // Shift the running remainder up one chunk and pull in the next
        // dividend chunk.
        remainder = remainder * i64::from(CHUNK_BASE) + i64::from(a.digits[i]);

        // Estimate the quotient digit from the two most significant
        // remainder chunks over the divisor's leading chunk.
        let s1 = if remainder.digits.len() > b_len {
            i64::from(remainder.digits[b_len])
        } else {
            0
        };
        let s2 = if remainder.digits.len() > b_len - 1 {
            i64::from(remainder.digits[b_len - 1])
        } else {
            0
        };
        let mut digit = (i64::from(CHUNK_BASE) * s1 + s2) / b_top;

        // Normalization bounds this correction to a few iterations.
        remainder = remainder - &b * digit;
        while remainder.is_negative() {
            remainder = remainder + &b;
            digit -= 1;
        }
        quotient_digits[i] = digit as u32;
    }

    let mut quotient = BigInt {
        sign: dividend.sign * divisor.sign,
        digits: quotient_digits,
    };
    remainder.sign = dividend.sign;
    quotient.trim();
    remainder.trim();

    // Undo the normalization scaling on the remainder; the recursion
    // bottoms out at the zero-dividend case.
    (quotient, remainder / norm)
}
