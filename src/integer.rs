//! Arbitrary precision signed integers.
//!
//! This module provides [`BigInt`], a decimal-chunked big integer with
//! value semantics: every operation takes its operands by reference or by
//! value and returns a freshly constructed result.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use std::str::FromStr;

use crate::algorithms::{division, karatsuba};
use crate::error::BigIntError;
use crate::magnitude::{self, CHUNK_BASE};

/// An arbitrary precision signed integer.
///
/// The magnitude is stored as little-endian base-10^9 chunks with no
/// trailing zero chunks; the sign is carried separately and is always
/// positive for zero. All arithmetic preserves this normal form.
///
/// # Examples
///
/// ```
/// use numerus::BigInt;
///
/// let a: BigInt = "123456789101112131415".parse().unwrap();
/// let b = BigInt::new(-42);
/// assert_eq!((a * b).to_string(), "-5185185142246709519430");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// `+1` or `-1`; `+1` whenever the magnitude is empty.
    pub(crate) sign: i8,
    /// Little-endian base-10^9 chunks, no trailing zeros.
    pub(crate) digits: Vec<u32>,
}

impl BigInt {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from(value)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sign: 1,
            digits: self.digits.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.digits.is_empty() {
            0
        } else {
            self.sign
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == -1
    }

    /// Adds one in place, replacing the owned representation.
    pub fn increment(&mut self) {
        *self += 1;
    }

    /// Subtracts one in place, replacing the owned representation.
    pub fn decrement(&mut self) {
        *self -= 1;
    }

    /// Computes self^exp using binary exponentiation.
    #[must_use]
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp >>= 1;
        }
        result
    }

    /// Truncating division, returning quotient and remainder together.
    ///
    /// The quotient truncates toward zero and the remainder takes the
    /// dividend's sign, matching native integer division.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), BigIntError> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(division::divmod(self, divisor))
    }

    /// Converts to an i32, wrapping silently if the value is out of range.
    #[must_use]
    pub fn to_i32(&self) -> i32 {
        let mut value = 0i32;
        for &chunk in self.digits.iter().rev() {
            value = value
                .wrapping_mul(CHUNK_BASE as i32)
                .wrapping_add(chunk as i32);
        }
        value.wrapping_mul(i32::from(self.sign))
    }

    /// Converts to an i64, wrapping silently if the value is out of range.
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        let mut value = 0i64;
        for &chunk in self.digits.iter().rev() {
            value = value
                .wrapping_mul(i64::from(CHUNK_BASE))
                .wrapping_add(i64::from(chunk));
        }
        value.wrapping_mul(i64::from(self.sign))
    }

    /// Converts the magnitude to a u64, ignoring the sign and wrapping
    /// silently if the magnitude is out of range.
    #[must_use]
    pub fn to_u64(&self) -> u64 {
        let mut value = 0u64;
        for &chunk in self.digits.iter().rev() {
            value = value
                .wrapping_mul(u64::from(CHUNK_BASE))
                .wrapping_add(u64::from(chunk));
        }
        value
    }

    /// Restores the normal form: no trailing zero chunks, positive zero.
    pub(crate) fn trim(&mut self) {
        magnitude::trim(&mut self.digits);
        if self.digits.is_empty() {
            self.sign = 1;
        }
    }
}

/// Signed addition; differing signs delegate to subtraction of the
/// negation so one carry loop serves both operators.
fn add_values(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.sign != rhs.sign {
        return sub_values(lhs, &-rhs);
    }
    let mut result = BigInt {
        sign: lhs.sign,
        digits: magnitude::add(&lhs.digits, &rhs.digits),
    };
    result.trim();
    result
}

/// Signed subtraction; the smaller magnitude is subtracted from the larger
/// and the sign follows whichever operand dominated.
fn sub_values(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.sign != rhs.sign {
        return add_values(lhs, &-rhs);
    }
    let mut result = match magnitude::cmp(&lhs.digits, &rhs.digits) {
        Ordering::Less => BigInt {
            sign: -lhs.sign,
            digits: magnitude::sub(&rhs.digits, &lhs.digits),
        },
        _ => BigInt {
            sign: lhs.sign,
            digits: magnitude::sub(&lhs.digits, &rhs.digits),
        },
    };
    result.trim();
    result
}

fn mul_values(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let mut result = BigInt {
        sign: lhs.sign * rhs.sign,
        digits: karatsuba::multiply(&lhs.digits, &rhs.digits),
    };
    result.trim();
    result
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self {
            sign: 1,
            digits: Vec::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self {
            sign: 1,
            digits: vec![1],
        }
    }

    fn is_one(&self) -> bool {
        self.sign == 1 && self.digits == [1]
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == -1 {
            write!(f, "-")?;
        }
        match self.digits.split_last() {
            None => write!(f, "0"),
            Some((top, rest)) => {
                write!(f, "{top}")?;
                for chunk in rest.iter().rev() {
                    write!(f, "{chunk:09}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, digits) = if let Some(rest) = s.strip_prefix('-') {
            (-1, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (1, rest)
        } else {
            (1, s)
        };
        if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(BigIntError::InvalidFormat(s.to_owned()));
        }
        let mut value = Self {
            sign,
            digits: magnitude::from_decimal(digits),
        };
        value.trim();
        Ok(value)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.sign != other.sign {
            return self.sign.cmp(&other.sign);
        }
        let magnitudes = magnitude::cmp(&self.digits, &other.digits);
        if self.sign == 1 {
            magnitudes
        } else {
            magnitudes.reverse()
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<i64> for BigInt {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::from(*other)
    }
}

impl PartialOrd<i64> for BigInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&Self::from(*other)))
    }
}

impl PartialEq<BigInt> for i64 {
    fn eq(&self, other: &BigInt) -> bool {
        BigInt::from(*self) == *other
    }
}

impl PartialOrd<BigInt> for i64 {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(BigInt::from(*self).cmp(other))
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        BigInt {
            sign: if self.digits.is_empty() { 1 } else { -self.sign },
            digits: self.digits.clone(),
        }
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.digits.is_empty() {
            self.sign = -self.sign;
        }
        self
    }
}

// Arithmetic operations

impl Add for BigInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add_values(&self, &rhs)
    }
}

impl Add<&BigInt> for BigInt {
    type Output = Self;

    fn add(self, rhs: &BigInt) -> Self::Output {
        add_values(&self, rhs)
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        add_values(self, rhs)
    }
}

impl Sub for BigInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_values(&self, &rhs)
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = Self;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        sub_values(&self, rhs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        sub_values(self, rhs)
    }
}

impl Mul for BigInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_values(&self, &rhs)
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = Self;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        mul_values(&self, rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_values(self, rhs)
    }
}

impl Div for BigInt {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        division::divmod(&self, &rhs).0
    }
}

impl Div<&BigInt> for BigInt {
    type Output = Self;

    fn div(self, rhs: &BigInt) -> Self::Output {
        division::divmod(&self, rhs).0
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        division::divmod(self, rhs).0
    }
}

impl Rem for BigInt {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        division::divmod(&self, &rhs).1
    }
}

impl Rem<&BigInt> for BigInt {
    type Output = Self;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        division::divmod(&self, rhs).1
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: Self) -> Self::Output {
        division::divmod(self, rhs).1
    }
}

// Mixed operations against native integers, promoted by construction.

macro_rules! mixed_binop {
    ($trait:ident, $method:ident, $core:expr) => {
        impl $trait<i64> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: i64) -> BigInt {
                $core(&self, &BigInt::from(rhs))
            }
        }

        impl $trait<i64> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: i64) -> BigInt {
                $core(self, &BigInt::from(rhs))
            }
        }

        impl $trait<BigInt> for i64 {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $core(&BigInt::from(self), &rhs)
            }
        }
    };
}

mixed_binop!(Add, add, add_values);
mixed_binop!(Sub, sub, sub_values);
mixed_binop!(Mul, mul, mul_values);
mixed_binop!(Div, div, |a, b| division::divmod(a, b).0);
mixed_binop!(Rem, rem, |a, b| division::divmod(a, b).1);

// Compound assignment: the binary operators are the single source of
// truth; these replace the owned representation with a fresh result.

macro_rules! compound_assign {
    ($trait:ident, $method:ident, $core:expr) => {
        impl $trait for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                *self = $core(&*self, &rhs);
            }
        }

        impl $trait<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                *self = $core(&*self, rhs);
            }
        }

        impl $trait<i64> for BigInt {
            fn $method(&mut self, rhs: i64) {
                *self = $core(&*self, &BigInt::from(rhs));
            }
        }
    };
}

compound_assign!(AddAssign, add_assign, add_values);
compound_assign!(SubAssign, sub_assign, sub_values);
compound_assign!(MulAssign, mul_assign, mul_values);
compound_assign!(DivAssign, div_assign, |a, b| division::divmod(a, b).0);
compound_assign!(RemAssign, rem_assign, |a, b| division::divmod(a, b).1);

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { -1 } else { 1 };
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::new();
        while magnitude > 0 {
            digits.push((magnitude % u64::from(CHUNK_BASE)) as u32);
            magnitude /= u64::from(CHUNK_BASE);
        }
        Self { sign, digits }
    }
}

impl From<u64> for BigInt {
    fn from(mut value: u64) -> Self {
        let mut digits = Vec::new();
        while value > 0 {
            digits.push((value % u64::from(CHUNK_BASE)) as u32);
            value /= u64::from(CHUNK_BASE);
        }
        Self { sign: 1, digits }
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}
