//! The bignum representation, construction and comparison.

use core::cmp::Ordering;

use log::{debug, trace};

use crate::errors::BignumError;
use crate::limb::Limb;


/// Sign of a [`Bignum`]. Zero is always `Positive`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Returns the opposite sign.
    #[must_use]
    pub fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product or quotient of values with signs `self` and `other`.
    #[must_use]
    pub fn product(self, other: Sign) -> Sign {
        if self == other { Sign::Positive } else { Sign::Negative }
    }
}


/// Stack-allocated signed integer of fixed capacity.
///
/// This is backed by a fixed-size array of `N` limbs of type `T` ("digits")
/// plus a separate sign, i.e. a sign-magnitude representation. The magnitude
/// ranges over `[0, 2^(W*N) - 1]` where `W` is the number of bits in `T`.
///
/// The type is `Copy` so that a value can be snapshotted before being used as
/// both source and destination of an operation. The array is not very large
/// (normally some hundred bytes) but copying it recklessly may still show up
/// in profiles.
///
/// Results that do not fit in `N` limbs are truncated to their low `W*N`
/// bits; every routine reports when this happens.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Bignum<T: Limb, const N: usize> {
    pub(crate) sign: Sign,
    /// Digits. `[a, b, c, ...]` represents `a + b*2^W + c*2^(2W) + ...`
    /// where `W` is the number of bits in the digit type.
    pub(crate) base: [T; N],
}

impl<T: Limb, const N: usize> Bignum<T, N> {
    /// Total number of bits in the magnitude.
    pub const CAPACITY_BITS: usize = N * T::BITS as usize;
    /// Size of the raw limb storage produced by [`to_bytes`].
    pub const CAPACITY_BYTES: usize = N * T::BYTES;

    /// Canonical zero.
    pub const ZERO: Self = Bignum { sign: Sign::Positive, base: [T::ZERO; N] };
    /// The largest value that can be represented.
    pub const MAX: Self = Bignum { sign: Sign::Positive, base: [T::MAX; N] };
    /// The smallest value that can be represented, `-MAX`.
    pub const MIN: Self = Bignum { sign: Sign::Negative, base: [T::MAX; N] };

    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn one() -> Self {
        let mut n = Self::ZERO;
        if let Some(d) = n.base.first_mut() {
            *d = T::ONE;
        }
        n
    }

    /// Makes a bignum from raw limbs, least significant first. A zero
    /// magnitude is always given the positive sign.
    pub fn from_limbs(sign: Sign, base: [T; N]) -> Self {
        let mut n = Bignum { sign, base };
        n.normalize();
        n
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns the full limb storage, least significant limb first.
    #[inline]
    pub fn limbs(&self) -> &[T; N] {
        &self.base
    }

    /// Returns the significant limbs `[a, b, c, ...]` such that the magnitude
    /// is `a + b * 2^W + c * 2^(2W) + ...`. Empty for zero.
    pub fn digits(&self) -> &[T] {
        &self.base[..self.significant_limbs()]
    }

    /// Index of the highest non-zero limb plus one, or 0 for zero.
    pub fn significant_limbs(&self) -> usize {
        self.base.iter().rposition(|&d| d != T::ZERO).map_or(0, |i| i + 1)
    }

    /// Returns the number of bits necessary to represent the magnitude. Note
    /// that zero is considered to need 0 bits.
    pub fn bit_length(&self) -> usize {
        match self.digits().last() {
            None => 0,
            Some(&top) => {
                let digitbits = T::BITS as usize;
                self.digits().len() * digitbits - top.leading_zeros() as usize
            }
        }
    }

    /// Returns the `i`-th bit of the magnitude where bit 0 is the least
    /// significant one. Bits beyond the capacity read as zero.
    pub fn get_bit(&self, i: usize) -> bool {
        let digitbits = T::BITS as usize;
        match self.base.get(i / digitbits) {
            Some(&d) => (d >> (i % digitbits) as u32) & T::ONE == T::ONE,
            None => false,
        }
    }

    /// Sets the `i`-th bit of the magnitude. Bits beyond the capacity are
    /// ignored.
    pub fn set_bit(&mut self, i: usize) {
        let digitbits = T::BITS as usize;
        if let Some(d) = self.base.get_mut(i / digitbits) {
            *d = *d | (T::ONE << (i % digitbits) as u32);
        }
    }

    /// Returns the value with its sign flipped. Zero stays positive.
    #[must_use]
    pub fn negate(&self) -> Self {
        Bignum::from_limbs(self.sign.flip(), self.base)
    }

    /// Returns the magnitude as a positive value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Bignum { sign: Sign::Positive, base: self.base }
    }

    #[inline]
    pub(crate) fn normalize(&mut self) {
        if is_zero(self) {
            self.sign = Sign::Positive;
        }
    }
}

impl<T: Limb, const N: usize> Default for Bignum<T, N> {
    fn default() -> Self {
        Self::ZERO
    }
}


/// Resets `n` to canonical zero.
pub fn init<T: Limb, const N: usize>(n: &mut Bignum<T, N>) {
    *n = Bignum::ZERO;
}

/// Copies every limb and the sign of `src` into `dst`.
pub fn copy<T: Limb, const N: usize>(dst: &mut Bignum<T, N>, src: &Bignum<T, N>) {
    *dst = *src;
}

/// Loads `value` into `n`, least significant limb first, with a positive sign.
///
/// Returns `true` if the bignum is narrower than the value and non-zero high
/// bits were dropped; `n` then holds the low `CAPACITY_BITS` bits.
pub fn from_unsigned<T: Limb, const N: usize>(n: &mut Bignum<T, N>, value: u128) -> bool {
    let mut base = [T::ZERO; N];
    let mut v = value;
    for d in base.iter_mut() {
        if v == 0 {
            break;
        }
        *d = T::truncate(v);
        v >>= T::BITS;
    }
    *n = Bignum { sign: Sign::Positive, base };

    let truncated = v != 0;
    if truncated {
        trace!("from_unsigned: {:#x} truncated to {} bits", value, Bignum::<T, N>::CAPACITY_BITS);
    }
    truncated
}

/// Loads `value` into `n` as sign and magnitude. Truncation of the magnitude
/// follows [`from_unsigned`].
pub fn from_signed<T: Limb, const N: usize>(n: &mut Bignum<T, N>, value: i128) -> bool {
    let truncated = from_unsigned(n, value.unsigned_abs());
    if value < 0 {
        n.sign = Sign::Negative;
        n.normalize();
    }
    truncated
}

/// Zeroes `n`, then copies `data` verbatim into the limb storage.
///
/// This is a raw memory load: each limb takes its bytes in the platform's
/// native order, and a short buffer only fills the low limbs. Fails without
/// touching `n` if `data` is longer than `CAPACITY_BYTES`.
pub fn from_bytes<T: Limb, const N: usize>(n: &mut Bignum<T, N>, data: &[u8]) -> Result<(), BignumError> {
    let capacity = Bignum::<T, N>::CAPACITY_BYTES;
    if data.len() > capacity {
        debug!("from_bytes: {} bytes do not fit in {} bytes", data.len(), capacity);
        return Err(BignumError::BufferTooLarge { size: data.len(), capacity });
    }

    let mut base = [T::ZERO; N];
    for (d, chunk) in base.iter_mut().zip(data.chunks(T::BYTES)) {
        *d = T::read_ne_bytes(chunk);
    }
    *n = Bignum { sign: Sign::Positive, base };
    Ok(())
}

/// Copies the full limb storage of `n` into the front of `data`, returning
/// the number of bytes written (always `CAPACITY_BYTES`). The sign is not
/// part of the byte form.
pub fn to_bytes<T: Limb, const N: usize>(data: &mut [u8], n: &Bignum<T, N>) -> Result<usize, BignumError> {
    let capacity = Bignum::<T, N>::CAPACITY_BYTES;
    if data.len() < capacity {
        debug!("to_bytes: {} bytes cannot hold {} bytes", data.len(), capacity);
        return Err(BignumError::BufferTooSmall { size: data.len(), capacity });
    }

    for (d, chunk) in n.base.iter().zip(data.chunks_exact_mut(T::BYTES)) {
        d.write_ne_bytes(chunk);
    }
    Ok(capacity)
}


/// Orders `a` and `b` by magnitude alone, scanning from the most significant
/// limb down.
pub fn compare_magnitude<T: Limb, const N: usize>(a: &Bignum<T, N>, b: &Bignum<T, N>) -> Ordering {
    let lhs = a.base.iter().rev();
    let rhs = b.base.iter().rev();
    lhs.cmp(rhs)
}

/// Orders `a` and `b` as signed values.
pub fn compare<T: Limb, const N: usize>(a: &Bignum<T, N>, b: &Bignum<T, N>) -> Ordering {
    match (a.sign, b.sign) {
        (Sign::Positive, Sign::Negative) => Ordering::Greater,
        (Sign::Negative, Sign::Positive) => Ordering::Less,
        (Sign::Positive, Sign::Positive) => compare_magnitude(a, b),
        // a larger magnitude is a smaller negative value
        (Sign::Negative, Sign::Negative) => compare_magnitude(a, b).reverse(),
    }
}

/// Orders `a` against zero.
pub fn compare_zero<T: Limb, const N: usize>(a: &Bignum<T, N>) -> Ordering {
    if is_zero(a) {
        Ordering::Equal
    } else {
        match a.sign {
            Sign::Positive => Ordering::Greater,
            Sign::Negative => Ordering::Less,
        }
    }
}

/// Returns `true` if every limb is zero, whatever the sign.
pub fn is_zero<T: Limb, const N: usize>(a: &Bignum<T, N>) -> bool {
    a.base.iter().all(|&d| d == T::ZERO)
}


impl<T: Limb, const N: usize> PartialOrd for Bignum<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Limb, const N: usize> Ord for Bignum<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
