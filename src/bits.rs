//! Bit shifts and limb-wise bitwise operations.
//!
//! Shifts act on the magnitude and keep the sign, so shifting a negative
//! value right rounds its magnitude toward zero. The bitwise operations see
//! only the stored limbs; sign-magnitude values have no two's-complement
//! meaning here, and their results are always positive.

use log::trace;

use crate::bignum::{Bignum, Sign};
use crate::limb::Limb;


/// `r = a << k`.
///
/// Composed of a whole-limb move by `k / W` positions and a sub-limb shift by
/// `k % W` bits carried across limb boundaries. Returns `true` if any set bit
/// was pushed past the top of the capacity.
pub fn shift_left<T: Limb, const N: usize>(r: &mut Bignum<T, N>, a: &Bignum<T, N>, k: usize) -> bool {
    let digitbits = T::BITS as usize;
    let digits = k / digitbits;
    let bits = (k % digitbits) as u32;

    let len = a.bit_length();
    let overflow = len != 0 && k > Bignum::<T, N>::CAPACITY_BITS - len;

    let mut ret = [T::ZERO; N];
    for i in (digits..N).rev() {
        let src = i - digits;
        let mut v = a.base[src] << bits;
        if bits > 0 && src > 0 {
            v = v | (a.base[src - 1] >> (T::BITS - bits));
        }
        ret[i] = v;
    }

    if overflow {
        trace!("shift_left: {} bit value shifted by {} truncated", len, k);
    }
    *r = Bignum::from_limbs(a.sign, ret);
    overflow
}

/// `r = a >> k`. Bits shifted below bit 0 are discarded.
pub fn shift_right<T: Limb, const N: usize>(r: &mut Bignum<T, N>, a: &Bignum<T, N>, k: usize) {
    let digitbits = T::BITS as usize;
    let digits = k / digitbits;
    let bits = (k % digitbits) as u32;

    let mut ret = [T::ZERO; N];
    for i in 0..N.saturating_sub(digits) {
        let src = i + digits;
        let mut v = a.base[src] >> bits;
        if bits > 0 && src + 1 < N {
            v = v | (a.base[src + 1] << (T::BITS - bits));
        }
        ret[i] = v;
    }

    *r = Bignum::from_limbs(a.sign, ret);
}

/// `r = a * 2^k`; same contract as [`shift_left`].
#[inline]
pub fn mul_pow2<T: Limb, const N: usize>(r: &mut Bignum<T, N>, a: &Bignum<T, N>, k: usize) -> bool {
    shift_left(r, a, k)
}


/// `r = a & b` over the stored limbs.
pub fn bitwise_and<T: Limb, const N: usize>(r: &mut Bignum<T, N>, a: &Bignum<T, N>, b: &Bignum<T, N>) {
    let mut ret = [T::ZERO; N];
    for (d, (&x, &y)) in ret.iter_mut().zip(a.base.iter().zip(&b.base)) {
        *d = x & y;
    }
    *r = Bignum { sign: Sign::Positive, base: ret };
}

/// `r = a | b` over the stored limbs.
pub fn bitwise_or<T: Limb, const N: usize>(r: &mut Bignum<T, N>, a: &Bignum<T, N>, b: &Bignum<T, N>) {
    let mut ret = [T::ZERO; N];
    for (d, (&x, &y)) in ret.iter_mut().zip(a.base.iter().zip(&b.base)) {
        *d = x | y;
    }
    *r = Bignum { sign: Sign::Positive, base: ret };
}

/// `r = a ^ b` over the stored limbs.
pub fn bitwise_xor<T: Limb, const N: usize>(r: &mut Bignum<T, N>, a: &Bignum<T, N>, b: &Bignum<T, N>) {
    let mut ret = [T::ZERO; N];
    for (d, (&x, &y)) in ret.iter_mut().zip(a.base.iter().zip(&b.base)) {
        *d = x ^ y;
    }
    *r = Bignum { sign: Sign::Positive, base: ret };
}
