//! Addition, subtraction, multiplication and exponentiation.
//!
//! Every routine builds its result in a local limb array and writes the
//! destination once at the end, so a destination may safely be a copy of one
//! of its sources. The returned `bool` is `true` when the mathematical result
//! needed more than `N` limbs and its high part was dropped.

use core::cmp::Ordering;

use log::{debug, trace};

use crate::bignum::{compare_magnitude, Bignum, Sign};
use crate::errors::BignumError;
use crate::limb::Limb;


/// `dst = (a_sign a) + (b_sign b)`, the primitive behind [`add`] and
/// [`subtract`].
fn signed_add<T: Limb, const N: usize>(
    dst: &mut Bignum<T, N>,
    a: &Bignum<T, N>, a_sign: Sign,
    b: &Bignum<T, N>, b_sign: Sign,
) -> bool {
    let mut ret = [T::ZERO; N];

    if a_sign == b_sign {
        let mut carry = false;
        for (r, (&x, &y)) in ret.iter_mut().zip(a.base.iter().zip(&b.base)) {
            let (c, v) = x.full_add(y, carry);
            *r = v;
            carry = c;
        }
        if carry {
            trace!("add: carry out of limb {} dropped", N);
        }
        *dst = Bignum::from_limbs(a_sign, ret);
        carry
    } else {
        // the result takes the sign of the operand with the larger magnitude
        let (big, big_sign, low) = match compare_magnitude(a, b) {
            Ordering::Less => (b, b_sign, a),
            _ => (a, a_sign, b),
        };

        let mut borrow = false;
        for (r, (&x, &y)) in ret.iter_mut().zip(big.base.iter().zip(&low.base)) {
            let (c, v) = x.full_sub(y, borrow);
            *r = v;
            borrow = c;
        }
        debug_assert!(!borrow);
        *dst = Bignum::from_limbs(big_sign, ret);
        false
    }
}

/// `r = a + b`.
pub fn add<T: Limb, const N: usize>(r: &mut Bignum<T, N>, a: &Bignum<T, N>, b: &Bignum<T, N>) -> bool {
    signed_add(r, a, a.sign, b, b.sign)
}

/// `r = a - b`.
pub fn subtract<T: Limb, const N: usize>(r: &mut Bignum<T, N>, a: &Bignum<T, N>, b: &Bignum<T, N>) -> bool {
    signed_add(r, a, a.sign, b, b.sign.flip())
}


/// Adds `v` into `ret[k]` and ripples the carry upward. Returns `true` if a
/// non-zero amount fell off the top of `ret`.
fn add_at<T: Limb>(ret: &mut [T], k: usize, v: T) -> bool {
    if v == T::ZERO {
        return false;
    }
    let Some(d) = ret.get_mut(k) else {
        return true;
    };
    let (mut carry, s) = d.full_add(v, false);
    *d = s;
    for d in ret.iter_mut().skip(k + 1) {
        if !carry {
            break;
        }
        let (c, s) = d.full_add(T::ZERO, true);
        *d = s;
        carry = c;
    }
    carry
}

/// `r = a * b` by schoolbook convolution over the significant limbs.
///
/// Partial products landing at or above limb `N` are dropped and reported.
pub fn multiply<T: Limb, const N: usize>(r: &mut Bignum<T, N>, a: &Bignum<T, N>, b: &Bignum<T, N>) -> bool {
    let aa = a.digits();
    let bb = b.digits();
    let mut ret = [T::ZERO; N];
    let mut overflow = false;

    for (i, &bi) in bb.iter().enumerate() {
        if bi == T::ZERO { continue; }

        // `i < N` since `bb` has at most `N` limbs
        let width = aa.len().min(N - i);
        if width < aa.len() {
            overflow = true;
        }

        let mut carry = T::ZERO;
        for (j, &aj) in aa[..width].iter().enumerate() {
            let (c, v) = aj.full_mul_add(bi, ret[i + j], carry);
            ret[i + j] = v;
            carry = c;
        }
        // rows run low to high, so nothing has been written at `i + width` yet
        match ret.get_mut(i + width) {
            Some(d) => *d = carry,
            None => overflow |= carry != T::ZERO,
        }
    }

    if overflow {
        trace!("multiply: product of {} and {} limbs truncated to {}", aa.len(), bb.len(), N);
    }
    *r = Bignum::from_limbs(a.sign.product(b.sign), ret);
    overflow
}

/// `r = a * a`.
///
/// Each cross product `a[i] * a[j]` with `i < j` is computed once, the sum is
/// doubled by a one-bit shift and the squares `a[i]^2` are added on the
/// diagonal.
pub fn square<T: Limb, const N: usize>(r: &mut Bignum<T, N>, a: &Bignum<T, N>) -> bool {
    let aa = a.digits();
    let mut ret = [T::ZERO; N];
    let mut overflow = false;

    for (i, &ai) in aa.iter().enumerate() {
        let cross = &aa[i + 1..];
        if ai == T::ZERO || cross.is_empty() { continue; }

        let start = 2 * i + 1;
        let width = cross.len().min(N.saturating_sub(start));
        if width < cross.len() {
            overflow = true;
        }

        let mut carry = T::ZERO;
        for (j, &aj) in cross[..width].iter().enumerate() {
            let (c, v) = ai.full_mul_add(aj, ret[start + j], carry);
            ret[start + j] = v;
            carry = c;
        }
        match ret.get_mut(start + width) {
            Some(d) => *d = carry,
            None => overflow |= carry != T::ZERO,
        }
    }

    let mut carry = false;
    for d in ret.iter_mut() {
        let top = (*d >> (T::BITS - 1)) == T::ONE;
        *d = (*d << 1) | if carry { T::ONE } else { T::ZERO };
        carry = top;
    }
    overflow |= carry;

    for (i, &ai) in aa.iter().enumerate() {
        if ai == T::ZERO { continue; }
        let (hi, lo) = ai.full_mul_add(ai, T::ZERO, T::ZERO);
        overflow |= add_at(&mut ret, 2 * i, lo);
        overflow |= add_at(&mut ret, 2 * i + 1, hi);
    }

    if overflow {
        trace!("square: square of {} limbs truncated to {}", aa.len(), N);
    }
    *r = Bignum::from_limbs(Sign::Positive, ret);
    overflow
}

/// `r = a ^ b` by left-to-right square-and-multiply over the bits of `b`.
///
/// `a ^ 0` is one for every `a`, zero included. A negative exponent is
/// rejected and leaves `r` zeroed. On success the flag reports whether any
/// intermediate product was truncated.
pub fn power<T: Limb, const N: usize>(
    r: &mut Bignum<T, N>,
    a: &Bignum<T, N>,
    b: &Bignum<T, N>,
) -> Result<bool, BignumError> {
    if b.is_negative() {
        debug!("power: negative exponent");
        *r = Bignum::ZERO;
        return Err(BignumError::NegativeExponent);
    }

    let mut acc = Bignum::one();
    let mut overflow = false;
    for i in (0..b.bit_length()).rev() {
        let prev = acc;
        overflow |= square(&mut acc, &prev);
        if b.get_bit(i) {
            let prev = acc;
            overflow |= multiply(&mut acc, &prev, a);
        }
    }

    *r = acc;
    Ok(overflow)
}
