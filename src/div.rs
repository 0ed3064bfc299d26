//! Truncating division and remainder.
//!
//! For non-zero `b` the results satisfy `a = q * b + r` with `|r| < |b|`;
//! the quotient is rounded toward zero and the remainder takes the sign of
//! the dividend, as for Rust's primitive `/` and `%`.

use core::cmp::Ordering;

use log::debug;

use crate::arith::subtract;
use crate::bignum::{compare_magnitude, is_zero, Bignum};
use crate::bits::{shift_left, shift_right};
use crate::errors::BignumError;
use crate::limb::Limb;


/// Magnitudes of the quotient and remainder of `|a| / |b|` by restoring
/// binary long division. `b` must be non-zero.
fn div_rem_magnitude<T: Limb, const N: usize>(a: &Bignum<T, N>, b: &Bignum<T, N>) -> ([T; N], [T; N]) {
    debug_assert!(!is_zero(b));

    let mut quo = Bignum::<T, N>::ZERO;
    let mut rem = a.abs();
    let divisor = b.abs();
    if compare_magnitude(&rem, &divisor) == Ordering::Less {
        return (quo.base, rem.base);
    }

    // line the divisor's top bit up with the dividend's
    let mut shift = a.bit_length() - b.bit_length();
    let mut denom = Bignum::ZERO;
    let overflow = shift_left(&mut denom, &divisor, shift);
    debug_assert!(!overflow);

    loop {
        if compare_magnitude(&rem, &denom) != Ordering::Less {
            let prev = rem;
            subtract(&mut rem, &prev, &denom);
            quo.set_bit(shift);
        }
        if shift == 0 {
            break;
        }
        let prev = denom;
        shift_right(&mut denom, &prev, 1);
        shift -= 1;
    }

    (quo.base, rem.base)
}

/// `q = a / b`, rounded toward zero. Division by zero leaves `q` zeroed.
pub fn divide<T: Limb, const N: usize>(
    q: &mut Bignum<T, N>,
    a: &Bignum<T, N>,
    b: &Bignum<T, N>,
) -> Result<(), BignumError> {
    if is_zero(b) {
        debug!("divide: division by zero");
        *q = Bignum::ZERO;
        return Err(BignumError::DivisionByZero);
    }
    let (quo, _) = div_rem_magnitude(a, b);
    *q = Bignum::from_limbs(a.sign.product(b.sign), quo);
    Ok(())
}

/// `r = a % b`, with the sign of `a`. Division by zero leaves `r` zeroed.
pub fn modulo<T: Limb, const N: usize>(
    r: &mut Bignum<T, N>,
    a: &Bignum<T, N>,
    b: &Bignum<T, N>,
) -> Result<(), BignumError> {
    if is_zero(b) {
        debug!("modulo: division by zero");
        *r = Bignum::ZERO;
        return Err(BignumError::DivisionByZero);
    }
    let (_, rem) = div_rem_magnitude(a, b);
    *r = Bignum::from_limbs(a.sign, rem);
    Ok(())
}

/// Computes [`divide`] and [`modulo`] in a single pass.
pub fn div_rem<T: Limb, const N: usize>(
    q: &mut Bignum<T, N>,
    r: &mut Bignum<T, N>,
    a: &Bignum<T, N>,
    b: &Bignum<T, N>,
) -> Result<(), BignumError> {
    if is_zero(b) {
        debug!("div_rem: division by zero");
        *q = Bignum::ZERO;
        *r = Bignum::ZERO;
        return Err(BignumError::DivisionByZero);
    }
    let (quo, rem) = div_rem_magnitude(a, b);
    *q = Bignum::from_limbs(a.sign.product(b.sign), quo);
    *r = Bignum::from_limbs(a.sign, rem);
    Ok(())
}
