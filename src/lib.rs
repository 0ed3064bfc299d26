//! Fixed-capacity, sign-magnitude big integers that never allocate.
//!
//! A [`Bignum<T, N>`](Bignum) is a plain `Copy` value holding `N` limbs of
//! type `T` (`u8`, `u16` or `u32`) and a sign, suitable for the stack or a
//! `static`. Operations are free functions writing into a caller-owned
//! destination:
//!
//! ```
//! use fixnum::{divide, from_signed, modulo, Bignum256};
//!
//! let mut a = Bignum256::zero();
//! let mut b = Bignum256::zero();
//! from_signed(&mut a, -17);
//! from_signed(&mut b, 5);
//!
//! let mut q = Bignum256::zero();
//! let mut r = Bignum256::zero();
//! divide(&mut q, &a, &b).unwrap();
//! modulo(&mut r, &a, &b).unwrap();
//! assert_eq!(q, Bignum256::from(-3));
//! assert_eq!(r, Bignum256::from(-2));
//! ```
//!
//! Results that do not fit are truncated to the low `CAPACITY_BITS` bits
//! and the routine returns `true`; invalid inputs (short byte buffers, a zero
//! divisor, a negative exponent) are reported as [`BignumError`].
//!
//! The limb width of the preset `BignumXXX` aliases is fixed at build time by
//! the `word8` and `word32` features (default `u16`).

#![no_std]

#[cfg(test)]
extern crate std;


mod arith;
mod bignum;
mod bits;
mod div;
mod errors;
mod fmt;
mod limb;
mod ops;


pub use arith::{add, multiply, power, square, subtract};
pub use bignum::{
    compare, compare_magnitude, compare_zero, copy, from_bytes, from_signed, from_unsigned,
    init, is_zero, to_bytes, Bignum, Sign,
};
pub use bits::{bitwise_and, bitwise_or, bitwise_xor, mul_pow2, shift_left, shift_right};
pub use div::{div_rem, divide, modulo};
pub use errors::BignumError;
pub use limb::Limb;


/// Limb type of the preset aliases, chosen by cargo feature.
#[cfg(feature = "word32")]
pub type Word = u32;
/// Limb type of the preset aliases, chosen by cargo feature.
#[cfg(all(feature = "word8", not(feature = "word32")))]
pub type Word = u8;
/// Limb type of the preset aliases, chosen by cargo feature.
#[cfg(not(any(feature = "word8", feature = "word32")))]
pub type Word = u16;

macro_rules! define_bignum {
    ($($name:ident: bits=$bits:expr;)*) => (
        $(
            #[doc = concat!("Signed bignum with a ", stringify!($bits), "-bit magnitude in [`Word`] limbs.")]
            pub type $name = Bignum<Word, { $bits / Word::BITS as usize }>;
        )*
    )
}

define_bignum! {
    Bignum128: bits=128;
    Bignum256: bits=256;
    Bignum512: bits=512;
    Bignum1024: bits=1024;
    Bignum2048: bits=2048;
    Bignum4096: bits=4096;
}


#[test]
fn test_add() {
    let a = Bignum128::from(1);
    let b = Bignum128::from(2);
    let c = Bignum128::from(3);
    assert_eq!(a + b, c);
}

#[test]
fn test_sub() {
    let a = Bignum128::from(10);
    let b = Bignum128::from(2);
    let c = Bignum128::from(8);
    assert_eq!(a - b, c);
    assert_eq!(b - a, -c);
}

#[test]
fn test_mul() {
    let a = Bignum128::from(10);
    let b = Bignum128::from(2);
    let c = Bignum128::from(20);
    assert_eq!(a * b, c);
}

#[test]
fn test_div_rem() {
    let a = Bignum128::from(10);
    let b = Bignum128::from(2);
    let c = Bignum128::from(5);
    assert_eq!(a / b, c);
    assert_eq!(a % b, Bignum128::from(0));
}

#[test]
fn test_preset_capacity() {
    assert_eq!(Bignum256::CAPACITY_BITS, 256);
    assert_eq!(Bignum256::CAPACITY_BYTES, 32);
    assert_eq!(Bignum4096::CAPACITY_BITS, 4096);
}
