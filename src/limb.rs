//! Limb ("digit") types and the full-width primitives the bignum routines
//! are built on.

use core::fmt;
use core::hash::Hash;
use core::mem;
use core::ops::{BitAnd, BitOr, BitXor, Shl, Shr};


mod private {
    pub trait Sealed {}
}

/// An unsigned word usable as one limb of a [`Bignum`](crate::Bignum).
///
/// Every operation that can carry or borrow goes through a native type of
/// twice the limb width, so carries are extracted by shift-and-mask rather
/// than by relying on wraparound.
pub trait Limb:
    private::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::LowerHex
    + fmt::UpperHex
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Number of bits in one limb, `W`.
    const BITS: u32;
    /// Number of bytes in one limb.
    const BYTES: usize;
    const ZERO: Self;
    const ONE: Self;
    /// The largest single-limb value, `2^W - 1`.
    const MAX: Self;

    /// Returns `(carry', v')` such that `carry' * 2^W + v' = self + other + carry`.
    fn full_add(self, other: Self, carry: bool) -> (bool /* carry */, Self);

    /// Returns `(borrow', v')` such that `v' - borrow' * 2^W = self - other - borrow`.
    fn full_sub(self, other: Self, borrow: bool) -> (bool /* borrow */, Self);

    /// Returns `(carry', v')` such that `carry' * 2^W + v' = self * other + other2 + carry`.
    fn full_mul_add(self, other: Self, other2: Self, carry: Self) -> (Self /* carry */, Self);

    /// Keeps the low `W` bits of `v`.
    fn truncate(v: u128) -> Self;

    fn leading_zeros(self) -> u32;

    /// Stores the limb in native byte order. `out.len()` must be `BYTES`.
    fn write_ne_bytes(self, out: &mut [u8]);

    /// Loads a limb from up to `BYTES` native-order bytes, as a raw memory
    /// load would: missing trailing bytes read as zero.
    fn read_ne_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_limb {
    ($($ty:ty: wide($bigty:ty);)*) => (
        $(
            impl private::Sealed for $ty {}

            impl Limb for $ty {
                const BITS: u32 = <$ty>::BITS;
                const BYTES: usize = mem::size_of::<$ty>();
                const ZERO: $ty = 0;
                const ONE: $ty = 1;
                const MAX: $ty = <$ty>::MAX;

                #[inline]
                fn full_add(self, other: $ty, carry: bool) -> (bool, $ty) {
                    // this cannot overflow, the output is between 0 and 2*2^nbits - 1
                    let v = (self as $bigty) + (other as $bigty) + (carry as $bigty);
                    (v > (<$ty>::MAX as $bigty), v as $ty)
                }

                #[inline]
                fn full_sub(self, other: $ty, borrow: bool) -> (bool, $ty) {
                    // lend one bit above the limb so the wide subtraction never underflows
                    let lhs = (self as $bigty) + (<$ty>::MAX as $bigty) + 1;
                    let rhs = (other as $bigty) + (borrow as $bigty);
                    let v = lhs - rhs;
                    (v <= (<$ty>::MAX as $bigty), v as $ty)
                }

                #[inline]
                fn full_mul_add(self, other: $ty, other2: $ty, carry: $ty) -> ($ty, $ty) {
                    // this cannot overflow, the output is between 0 and 2^(2*nbits) - 1
                    let v = (self as $bigty) * (other as $bigty) + (other2 as $bigty) +
                            (carry as $bigty);
                    ((v >> <$ty>::BITS) as $ty, v as $ty)
                }

                #[inline]
                fn truncate(v: u128) -> $ty {
                    v as $ty
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$ty>::leading_zeros(self)
                }

                #[inline]
                fn write_ne_bytes(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                #[inline]
                fn read_ne_bytes(bytes: &[u8]) -> $ty {
                    let mut buf = [0u8; mem::size_of::<$ty>()];
                    buf[..bytes.len()].copy_from_slice(bytes);
                    <$ty>::from_ne_bytes(buf)
                }
            }
        )*
    )
}

impl_limb! {
    u8:  wide(u16);
    u16: wide(u32);
    u32: wide(u64);
}
