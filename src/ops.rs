//! `core::ops` operator impls and primitive conversions.
//!
//! `+`, `-` and `*` truncate on overflow like the free functions they wrap.
//! `/` and `%` panic on a zero divisor, as they do for primitive integers;
//! use [`divide`] and [`modulo`] to get the error instead.

use core::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg,
};

use crate::arith::{add, multiply, subtract};
use crate::bignum::{from_signed, from_unsigned, Bignum};
use crate::bits::{bitwise_and, bitwise_or, bitwise_xor, shift_left, shift_right};
use crate::div::{divide, modulo};
use crate::limb::Limb;


macro_rules! impl_core_ops {
    ($($Trait:ident::$method:ident, $AssignTrait:ident::$assign:ident => $func:path;)*) => (
        $(
            impl<T: Limb, const N: usize> $Trait for Bignum<T, N> {
                type Output = Bignum<T, N>;

                fn $method(self, rhs: Bignum<T, N>) -> Bignum<T, N> {
                    let mut r = Bignum::ZERO;
                    $func(&mut r, &self, &rhs);
                    r
                }
            }

            impl<T: Limb, const N: usize> $AssignTrait for Bignum<T, N> {
                fn $assign(&mut self, rhs: Bignum<T, N>) {
                    *self = (*self).$method(rhs);
                }
            }
        )*
    )
}

impl_core_ops! {
    Add::add, AddAssign::add_assign => add;
    Sub::sub, SubAssign::sub_assign => subtract;
    Mul::mul, MulAssign::mul_assign => multiply;
    BitAnd::bitand, BitAndAssign::bitand_assign => bitwise_and;
    BitOr::bitor, BitOrAssign::bitor_assign => bitwise_or;
    BitXor::bitxor, BitXorAssign::bitxor_assign => bitwise_xor;
}

impl<T: Limb, const N: usize> Div for Bignum<T, N> {
    type Output = Bignum<T, N>;

    fn div(self, rhs: Bignum<T, N>) -> Bignum<T, N> {
        let mut q = Bignum::ZERO;
        match divide(&mut q, &self, &rhs) {
            Ok(()) => q,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Limb, const N: usize> DivAssign for Bignum<T, N> {
    fn div_assign(&mut self, rhs: Bignum<T, N>) {
        *self = (*self).div(rhs);
    }
}

impl<T: Limb, const N: usize> Rem for Bignum<T, N> {
    type Output = Bignum<T, N>;

    fn rem(self, rhs: Bignum<T, N>) -> Bignum<T, N> {
        let mut r = Bignum::ZERO;
        match modulo(&mut r, &self, &rhs) {
            Ok(()) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Limb, const N: usize> RemAssign for Bignum<T, N> {
    fn rem_assign(&mut self, rhs: Bignum<T, N>) {
        *self = (*self).rem(rhs);
    }
}

impl<T: Limb, const N: usize> Neg for Bignum<T, N> {
    type Output = Bignum<T, N>;

    fn neg(self) -> Bignum<T, N> {
        self.negate()
    }
}

impl<T: Limb, const N: usize> Shl<usize> for Bignum<T, N> {
    type Output = Bignum<T, N>;

    fn shl(self, k: usize) -> Bignum<T, N> {
        let mut r = Bignum::ZERO;
        shift_left(&mut r, &self, k);
        r
    }
}

impl<T: Limb, const N: usize> ShlAssign<usize> for Bignum<T, N> {
    fn shl_assign(&mut self, k: usize) {
        *self = (*self).shl(k);
    }
}

impl<T: Limb, const N: usize> Shr<usize> for Bignum<T, N> {
    type Output = Bignum<T, N>;

    fn shr(self, k: usize) -> Bignum<T, N> {
        let mut r = Bignum::ZERO;
        shift_right(&mut r, &self, k);
        r
    }
}

impl<T: Limb, const N: usize> ShrAssign<usize> for Bignum<T, N> {
    fn shr_assign(&mut self, k: usize) {
        *self = (*self).shr(k);
    }
}


// Conversions from primitive integers. Values wider than the bignum keep only
// their low `CAPACITY_BITS` bits, as with `as` casts between primitives.
macro_rules! impl_from_primitive {
    ($load:ident, $wide:ty: $($small:ty),*) => {
        $(
            impl<T: Limb, const N: usize> From<$small> for Bignum<T, N> {
                #[inline]
                fn from(small: $small) -> Bignum<T, N> {
                    let mut n = Bignum::ZERO;
                    $load(&mut n, small as $wide);
                    n
                }
            }
        )*
    }
}

impl_from_primitive! { from_unsigned, u128: u8, u16, u32, u64, u128, usize }
impl_from_primitive! { from_signed, i128: i8, i16, i32, i64, i128, isize }
