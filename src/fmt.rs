use core::fmt;

use crate::bignum::Bignum;
use crate::limb::Limb;


impl<T: Limb, const N: usize> Bignum<T, N> {
    /// Significant limbs, or just the lowest one for zero, so formatting
    /// always has a digit to print.
    fn display_digits(&self) -> &[T] {
        match self.significant_limbs() {
            0 => &self.base[..N.min(1)],
            sz => &self.base[..sz],
        }
    }
}

impl<T: Limb, const N: usize> fmt::Debug for Bignum<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Bignum<u{}, {}> {{ sign: {:?}, base: {:?} }}",
            T::BITS, N, self.sign, self.digits(),
        )
    }
}

macro_rules! impl_core_fmt {
    ($($Trait:ident: prefix=$prefix:literal, first=$first:literal, rest=$rest:literal, digitlen=|$bits:ident| $len:expr;)*) => (
        $(
            impl<T: Limb, const N: usize> fmt::$Trait for Bignum<T, N> {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    let $bits = T::BITS as usize;
                    let digitlen = $len;

                    if self.is_negative() {
                        f.write_str("-")?;
                    }
                    match self.display_digits().split_last() {
                        None => f.write_str($prefix),
                        Some((top, rest)) => {
                            write!(f, $first, top, width = digitlen + 2)?;
                            for v in rest.iter().rev() {
                                write!(f, $rest, v, width = digitlen)?;
                            }
                            Ok(())
                        }
                    }
                }
            }
        )*
    )
}

impl_core_fmt! {
    LowerHex: prefix="0x0", first="{:#0width$x}", rest="_{:0width$x}", digitlen=|bits| bits / 4;
    UpperHex: prefix="0x0", first="{:#0width$X}", rest="_{:0width$X}", digitlen=|bits| bits / 4;
    Binary:   prefix="0b0", first="{:#0width$b}", rest="_{:0width$b}", digitlen=|bits| bits;
}
