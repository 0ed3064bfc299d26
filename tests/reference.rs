//! Checks every arithmetic routine against `num-bigint` on seeded random
//! operands, for each limb width.

use core::cmp::Ordering;

use claims::{assert_err_eq, assert_ok, assert_ok_eq};
use fixnum::{
    add, bitwise_and, bitwise_or, bitwise_xor, compare, compare_magnitude, div_rem, divide,
    from_bytes, is_zero, modulo, multiply, power, shift_left, shift_right, square, subtract,
    to_bytes, Bignum, BignumError, Limb, Sign,
};
use num_bigint::{BigInt, BigUint, RandomBits, Sign as RefSign};
use num_traits::{One, ToPrimitive, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;


fn to_ref<T: Limb + Into<u64>, const N: usize>(n: &Bignum<T, N>) -> BigInt {
    let mag = n.limbs().iter().rev().fold(BigUint::zero(), |acc, &d| {
        let d: u64 = d.into();
        (acc << T::BITS) + BigUint::from(d)
    });
    let sign = if n.is_negative() { RefSign::Minus } else { RefSign::Plus };
    BigInt::from_biguint(sign, mag)
}

fn from_ref<T: Limb, const N: usize>(v: &BigInt) -> Bignum<T, N> {
    let mask = (BigUint::one() << T::BITS) - 1u32;
    let mut base = [T::ZERO; N];
    for (i, d) in base.iter_mut().enumerate() {
        let chunk = (v.magnitude() >> (i * T::BITS as usize)) & &mask;
        *d = T::truncate(chunk.to_u128().unwrap());
    }
    let sign = if v.sign() == RefSign::Minus { Sign::Negative } else { Sign::Positive };
    Bignum::from_limbs(sign, base)
}

/// Reduces the magnitude of `v` to `bits` bits, and reports whether that
/// dropped anything.
fn truncate(v: &BigInt, bits: usize) -> (BigInt, bool) {
    let modulus = BigUint::one() << bits;
    let mag = v.magnitude() % &modulus;
    (BigInt::from_biguint(v.sign(), mag), v.magnitude() >= &modulus)
}

fn random(prng: &mut ChaCha20Rng, max_bits: usize) -> BigInt {
    let bits = prng.gen_range(1..=max_bits as u64);
    let mag: BigUint = prng.sample(RandomBits::new(bits));
    if prng.gen() { -BigInt::from(mag) } else { BigInt::from(mag) }
}


fn check_round_trip<T: Limb + Into<u64>, const N: usize>() {
    let mut prng = ChaCha20Rng::seed_from_u64(0);
    let cap = Bignum::<T, N>::CAPACITY_BITS;
    for _ in 0..100 {
        let a = random(&mut prng, cap);
        assert_eq!(to_ref(&from_ref::<T, N>(&a)), a);
    }
}

fn check_add_sub<T: Limb + Into<u64>, const N: usize>() {
    let mut prng = ChaCha20Rng::seed_from_u64(1);
    let cap = Bignum::<T, N>::CAPACITY_BITS;
    for _ in 0..300 {
        let a = random(&mut prng, cap);
        let b = random(&mut prng, cap);
        let (x, y) = (from_ref::<T, N>(&a), from_ref::<T, N>(&b));
        let mut r = Bignum::zero();

        let (expected, overflow) = truncate(&(&a + &b), cap);
        assert_eq!(add(&mut r, &x, &y), overflow, "{a} + {b}");
        assert_eq!(to_ref(&r), expected, "{a} + {b}");

        let (expected, overflow) = truncate(&(&a - &b), cap);
        assert_eq!(subtract(&mut r, &x, &y), overflow, "{a} - {b}");
        assert_eq!(to_ref(&r), expected, "{a} - {b}");

        let mut back = Bignum::zero();
        if !subtract(&mut r, &x, &y) {
            assert!(!add(&mut back, &r, &y));
            assert_eq!(back, x);
        }
    }
}

fn check_multiply<T: Limb + Into<u64>, const N: usize>() {
    let mut prng = ChaCha20Rng::seed_from_u64(2);
    let cap = Bignum::<T, N>::CAPACITY_BITS;
    for i in 0..300 {
        // alternate between products that fit and products that spill
        let max_bits = if i % 2 == 0 { cap / 2 } else { cap };
        let a = random(&mut prng, max_bits);
        let b = random(&mut prng, max_bits);
        let (x, y) = (from_ref::<T, N>(&a), from_ref::<T, N>(&b));
        let (expected, overflow) = truncate(&(&a * &b), cap);

        let mut r = Bignum::zero();
        assert_eq!(multiply(&mut r, &x, &y), overflow, "{a} * {b}");
        assert_eq!(to_ref(&r), expected, "{a} * {b}");

        let mut s = Bignum::zero();
        assert_eq!(multiply(&mut s, &y, &x), overflow);
        assert_eq!(s, r);
    }
}

fn check_square<T: Limb + Into<u64>, const N: usize>() {
    let mut prng = ChaCha20Rng::seed_from_u64(3);
    let cap = Bignum::<T, N>::CAPACITY_BITS;
    for _ in 0..300 {
        let a = random(&mut prng, cap);
        let x = from_ref::<T, N>(&a);
        let (expected, overflow) = truncate(&(&a * &a), cap);

        let mut r = Bignum::zero();
        assert_eq!(square(&mut r, &x), overflow, "{a}^2");
        assert_eq!(to_ref(&r), expected, "{a}^2");
    }
}

fn check_power<T: Limb + Into<u64>, const N: usize>() {
    let mut prng = ChaCha20Rng::seed_from_u64(4);
    let cap = Bignum::<T, N>::CAPACITY_BITS;
    for _ in 0..200 {
        let a = random(&mut prng, 20);
        let e: u32 = prng.gen_range(0..40);
        let (expected, overflow) = truncate(&a.pow(e), cap);

        let mut r = Bignum::zero();
        let exponent = from_ref::<T, N>(&BigInt::from(e));
        assert_ok_eq!(power(&mut r, &from_ref(&a), &exponent), overflow, "{a}^{e}");
        assert_eq!(to_ref(&r), expected, "{a}^{e}");
    }
}

fn check_div_rem<T: Limb + Into<u64>, const N: usize>() {
    let mut prng = ChaCha20Rng::seed_from_u64(5);
    let cap = Bignum::<T, N>::CAPACITY_BITS;
    for _ in 0..300 {
        let a = random(&mut prng, cap);
        let b = random(&mut prng, cap);
        if b.is_zero() {
            continue;
        }
        let (x, y) = (from_ref::<T, N>(&a), from_ref::<T, N>(&b));

        let mut q = Bignum::zero();
        let mut r = Bignum::zero();
        assert_ok!(divide(&mut q, &x, &y));
        assert_ok!(modulo(&mut r, &x, &y));
        assert_eq!(to_ref(&q), &a / &b, "{a} / {b}");
        assert_eq!(to_ref(&r), &a % &b, "{a} % {b}");
        assert_eq!(compare_magnitude(&r, &y), Ordering::Less);

        let (mut q2, mut r2) = (Bignum::zero(), Bignum::zero());
        assert_ok!(div_rem(&mut q2, &mut r2, &x, &y));
        assert_eq!((q2, r2), (q, r));
    }

    let mut q = Bignum::<T, N>::one();
    assert_err_eq!(divide(&mut q, &Bignum::one(), &Bignum::zero()), BignumError::DivisionByZero);
    assert!(is_zero(&q));
}

fn check_compare<T: Limb + Into<u64>, const N: usize>() {
    let mut prng = ChaCha20Rng::seed_from_u64(6);
    let cap = Bignum::<T, N>::CAPACITY_BITS;
    for i in 0..300 {
        let a = random(&mut prng, cap);
        // every few rounds compare a value against itself or its negation
        let b = match i % 5 {
            0 => a.clone(),
            1 => -a.clone(),
            _ => random(&mut prng, cap),
        };
        let (x, y) = (from_ref::<T, N>(&a), from_ref::<T, N>(&b));

        assert_eq!(compare(&x, &y), a.cmp(&b), "{a} <=> {b}");
        assert_eq!(compare_magnitude(&x, &y), a.magnitude().cmp(b.magnitude()));

        let mut d = Bignum::zero();
        if !subtract(&mut d, &x, &y) {
            assert_eq!(is_zero(&d), compare(&x, &y) == Ordering::Equal);
        }
    }
}

fn check_shifts<T: Limb + Into<u64>, const N: usize>() {
    let mut prng = ChaCha20Rng::seed_from_u64(7);
    let cap = Bignum::<T, N>::CAPACITY_BITS;
    for _ in 0..300 {
        let a = random(&mut prng, cap);
        let k = prng.gen_range(0..cap + 8);
        let x = from_ref::<T, N>(&a);
        let mut r = Bignum::zero();

        let shifted = BigInt::from_biguint(a.sign(), a.magnitude() << k);
        let (expected, overflow) = truncate(&shifted, cap);
        assert_eq!(shift_left(&mut r, &x, k), overflow, "{a} << {k}");
        assert_eq!(to_ref(&r), expected, "{a} << {k}");

        shift_right(&mut r, &x, k);
        let expected = BigInt::from_biguint(a.sign(), a.magnitude() >> k);
        assert_eq!(to_ref(&r), expected, "{a} >> {k}");
    }
}

fn check_bitwise<T: Limb + Into<u64>, const N: usize>() {
    let mut prng = ChaCha20Rng::seed_from_u64(8);
    let cap = Bignum::<T, N>::CAPACITY_BITS;
    for _ in 0..300 {
        let a = random(&mut prng, cap);
        let b = random(&mut prng, cap);
        let (x, y) = (from_ref::<T, N>(&a), from_ref::<T, N>(&b));
        let (ma, mb) = (a.magnitude(), b.magnitude());
        let mut r = Bignum::zero();

        bitwise_and(&mut r, &x, &y);
        assert_eq!(to_ref(&r), BigInt::from(ma & mb));
        bitwise_or(&mut r, &x, &y);
        assert_eq!(to_ref(&r), BigInt::from(ma | mb));
        bitwise_xor(&mut r, &x, &y);
        assert_eq!(to_ref(&r), BigInt::from(ma ^ mb));
    }
}

fn check_bytes<T: Limb + Into<u64>, const N: usize>() {
    let mut prng = ChaCha20Rng::seed_from_u64(9);
    let capacity = Bignum::<T, N>::CAPACITY_BYTES;
    for _ in 0..100 {
        let len = prng.gen_range(0..=capacity);
        let data: Vec<u8> = (0..len).map(|_| prng.gen()).collect();

        let mut n = Bignum::<T, N>::zero();
        assert_ok!(from_bytes(&mut n, &data));
        let mut out = vec![0xa5u8; capacity + 3];
        assert_ok_eq!(to_bytes(&mut out, &n), capacity);
        assert_eq!(&out[..len], &data[..]);
        assert!(out[len..capacity].iter().all(|&b| b == 0));
    }

    let mut n = Bignum::<T, N>::zero();
    assert_err_eq!(
        from_bytes(&mut n, &vec![0u8; capacity + 1]),
        BignumError::BufferTooLarge { size: capacity + 1, capacity }
    );
    let mut out = vec![0u8; capacity - 1];
    assert_err_eq!(
        to_bytes(&mut out, &n),
        BignumError::BufferTooSmall { size: capacity - 1, capacity }
    );
}


macro_rules! width_tests {
    ($($name:ident: $ty:ty, $n:expr;)*) => (
        $(
            mod $name {
                use super::*;

                #[test]
                fn round_trip() { check_round_trip::<$ty, $n>() }
                #[test]
                fn add_sub() { check_add_sub::<$ty, $n>() }
                #[test]
                fn multiply() { check_multiply::<$ty, $n>() }
                #[test]
                fn square() { check_square::<$ty, $n>() }
                #[test]
                fn power() { check_power::<$ty, $n>() }
                #[test]
                fn div_rem() { check_div_rem::<$ty, $n>() }
                #[test]
                fn compare() { check_compare::<$ty, $n>() }
                #[test]
                fn shifts() { check_shifts::<$ty, $n>() }
                #[test]
                fn bitwise() { check_bitwise::<$ty, $n>() }
                #[test]
                fn bytes() { check_bytes::<$ty, $n>() }
            }
        )*
    )
}

width_tests! {
    limb8: u8, 16;
    limb16: u16, 16;
    limb32: u32, 8;
    limb32_wide: u32, 32;
}
