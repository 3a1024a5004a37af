//! Modular arithmetic for key recovery

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use thiserror::Error;

/// The candidate value shares a nontrivial common factor with the modulus,
/// so no multiplicative inverse exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no modular inverse exists for {a} mod {n}")]
pub struct NoInverseExists {
    pub a: BigInt,
    pub n: BigInt,
}

/// Reduces `a` into `[0, n)`.
///
/// `BigInt`'s `%` keeps the dividend's sign, so subtraction results must go
/// through here before any further multiplication.
pub fn mod_reduce(a: &BigInt, n: &BigInt) -> BigInt {
    let rem = a % n;
    if rem.is_negative() {
        rem + n
    } else {
        rem
    }
}

/// Computes the multiplicative inverse of `a` modulo `n` using the extended
/// Euclidean algorithm.
///
/// Returns `x` in `[0, n)` such that `(a * x) mod n == 1`. `a` may be
/// negative or `>= n`; it is reduced first. The caller must supply `n > 1`.
pub fn modinv(a: &BigInt, n: &BigInt) -> Result<BigInt, NoInverseExists> {
    let mut t = BigInt::zero();
    let mut new_t = BigInt::one();
    let mut r = n.clone();
    let mut new_r = mod_reduce(a, n);

    while !new_r.is_zero() {
        let quotient = &r / &new_r;
        let next_t = &t - &quotient * &new_t;
        t = std::mem::replace(&mut new_t, next_t);
        let next_r = &r - &quotient * &new_r;
        r = std::mem::replace(&mut new_r, next_r);
    }

    if r > BigInt::one() {
        return Err(NoInverseExists {
            a: a.clone(),
            n: n.clone(),
        });
    }
    if t.is_negative() {
        t += n;
    }
    Ok(t)
}
