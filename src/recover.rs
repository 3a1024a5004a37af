//! Private key recovery from a shared-nonce signature pair

use num_bigint::BigInt;
use thiserror::Error;

use crate::math::{mod_reduce, modinv, NoInverseExists};

/// The signature pair does not form a solvable shared-nonce system under
/// the supplied modulus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("private key is not recoverable from this signature pair: {source}")]
pub struct NotRecoverable {
    #[from]
    source: NoInverseExists,
}

/// Recovers the private key `d` from two signatures produced with the same
/// nonce.
///
/// For samples satisfying `s_i = k^-1 * (z_i + r_i * d) mod n` with a shared
/// nonce `k`, eliminating `k` yields
///
/// ```text
/// d = (z1*s2 - z2*s1) * (r2*s1 - r1*s2)^-1 mod n
/// ```
///
/// Inputs are reduced modulo `n` internally and are not otherwise validated;
/// the caller is responsible for supplying values from a real shared-nonce
/// pair and a modulus `n > 1`. Fails with [`NotRecoverable`] when the
/// denominator is not invertible, e.g. for two identical samples.
pub fn recover_private_key(
    r1: &BigInt,
    s1: &BigInt,
    z1: &BigInt,
    r2: &BigInt,
    s2: &BigInt,
    z2: &BigInt,
    n: &BigInt,
) -> Result<BigInt, NotRecoverable> {
    let numerator = mod_reduce(&(z1 * s2 - z2 * s1), n);
    let denominator = mod_reduce(&(r2 * s1 - r1 * s2), n);
    let inv_denominator = modinv(&denominator, n)?;
    Ok(mod_reduce(&(numerator * inv_denominator), n))
}
