//! Signature sample types and strict scalar parsing

use anyhow::{anyhow, bail, Result};
use num_bigint::BigInt;
use num_traits::{Num, One, Zero};
use serde::{Deserialize, Serialize};

/// secp256k1 group order n in hexadecimal, the default modulus.
pub const SECP256K1_ORDER_HEX: &str =
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

pub fn secp256k1_order() -> BigInt {
    BigInt::from_str_radix(SECP256K1_ORDER_HEX, 16)
        .expect("SECP256K1_ORDER_HEX should parse as base-16 BigInt")
}

pub enum ScalarKind {
    RorS,
    Z,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureInput {
    pub r: String,
    pub s: String,
    pub z: String,
}

/// A validated signature sample with scalars in `[0, n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub r: BigInt,
    pub s: BigInt,
    pub z: BigInt,
}

impl Signature {
    pub fn parse(input: &SignatureInput, n: &BigInt) -> Result<Self> {
        Ok(Signature {
            r: parse_scalar_decimal_strict(&input.r, ScalarKind::RorS, n)?,
            s: parse_scalar_decimal_strict(&input.s, ScalarKind::RorS, n)?,
            z: parse_scalar_decimal_strict(&input.z, ScalarKind::Z, n)?,
        })
    }
}

pub fn parse_scalar_decimal_strict(s: &str, kind: ScalarKind, n: &BigInt) -> Result<BigInt> {
    if s.is_empty() {
        bail!("Empty decimal string");
    }
    if !s.chars().all(|c| c.is_ascii_digit()) {
        bail!("Invalid decimal string: only digits 0-9 allowed");
    }
    if s.len() > 1 && s.starts_with('0') {
        bail!("Invalid decimal string: no leading zeros allowed");
    }

    let value =
        BigInt::from_str_radix(s, 10).map_err(|e| anyhow!("Failed to parse decimal: {}", e))?;

    if &value >= n {
        bail!("Value >= group order n, ensure your data is already reduced");
    }

    match kind {
        ScalarKind::RorS => {
            if value.is_zero() {
                bail!("r and s values cannot be zero");
            }
        }
        ScalarKind::Z => {}
    }

    Ok(value)
}

/// Parses a group order from hex (`0x`-prefixed or containing hex letters)
/// or decimal notation. The order must be greater than 1.
pub fn parse_order(s: &str) -> Result<BigInt> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        bail!("Empty order string");
    }

    let (digits, radix) = if let Some(stripped) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        (stripped, 16)
    } else if trimmed.chars().all(|c| c.is_ascii_digit()) {
        (trimmed, 10)
    } else {
        (trimmed, 16)
    };

    let value = BigInt::from_str_radix(digits, radix)
        .map_err(|e| anyhow!("Failed to parse order: {}", e))?;

    if value <= BigInt::one() {
        bail!("Group order must be greater than 1");
    }

    Ok(value)
}

pub fn scalar_to_decimal_string(value: &BigInt) -> String {
    value.to_string()
}

/// Renders a scalar as lowercase hex, zero-padded to the byte width of `n`.
pub fn scalar_to_hex_string(value: &BigInt, n: &BigInt) -> String {
    let width = ((n.bits() + 7) / 8) as usize;
    let (_, bytes) = value.to_bytes_be();
    let mut padded = vec![0u8; width.saturating_sub(bytes.len())];
    padded.extend_from_slice(&bytes);
    hex::encode(padded)
}
