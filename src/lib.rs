//! ECDSA nonce-reuse private key recovery library
//!
//! Recovers the long-term private key from two ECDSA signatures that were
//! produced with the same per-signature nonce, given the group order.

pub mod math;
pub mod provider;
pub mod recover;
pub mod signature;

pub use math::{modinv, NoInverseExists};
pub use recover::{recover_private_key, NotRecoverable};
pub use signature::{Signature, SignatureInput};
