//! Random identifiers for cluster names and bootstrap tokens
//!
//! Resolution never touches an entropy source directly; it asks a [`Generator`].
//! [`OsGenerator`] reads the operating system's CSPRNG, tests substitute their own.

use crate::error::ProviderError;
use crate::token::{TOKEN_ALPHABET, TOKEN_ID_LEN, TOKEN_SECRET_LEN};
use rand::rngs::OsRng;
use rand::RngCore;

/// Length of the random suffix appended to generated cluster names.
pub const CLUSTER_SUFFIX_LEN: usize = 6;

/// Source of the two generated values resolution may need.
pub trait Generator {
    /// Random `[a-z0-9]` suffix of [`CLUSTER_SUFFIX_LEN`] characters.
    fn cluster_suffix(&self) -> Result<String, ProviderError>;

    /// Fresh token in `[a-z0-9]{6}\.[a-z0-9]{16}` form.
    fn bootstrap_token(&self) -> Result<String, ProviderError>;
}

/// Generator backed by the operating system entropy source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsGenerator;

impl Generator for OsGenerator {
    fn cluster_suffix(&self) -> Result<String, ProviderError> {
        random_string(CLUSTER_SUFFIX_LEN).map_err(|reason| ProviderError::Generation {
            what: "cluster name suffix",
            reason,
        })
    }

    fn bootstrap_token(&self) -> Result<String, ProviderError> {
        let generation_failed = |reason| ProviderError::Generation {
            what: "bootstrap token",
            reason,
        };
        let id = random_string(TOKEN_ID_LEN).map_err(generation_failed)?;
        let secret = random_string(TOKEN_SECRET_LEN).map_err(generation_failed)?;
        Ok(format!("{}.{}", id, secret))
    }
}

/// Uniform `[a-z0-9]` string of length `len`.
///
/// Bytes at or above the largest multiple of the alphabet size are discarded so
/// every character is equally likely.
fn random_string(len: usize) -> Result<String, String> {
    let alphabet_len = TOKEN_ALPHABET.len();
    let limit = (u8::MAX as usize + 1) / alphabet_len * alphabet_len;

    let mut out = String::with_capacity(len);
    let mut buf = [0u8; 32];
    while out.len() < len {
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| format!("entropy source unavailable: {}", e))?;
        for &byte in buf.iter() {
            if (byte as usize) < limit {
                out.push(TOKEN_ALPHABET[byte as usize % alphabet_len] as char);
                if out.len() == len {
                    break;
                }
            }
        }
    }
    Ok(out)
}
