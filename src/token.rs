//! Bootstrap token shape
//!
//! A kubeadm bootstrap token is `<id>.<secret>`: a 6 character public token id
//! and a 16 character secret, both drawn from `[a-z0-9]`.

use std::fmt;

/// Length of the public token id.
pub const TOKEN_ID_LEN: usize = 6;

/// Length of the token secret.
pub const TOKEN_SECRET_LEN: usize = 16;

/// Characters allowed in both halves of a token.
pub const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// A borrowed view of a well-formed bootstrap token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapToken<'a> {
    id: &'a str,
    secret: &'a str,
}

impl<'a> BootstrapToken<'a> {
    /// Split `raw` into id and secret, or `None` if it is not `[a-z0-9]{6}\.[a-z0-9]{16}`.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (id, secret) = raw.split_once('.')?;
        if id.len() != TOKEN_ID_LEN || secret.len() != TOKEN_SECRET_LEN {
            return None;
        }
        if !is_token_chars(id) || !is_token_chars(secret) {
            return None;
        }
        Some(Self { id, secret })
    }

    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn secret(&self) -> &'a str {
        self.secret
    }
}

impl fmt::Display for BootstrapToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id, self.secret)
    }
}

/// True when `raw` has the exact bootstrap token shape.
pub fn is_valid(raw: &str) -> bool {
    BootstrapToken::parse(raw).is_some()
}

fn is_token_chars(s: &str) -> bool {
    s.bytes().all(|b| TOKEN_ALPHABET.contains(&b))
}
