//! Shared test utilities for integration tests

use kubetf::{Generator, ProviderError};
use std::cell::Cell;

/// Generator returning fixed values and counting calls.
pub struct StubGenerator {
    pub suffix: &'static str,
    pub token: &'static str,
    pub calls: Cell<usize>,
}

impl StubGenerator {
    pub fn new(suffix: &'static str, token: &'static str) -> Self {
        Self {
            suffix,
            token,
            calls: Cell::new(0),
        }
    }
}

impl Generator for StubGenerator {
    fn cluster_suffix(&self) -> Result<String, ProviderError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.suffix.to_string())
    }

    fn bootstrap_token(&self) -> Result<String, ProviderError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.token.to_string())
    }
}

/// True when `s` is `k8s-cluster-` followed by six `[a-z0-9]` characters.
pub fn is_generated_cluster_name(s: &str) -> bool {
    match s.strip_prefix("k8s-cluster-") {
        Some(suffix) => {
            suffix.len() == 6
                && suffix
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        }
        None => false,
    }
}
