//! Credential injection for the report transport.
//!
//! The transport never owns a token literal; it asks a provider at call
//! time. Token issuance and refresh belong to an external collaborator.

use std::sync::Arc;

/// Supplies the bearer token attached to every report request.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> String;
}

/// Provider around a token resolved once at startup (from configuration or
/// the environment).
#[derive(Clone, Debug)]
pub struct StaticCredential {
    token: String,
}

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl CredentialProvider for StaticCredential {
    fn bearer_token(&self) -> String {
        self.token.clone()
    }
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for Arc<T> {
    fn bearer_token(&self) -> String {
        (**self).bearer_token()
    }
}
