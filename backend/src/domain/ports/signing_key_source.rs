//! Driven port for fetching identity-provider signing keys.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::define_port_error;

/// One public key from a JSON Web Key Set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    /// Key identifier referenced by token headers.
    pub kid: String,
    /// Key type, e.g. `RSA`.
    pub kty: String,
    /// Signing algorithm, e.g. `RS256`.
    pub alg: Option<String>,
    /// RSA modulus, base64url encoded.
    pub n: Option<String>,
    /// RSA exponent, base64url encoded.
    pub e: Option<String>,
}

define_port_error! {
    /// Errors surfaced while fetching signing keys.
    pub enum SigningKeySourceError {
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "signing key transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "signing key fetch timed out: {message}",
        /// The key endpoint answered with a non-success status.
        Status { status: u16, message: String } =>
            "signing key endpoint returned status {status}: {message}",
        /// The key set could not be decoded.
        Decode { message: String } =>
            "signing key set decode failed: {message}",
    }
}

/// Port for loading the current signing key set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SigningKeySource: Send + Sync {
    /// Fetch every published key.
    async fn fetch_keys(&self) -> Result<Vec<SigningKey>, SigningKeySourceError>;
}
