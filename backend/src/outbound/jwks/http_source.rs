//! Reqwest-backed JSON Web Key Set source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::domain::ports::{SigningKey, SigningKeySource, SigningKeySourceError};

#[derive(Debug, Deserialize)]
struct KeySetDto {
    #[serde(default)]
    keys: Vec<SigningKey>,
}

/// Signing key source that GETs one JWKS document.
#[derive(Debug)]
pub struct JwksHttpSource {
    client: Client,
    endpoint: Url,
}

impl JwksHttpSource {
    /// Build a source with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl SigningKeySource for JwksHttpSource {
    async fn fetch_keys(&self) -> Result<Vec<SigningKey>, SigningKeySourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_key_set(body.as_ref())
    }
}

fn parse_key_set(body: &[u8]) -> Result<Vec<SigningKey>, SigningKeySourceError> {
    let decoded: KeySetDto = serde_json::from_slice(body).map_err(|error| {
        SigningKeySourceError::decode(format!("invalid key set payload: {error}"))
    })?;
    Ok(decoded.keys)
}

fn map_transport_error(error: reqwest::Error) -> SigningKeySourceError {
    if error.is_timeout() {
        SigningKeySourceError::timeout(error.to_string())
    } else {
        SigningKeySourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SigningKeySourceError {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let preview = String::from_utf8_lossy(body)
        .chars()
        .take(PREVIEW_CHAR_LIMIT)
        .collect::<String>();
    SigningKeySourceError::status(status.as_u16(), preview.trim())
}
