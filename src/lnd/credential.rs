//! Macaroon credential loading and per-call attachment.
//!
//! # Responsibilities
//! - Read the binary macaroon file into memory
//! - Validate it is a well-formed macaroon before any call is made
//! - Attach it to every outgoing request as `macaroon` metadata
//!
//! # Security Constraints
//! - The credential bytes are never logged; `Debug` is redacted
//! - The interceptor is baked into the client type, so no call path can
//!   skip it

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use macaroon::Macaroon;
use tonic::metadata::AsciiMetadataValue;
use tonic::service::Interceptor;
use tonic::{Request, Status};

use crate::lnd::types::{LndError, LndResult};

/// Metadata key the node reads the credential from.
pub const MACAROON_METADATA_KEY: &str = "macaroon";

/// Smallest possible binary macaroon: version byte, identifier field header,
/// two end-of-section markers and a signature field carrying 32 bytes.
pub const MIN_MACAROON_LEN: usize = 1 + 2 + 2 + 2 + 32;

/// A validated macaroon, kept as the raw bytes read from disk.
#[derive(Clone)]
pub struct Credential {
    raw: Arc<Vec<u8>>,
    identifier: Vec<u8>,
}

impl Credential {
    /// Read and validate the macaroon at `path`.
    ///
    /// I/O failures and format failures are both `CredentialError`, but the
    /// message tells them apart.
    pub fn load(path: &Path) -> LndResult<Self> {
        let bytes = fs::read(path).map_err(|e| {
            LndError::Credential(format!("unable to read macaroon file {:?}: {}", path, e))
        })?;
        Self::from_bytes(bytes)
    }

    /// Validate raw macaroon bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> LndResult<Self> {
        if bytes.len() < MIN_MACAROON_LEN {
            return Err(LndError::Credential(format!(
                "macaroon is truncated: {} bytes, need at least {}",
                bytes.len(),
                MIN_MACAROON_LEN
            )));
        }

        let macaroon = Macaroon::deserialize_binary(&bytes)
            .map_err(|e| LndError::Credential(format!("invalid macaroon encoding: {:?}", e)))?;
        let identifier = macaroon.identifier();
        let identifier: &[u8] = identifier.as_ref();
        let identifier = identifier.to_vec();

        Ok(Self {
            raw: Arc::new(bytes),
            identifier,
        })
    }

    /// Hex encoding of the macaroon identifier, safe to log.
    ///
    /// Identifiers minted by the node are binary, so they are never printed
    /// as text.
    pub fn identifier(&self) -> String {
        hex::encode(&self.identifier)
    }

    /// Hex encoding of the raw bytes, as the node expects in metadata.
    fn to_hex(&self) -> String {
        hex::encode(self.raw.as_slice())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("len", &self.raw.len())
            .field("bytes", &"<redacted>")
            .finish()
    }
}

/// Interceptor that adds the macaroon to every request on a channel.
#[derive(Clone)]
pub struct MacaroonInterceptor {
    value: AsciiMetadataValue,
}

impl MacaroonInterceptor {
    pub fn new(credential: &Credential) -> LndResult<Self> {
        let value = AsciiMetadataValue::try_from(credential.to_hex())
            .map_err(|e| LndError::Credential(format!("macaroon not encodable as metadata: {}", e)))?;
        Ok(Self { value })
    }
}

impl Interceptor for MacaroonInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        request
            .metadata_mut()
            .insert(MACAROON_METADATA_KEY, self.value.clone());
        Ok(request)
    }
}

impl fmt::Debug for MacaroonInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MacaroonInterceptor(<redacted>)")
    }
}
