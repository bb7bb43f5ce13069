//! TLS trust material for the node's RPC endpoint.

use std::fs;
use std::path::Path;
use tonic::transport::{Certificate, ClientTlsConfig};

use crate::lnd::types::{LndError, LndResult};

/// Load the node's PEM certificate and build a client TLS config that trusts it.
///
/// The certificate is only used to authenticate the server; no client
/// identity is presented.
pub fn load_client_tls(cert_path: &Path, domain: Option<&str>) -> LndResult<ClientTlsConfig> {
    if !cert_path.exists() {
        return Err(LndError::Config(format!(
            "TLS certificate file not found: {:?}",
            cert_path
        )));
    }

    let pem = fs::read(cert_path).map_err(|e| {
        LndError::Config(format!("unable to read cert file {:?}: {}", cert_path, e))
    })?;

    // tonic only parses the PEM at handshake time; check it here so a bad
    // file fails the build instead of every later call.
    let count = rustls_pemfile::certs(&mut pem.as_slice())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| LndError::Config(format!("malformed cert file {:?}: {}", cert_path, e)))?
        .len();
    if count == 0 {
        return Err(LndError::Config(format!(
            "no certificate found in {:?}",
            cert_path
        )));
    }

    let mut tls = ClientTlsConfig::new().ca_certificate(Certificate::from_pem(pem));
    if let Some(domain) = domain {
        tls = tls.domain_name(domain);
    }
    Ok(tls)
}
