//! Certificate loading for the public HTTPS listener.

use std::io;
use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;

use crate::config::paths::clean_and_expand_path;
use crate::config::schema::TlsConfig;

/// Build the listener's rustls config from the PEM files named in `tls`.
pub async fn load_tls_config(tls: &TlsConfig) -> io::Result<RustlsConfig> {
    let cert_path = existing_file(&tls.cert_path, "listener certificate")?;
    let key_path = existing_file(&tls.key_path, "listener private key")?;

    tracing::debug!(cert = ?cert_path, key = ?key_path, "Loading listener TLS material");
    RustlsConfig::from_pem_file(cert_path, key_path).await
}

fn existing_file(raw: &str, what: &str) -> io::Result<PathBuf> {
    let path = clean_and_expand_path(raw);
    if !Path::new(&path).is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found at {:?}", what, path),
        ));
    }
    Ok(path)
}
