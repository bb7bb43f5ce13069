//! Authenticated gRPC client for the node.
//!
//! # Responsibilities
//! - Normalize the certificate and macaroon paths
//! - Build a TLS channel that trusts the node's certificate
//! - Bake the macaroon interceptor into the client type
//! - Issue the three read calls under an optional deadline
//!
//! # Design Decisions
//! - One client is built at startup and cloned into every request;
//!   tonic multiplexes calls over the single HTTP/2 connection
//! - Without a connect deadline the dial is lazy; a dead node then shows up
//!   as a `Connection` error on the first call
//! - No retries: every failure is reported on the first attempt

use std::path::PathBuf;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, Endpoint};

use crate::config::paths::clean_and_expand_path;
use crate::lnd::credential::{Credential, MacaroonInterceptor};
use crate::lnd::lnrpc::lightning_client::LightningClient;
use crate::lnd::lnrpc::{
    GetInfoRequest, GetInfoResponse, ListChannelsRequest, ListChannelsResponse,
    WalletBalanceRequest, WalletBalanceResponse,
};
use crate::lnd::tls::load_client_tls;
use crate::config::LndConfig;
use crate::lnd::types::{with_deadline, Deadline, LndError, LndResult, RpcCall};
use crate::observability::metrics;

/// The read-only query surface of a lightning node.
///
/// Implemented by [`LndClient`] over gRPC; tests implement it with a mock
/// node. Implementations must be safe to call concurrently.
#[async_trait]
pub trait LightningRpc: Send + Sync {
    async fn get_info(&self, deadline: Option<Deadline>) -> LndResult<GetInfoResponse>;

    /// Active channels only.
    async fn list_channels(&self, deadline: Option<Deadline>) -> LndResult<ListChannelsResponse>;

    async fn wallet_balance(&self, deadline: Option<Deadline>) -> LndResult<WalletBalanceResponse>;
}

/// Inputs for building the secure channel.
#[derive(Debug, Clone)]
pub struct LndConnectOptions {
    /// RPC endpoint as `host:port`.
    pub rpc_host: String,
    /// Path to the node's PEM certificate; `~` and `$VAR` are expanded.
    pub tls_cert_path: String,
    /// Path to the binary macaroon; `~` and `$VAR` are expanded.
    pub macaroon_path: String,
    /// Server name to verify instead of the host in `rpc_host`.
    pub tls_domain: Option<String>,
}

impl From<&LndConfig> for LndConnectOptions {
    fn from(config: &LndConfig) -> Self {
        Self {
            rpc_host: config.rpc_host.clone(),
            tls_cert_path: config.tls_cert_path.clone(),
            macaroon_path: config.macaroon_path.clone(),
            tls_domain: config.tls_domain.clone(),
        }
    }
}

type AuthedClient = LightningClient<InterceptedService<Channel, MacaroonInterceptor>>;

/// Long-lived, macaroon-authenticated handle to the node.
///
/// Cheap to clone; clones share the underlying connection.
#[derive(Clone)]
pub struct LndClient {
    inner: AuthedClient,
    rpc_host: String,
}

impl LndClient {
    /// Build the secure channel.
    ///
    /// Steps run in order and stop at the first failure: path expansion,
    /// certificate (`Config`), macaroon read and decode (`Credential`),
    /// interceptor construction, dial (`Connection`).
    ///
    /// With `deadline` set the dial is performed eagerly and must complete
    /// before it; otherwise the connection is opened on first use.
    pub async fn connect(options: &LndConnectOptions, deadline: Option<Deadline>) -> LndResult<Self> {
        let cert_path: PathBuf = clean_and_expand_path(&options.tls_cert_path);
        let macaroon_path: PathBuf = clean_and_expand_path(&options.macaroon_path);

        let tls = load_client_tls(&cert_path, options.tls_domain.as_deref())?;

        let credential = Credential::load(&macaroon_path)?;
        let interceptor = MacaroonInterceptor::new(&credential)?;

        let endpoint = Endpoint::from_shared(format!("https://{}", options.rpc_host))
            .map_err(|e| connection_error(format!("invalid rpc host '{}'", options.rpc_host), e))?
            .tls_config(tls)
            .map_err(|e| connection_error("unable to apply TLS config".to_string(), e))?;

        let channel = match deadline {
            Some(deadline) => match with_deadline(Some(deadline), endpoint.connect()).await {
                Some(Ok(channel)) => channel,
                Some(Err(e)) => {
                    return Err(connection_error(
                        format!("unable to dial node at {}", options.rpc_host),
                        e,
                    ))
                }
                None => {
                    return Err(LndError::Connection {
                        reason: format!("dial to {} timed out", options.rpc_host),
                        deadline_exceeded: true,
                        source: None,
                    })
                }
            },
            None => endpoint.connect_lazy(),
        };

        tracing::info!(
            rpc_host = %options.rpc_host,
            cert = ?cert_path,
            macaroon = ?macaroon_path,
            macaroon_id = %credential.identifier(),
            "Node client initialized"
        );

        Ok(Self {
            inner: LightningClient::with_interceptor(channel, interceptor),
            rpc_host: options.rpc_host.clone(),
        })
    }

    /// Convenience for building from the config section with its optional
    /// connect timeout.
    pub async fn from_config(config: &LndConfig) -> LndResult<Self> {
        let deadline = config
            .connect_timeout_secs
            .map(|secs| Deadline::after(Duration::from_secs(secs)));
        Self::connect(&LndConnectOptions::from(config), deadline).await
    }

    pub fn rpc_host(&self) -> &str {
        &self.rpc_host
    }
}

impl std::fmt::Debug for LndClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LndClient")
            .field("rpc_host", &self.rpc_host)
            .finish()
    }
}

fn connection_error(reason: String, source: tonic::transport::Error) -> LndError {
    LndError::Connection {
        reason: format!("{}: {}", reason, source),
        deadline_exceeded: false,
        source: Some(Box::new(source)),
    }
}

/// Run one unary call under the deadline and map its outcome.
async fn unary<T, F>(call: RpcCall, deadline: Option<Deadline>, fut: F) -> LndResult<T>
where
    F: std::future::Future<Output = Result<tonic::Response<T>, tonic::Status>>,
{
    let start = Instant::now();
    let result = match with_deadline(deadline, fut).await {
        Some(Ok(response)) => Ok(response.into_inner()),
        Some(Err(status)) => Err(LndError::from_status(call, status)),
        None => Err(LndError::Rpc {
            call,
            reason: "deadline exceeded".to_string(),
            deadline_exceeded: true,
        }),
    };
    metrics::record_rpc(call.as_str(), result.is_ok(), start);
    result
}

#[async_trait]
impl LightningRpc for LndClient {
    async fn get_info(&self, deadline: Option<Deadline>) -> LndResult<GetInfoResponse> {
        let mut client = self.inner.clone();
        unary(RpcCall::Info, deadline, client.get_info(GetInfoRequest {})).await
    }

    async fn list_channels(&self, deadline: Option<Deadline>) -> LndResult<ListChannelsResponse> {
        let mut client = self.inner.clone();
        let request = ListChannelsRequest {
            active_only: true,
            ..Default::default()
        };
        unary(RpcCall::Channels, deadline, client.list_channels(request)).await
    }

    async fn wallet_balance(&self, deadline: Option<Deadline>) -> LndResult<WalletBalanceResponse> {
        let mut client = self.inner.clone();
        unary(
            RpcCall::Balance,
            deadline,
            client.wallet_balance(WalletBalanceRequest::default()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lnd::credential::tests::sample_macaroon;
    use crate::lnd::tls::tests::write_self_signed_cert;
    use std::io::Write;

    fn write_macaroon(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    fn options(cert: &std::path::Path, mac: &std::path::Path) -> LndConnectOptions {
        LndConnectOptions {
            // Nothing listens on port 1.
            rpc_host: "127.0.0.1:1".to_string(),
            tls_cert_path: cert.to_string_lossy().into_owned(),
            macaroon_path: mac.to_string_lossy().into_owned(),
            tls_domain: Some("localhost".to_string()),
        }
    }

    #[tokio::test]
    async fn test_missing_cert_is_config_error() {
        let mac = write_macaroon(&sample_macaroon());
        let opts = options(std::path::Path::new("/nonexistent/tls.cert"), mac.path());
        let err = LndClient::connect(&opts, None).await.unwrap_err();
        assert!(matches!(err, LndError::Config(_)));
    }

    #[tokio::test]
    async fn test_bad_macaroon_is_credential_error() {
        let cert = write_self_signed_cert();
        let mac = write_macaroon(&[0x02, 0x01, 0x00]);
        let err = LndClient::connect(&options(cert.path(), mac.path()), None)
            .await
            .unwrap_err();
        assert!(matches!(err, LndError::Credential(_)));
    }

    #[tokio::test]
    async fn test_lazy_connect_succeeds_then_call_fails_with_connection_error() {
        let cert = write_self_signed_cert();
        let mac = write_macaroon(&sample_macaroon());
        let client = LndClient::connect(&options(cert.path(), mac.path()), None)
            .await
            .unwrap();

        let err = client
            .get_info(Some(Deadline::after(Duration::from_secs(5))))
            .await
            .unwrap_err();
        assert!(
            matches!(err, LndError::Connection { deadline_exceeded: false, .. }),
            "unexpected error: {}",
            err
        );
    }

    /// Accepts connections and never writes a byte back.
    async fn hung_node() -> (String, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let handle = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        (addr, handle)
    }

    #[tokio::test]
    async fn test_call_to_hung_node_hits_deadline() {
        let (addr, node) = hung_node().await;
        let cert = write_self_signed_cert();
        let mac = write_macaroon(&sample_macaroon());
        let mut opts = options(cert.path(), mac.path());
        opts.rpc_host = addr;

        let client = LndClient::connect(&opts, None).await.unwrap();
        let err = client
            .get_info(Some(Deadline::after(Duration::from_millis(300))))
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                LndError::Rpc { call: RpcCall::Info, deadline_exceeded: true, .. }
            ),
            "unexpected error: {}",
            err
        );
        node.abort();
    }

    #[tokio::test]
    async fn test_eager_dial_to_hung_node_hits_deadline() {
        let (addr, node) = hung_node().await;
        let cert = write_self_signed_cert();
        let mac = write_macaroon(&sample_macaroon());
        let mut opts = options(cert.path(), mac.path());
        opts.rpc_host = addr;

        let deadline = Deadline::after(Duration::from_millis(300));
        let err = LndClient::connect(&opts, Some(deadline)).await.unwrap_err();
        assert!(
            matches!(err, LndError::Connection { deadline_exceeded: true, .. }),
            "unexpected error: {}",
            err
        );
        node.abort();
    }

    #[tokio::test]
    async fn test_eager_connect_to_dead_host_fails() {
        let cert = write_self_signed_cert();
        let mac = write_macaroon(&sample_macaroon());
        let deadline = Deadline::after(Duration::from_secs(5));
        let err = LndClient::connect(&options(cert.path(), mac.path()), Some(deadline))
            .await
            .unwrap_err();
        assert!(matches!(err, LndError::Connection { .. }));
    }

    #[tokio::test]
    async fn test_invalid_host_is_connection_error() {
        let cert = write_self_signed_cert();
        let mac = write_macaroon(&sample_macaroon());
        let mut opts = options(cert.path(), mac.path());
        opts.rpc_host = "not a host".to_string();
        let err = LndClient::connect(&opts, None).await.unwrap_err();
        assert!(matches!(err, LndError::Connection { .. }));
    }
}
