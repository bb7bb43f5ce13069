//! Message and client definitions for the subset of the `lnrpc.Lightning`
//! service consumed by the hub.
//!
//! Kept in the layout `prost-build`/`tonic-build` emit so the wire format
//! stays byte-compatible with the node's `lightning.proto`. Only the read
//! calls the hub issues are present; unknown fields sent by newer nodes are
//! skipped by the decoder.

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetInfoRequest {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetInfoResponse {
    /// The version of the LND software that the node is running.
    #[prost(string, tag = "14")]
    pub version: ::prost::alloc::string::String,
    /// The identity pubkey of the current node.
    #[prost(string, tag = "1")]
    pub identity_pubkey: ::prost::alloc::string::String,
    /// If applicable, the alias of the current node, e.g. "bob"
    #[prost(string, tag = "2")]
    pub alias: ::prost::alloc::string::String,
    /// Number of pending channels
    #[prost(uint32, tag = "3")]
    pub num_pending_channels: u32,
    /// Number of active channels
    #[prost(uint32, tag = "4")]
    pub num_active_channels: u32,
    /// Number of inactive channels
    #[prost(uint32, tag = "15")]
    pub num_inactive_channels: u32,
    /// Number of peers
    #[prost(uint32, tag = "5")]
    pub num_peers: u32,
    /// The node's current view of the height of the best block
    #[prost(uint32, tag = "6")]
    pub block_height: u32,
    /// The node's current view of the hash of the best block
    #[prost(string, tag = "8")]
    pub block_hash: ::prost::alloc::string::String,
    /// Whether the wallet's view is synced to the main chain
    #[prost(bool, tag = "9")]
    pub synced_to_chain: bool,
    /// A list of active chains the node is connected to
    #[prost(message, repeated, tag = "16")]
    pub chains: ::prost::alloc::vec::Vec<Chain>,
    /// The URIs of the current node.
    #[prost(string, repeated, tag = "12")]
    pub uris: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Chain {
    /// The blockchain the node is on (eg decred)
    #[prost(string, tag = "1")]
    pub chain: ::prost::alloc::string::String,
    /// The network the node is on (eg regtest, testnet, mainnet)
    #[prost(string, tag = "2")]
    pub network: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListChannelsRequest {
    #[prost(bool, tag = "1")]
    pub active_only: bool,
    #[prost(bool, tag = "2")]
    pub inactive_only: bool,
    #[prost(bool, tag = "3")]
    pub public_only: bool,
    #[prost(bool, tag = "4")]
    pub private_only: bool,
    /// Filters the response for channels with a target peer's pubkey. If peer is
    /// empty, all channels will be returned.
    #[prost(bytes = "vec", tag = "5")]
    pub peer: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListChannelsResponse {
    /// The list of active channels
    #[prost(message, repeated, tag = "11")]
    pub channels: ::prost::alloc::vec::Vec<Channel>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Channel {
    /// Whether this channel is active or not
    #[prost(bool, tag = "1")]
    pub active: bool,
    /// The identity pubkey of the remote node
    #[prost(string, tag = "2")]
    pub remote_pubkey: ::prost::alloc::string::String,
    /// The outpoint (txid:index) of the funding transaction. With this value, Bob
    /// will be able to generate a signature for Alice's version of the commitment
    /// transaction.
    #[prost(string, tag = "3")]
    pub channel_point: ::prost::alloc::string::String,
    /// The unique channel ID for the channel. The first 3 bytes are the block
    /// height, the next 3 the index within the block, and the last 2 bytes are the
    /// output index for the channel.
    #[prost(uint64, tag = "4")]
    pub chan_id: u64,
    /// The total amount of funds held in this channel
    #[prost(int64, tag = "5")]
    pub capacity: i64,
    /// This node's current balance in this channel
    #[prost(int64, tag = "6")]
    pub local_balance: i64,
    /// The counterparty's current balance in this channel
    #[prost(int64, tag = "7")]
    pub remote_balance: i64,
    /// The amount calculated to be paid in fees for the current set of commitment
    /// transactions.
    #[prost(int64, tag = "8")]
    pub commit_fee: i64,
    /// The total number of satoshis we've sent within this channel.
    #[prost(int64, tag = "12")]
    pub total_satoshis_sent: i64,
    /// The total number of satoshis we've received within this channel.
    #[prost(int64, tag = "13")]
    pub total_satoshis_received: i64,
    /// The total number of updates conducted within this channel.
    #[prost(uint64, tag = "14")]
    pub num_updates: u64,
    /// Whether this channel is advertised to the network or not.
    #[prost(bool, tag = "17")]
    pub private: bool,
    /// True if we were the ones that created the channel.
    #[prost(bool, tag = "18")]
    pub initiator: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WalletBalanceRequest {
    /// The wallet account the balance is shown for.
    /// If this is not specified, the balance of the "default" account is shown.
    #[prost(string, tag = "1")]
    pub account: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct WalletBalanceResponse {
    /// The balance of the wallet
    #[prost(int64, tag = "1")]
    pub total_balance: i64,
    /// The confirmed balance of a wallet(with >= 1 confirmations)
    #[prost(int64, tag = "2")]
    pub confirmed_balance: i64,
    /// The unconfirmed balance of a wallet(with 0 confirmations)
    #[prost(int64, tag = "3")]
    pub unconfirmed_balance: i64,
    /// The total amount of wallet UTXOs held in outputs that are locked for
    /// other usage.
    #[prost(int64, tag = "5")]
    pub locked_balance: i64,
}
/// Generated client implementations.
pub mod lightning_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    /// Lightning is the main RPC server of the daemon.
    #[derive(Debug, Clone)]
    pub struct LightningClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl LightningClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> LightningClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> LightningClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
            >>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            LightningClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// GetInfo returns general information concerning the lightning node including
        /// it's identity pubkey, alias, the chains it is connected to, and information
        /// concerning the number of open+pending channels.
        pub async fn get_info(
            &mut self,
            request: impl tonic::IntoRequest<super::GetInfoRequest>,
        ) -> std::result::Result<tonic::Response<super::GetInfoResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/lnrpc.Lightning/GetInfo");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("lnrpc.Lightning", "GetInfo"));
            self.inner.unary(req, path, codec).await
        }
        /// ListChannels returns a description of all the open channels that this node
        /// is a participant in.
        pub async fn list_channels(
            &mut self,
            request: impl tonic::IntoRequest<super::ListChannelsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListChannelsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/lnrpc.Lightning/ListChannels",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("lnrpc.Lightning", "ListChannels"));
            self.inner.unary(req, path, codec).await
        }
        /// WalletBalance returns total unspent outputs(confirmed and unconfirmed), all
        /// confirmed unspent outputs and all unconfirmed unspent outputs under control
        /// of the wallet.
        pub async fn wallet_balance(
            &mut self,
            request: impl tonic::IntoRequest<super::WalletBalanceRequest>,
        ) -> std::result::Result<
            tonic::Response<super::WalletBalanceResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/lnrpc.Lightning/WalletBalance",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("lnrpc.Lightning", "WalletBalance"));
            self.inner.unary(req, path, codec).await
        }
    }
}
