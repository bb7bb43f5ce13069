//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use lnhub::lnd::lnrpc::{
    Chain, Channel, GetInfoResponse, ListChannelsResponse, WalletBalanceResponse,
};
use lnhub::lnd::types::with_deadline;
use lnhub::lnd::{Deadline, LightningRpc, LndError, LndResult, RpcCall};

/// In-memory node answering the three read calls.
///
/// Every call bumps a counter so tests can assert what was queried.
pub struct MockNode {
    pub networks: Vec<String>,
    pub uris: Vec<String>,
    pub channels: Vec<Channel>,
    pub confirmed_balance: i64,
    pub fail_on: Mutex<Option<RpcCall>>,
    pub delay: Option<Duration>,
    pub info_calls: AtomicU32,
    pub channel_calls: AtomicU32,
    pub balance_calls: AtomicU32,
}

impl MockNode {
    pub fn new(network: &str) -> Self {
        Self {
            networks: vec![network.to_string()],
            uris: vec!["02abc@10.0.0.1:9735".to_string()],
            channels: Vec::new(),
            confirmed_balance: 0,
            fail_on: Mutex::new(None),
            delay: None,
            info_calls: AtomicU32::new(0),
            channel_calls: AtomicU32::new(0),
            balance_calls: AtomicU32::new(0),
        }
    }

    pub fn with_channels(mut self, capacities: &[i64]) -> Self {
        self.channels = capacities
            .iter()
            .enumerate()
            .map(|(i, capacity)| channel(i as u64 + 1, *capacity))
            .collect();
        self
    }

    pub fn with_balance(mut self, confirmed: i64) -> Self {
        self.confirmed_balance = confirmed;
        self
    }

    pub fn with_networks(mut self, networks: &[&str]) -> Self {
        self.networks = networks.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing(self, call: RpcCall) -> Self {
        *self.fail_on.lock().unwrap() = Some(call);
        self
    }

    pub fn calls(&self) -> (u32, u32, u32) {
        (
            self.info_calls.load(Ordering::SeqCst),
            self.channel_calls.load(Ordering::SeqCst),
            self.balance_calls.load(Ordering::SeqCst),
        )
    }

    pub fn total_calls(&self) -> u32 {
        let (info, channels, balance) = self.calls();
        info + channels + balance
    }

    async fn answer(&self, call: RpcCall, deadline: Option<Deadline>) -> LndResult<()> {
        if let Some(delay) = self.delay {
            if with_deadline(deadline, tokio::time::sleep(delay)).await.is_none() {
                return Err(LndError::Rpc {
                    call,
                    reason: "deadline exceeded".to_string(),
                    deadline_exceeded: true,
                });
            }
        }
        if *self.fail_on.lock().unwrap() == Some(call) {
            return Err(LndError::rpc(call, "injected failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl LightningRpc for MockNode {
    async fn get_info(&self, deadline: Option<Deadline>) -> LndResult<GetInfoResponse> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(RpcCall::Info, deadline).await?;
        Ok(GetInfoResponse {
            alias: "mock".to_string(),
            num_active_channels: self.channels.len() as u32,
            chains: self
                .networks
                .iter()
                .map(|network| Chain {
                    chain: "decred".to_string(),
                    network: network.clone(),
                })
                .collect(),
            uris: self.uris.clone(),
            ..Default::default()
        })
    }

    async fn list_channels(&self, deadline: Option<Deadline>) -> LndResult<ListChannelsResponse> {
        self.channel_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(RpcCall::Channels, deadline).await?;
        Ok(ListChannelsResponse {
            channels: self.channels.clone(),
        })
    }

    async fn wallet_balance(&self, deadline: Option<Deadline>) -> LndResult<WalletBalanceResponse> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        self.answer(RpcCall::Balance, deadline).await?;
        Ok(WalletBalanceResponse {
            total_balance: self.confirmed_balance,
            confirmed_balance: self.confirmed_balance,
            ..Default::default()
        })
    }
}

pub fn channel(chan_id: u64, capacity: i64) -> Channel {
    Channel {
        active: true,
        remote_pubkey: format!("03{:064x}", chan_id),
        channel_point: format!("{:064x}:0", chan_id),
        chan_id,
        capacity,
        local_balance: capacity / 2,
        remote_balance: capacity - capacity / 2,
        ..Default::default()
    }
}

/// A minimal v2 binary macaroon with location "lnd" and identifier "admin".
pub fn macaroon_bytes() -> Vec<u8> {
    let mut bytes = vec![0x02];
    bytes.extend_from_slice(&[0x01, 0x03]);
    bytes.extend_from_slice(b"lnd");
    bytes.extend_from_slice(&[0x02, 0x05]);
    bytes.extend_from_slice(b"admin");
    bytes.extend_from_slice(&[0x00, 0x00]);
    bytes.extend_from_slice(&[0x06, 0x20]);
    bytes.extend_from_slice(&[0x5a; 32]);
    bytes
}

/// Self-signed certificate for `localhost`, PEM encoded.
pub fn cert_pem() -> String {
    let cert = rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
    cert.cert.pem()
}

pub fn write_file(dir: &std::path::Path, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    path
}
