//! View model handed to the page renderer.

use std::fmt;

use crate::lnd::lnrpc::Channel;

/// Atoms per DCR.
pub const UNITS_PER_COIN: i128 = 100_000_000;

/// A signed amount in atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(pub i128);

impl Amount {
    pub fn units(&self) -> i128 {
        self.0
    }
}

impl From<i64> for Amount {
    fn from(units: i64) -> Self {
        Self(units as i128)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_coin = UNITS_PER_COIN as u128;
        write!(f, "{}{}.{:08} DCR", sign, abs / per_coin, abs % per_coin)
    }
}

/// Identity of the node as reported by `GetInfo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentity {
    /// First advertised URI, empty if the node advertises none.
    pub address: String,
    /// Network the node believes it is on.
    pub network: String,
    pub num_active_channels: u32,
}

/// One payment channel, as returned by the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRecord {
    pub remote_pubkey: String,
    pub channel_point: String,
    pub chan_id: u64,
    pub capacity: i64,
    pub local_balance: i64,
    pub remote_balance: i64,
    pub active: bool,
}

impl From<Channel> for ChannelRecord {
    fn from(channel: Channel) -> Self {
        Self {
            remote_pubkey: channel.remote_pubkey,
            channel_point: channel.channel_point,
            chan_id: channel.chan_id,
            capacity: channel.capacity,
            local_balance: channel.local_balance,
            remote_balance: channel.remote_balance,
            active: channel.active,
        }
    }
}

/// Confirmed on-chain wallet balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletBalance {
    pub confirmed: Amount,
}

/// Complete state of the node at one point in time.
///
/// Built fresh for every page request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    identity: NodeIdentity,
    channels: Vec<ChannelRecord>,
    total_capacity: Amount,
    balance: WalletBalance,
}

impl Snapshot {
    /// Assemble a snapshot; the aggregate capacity is always derived from
    /// `channels`, in order, with a 128-bit accumulator.
    pub fn new(identity: NodeIdentity, channels: Vec<ChannelRecord>, balance: WalletBalance) -> Self {
        let total_capacity = total_capacity(&channels);
        Self {
            identity,
            channels,
            total_capacity,
            balance,
        }
    }

    pub fn identity(&self) -> &NodeIdentity {
        &self.identity
    }

    /// Channels in the order the node returned them.
    pub fn channels(&self) -> &[ChannelRecord] {
        &self.channels
    }

    pub fn total_capacity(&self) -> Amount {
        self.total_capacity
    }

    pub fn balance(&self) -> Amount {
        self.balance.confirmed
    }
}

/// Exact sum of channel capacities.
pub fn total_capacity(channels: &[ChannelRecord]) -> Amount {
    Amount(channels.iter().map(|c| c.capacity as i128).sum())
}
