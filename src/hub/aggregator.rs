//! Folds the node's query responses into a [`Snapshot`].

use crate::hub::model::{Amount, ChannelRecord, NodeIdentity, Snapshot, WalletBalance};
use crate::lnd::client::LightningRpc;
use crate::lnd::types::{Deadline, LndError, LndResult, RpcCall};

/// Query the node and build a fresh snapshot.
///
/// The info call runs first so a node on the wrong network is rejected
/// before anything else is asked; the channel and balance calls then run
/// concurrently. Any failure fails the whole call and nothing partial is
/// returned.
pub async fn fetch_snapshot<R>(
    rpc: &R,
    expected_network: &str,
    deadline: Option<Deadline>,
) -> LndResult<Snapshot>
where
    R: LightningRpc + ?Sized,
{
    let info = rpc.get_info(deadline).await?;

    let reported = info
        .chains
        .first()
        .map(|chain| chain.network.clone())
        .ok_or_else(|| LndError::rpc(RpcCall::Info, "node reported no chains"))?;

    if reported != expected_network {
        return Err(LndError::NetworkMismatch {
            reported,
            expected: expected_network.to_string(),
        });
    }

    let address = match info.uris.first() {
        Some(uri) => uri.clone(),
        None => {
            tracing::warn!(
                network = %reported,
                "Node did not include a URI; its external address is probably not configured"
            );
            String::new()
        }
    };

    let identity = NodeIdentity {
        address,
        network: reported,
        num_active_channels: info.num_active_channels,
    };

    let (channels, balance) = tokio::try_join!(
        rpc.list_channels(deadline),
        rpc.wallet_balance(deadline),
    )?;

    let channels: Vec<ChannelRecord> = channels
        .channels
        .into_iter()
        .map(ChannelRecord::from)
        .collect();

    let snapshot = Snapshot::new(
        identity,
        channels,
        WalletBalance {
            confirmed: Amount::from(balance.confirmed_balance),
        },
    );

    tracing::debug!(
        channels = snapshot.channels().len(),
        total_capacity = %snapshot.total_capacity(),
        balance = %snapshot.balance(),
        "Snapshot assembled"
    );

    Ok(snapshot)
}
