//! Home page rendering.

use std::fmt::Write;

use crate::hub::Snapshot;

/// Render the dashboard for one snapshot.
pub fn render_home(snapshot: &Snapshot) -> String {
    let identity = snapshot.identity();
    let address = if identity.address.is_empty() {
        "not advertised".to_string()
    } else {
        escape_html(&identity.address)
    };

    let mut rows = String::new();
    for channel in snapshot.channels() {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&channel.remote_pubkey),
            escape_html(&channel.channel_point),
            channel.capacity,
            channel.local_balance,
            channel.remote_balance,
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Lightning Hub</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<h1>Lightning Hub</h1>
<dl>
<dt>Node</dt><dd class="node-addr">{address}</dd>
<dt>Network</dt><dd class="network">{network}</dd>
<dt>Active channels</dt><dd class="channels-count">{count}</dd>
<dt>Total capacity</dt><dd class="capacity">{capacity}</dd>
<dt>Wallet balance</dt><dd class="balance">{balance}</dd>
</dl>
<table class="channels">
<thead><tr><th>Peer</th><th>Channel point</th><th>Capacity</th><th>Local</th><th>Remote</th></tr></thead>
<tbody>{rows}</tbody>
</table>
</body>
</html>
"#,
        address = address,
        network = escape_html(&identity.network),
        count = identity.num_active_channels,
        capacity = snapshot.total_capacity(),
        balance = snapshot.balance(),
        rows = rows,
    )
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub::{Amount, ChannelRecord, NodeIdentity, WalletBalance};

    fn snapshot(address: &str) -> Snapshot {
        Snapshot::new(
            NodeIdentity {
                address: address.to_string(),
                network: "testnet".into(),
                num_active_channels: 1,
            },
            vec![ChannelRecord {
                remote_pubkey: "02<script>".into(),
                channel_point: "abcd:1".into(),
                chan_id: 7,
                capacity: 500_000,
                local_balance: 200_000,
                remote_balance: 300_000,
                active: true,
            }],
            WalletBalance { confirmed: Amount(750_000) },
        )
    }

    #[test]
    fn test_render_contains_values() {
        let html = render_home(&snapshot("03ff@1.2.3.4:9735"));
        assert!(html.contains("03ff@1.2.3.4:9735"));
        assert!(html.contains("testnet"));
        assert!(html.contains("0.00500000 DCR"));
        assert!(html.contains("0.00750000 DCR"));
        assert!(html.contains("abcd:1"));
    }

    #[test]
    fn test_render_escapes() {
        let html = render_home(&snapshot(""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("02&lt;script&gt;"));
        assert!(html.contains("not advertised"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a&b"c'<>"#), "a&amp;b&quot;c&#39;&lt;&gt;");
    }
}
