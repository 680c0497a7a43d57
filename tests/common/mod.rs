#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use std::time::Duration;

use httpmock::MockServer;
use polymarket_gamma_sdk::{Client, Config};
use serde_json::{Value, json};

pub const BARRON_SLUG: &str = "will-barron-attend-georgetown";
pub const BARRON_QUESTION: &str = "Will Barron attend Georgetown?";

pub const PROFILE_ADDRESS: &str = "0x56687bf447db6ffa42ffe2204a05edaa20f55839";

/// A client pointed at `server` with a short timeout, so a stuck mock fails fast.
pub fn client(server: &MockServer) -> Client {
    let config = Config::builder()
        .base_url(server.base_url())
        .timeout(Duration::from_secs(5))
        .build();

    Client::with_config(config).unwrap()
}

pub fn market(id: &str, slug: &str, question: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "question": question,
        "conditionId": "0x0000000000000000000000000000000000000000000000000000000000000001",
        "outcomes": "[\"Yes\", \"No\"]",
        "outcomePrices": "[\"0.035\", \"0.965\"]",
        "active": true,
        "closed": false
    })
}

pub fn event(id: &str, slug: &str, title: &str, markets: &[Value]) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "title": title,
        "active": true,
        "markets": markets
    })
}
