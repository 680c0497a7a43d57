//! Resource sub-clients.
//!
//! Each sub-client borrows the [`Client`](crate::Client) it was obtained from and holds no state
//! of its own, so they are cheap to create on every call:
//!
//! ```no_run
//! use polymarket_gamma_sdk::Client;
//!
//! # async fn example() -> polymarket_gamma_sdk::Result<()> {
//! let client = Client::default();
//!
//! let market = client.markets().by_slug("will-it-rain-tomorrow").await?;
//! let tags = client.markets().tags(&market.id).await?;
//! # Ok(())
//! # }
//! ```

mod comments;
mod events;
mod markets;
mod profiles;
mod series;
mod sports;
mod tags;

pub use comments::Comments;
pub use events::Events;
pub use markets::Markets;
pub use profiles::Profiles;
pub use series::Series;
pub use sports::Sports;
pub use tags::Tags;
