//! Types for the Polymarket Gamma API.
//!
//! - **Common types**: enums shared by requests and responses, plus re-exports of the date and
//!   decimal types used in payloads so callers do not need those crates in their `Cargo.toml`.
//! - **Request types**: builder-pattern filter structs for list endpoints
//!   (e.g., [`request::EventsRequest`], [`request::MarketsRequest`]).
//! - **Response types**: validated entities returned by the API
//!   (e.g., [`response::Event`], [`response::Market`], [`response::Tag`]).
//!
//! # Request Building
//!
//! All request types use the builder pattern via the [`bon`](https://docs.rs/bon) crate:
//!
//! ```
//! use polymarket_gamma_sdk::types::request::{EventsRequest, MarketsRequest};
//!
//! // Simple request with defaults
//! let events = EventsRequest::builder().build();
//!
//! // Request with filters
//! let markets = MarketsRequest::builder()
//!     .limit(10)
//!     .closed(false)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

/// Date and time types for timestamps in API responses.
pub use chrono::{DateTime, NaiveDate, Utc};
/// Arbitrary precision decimal type for prices, volumes and liquidity.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use polymarket_gamma_sdk::types::dec;
/// let price = dec!(0.55);
/// ```
pub use rust_decimal_macros::dec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum RelatedTagsStatus {
    Active,
    Closed,
    All,
    /// Unknown status from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[non_exhaustive]
pub enum ParentEntityType {
    Event,
    Series,
    #[serde(rename = "market")]
    #[strum(serialize = "market")]
    Market,
    /// Unknown entity type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}
