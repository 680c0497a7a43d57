#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

//! Entities returned by the Gamma API.
//!
//! Fields that every payload of a kind carries are plain types and are required: a response
//! lacking them is rejected with a validation error instead of producing a half-filled value.
//! Everything else is an `Option`, and fields the API adds later are ignored.

use bon::Builder;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as};

use crate::serde_helpers::{JsonStringOrSeq, StringFromAny};
use crate::types::Decimal;

/// Image optimization metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageOptimization {
    pub id: Option<String>,
    pub image_url_source: Option<String>,
    pub image_url_optimized: Option<String>,
    pub image_size_kb_source: Option<f64>,
    pub image_size_kb_optimized: Option<f64>,
    pub image_optimized_complete: Option<bool>,
}

/// Pagination information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Pagination {
    pub has_more: Option<bool>,
    pub total_results: Option<i32>,
}

/// Health check response, `"OK"` when the API is up.
pub type HealthResponse = String;

/// A sports team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Team {
    pub id: i32,
    pub name: Option<String>,
    pub league: Option<String>,
    pub record: Option<String>,
    pub logo: Option<String>,
    pub abbreviation: Option<String>,
    pub alias: Option<String>,
    pub color: Option<String>,
    pub provider_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Metadata for one sport/league.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SportsMetadata {
    pub id: Option<i32>,
    pub sport: String,
    pub image: String,
    pub resolution: Option<String>,
    pub ordering: Option<String>,
    /// Tag ids, sent by the API as a comma separated string.
    #[serde_as(as = "Option<StringWithSeparator::<CommaSeparator, String>>")]
    pub tags: Option<Vec<String>>,
    pub series: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SportsMarketTypesResponse {
    #[serde(default)]
    #[builder(default)]
    pub market_types: Vec<String>,
}

/// A tag for categorizing markets and events.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Tag {
    #[serde_as(as = "StringFromAny")]
    #[builder(into)]
    pub id: String,
    pub label: Option<String>,
    pub slug: Option<String>,
    pub force_show: Option<bool>,
    pub force_hide: Option<bool>,
    pub is_carousel: Option<bool>,
    pub published_at: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A relationship between two tags.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RelatedTag {
    #[serde_as(as = "StringFromAny")]
    #[builder(into)]
    pub id: String,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(rename = "tagID")]
    pub tag_id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(rename = "relatedTagID")]
    pub related_tag_id: Option<String>,
    pub rank: Option<i32>,
}

/// A category for organizing content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Category {
    pub id: String,
    pub label: Option<String>,
    pub parent_category: Option<String>,
    pub slug: Option<String>,
}

/// A named grouping of related markets, e.g. "2024 Presidential Election".
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Event {
    #[serde_as(as = "StringFromAny")]
    #[builder(into)]
    pub id: String,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub resolution_source: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub creation_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub closed_time: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub new: Option<bool>,
    pub featured: Option<bool>,
    pub restricted: Option<bool>,
    pub liquidity: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub open_interest: Option<Decimal>,
    pub volume_24hr: Option<Decimal>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub comment_count: Option<i32>,
    pub enable_order_book: Option<bool>,
    pub neg_risk: Option<bool>,
    #[serde(rename = "negRiskMarketID")]
    pub neg_risk_market_id: Option<String>,
    pub series_slug: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<DateTime<Utc>>,
    pub live: Option<bool>,
    pub ended: Option<bool>,
    pub score: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub image_optimized: Option<ImageOptimization>,
    pub icon_optimized: Option<ImageOptimization>,
    /// Markets contained in this event, in the order the API lists them.
    pub markets: Option<Vec<Market>>,
    pub series: Option<Vec<Series>>,
    pub categories: Option<Vec<Category>>,
    pub tags: Option<Vec<Tag>>,
}

/// One outcome of a [`Market`] with its implied probability.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Outcome {
    pub label: String,
    /// Last quoted price, in `[0, 1]`. `None` when the API did not send a price for this outcome.
    pub price: Option<Decimal>,
}

/// A single tradable question with its outcomes.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Market {
    #[serde_as(as = "StringFromAny")]
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub question: String,
    pub condition_id: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub resolution_source: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub closed_time: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    #[serde_as(as = "Option<JsonStringOrSeq>")]
    pub outcomes: Option<Vec<String>>,
    #[serde_as(as = "Option<JsonStringOrSeq>")]
    pub outcome_prices: Option<Vec<Decimal>>,
    #[serde_as(as = "Option<JsonStringOrSeq>")]
    pub clob_token_ids: Option<Vec<String>>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub new: Option<bool>,
    pub featured: Option<bool>,
    pub restricted: Option<bool>,
    pub accepting_orders: Option<bool>,
    pub enable_order_book: Option<bool>,
    pub market_type: Option<String>,
    pub group_item_title: Option<String>,
    #[serde(rename = "questionID")]
    pub question_id: Option<String>,
    pub liquidity: Option<Decimal>,
    pub liquidity_num: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub volume_num: Option<Decimal>,
    pub volume_24hr: Option<Decimal>,
    pub order_price_min_tick_size: Option<Decimal>,
    pub order_min_size: Option<Decimal>,
    pub last_trade_price: Option<Decimal>,
    pub best_bid: Option<Decimal>,
    pub best_ask: Option<Decimal>,
    pub spread: Option<Decimal>,
    pub one_day_price_change: Option<Decimal>,
    pub neg_risk: Option<bool>,
    pub uma_resolution_status: Option<String>,
    pub sports_market_type: Option<String>,
    pub game_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub events: Option<Vec<Event>>,
    pub categories: Option<Vec<Category>>,
    pub tags: Option<Vec<Tag>>,
}

impl Market {
    /// Pairs each outcome label with its price, in the order the API lists them.
    ///
    /// Labels without a matching price get `None`; surplus prices are dropped.
    #[must_use]
    pub fn outcome_set(&self) -> Vec<Outcome> {
        let prices = self.outcome_prices.as_deref().unwrap_or_default();

        self.outcomes
            .iter()
            .flatten()
            .enumerate()
            .map(|(index, label)| Outcome {
                label: label.clone(),
                price: prices.get(index).copied(),
            })
            .collect()
    }
}

/// A series of recurring events.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Series {
    #[serde_as(as = "StringFromAny")]
    #[builder(into)]
    pub id: String,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub series_type: Option<String>,
    pub recurrence: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub featured: Option<bool>,
    pub volume: Option<Decimal>,
    pub volume_24hr: Option<Decimal>,
    pub liquidity: Option<Decimal>,
    pub start_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub comment_count: Option<i32>,
    pub events: Option<Vec<Event>>,
    pub categories: Option<Vec<Category>>,
    pub tags: Option<Vec<Tag>>,
}

/// A position held by a commenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CommentPosition {
    pub token_id: Option<String>,
    pub position_size: Option<Decimal>,
}

/// Public profile details embedded in a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CommentProfile {
    pub name: Option<String>,
    pub pseudonym: Option<String>,
    pub display_username_public: Option<bool>,
    pub bio: Option<String>,
    pub is_mod: Option<bool>,
    pub is_creator: Option<bool>,
    pub proxy_wallet: Option<String>,
    pub base_address: Option<String>,
    pub profile_image: Option<String>,
    pub positions: Option<Vec<CommentPosition>>,
}

/// A reaction to a comment.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Reaction {
    #[serde_as(as = "StringFromAny")]
    #[builder(into)]
    pub id: String,
    #[serde(rename = "commentID")]
    pub comment_id: Option<i64>,
    pub reaction_type: Option<String>,
    pub icon: Option<String>,
    pub user_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A comment on an event, series, or market.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Comment {
    #[serde_as(as = "StringFromAny")]
    #[builder(into)]
    pub id: String,
    pub body: Option<String>,
    pub parent_entity_type: Option<String>,
    #[serde(rename = "parentEntityID")]
    pub parent_entity_id: Option<i64>,
    #[serde(rename = "parentCommentID")]
    pub parent_comment_id: Option<String>,
    pub user_address: Option<String>,
    pub reply_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub profile: Option<CommentProfile>,
    pub reactions: Option<Vec<Reaction>>,
    pub report_count: Option<i32>,
    pub reaction_count: Option<i32>,
}

/// A user attached to a public profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct PublicProfileUser {
    pub id: Option<String>,
    pub creator: Option<bool>,
    #[serde(rename = "mod")]
    pub is_mod: Option<bool>,
}

/// Public trading profile of a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PublicProfile {
    pub created_at: Option<DateTime<Utc>>,
    pub proxy_wallet: Option<String>,
    pub profile_image: Option<String>,
    pub display_username_public: Option<bool>,
    pub bio: Option<String>,
    pub pseudonym: Option<String>,
    pub name: Option<String>,
    pub users: Option<Vec<PublicProfileUser>>,
    pub x_username: Option<String>,
    pub verified_badge: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchTag {
    pub id: Option<String>,
    pub label: Option<String>,
    pub slug: Option<String>,
    pub event_count: Option<i32>,
}

/// A profile in search results.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Profile {
    #[serde_as(as = "StringFromAny")]
    #[builder(into)]
    pub id: String,
    pub name: Option<String>,
    pub pseudonym: Option<String>,
    pub display_username_public: Option<bool>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub proxy_wallet: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Results of a full-text search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct SearchResults {
    pub events: Option<Vec<Event>>,
    pub tags: Option<Vec<SearchTag>>,
    pub profiles: Option<Vec<Profile>>,
    pub pagination: Option<Pagination>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn market_outcome_set_pairs_labels_with_prices() {
        let market: Market = serde_json::from_value(json!({
            "id": "1",
            "question": "Will it rain?",
            "outcomes": "[\"Yes\", \"No\"]",
            "outcomePrices": "[\"0.35\", \"0.65\"]"
        }))
        .expect("deserialize");

        let outcomes = market.outcome_set();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].label, "Yes");
        assert_eq!(outcomes[0].price, Some(dec!(0.35)));
        assert_eq!(outcomes[1].label, "No");
        assert_eq!(outcomes[1].price, Some(dec!(0.65)));
    }

    #[test]
    fn market_outcome_set_tolerates_missing_prices() {
        let market = Market::builder()
            .id("2")
            .question("Who wins?")
            .outcomes(vec!["A".to_owned(), "B".to_owned(), "C".to_owned()])
            .outcome_prices(vec![dec!(0.5)])
            .build();

        let outcomes = market.outcome_set();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].price, Some(dec!(0.5)));
        assert_eq!(outcomes[2].price, None);
    }

    #[test]
    fn market_without_outcomes_has_empty_set() {
        let market = Market::builder().id("3").question("?").build();

        assert!(market.outcome_set().is_empty());
    }

    #[test]
    fn market_accepts_numeric_id() {
        let market: Market =
            serde_json::from_value(json!({ "id": 517_310, "question": "Numeric?" }))
                .expect("deserialize");

        assert_eq!(market.id, "517310");
    }

    #[test]
    fn market_without_question_is_rejected() {
        let result = serde_json::from_value::<Market>(json!({ "id": "1", "slug": "no-question" }));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("question"));
    }

    #[test]
    fn event_with_nested_markets_keeps_order() {
        let event: Event = serde_json::from_value(json!({
            "id": "10",
            "slug": "election",
            "title": "Election",
            "markets": [
                { "id": "b", "question": "B?" },
                { "id": "a", "question": "A?" }
            ]
        }))
        .expect("deserialize");

        let ids: Vec<_> = event
            .markets
            .iter()
            .flatten()
            .map(|market| market.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn sports_metadata_splits_tags() {
        let sport: SportsMetadata = serde_json::from_value(json!({
            "sport": "nba",
            "image": "https://example.com/nba.png",
            "tags": "1,745,100639"
        }))
        .expect("deserialize");

        assert_eq!(
            sport.tags,
            Some(vec!["1".to_owned(), "745".to_owned(), "100639".to_owned()])
        );
    }
}
