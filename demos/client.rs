//! Gamma API endpoint explorer.
//!
//! This demo walks every sub-client against the live API by:
//! 1. Fetching lists first (events, markets, tags, etc.)
//! 2. Extracting real IDs/slugs from responses
//! 3. Using those IDs for subsequent lookups
//!
//! The whole run happens inside [`Client::scoped`], so the session is released on exit.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example gamma --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=gamma.log RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example gamma --features tracing
//! ```

use std::fs::File;
use std::pin::pin;

use futures::StreamExt as _;
use polymarket_gamma_sdk::error::{Kind, NotFound};
use polymarket_gamma_sdk::types::ParentEntityType;
use polymarket_gamma_sdk::types::request::{
    CommentsRequest, EventsRequest, MarketsRequest, RelatedTagsRequest, SearchRequest,
    SeriesListRequest, TagsRequest, TeamsRequest, UserCommentsRequest,
};
use polymarket_gamma_sdk::{Client, Resolved};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::default();
    client.clone().scoped(explore).await;

    info!(closed = client.is_closed(), "session released");

    Ok(())
}

async fn explore(client: Client) {
    match client.status().await {
        Ok(s) => info!(endpoint = "status", result = %s),
        Err(e) => debug!(endpoint = "status", error = %e),
    }

    sports(&client).await;
    tags(&client).await;
    let event_with_comments = events(&client).await;
    markets(&client).await;
    series(&client).await;
    comments(&client, event_with_comments).await;
    resolve(&client).await;

    let query = "politics";
    match client
        .search(&SearchRequest::builder().q(query).build())
        .await
    {
        Ok(r) => {
            let events = r.events.map_or(0, |e| e.len());
            let tags = r.tags.map_or(0, |t| t.len());
            let profiles = r.profiles.map_or(0, |p| p.len());
            info!(
                endpoint = "search",
                query = query,
                events = events,
                tags = tags,
                profiles = profiles
            );
        }
        Err(e) => debug!(endpoint = "search", query = query, error = %e),
    }

    // Walk a few pages of active events through the paginated stream
    let stream = client.stream_data(
        |client, limit, offset| {
            let request = EventsRequest::builder()
                .active(true)
                .limit(limit)
                .offset(offset)
                .build();
            async move { client.events().list(&request).await }
        },
        50,
    );
    let mut stream = pin!(stream.take(120));
    let mut streamed = 0_usize;
    while let Some(result) = stream.next().await {
        match result {
            Ok(_) => streamed += 1,
            Err(e) => {
                debug!(endpoint = "stream_data", error = %e);
                break;
            }
        }
    }
    info!(endpoint = "stream_data", count = streamed);
}

async fn sports(client: &Client) {
    match client.sports().metadata().await {
        Ok(v) => {
            info!(endpoint = "sports", count = v.len());
            for sport in v.iter().take(3) {
                debug!(endpoint = "sports", sport = %sport.sport, image = %sport.image);
            }
        }
        Err(e) => debug!(endpoint = "sports", error = %e),
    }

    match client.sports().market_types().await {
        Ok(v) => info!(
            endpoint = "sports_market_types",
            count = v.market_types.len()
        ),
        Err(e) => debug!(endpoint = "sports_market_types", error = %e),
    }

    match client
        .sports()
        .teams(&TeamsRequest::builder().limit(5).build())
        .await
    {
        Ok(v) => info!(endpoint = "teams", count = v.len()),
        Err(e) => debug!(endpoint = "teams", error = %e),
    }
}

async fn tags(client: &Client) {
    match client
        .tags()
        .list(&TagsRequest::builder().limit(10).build())
        .await
    {
        Ok(v) => info!(endpoint = "tags", count = v.len()),
        Err(e) => debug!(endpoint = "tags", error = %e),
    }

    // "politics" is known to have related tags
    let tag_slug = "politics";
    let related = RelatedTagsRequest::builder().omit_empty(true).build();

    let tag_id = match client.tags().by_slug(tag_slug).await {
        Ok(tag) => {
            info!(endpoint = "tag_by_slug", slug = tag_slug, id = %tag.id);
            Some(tag.id)
        }
        Err(e) => {
            debug!(endpoint = "tag_by_slug", slug = tag_slug, error = %e);
            None
        }
    };

    if let Some(id) = &tag_id {
        match client.tags().by_id(id).await {
            Ok(_) => info!(endpoint = "tag_by_id", id = %id),
            Err(e) => debug!(endpoint = "tag_by_id", id = %id, error = %e),
        }

        match client.tags().related_by_id(id, &related).await {
            Ok(v) => info!(endpoint = "related_tags_by_id", id = %id, count = v.len()),
            Err(e) => debug!(endpoint = "related_tags_by_id", id = %id, error = %e),
        }

        match client.tags().tags_related_to_id(id, &related).await {
            Ok(v) => info!(endpoint = "tags_related_to_id", id = %id, count = v.len()),
            Err(e) => debug!(endpoint = "tags_related_to_id", id = %id, error = %e),
        }
    }

    match client.tags().related_by_slug(tag_slug, &related).await {
        Ok(v) => info!(
            endpoint = "related_tags_by_slug",
            slug = tag_slug,
            count = v.len()
        ),
        Err(e) => debug!(endpoint = "related_tags_by_slug", slug = tag_slug, error = %e),
    }

    match client.tags().tags_related_to_slug(tag_slug, &related).await {
        Ok(v) => info!(
            endpoint = "tags_related_to_slug",
            slug = tag_slug,
            count = v.len()
        ),
        Err(e) => debug!(endpoint = "tags_related_to_slug", slug = tag_slug, error = %e),
    }
}

/// Returns the id of an event that has comments, if one was listed.
async fn events(client: &Client) -> Option<String> {
    let events = match client
        .events()
        .list(
            &EventsRequest::builder()
                .active(true)
                .limit(20)
                .order(vec!["volume".to_owned()])
                .ascending(false)
                .build(),
        )
        .await
    {
        Ok(events) => {
            info!(endpoint = "events", count = events.len());
            events
        }
        Err(e) => {
            debug!(endpoint = "events", error = %e);
            return None;
        }
    };

    let with_comments = events
        .iter()
        .find(|e| e.comment_count.unwrap_or(0) > 0)
        .map(|e| e.id.clone());

    if let Some(event) = events.first() {
        match client.events().by_id(&event.id).await {
            Ok(e) => info!(
                endpoint = "event_by_id",
                id = %event.id,
                markets = e.markets.map_or(0, |m| m.len())
            ),
            Err(e) => debug!(endpoint = "event_by_id", id = %event.id, error = %e),
        }

        match client.events().tags(&event.id).await {
            Ok(v) => info!(endpoint = "event_tags", id = %event.id, count = v.len()),
            Err(e) => debug!(endpoint = "event_tags", id = %event.id, error = %e),
        }

        if let Some(slug) = &event.slug {
            match client.events().by_slug(slug).await {
                Ok(_) => info!(endpoint = "event_by_slug", slug = %slug),
                Err(e) => debug!(endpoint = "event_by_slug", slug = %slug, error = %e),
            }
        }
    }

    with_comments
}

async fn markets(client: &Client) {
    let markets = match client
        .markets()
        .list(&MarketsRequest::builder().closed(false).limit(10).build())
        .await
    {
        Ok(markets) => {
            info!(endpoint = "markets", count = markets.len());
            markets
        }
        Err(e) => {
            debug!(endpoint = "markets", error = %e);
            return;
        }
    };

    // Multiple slugs are sent as repeated query keys
    let slugs: Vec<String> = markets
        .iter()
        .filter_map(|m| m.slug.clone())
        .take(3)
        .collect();

    if slugs.len() >= 2 {
        match client
            .markets()
            .list(&MarketsRequest::builder().slug(slugs.clone()).build())
            .await
        {
            Ok(v) => info!(endpoint = "markets_multiple_slugs", slugs = ?slugs, count = v.len()),
            Err(e) => debug!(endpoint = "markets_multiple_slugs", slugs = ?slugs, error = %e),
        }
    }

    let Some(market) = markets.first() else {
        return;
    };

    match client.markets().by_id(&market.id).await {
        Ok(m) => {
            for outcome in m.outcome_set() {
                info!(
                    endpoint = "market_by_id",
                    id = %m.id,
                    outcome = %outcome.label,
                    price = ?outcome.price
                );
            }
        }
        Err(e) => debug!(endpoint = "market_by_id", id = %market.id, error = %e),
    }

    match client.markets().tags(&market.id).await {
        Ok(v) => info!(endpoint = "market_tags", id = %market.id, count = v.len()),
        Err(e) => debug!(endpoint = "market_tags", id = %market.id, error = %e),
    }

    if let Some(slug) = &market.slug {
        match client.markets().by_slug(slug).await {
            Ok(m) => info!(endpoint = "market_by_slug", slug = %slug, question = %m.question),
            Err(e) => debug!(endpoint = "market_by_slug", slug = %slug, error = %e),
        }
    }

    match client.markets().by_slug("does-not-exist").await {
        Ok(m) => info!(endpoint = "market_by_slug", id = %m.id, "unexpectedly found"),
        Err(e) if e.kind() == Kind::NotFound => {
            let identifier = e.downcast_ref::<NotFound>().map(NotFound::identifier);
            info!(endpoint = "market_by_slug", identifier = ?identifier, "not found as expected");
        }
        Err(e) => debug!(endpoint = "market_by_slug", error = %e),
    }
}

async fn series(client: &Client) {
    let series = match client
        .series()
        .list(
            &SeriesListRequest::builder()
                .limit(10)
                .order("volume".to_owned())
                .ascending(false)
                .build(),
        )
        .await
    {
        Ok(series) => {
            info!(endpoint = "series", count = series.len());
            series
        }
        Err(e) => {
            debug!(endpoint = "series", error = %e);
            return;
        }
    };

    if let Some(id) = series.first().map(|s| &s.id) {
        match client.series().by_id(id).await {
            Ok(_) => info!(endpoint = "series_by_id", id = %id),
            Err(e) => debug!(endpoint = "series_by_id", id = %id, error = %e),
        }
    }
}

async fn comments(client: &Client, event_id: Option<String>) {
    let Some(event_id) = event_id else {
        debug!(
            endpoint = "comments",
            "skipped - no event with comments found"
        );
        return;
    };

    let comments = match client
        .comments()
        .list(
            &CommentsRequest::builder()
                .parent_entity_type(ParentEntityType::Event)
                .parent_entity_id(&event_id)
                .limit(10)
                .build(),
        )
        .await
    {
        Ok(comments) => {
            info!(endpoint = "comments", event_id = %event_id, count = comments.len());
            comments
        }
        Err(e) => {
            debug!(endpoint = "comments", event_id = %event_id, error = %e);
            return;
        }
    };

    let Some(comment) = comments.first() else {
        return;
    };

    match client.comments().by_id(&comment.id).await {
        Ok(v) => info!(endpoint = "comments_by_id", id = %comment.id, count = v.len()),
        Err(e) => debug!(endpoint = "comments_by_id", id = %comment.id, error = %e),
    }

    let Some(address) = &comment.user_address else {
        return;
    };

    match client
        .comments()
        .by_user_address(address, &UserCommentsRequest::builder().limit(5).build())
        .await
    {
        Ok(v) => info!(endpoint = "comments_by_user_address", address = %address, count = v.len()),
        Err(e) => debug!(endpoint = "comments_by_user_address", address = %address, error = %e),
    }

    match client.profiles().public(address).await {
        Ok(p) => {
            let name = p.pseudonym.as_deref().unwrap_or("anonymous");
            info!(endpoint = "public_profile", address = %address, name = %name);
        }
        Err(e) => debug!(endpoint = "public_profile", address = %address, error = %e),
    }
}

async fn resolve(client: &Client) {
    for url in [
        "https://polymarket.com/event/will-barron-attend-georgetown",
        "https://polymarket.com/market/will-barron-attend-georgetown",
        "https://polymarket.com/leaderboard",
    ] {
        match client.resolve_url(url).await {
            Ok(Some(Resolved::Market(m))) => {
                info!(endpoint = "resolve_url", url, market = %m.question);
            }
            Ok(Some(Resolved::Event(e))) => {
                info!(endpoint = "resolve_url", url, event = ?e.title);
            }
            Ok(Some(other)) => info!(endpoint = "resolve_url", url, resolved = ?other),
            Ok(None) => info!(endpoint = "resolve_url", url, "not a market or event URL"),
            Err(e) => debug!(endpoint = "resolve_url", url, error = %e),
        }
    }
}
