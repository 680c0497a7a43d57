//! Mapping of `polymarket.com` web URLs onto Gamma entities.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::types::response::{Event, Market};

/// What a web URL points at, before anything is fetched.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlTarget {
    /// Market slug
    Market(String),
    /// Event slug
    Event(String),
}

impl UrlTarget {
    /// Extracts the target from a web URL.
    ///
    /// Recognized paths, with the host, query and fragment ignored:
    ///
    /// | Path | Target |
    /// |------|--------|
    /// | `/market/{slug}` | market `{slug}` |
    /// | `/event/{event-slug}/{market-slug}` | market `{market-slug}` |
    /// | `/event/{slug}` | event `{slug}` |
    ///
    /// Slugs are percent-decoded. Returns `None` for any other path, for a slug that does not
    /// decode to UTF-8 and for input that is not an absolute URL.
    ///
    /// ```
    /// use polymarket_gamma_sdk::UrlTarget;
    ///
    /// assert_eq!(
    ///     UrlTarget::parse("https://polymarket.com/event/nba-finals/celtics-win"),
    ///     Some(UrlTarget::Market("celtics-win".to_owned()))
    /// );
    /// assert_eq!(UrlTarget::parse("https://polymarket.com/leaderboard"), None);
    /// ```
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        let url = Url::parse(url.trim()).ok()?;
        let segments: Vec<&str> = url
            .path_segments()?
            .filter(|segment| !segment.is_empty())
            .collect();

        let decode = |slug: &str| {
            percent_decode_str(slug)
                .decode_utf8()
                .ok()
                .map(Cow::into_owned)
        };

        match segments.as_slice() {
            ["market", slug] | ["event", _, slug] => decode(*slug).map(Self::Market),
            ["event", slug] => decode(*slug).map(Self::Event),
            _ => None,
        }
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::Market(slug) | Self::Event(slug) => slug,
        }
    }
}

/// The entity a URL resolved to, see [`Client::resolve_url`](crate::Client::resolve_url).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Market(Box<Market>),
    Event(Box<Event>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_path() {
        assert_eq!(
            UrlTarget::parse("https://polymarket.com/market/will-it-rain"),
            Some(UrlTarget::Market("will-it-rain".to_owned()))
        );
    }

    #[test]
    fn event_path() {
        let target = UrlTarget::parse("https://polymarket.com/event/presidential-election-2024")
            .expect("event URL");

        assert_eq!(
            target,
            UrlTarget::Event("presidential-election-2024".to_owned())
        );
        assert_eq!(target.slug(), "presidential-election-2024");
    }

    #[test]
    fn event_with_market_path_targets_market() {
        assert_eq!(
            UrlTarget::parse(
                "https://polymarket.com/event/ncaab-2025/barron-vs-georgetown?tid=1#comments"
            ),
            Some(UrlTarget::Market("barron-vs-georgetown".to_owned()))
        );
    }

    #[test]
    fn trailing_slash_and_empty_segments_are_ignored() {
        assert_eq!(
            UrlTarget::parse("https://polymarket.com//event/fed-rates/"),
            Some(UrlTarget::Event("fed-rates".to_owned()))
        );
    }

    #[test]
    fn slugs_are_percent_decoded() {
        assert_eq!(
            UrlTarget::parse("https://polymarket.com/market/caf%C3%A9"),
            Some(UrlTarget::Market("café".to_owned()))
        );
        assert_eq!(
            UrlTarget::parse("https://polymarket.com/event/world%20cup/final%2Dscore"),
            Some(UrlTarget::Market("final-score".to_owned()))
        );
    }

    #[test]
    fn slug_that_is_not_utf8_is_none() {
        assert_eq!(UrlTarget::parse("https://polymarket.com/market/%FF%FE"), None);
    }

    #[test]
    fn unrecognized_paths_are_none() {
        for url in [
            "https://polymarket.com/",
            "https://polymarket.com/leaderboard",
            "https://polymarket.com/market",
            "https://polymarket.com/event",
            "https://polymarket.com/profile/0xabc",
            "https://polymarket.com/event/a/b/c",
            "not a url",
            "",
            "mailto:someone@example.com",
        ] {
            assert_eq!(UrlTarget::parse(url), None, "{url}");
        }
    }
}
