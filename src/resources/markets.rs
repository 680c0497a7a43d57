use crate::Client;
use crate::Result;
use crate::types::request::MarketsRequest;
use crate::types::response::{Market, Tag};

/// Operations on `/markets`, see [`Client::markets`].
#[derive(Clone, Copy, Debug)]
pub struct Markets<'client> {
    client: &'client Client,
}

impl<'client> Markets<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Retrieves a list of prediction markets with optional filtering.
    ///
    /// Use filters to search by tags, active status, slugs or CLOB token IDs. Markets come back
    /// in the order the API returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or an element is missing a required field.
    pub async fn list(&self, request: &MarketsRequest) -> Result<Vec<Market>> {
        self.client.get(&["markets"], request).await
    }

    /// Retrieves a single market by its unique ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no market has this ID, or an error if the request fails.
    pub async fn by_id(&self, id: &str) -> Result<Market> {
        self.client.get(&["markets", id], &()).await
    }

    /// Retrieves a single market by its URL-friendly slug.
    ///
    /// Returns the same information as [`Self::by_id`] but uses a slug identifier instead of a
    /// numeric ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no market has this slug, or an error if the request fails.
    pub async fn by_slug(&self, slug: &str) -> Result<Market> {
        self.client.get_one(&["markets", "slug", slug]).await
    }

    /// Retrieves all tags associated with a market.
    ///
    /// # Errors
    ///
    /// Returns an error if the market ID is invalid or the request fails.
    pub async fn tags(&self, id: &str) -> Result<Vec<Tag>> {
        self.client
            .get(&["markets", id, "tags"], &())
            .await
            .map_err(|err| err.for_identifier(id))
    }
}
