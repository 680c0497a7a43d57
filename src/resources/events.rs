use crate::Client;
use crate::Result;
use crate::types::request::EventsRequest;
use crate::types::response::{Event, Tag};

/// Operations on `/events`, see [`Client::events`].
#[derive(Clone, Copy, Debug)]
pub struct Events<'client> {
    client: &'client Client,
}

impl<'client> Events<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Retrieves a list of events with optional filtering.
    ///
    /// Events are collections of related markets (e.g., "2024 Presidential Election").
    /// Use filters to search by tags, active status, or other criteria.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, request: &EventsRequest) -> Result<Vec<Event>> {
        self.client.get(&["events"], request).await
    }

    /// Retrieves a single event by its unique ID, including its markets.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no event has this ID, or an error if the request fails.
    pub async fn by_id(&self, id: &str) -> Result<Event> {
        self.client.get(&["events", id], &()).await
    }

    /// Retrieves a single event by its URL-friendly slug.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no event has this slug, or an error if the request fails.
    pub async fn by_slug(&self, slug: &str) -> Result<Event> {
        self.client.get_one(&["events", "slug", slug]).await
    }

    /// Retrieves all tags associated with an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event ID is invalid or the request fails.
    pub async fn tags(&self, id: &str) -> Result<Vec<Tag>> {
        self.client
            .get(&["events", id, "tags"], &())
            .await
            .map_err(|err| err.for_identifier(id))
    }
}
