use crate::Client;
use crate::Result;
use crate::types::request::SeriesListRequest;
use crate::types::response::Series as SeriesEntry;

/// Operations on `/series`, see [`Client::series`].
#[derive(Clone, Copy, Debug)]
pub struct Series<'client> {
    client: &'client Client,
}

impl<'client> Series<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Retrieves a list of series with optional filtering.
    ///
    /// Series group recurring events (e.g., weekly sports outcomes, monthly economic
    /// indicators).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, request: &SeriesListRequest) -> Result<Vec<SeriesEntry>> {
        self.client.get(&["series"], request).await
    }

    /// Retrieves a single series by its unique ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no series has this ID, or an error if the request fails.
    pub async fn by_id(&self, id: &str) -> Result<SeriesEntry> {
        self.client.get(&["series", id], &()).await
    }
}
