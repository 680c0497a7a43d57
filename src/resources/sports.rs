use crate::Client;
use crate::Result;
use crate::types::request::TeamsRequest;
use crate::types::response::{SportsMarketTypesResponse, SportsMetadata, Team};

/// Sports reference data, see [`Client::sports`].
#[derive(Clone, Copy, Debug)]
pub struct Sports<'client> {
    client: &'client Client,
}

impl<'client> Sports<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Retrieves a list of sports teams with optional filtering.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn teams(&self, request: &TeamsRequest) -> Result<Vec<Team>> {
        self.client.get(&["teams"], request).await
    }

    /// Retrieves metadata for all supported sports.
    ///
    /// Returns information about sports categories available on Polymarket,
    /// including sports like NFL, NBA, MLB, etc.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn metadata(&self) -> Result<Vec<SportsMetadata>> {
        self.client.get(&["sports"], &()).await
    }

    /// Retrieves valid market types for sports (e.g., moneyline, spread, over/under).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn market_types(&self) -> Result<SportsMarketTypesResponse> {
        self.client.get(&["sports", "market-types"], &()).await
    }
}
