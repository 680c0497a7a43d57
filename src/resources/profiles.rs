use crate::Client;
use crate::Result;
use crate::types::request::PublicProfileRequest;
use crate::types::response::PublicProfile;

/// User profiles, see [`Client::profiles`].
#[derive(Clone, Copy, Debug)]
pub struct Profiles<'client> {
    client: &'client Client,
}

impl<'client> Profiles<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Retrieves the public trading profile of a wallet address.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the address has no profile, or an error if the request
    /// fails.
    pub async fn public(&self, address: &str) -> Result<PublicProfile> {
        self.client
            .get(&["public-profile"], &PublicProfileRequest { address })
            .await
    }
}
