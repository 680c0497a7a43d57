use crate::Client;
use crate::Result;
use crate::types::request::{CommentsRequest, UserCommentsRequest};
use crate::types::response::Comment;

/// Operations on `/comments`, see [`Client::comments`].
#[derive(Clone, Copy, Debug)]
pub struct Comments<'client> {
    client: &'client Client,
}

impl<'client> Comments<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Retrieves the comments posted on an event, series or market.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, request: &CommentsRequest) -> Result<Vec<Comment>> {
        self.client.get(&["comments"], request).await
    }

    /// Retrieves a comment thread by the ID of its root comment.
    ///
    /// The API answers with the comment followed by its replies.
    ///
    /// # Errors
    ///
    /// Returns an error if the comment ID is invalid or the request fails.
    pub async fn by_id(&self, id: &str) -> Result<Vec<Comment>> {
        self.client.get(&["comments", id], &()).await
    }

    /// Retrieves the comments authored by a wallet address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or the request fails.
    pub async fn by_user_address(
        &self,
        address: &str,
        request: &UserCommentsRequest,
    ) -> Result<Vec<Comment>> {
        self.client
            .get(&["comments", "user_address", address], request)
            .await
    }
}
