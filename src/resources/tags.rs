use crate::Client;
use crate::Result;
use crate::types::request::{RelatedTagsRequest, TagsRequest};
use crate::types::response::{RelatedTag, Tag};

/// Operations on `/tags`, see [`Client::tags`].
#[derive(Clone, Copy, Debug)]
pub struct Tags<'client> {
    client: &'client Client,
}

impl<'client> Tags<'client> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self { client }
    }

    /// Retrieves a list of tags with optional filtering.
    ///
    /// Tags categorize markets and events (e.g., "Politics", "Crypto", "Sports").
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, request: &TagsRequest) -> Result<Vec<Tag>> {
        self.client.get(&["tags"], request).await
    }

    /// Retrieves a single tag by its unique ID.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no tag has this ID, or an error if the request fails.
    pub async fn by_id(&self, id: &str) -> Result<Tag> {
        self.client.get(&["tags", id], &()).await
    }

    /// Retrieves a single tag by its URL-friendly slug.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no tag has this slug, or an error if the request fails.
    pub async fn by_slug(&self, slug: &str) -> Result<Tag> {
        self.client.get_one(&["tags", "slug", slug]).await
    }

    /// Retrieves related tag relationships for a tag by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag ID is invalid or the request fails.
    pub async fn related_by_id(
        &self,
        id: &str,
        request: &RelatedTagsRequest,
    ) -> Result<Vec<RelatedTag>> {
        self.client
            .get(&["tags", id, "related-tags"], request)
            .await
            .map_err(|err| err.for_identifier(id))
    }

    /// Same as [`Self::related_by_id`] but uses a slug identifier instead of an ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the slug is invalid or the request fails.
    pub async fn related_by_slug(
        &self,
        slug: &str,
        request: &RelatedTagsRequest,
    ) -> Result<Vec<RelatedTag>> {
        self.client
            .get(&["tags", "slug", slug, "related-tags"], request)
            .await
            .map_err(|err| err.for_identifier(slug))
    }

    /// Retrieves the full tag objects related to a tag by ID.
    ///
    /// Unlike [`Self::related_by_id`], which returns the relationships, this returns the tags
    /// on the other end of them.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag ID is invalid or the request fails.
    pub async fn tags_related_to_id(
        &self,
        id: &str,
        request: &RelatedTagsRequest,
    ) -> Result<Vec<Tag>> {
        self.client
            .get(&["tags", id, "related-tags", "tags"], request)
            .await
            .map_err(|err| err.for_identifier(id))
    }

    /// Same as [`Self::tags_related_to_id`] but uses a slug identifier instead of an ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the slug is invalid or the request fails.
    pub async fn tags_related_to_slug(
        &self,
        slug: &str,
        request: &RelatedTagsRequest,
    ) -> Result<Vec<Tag>> {
        self.client
            .get(&["tags", "slug", slug, "related-tags", "tags"], request)
            .await
            .map_err(|err| err.for_identifier(slug))
    }
}
