//! Tag API operations.

use super::track::TrackClient;
use crate::context::Context;
use crate::error::Result;
use toggl_core::track::{
    tag_path, workspace_tags_path, CreateTagRequestBody, Tag, UpdateTagRequestBody,
};

impl TrackClient {
    /// List workspace tags.
    pub async fn get_tags(&self, ctx: Option<&Context>, workspace_id: u64) -> Result<Vec<Tag>> {
        self.http_get(ctx, &workspace_tags_path(workspace_id)).await
    }

    /// Create a workspace tag.
    pub async fn create_tag(
        &self,
        ctx: Option<&Context>,
        workspace_id: u64,
        body: &CreateTagRequestBody,
    ) -> Result<Tag> {
        self.http_post(ctx, &workspace_tags_path(workspace_id), body).await
    }

    /// Update a workspace tag.
    pub async fn update_tag(
        &self,
        ctx: Option<&Context>,
        workspace_id: u64,
        tag_id: u64,
        body: &UpdateTagRequestBody,
    ) -> Result<Tag> {
        self.http_put(ctx, &tag_path(workspace_id, tag_id), body).await
    }

    /// Delete a workspace tag.
    pub async fn delete_tag(
        &self,
        ctx: Option<&Context>,
        workspace_id: u64,
        tag_id: u64,
    ) -> Result<()> {
        self.http_delete(ctx, &tag_path(workspace_id, tag_id)).await
    }
}
