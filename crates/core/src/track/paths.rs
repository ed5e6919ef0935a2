/// Path prefix of every Track API v9 endpoint.
pub const API_PREFIX: &str = "/api/v9";

/// `/api/v9/workspaces/{workspace_id}/tags`
pub fn workspace_tags_path(workspace_id: u64) -> String {
    format!("{API_PREFIX}/workspaces/{workspace_id}/tags")
}

/// `/api/v9/workspaces/{workspace_id}/tags/{tag_id}`
pub fn tag_path(workspace_id: u64, tag_id: u64) -> String {
    format!("{}/{tag_id}", workspace_tags_path(workspace_id))
}
