//! Track API v9 resource models, request bodies and paths.

mod paths;
mod requests;
mod types;

pub use paths::{tag_path, workspace_tags_path, API_PREFIX};
pub use requests::{CreateTagRequestBody, UpdateTagRequestBody};
pub use types::Tag;

/// Default base URL of the Track API.
pub const DEFAULT_BASE_URL: &str = "https://api.track.toggl.com";
