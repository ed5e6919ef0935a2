//! JSON request bodies for tag operations.
//!
//! `None` fields are left out of the body so the API keeps its current values.

use serde::{Deserialize, Serialize};

/// Request body of `create_tag`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTagRequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<u64>,
}

impl CreateTagRequestBody {
    /// Create a body naming a tag in the given workspace.
    pub fn new(name: impl Into<String>, workspace_id: u64) -> Self {
        Self {
            name: Some(name.into()),
            workspace_id: Some(workspace_id),
        }
    }
}

/// Request body of `update_tag`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTagRequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<u64>,
}

impl UpdateTagRequestBody {
    /// Rename a tag.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            workspace_id: None,
        }
    }
}
