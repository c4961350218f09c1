use serde::{Deserialize, Serialize};

pub const DEFAULT_RESOURCE: &str = "master_classes.json";
pub const CONTAINER_ID: &str = "master-class-selection-container";
pub const LOADING_MESSAGE: &str = "Loading Master Classes...";
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to load Master Classes. Please check the console for details.";

/// Where to load the class list from and where to render it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL (relative to the page in the browser) or, natively, a URL or file path
    pub resource_url: String,
    /// Id of the element the selection is rendered into
    pub container_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resource_url: DEFAULT_RESOURCE.to_string(),
            container_id: CONTAINER_ID.to_string(),
        }
    }
}
