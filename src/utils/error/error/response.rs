//! Error bodies returned by the billing server

use serde::{Deserialize, Serialize};

/// Shown when the failure is on our side and retrying will not help
pub const CONTACT_SUPPORT: &str = "Something went wrong. Please contact support.";

/// Shown when the page state is stale or the request never completed
pub const TRY_RELOADING: &str = "Something went wrong. Please reload the page.";

/// JSON body of a non-success billing response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerErrorBody {
    pub msg: String,
    #[serde(default)]
    pub result: Option<String>,
}

impl ServerErrorBody {
    /// Parse a response body, falling back to the reload hint when the body
    /// is not the expected JSON.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            msg: TRY_RELOADING.to_string(),
            result: Some("error".to_string()),
        })
    }
}
