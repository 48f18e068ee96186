use crate::query::DEFAULT_MAX_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Runtime settings for a [`MemberSystem`](crate::lifecycle::MemberSystem).
///
/// Every field has a default, so a partial document deserializes:
///
/// ```
/// use query_recipe::lifecycle::SystemConfig;
///
/// let config: SystemConfig = serde_json::from_str(r#"{"max_page_size": 100}"#).unwrap();
/// assert_eq!(config.max_page_size, 100);
/// assert_eq!(config.default_page_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Request channel capacity of each table actor.
    pub channel_buffer: usize,
    /// Page size used when a request does not name one.
    pub default_page_size: u64,
    /// Largest page size a request may ask for.
    pub max_page_size: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            default_page_size: 20,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}
