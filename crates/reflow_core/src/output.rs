//! Per-platform generation outcome.

use crate::{Platform, PlatformContent};
use serde::{Deserialize, Serialize};

/// Outcome of one platform's generation call.
///
/// Content and error are mutually exclusive: a failed call carries an error
/// message and no content. One `PlatformOutput` exists per requested
/// platform, in request order, and is immutable once its call settles.
///
/// # Examples
///
/// ```
/// use reflow_core::{Platform, PlatformOutput};
///
/// let failed = PlatformOutput::failed(Platform::Email, "provider timeout");
/// assert!(failed.is_error());
/// assert!(failed.content.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformOutput {
    /// The platform this outcome belongs to
    pub platform: Platform,
    /// Generated content, absent when the call failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PlatformContent>,
    /// Failure message, absent when the call succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlatformOutput {
    /// A successful outcome.
    pub fn fulfilled(platform: Platform, content: PlatformContent) -> Self {
        Self {
            platform,
            content: Some(content),
            error: None,
        }
    }

    /// A failed outcome. The platform still appears in the result list.
    pub fn failed(platform: Platform, error: impl Into<String>) -> Self {
        Self {
            platform,
            content: None,
            error: Some(error.into()),
        }
    }

    /// Whether this platform's generation failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
