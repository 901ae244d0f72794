//! Structured content analysis, produced once per request by pipeline stage 1.

use serde::{Deserialize, Serialize};

/// Content category detected by the analyzer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    /// Blog post
    Blog,
    /// Podcast transcript or show notes
    Podcast,
    /// Video transcript
    Video,
    /// Long-form article
    Article,
    /// Loose notes
    Notes,
}

/// Authorial tone detected by the analyzer.
///
/// Distinct from [`crate::Tone`]: this describes the input, not the
/// requested output voice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnalyzedTone {
    /// Instructional voice
    Educational,
    /// Informal voice
    Casual,
    /// Formal, workplace voice
    Professional,
    /// Inspirational voice
    Motivational,
}

/// Intermediate representation of analyzed input content.
///
/// Produced once by the content analyzer and consumed by every platform
/// generator invocation for that request. Field names follow the JSON the
/// analysis prompt asks the model to emit.
///
/// # Examples
///
/// ```
/// use reflow_core::ContentAnalysis;
///
/// let analysis: ContentAnalysis = serde_json::from_str(
///     r#"{
///         "coreMessage": "Ship smaller changes more often",
///         "keyPoints": ["Small batches reduce risk", "Feedback arrives sooner", "Rollbacks stay cheap"],
///         "topic": "Software delivery",
///         "audience": "Engineering leads",
///         "contentType": "blog",
///         "tone": "professional"
///     }"#,
/// ).unwrap();
/// assert_eq!(analysis.key_points.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    /// The one idea a reader should remember (max ~20 words)
    pub core_message: String,
    /// 3-5 specific supporting points, in priority order
    pub key_points: Vec<String>,
    /// Main topic/theme
    pub topic: String,
    /// Target audience description
    pub audience: String,
    /// Detected content category
    pub content_type: ContentType,
    /// Detected authorial tone
    pub tone: AnalyzedTone,
}
