//! Platform-specific structured content.
//!
//! Each platform has its own output shape; [`PlatformContent`] is the closed
//! tagged union over all of them. Consumers render through exhaustive
//! matches, so adding a platform is a compile-time-visible change.

use crate::Platform;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One talking point in a short-video script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkingPoint {
    /// The point to make on camera
    pub point: String,
    /// Suggested visual or action while making it
    pub visual: String,
    /// Rough on-screen duration (e.g. "~15 seconds")
    pub duration: String,
}

/// TikTok / Reels video script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TikTokContent {
    /// Attention-grabbing opening line (first 3 seconds)
    pub hook: String,
    /// What the viewer will learn or gain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promise: Option<String>,
    /// Main talking points with visual suggestions
    pub talking_points: Vec<TalkingPoint>,
    /// Final takeaway or recap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payoff: Option<String>,
    /// Call to action
    pub cta: String,
    /// Suggested hashtags (max 5)
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Short caption to pair with the video (max 150 chars)
    pub caption_suggestion: String,
}

/// Twitter / X thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterContent {
    /// The tweets, in posting order; the first one is the hook
    pub thread: Vec<String>,
    /// Number of tweets in the thread
    pub tweet_count: u32,
    /// Suggested hashtags
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// One tip for driving engagement on this thread
    pub engagement_tip: String,
}

/// LinkedIn post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInContent {
    /// Scroll-stopping first line
    pub hook: String,
    /// The full post body
    pub post: String,
    /// Bulleted key takeaways
    #[serde(default)]
    pub key_takeaways: Vec<String>,
    /// Call to action (usually a question)
    pub cta: String,
    /// Suggested hashtags (3-5)
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Character count of the post body
    pub character_count: u32,
}

/// Instagram caption with carousel suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramContent {
    /// First line shown before the fold
    pub hook: String,
    /// The full caption
    pub caption: String,
    /// Slide-by-slide carousel ideas
    #[serde(default)]
    pub slide_ideas: Vec<String>,
    /// Call to action
    pub cta: String,
    /// Suggested hashtags
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Character count of the caption
    pub character_count: u32,
}

/// Threads post sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadsContent {
    /// The posts, in posting order
    pub posts: Vec<String>,
    /// Number of posts
    pub post_count: u32,
    /// Suggested hashtags
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// One tip for driving engagement
    pub engagement_tip: String,
}

/// One section of an email newsletter body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSection {
    /// Section heading
    pub heading: String,
    /// Section body
    pub content: String,
}

/// Email call to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCta {
    /// Link text
    pub text: String,
    /// Destination (placeholder if unknown)
    pub link: String,
    /// One sentence of context around the link
    pub context: String,
}

/// Email newsletter issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContent {
    /// Subject line
    pub subject_line: String,
    /// Inbox preview text
    pub preview_text: String,
    /// Opening paragraph(s)
    pub email_body: String,
    /// Body sections
    #[serde(default)]
    pub sections: Vec<EmailSection>,
    /// Call to action block
    pub cta: EmailCta,
    /// Sign-off line
    pub sign_off: String,
    /// Approximate word count
    pub word_count: u32,
}

/// Closed union of per-platform structured content.
///
/// Serialized with an internal `platform` tag matching [`Platform`] names, so
/// a persisted value round-trips with its platform identity attached.
///
/// # Examples
///
/// ```
/// use reflow_core::{Platform, PlatformContent, ThreadsContent};
///
/// let content = PlatformContent::Threads(ThreadsContent {
///     posts: vec!["One idea per post.".to_string()],
///     post_count: 1,
///     hashtags: vec![],
///     engagement_tip: "Reply to every comment in the first hour.".to_string(),
/// });
/// assert_eq!(content.platform(), Platform::Threads);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform", content = "data", rename_all = "lowercase")]
pub enum PlatformContent {
    /// Short-video script
    TikTok(TikTokContent),
    /// Microblog thread
    Twitter(TwitterContent),
    /// Professional-network post
    LinkedIn(LinkedInContent),
    /// Photo-network caption
    Instagram(InstagramContent),
    /// Lightweight microblog thread
    Threads(ThreadsContent),
    /// Email newsletter
    Email(EmailContent),
}

impl PlatformContent {
    /// The platform this content targets.
    pub fn platform(&self) -> Platform {
        match self {
            PlatformContent::TikTok(_) => Platform::TikTok,
            PlatformContent::Twitter(_) => Platform::Twitter,
            PlatformContent::LinkedIn(_) => Platform::LinkedIn,
            PlatformContent::Instagram(_) => Platform::Instagram,
            PlatformContent::Threads(_) => Platform::Threads,
            PlatformContent::Email(_) => Platform::Email,
        }
    }

    /// Plain-text rendering for history views and copy-to-clipboard.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        match self {
            PlatformContent::TikTok(c) => {
                let _ = writeln!(out, "{}", c.hook);
                for (idx, tp) in c.talking_points.iter().enumerate() {
                    let _ = writeln!(out, "{}. {} [{}]", idx + 1, tp.point, tp.visual);
                }
                let _ = writeln!(out, "{}", c.cta);
            }
            PlatformContent::Twitter(c) => {
                for tweet in &c.thread {
                    let _ = writeln!(out, "{}", tweet);
                }
            }
            PlatformContent::LinkedIn(c) => {
                let _ = writeln!(out, "{}", c.post);
                let _ = writeln!(out, "{}", c.cta);
            }
            PlatformContent::Instagram(c) => {
                let _ = writeln!(out, "{}", c.caption);
                let _ = writeln!(out, "{}", c.cta);
            }
            PlatformContent::Threads(c) => {
                for post in &c.posts {
                    let _ = writeln!(out, "{}", post);
                }
            }
            PlatformContent::Email(c) => {
                let _ = writeln!(out, "Subject: {}", c.subject_line);
                let _ = writeln!(out, "{}", c.email_body);
                for section in &c.sections {
                    let _ = writeln!(out, "{}\n{}", section.heading, section.content);
                }
                let _ = writeln!(out, "{}", c.sign_off);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_serialization_carries_platform_identity() {
        let content = PlatformContent::Twitter(TwitterContent {
            thread: vec!["hook".to_string(), "body".to_string()],
            tweet_count: 2,
            hashtags: vec!["#rust".to_string()],
            engagement_tip: "ask a question".to_string(),
        });
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value["platform"], "twitter");
        let back: PlatformContent = serde_json::from_value(value).unwrap();
        assert_eq!(back, content);
    }

    #[test]
    fn summary_renders_every_variant() {
        let email = PlatformContent::Email(EmailContent {
            subject_line: "A smaller batch".to_string(),
            preview_text: "why small ships win".to_string(),
            email_body: "Hi,".to_string(),
            sections: vec![EmailSection {
                heading: "One".to_string(),
                content: "Small batches reduce risk.".to_string(),
            }],
            cta: EmailCta {
                text: "Read more".to_string(),
                link: "{link}".to_string(),
                context: "The full write-up.".to_string(),
            },
            sign_off: "— R".to_string(),
            word_count: 12,
        });
        let rendered = email.summary();
        assert!(rendered.contains("Subject: A smaller batch"));
        assert!(rendered.contains("Small batches reduce risk."));
    }
}
