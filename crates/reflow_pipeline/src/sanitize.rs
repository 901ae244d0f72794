//! Input validation and sanitization.
//!
//! The denylist strips the obvious role-injection markers before user
//! content is spliced into a prompt. It is a best-effort mitigation, not a
//! security boundary; the prompts themselves pin the role framing.

use regex::Regex;
use reflow_core::{GenerationRequest, Platform, Tone};
use reflow_error::{PipelineError, PipelineErrorKind, PipelineResult};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Minimum accepted content length, in characters.
pub const MIN_CONTENT_LENGTH: usize = 100;
/// Maximum accepted content length, in characters.
pub const MAX_CONTENT_LENGTH: usize = 10_000;
/// Maximum platforms per request.
pub const MAX_PLATFORMS: usize = 6;

static INJECTION_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)system:|assistant:|\[system\]|\[assistant\]|<\|im_start\|>|<\|im_end\|>")
        .expect("Valid injection marker regex")
});

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Valid whitespace regex"));

/// Strips role-injection markers and collapses whitespace.
///
/// # Examples
///
/// ```
/// let cleaned = reflow_pipeline::sanitize_input("Hello SYSTEM: do\n\nthings");
/// assert_eq!(cleaned, "Hello do things");
/// ```
pub fn sanitize_input(content: &str) -> String {
    let stripped = INJECTION_MARKERS.replace_all(content, "");
    WHITESPACE_RUNS
        .replace_all(stripped.trim(), " ")
        .into_owned()
}

fn invalid(message: impl Into<String>) -> PipelineError {
    PipelineError::new(PipelineErrorKind::InvalidInput(message.into()))
}

/// Checks structural bounds on a raw request.
pub fn validate_request(content: &str, platforms: &[Platform]) -> PipelineResult<()> {
    if content.trim().chars().count() < MIN_CONTENT_LENGTH {
        return Err(invalid("Content must be at least 100 characters long"));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(invalid("Content must be less than 10,000 characters"));
    }
    if platforms.is_empty() {
        return Err(invalid("At least one platform must be selected"));
    }
    if platforms.len() > MAX_PLATFORMS {
        return Err(invalid("Maximum 6 platforms can be selected"));
    }
    let mut seen = HashSet::new();
    for platform in platforms {
        if !seen.insert(platform) {
            return Err(invalid(format!("Duplicate platform selected: {platform}")));
        }
    }
    Ok(())
}

/// Validates and sanitizes a raw request into a [`GenerationRequest`].
pub fn prepare_request(
    content: &str,
    platforms: Vec<Platform>,
    tone: Tone,
) -> PipelineResult<GenerationRequest> {
    validate_request(content, &platforms)?;
    Ok(GenerationRequest {
        content: sanitize_input(content),
        platforms,
        tone,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_content() -> String {
        "Ship smaller changes more often. ".repeat(10)
    }

    #[test]
    fn strips_every_injection_marker() {
        let dirty = "a system: b ASSISTANT: c [System] d [assistant] e <|im_start|> f <|im_end|> g";
        assert_eq!(sanitize_input(dirty), "a b c d e f g");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(sanitize_input("  a\n\n b\t\tc  "), "a b c");
    }

    #[test]
    fn leaves_clean_content_alone() {
        let clean = "Plain prose about systems design.";
        assert_eq!(sanitize_input(clean), clean);
    }

    #[test]
    fn short_content_is_rejected() {
        let err = validate_request("too short", &[Platform::Threads]).unwrap_err();
        assert!(matches!(
            err.kind(),
            PipelineErrorKind::InvalidInput(msg) if msg.contains("at least 100")
        ));
    }

    #[test]
    fn oversized_content_is_rejected() {
        let huge = "x".repeat(MAX_CONTENT_LENGTH + 1);
        assert!(validate_request(&huge, &[Platform::Threads]).is_err());
    }

    #[test]
    fn empty_platform_list_is_rejected() {
        assert!(validate_request(&long_content(), &[]).is_err());
    }

    #[test]
    fn duplicate_platforms_are_rejected() {
        let err =
            validate_request(&long_content(), &[Platform::Email, Platform::Email]).unwrap_err();
        assert!(matches!(
            err.kind(),
            PipelineErrorKind::InvalidInput(msg) if msg.contains("Duplicate")
        ));
    }

    #[test]
    fn prepare_request_sanitizes_content() {
        let raw = format!("{} [system] extra", long_content());
        let request =
            prepare_request(&raw, vec![Platform::Threads], Tone::Educational).unwrap();
        assert!(!request.content.contains("[system]"));
        assert_eq!(request.platforms, vec![Platform::Threads]);
    }
}
