//! Template lookup and placeholder substitution.

use crate::{CONTENT_ANALYZER_PROMPT, email, instagram, linkedin, threads, tiktok, twitter};
use reflow_core::{Platform, Tone};

/// Look up the generation prompt for a platform x tone pair.
///
/// Total over both closed enums; an unmapped combination cannot exist.
pub fn prompt_for(platform: Platform, tone: Tone) -> &'static str {
    match platform {
        Platform::TikTok => tiktok::prompt(tone),
        Platform::Twitter => twitter::prompt(tone),
        Platform::LinkedIn => linkedin::prompt(tone),
        Platform::Instagram => instagram::prompt(tone),
        Platform::Threads => threads::prompt(tone),
        Platform::Email => email::prompt(tone),
    }
}

/// Render key points as a newline-joined, 1-indexed numbered list.
///
/// # Examples
///
/// ```
/// let points = vec!["first".to_string(), "second".to_string()];
/// assert_eq!(reflow_prompts::render_key_points(&points), "1. first\n2. second");
/// ```
pub fn render_key_points(key_points: &[String]) -> String {
    key_points
        .iter()
        .enumerate()
        .map(|(idx, point)| format!("{}. {}", idx + 1, point))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fill the analysis prompt with sanitized input content.
pub fn fill_analysis_prompt(content: &str) -> String {
    CONTENT_ANALYZER_PROMPT.replacen("{content}", content, 1)
}

/// Fill a platform prompt with the shared analysis fields.
pub fn fill_platform_prompt(template: &str, core_message: &str, key_points: &[String]) -> String {
    template
        .replacen("{coreMessage}", core_message, 1)
        .replacen("{keyPoints}", &render_key_points(key_points), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_platform_tone_pair_has_a_template() {
        for platform in Platform::iter() {
            for tone in Tone::iter() {
                let template = prompt_for(platform, tone);
                assert!(
                    template.contains("{coreMessage}"),
                    "{platform}/{tone} missing coreMessage placeholder"
                );
                assert!(
                    template.contains("{keyPoints}"),
                    "{platform}/{tone} missing keyPoints placeholder"
                );
                assert!(
                    template.contains("OUTPUT FORMAT"),
                    "{platform}/{tone} missing output format section"
                );
            }
        }
    }

    #[test]
    fn analysis_prompt_substitutes_content_once() {
        let filled = fill_analysis_prompt("the raw input");
        assert!(filled.contains("the raw input"));
        assert!(!filled.contains("{content}"));
    }

    #[test]
    fn platform_prompt_substitutes_analysis_fields() {
        let template = prompt_for(Platform::LinkedIn, Tone::Authority);
        let points = vec!["point a".to_string(), "point b".to_string()];
        let filled = fill_platform_prompt(template, "the core idea", &points);
        assert!(filled.contains("the core idea"));
        assert!(filled.contains("1. point a"));
        assert!(filled.contains("2. point b"));
        assert!(!filled.contains("{coreMessage}"));
        assert!(!filled.contains("{keyPoints}"));
    }
}
