//! Stage 2: per-platform generation.

use reflow_core::{
    ContentAnalysis, LlmConfig, LlmResponse, Platform, PlatformContent, PlatformOutput, Tone,
};
use reflow_error::LlmResult;
use reflow_llm::{TextGenerator, parse_json};
use reflow_prompts::{fill_platform_prompt, prompt_for};
use tracing::{debug, error, instrument};

fn platform_config(platform: Platform) -> LlmConfig {
    LlmConfig {
        // Higher temperature for creative platform copy.
        temperature: 0.8,
        max_tokens: 2500,
        system_prompt: format!(
            "You are a {} content expert. Always return valid JSON matching the exact output format specified.",
            platform
        ),
    }
}

fn parse_content(platform: Platform, response: &LlmResponse) -> LlmResult<PlatformContent> {
    Ok(match platform {
        Platform::TikTok => PlatformContent::TikTok(parse_json(response)?),
        Platform::Twitter => PlatformContent::Twitter(parse_json(response)?),
        Platform::LinkedIn => PlatformContent::LinkedIn(parse_json(response)?),
        Platform::Instagram => PlatformContent::Instagram(parse_json(response)?),
        Platform::Threads => PlatformContent::Threads(parse_json(response)?),
        Platform::Email => PlatformContent::Email(parse_json(response)?),
    })
}

/// Generates content for one platform.
///
/// Never fails the request: transport, vendor, and parse failures all
/// collapse into a failed [`PlatformOutput`] carrying the error message.
/// Returns the tokens consumed, zero for a failed call.
#[instrument(skip(driver, analysis), fields(platform = %platform, tone = %tone))]
pub(crate) async fn generate_platform(
    driver: &dyn TextGenerator,
    platform: Platform,
    tone: Tone,
    analysis: &ContentAnalysis,
) -> (PlatformOutput, u32) {
    let template = prompt_for(platform, tone);
    let prompt = fill_platform_prompt(template, &analysis.core_message, &analysis.key_points);

    let response = match driver.generate(&prompt, &platform_config(platform)).await {
        Ok(response) => response,
        Err(e) => {
            error!(platform = %platform, error = %e, "Platform generation call failed");
            return (PlatformOutput::failed(platform, e.to_string()), 0);
        }
    };

    match parse_content(platform, &response) {
        Ok(content) => {
            debug!(platform = %platform, tokens = response.tokens, "Platform generation complete");
            (
                PlatformOutput::fulfilled(platform, content),
                response.tokens,
            )
        }
        Err(e) => {
            error!(platform = %platform, error = %e, "Platform output rejected");
            (PlatformOutput::failed(platform, e.to_string()), 0)
        }
    }
}
