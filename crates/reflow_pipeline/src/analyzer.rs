//! Stage 1: content analysis.

use reflow_core::{ContentAnalysis, LlmConfig, LlmResponse};
use reflow_error::PipelineResult;
use reflow_llm::{TextGenerator, parse_json};
use reflow_prompts::fill_analysis_prompt;
use tracing::{debug, instrument};

const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are a content analysis expert. Always return valid JSON.";

fn analysis_config() -> LlmConfig {
    LlmConfig {
        // Low temperature for consistent structured extraction.
        temperature: 0.3,
        max_tokens: 1000,
        system_prompt: ANALYSIS_SYSTEM_PROMPT.to_string(),
    }
}

/// Runs the analyzer over sanitized input content.
///
/// Any failure here (transport, vendor, or unparseable model output) is
/// fatal to the whole request, so both the analysis and the raw response
/// (for token and provenance accounting) are returned together.
#[instrument(skip(driver, content))]
pub(crate) async fn analyze(
    driver: &dyn TextGenerator,
    content: &str,
) -> PipelineResult<(ContentAnalysis, LlmResponse)> {
    debug!("Starting content analysis");
    let prompt = fill_analysis_prompt(content);
    let response = driver.generate(&prompt, &analysis_config()).await?;
    let analysis: ContentAnalysis = parse_json(&response)?;
    debug!(
        core_message = %analysis.core_message,
        key_points = analysis.key_points.len(),
        tokens = response.tokens,
        "Analysis complete"
    );
    Ok((analysis, response))
}
