//! The orchestrator tying both stages together.

use crate::analyzer::analyze;
use crate::generator::generate_platform;
use futures::future::join_all;
use reflow_core::{GenerationRequest, GenerationResult};
use reflow_error::PipelineResult;
use reflow_llm::TextGenerator;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Orchestrates one generation run: analysis, then parallel fan-out.
///
/// Holds the injected text driver; in production that is an
/// [`reflow_llm::LlmRouter`], in tests any scripted fake.
///
/// After stage 2 begins the run can no longer fail: every platform outcome,
/// fulfilled or failed, lands in its own output slot in request order.
#[derive(Clone)]
pub struct PromptEngine {
    driver: Arc<dyn TextGenerator>,
}

impl PromptEngine {
    /// Creates an engine over the given driver.
    pub fn new(driver: Arc<dyn TextGenerator>) -> Self {
        Self { driver }
    }

    /// Runs the full pipeline for one validated request.
    #[instrument(skip(self, request), fields(platforms = request.platforms.len(), tone = %request.tone))]
    pub async fn generate(&self, request: &GenerationRequest) -> PipelineResult<GenerationResult> {
        let started = Instant::now();

        let (analysis, analysis_response) = analyze(self.driver.as_ref(), &request.content).await?;
        let mut total_tokens = analysis_response.tokens;

        debug!("Starting parallel platform generation");
        let calls = request.platforms.iter().map(|&platform| {
            generate_platform(self.driver.as_ref(), platform, request.tone, &analysis)
        });
        let settled = join_all(calls).await;

        let mut outputs = Vec::with_capacity(settled.len());
        for (output, tokens) in settled {
            total_tokens += tokens;
            outputs.push(output);
        }

        let generation_time_ms = started.elapsed().as_millis() as u64;
        info!(
            platforms = outputs.len(),
            failed = outputs.iter().filter(|o| o.is_error()).count(),
            total_tokens,
            generation_time_ms,
            "Generation run complete"
        );

        Ok(GenerationResult {
            analysis,
            outputs,
            total_tokens,
            generation_time_ms,
            llm_provider: analysis_response.provider.to_string(),
            llm_model: analysis_response.model,
        })
    }
}
