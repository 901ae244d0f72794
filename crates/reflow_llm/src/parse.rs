//! Structured decoding of model output.

use reflow_core::LlmResponse;
use reflow_error::{LlmError, LlmErrorKind, LlmResult};
use serde::de::DeserializeOwned;
use tracing::error;

/// Decodes the JSON body of a model response into a typed value.
///
/// Generation calls ask every vendor for a JSON object, but models still
/// occasionally return prose or truncated output. That case is reported as
/// `InvalidOutput`, not `Parse`, so callers can tell a misbehaving model
/// apart from a broken wire format.
pub fn parse_json<T: DeserializeOwned>(response: &LlmResponse) -> LlmResult<T> {
    serde_json::from_str(&response.content).map_err(|e| {
        error!(
            provider = %response.provider,
            model = %response.model,
            error = %e,
            raw = %response.content,
            "Model returned unparseable JSON"
        );
        LlmError::new(LlmErrorKind::InvalidOutput(e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflow_core::LlmProvider;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        hook: String,
        count: u32,
    }

    fn response(content: &str) -> LlmResponse {
        LlmResponse {
            content: content.to_string(),
            tokens: 42,
            model: "test-model".to_string(),
            provider: LlmProvider::OpenAi,
        }
    }

    #[test]
    fn decodes_valid_json() {
        let response = response(r#"{"hook": "Start here", "count": 3}"#);
        let payload: Payload = parse_json(&response).unwrap();
        assert_eq!(
            payload,
            Payload {
                hook: "Start here".to_string(),
                count: 3
            }
        );
    }

    #[test]
    fn prose_output_is_invalid_output() {
        let response = response("Sure! Here is your content:");
        let err = parse_json::<Payload>(&response).unwrap_err();
        assert!(err.is_invalid_output());
    }

    #[test]
    fn wrong_shape_is_invalid_output() {
        let response = response(r#"{"hook": "Start here"}"#);
        let err = parse_json::<Payload>(&response).unwrap_err();
        assert!(err.is_invalid_output());
    }

    #[test]
    fn parsing_does_not_consume_the_response() {
        let response = response(r#"{"hook": "h", "count": 1}"#);
        let first: Payload = parse_json(&response).unwrap();
        let second: Payload = parse_json(&response).unwrap();
        assert_eq!(first, second);
    }
}
