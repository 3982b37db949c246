use crate::gemini::{GenerativeModel, Part};
use crate::prompt::PROBE_PROMPT;

/// Checks that the key and model are reachable with a one-line text prompt.
///
/// Always returns a status line, never an error.
pub async fn probe(model: &dyn GenerativeModel) -> String {
    match model.generate(&[Part::text(PROBE_PROMPT)]).await {
        Ok(reply) => {
            tracing::info!(model = model.model_id(), "connectivity probe succeeded");
            format!("API Working: {}", reply.trim())
        }
        Err(e) => {
            tracing::warn!(model = model.model_id(), error = %e, "connectivity probe failed");
            format!("API Failed: {e}")
        }
    }
}
