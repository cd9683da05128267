use std::time::Duration;

use crate::config::ModerationConfig;
use crate::error::AuditError;
use crate::http_client;

use super::types::{ModerationRequest, ModerationResponse};

pub struct ModerationProvider;

impl ModerationProvider {
    pub async fn moderations(
        cfg: &ModerationConfig,
        request: &ModerationRequest,
    ) -> Result<ModerationResponse, AuditError> {
        let client = http_client::client_with_timeout(Duration::from_secs(cfg.timeout_secs))?;
        let url = moderations_url(&cfg.base_url);
        tracing::debug!(url = %url, "submitting audit payload to moderation endpoint");

        let response = client
            .post(&url)
            .header("Authorization", format!("Bearer {}", cfg.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        // Upstream error envelopes are not JSON of the expected shape and
        // surface as a decode error rather than a silent empty verdict.
        let body = response.text().await?;
        Ok(serde_json::from_str::<ModerationResponse>(&body)?)
    }

    /// Submit each extracted payload string in order; report whether any of
    /// them was flagged. The payload carries at most one element in practice,
    /// so this makes at most one call per request.
    pub async fn screen_content(
        cfg: &ModerationConfig,
        payload: &[String],
    ) -> Result<bool, AuditError> {
        for input in payload {
            let request = ModerationRequest {
                input: input.clone(),
            };
            let response = Self::moderations(cfg, &request).await?;
            if response.flagged() {
                tracing::warn!(model = %response.model, "moderation flagged audit payload");
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn moderations_url(base_url: &str) -> String {
    format!("{}/v1/moderations", base_url.trim_end_matches('/'))
}
