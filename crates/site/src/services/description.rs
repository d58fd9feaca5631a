//! AI-written listing descriptions.
//!
//! Asks Gemini for a short Korean description of a cleanup activity. This
//! never fails from the caller's point of view: a missing API key, a
//! transport error, or an API error all produce [`FALLBACK_DESCRIPTION`].

use tracing::instrument;

use crate::gemini::{GeminiClient, GenerationConfig};

/// Returned when the description cannot be generated.
pub const FALLBACK_DESCRIPTION: &str = "제주 연안 환경 정화 활동 - 고위험군 수거 작업";

/// Returned when the model answers with no text.
pub const EMPTY_DESCRIPTION: &str = "활동 상세 정보가 없습니다.";

/// Build the prompt for `title`.
#[must_use]
pub fn description_prompt(title: &str) -> String {
    format!(
        "제주도 해양 정화 활동 \"{title}\"에 대한 전문적이고 간결한 보상 활동 설명을 작성해주세요. \n      \
         환경적 영향과 지역적 특성에 집중하세요. \n      \
         30자 이내의 한국어로 작성하세요."
    )
}

/// Generates listing descriptions, with or without a configured client.
#[derive(Clone, Default)]
pub struct DescriptionService {
    client: Option<GeminiClient>,
}

impl DescriptionService {
    #[must_use]
    pub const fn new(client: Option<GeminiClient>) -> Self {
        Self { client }
    }

    /// Whether a Gemini client is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Generate a description for the activity `title`.
    #[instrument(skip(self))]
    pub async fn generate_description(&self, title: &str) -> String {
        let Some(client) = &self.client else {
            tracing::warn!("GEMINI_API_KEY not set; using fallback description");
            return FALLBACK_DESCRIPTION.to_owned();
        };

        match client
            .generate(&description_prompt(title), GenerationConfig::default())
            .await
        {
            Ok(text) if text.trim().is_empty() => EMPTY_DESCRIPTION.to_owned(),
            Ok(text) => text.trim().to_owned(),
            Err(e) => {
                tracing::warn!(error = %e, "Description generation failed; using fallback");
                FALLBACK_DESCRIPTION.to_owned()
            }
        }
    }
}

impl std::fmt::Debug for DescriptionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptionService")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_title() {
        let prompt = description_prompt("함덕 해변 정화");
        assert!(prompt.starts_with("제주도 해양 정화 활동 \"함덕 해변 정화\"에 대한"));
        assert!(prompt.ends_with("30자 이내의 한국어로 작성하세요."));
        assert_eq!(
            prompt,
            "제주도 해양 정화 활동 \"함덕 해변 정화\"에 대한 전문적이고 간결한 보상 활동 설명을 작성해주세요. \n      환경적 영향과 지역적 특성에 집중하세요. \n      30자 이내의 한국어로 작성하세요."
        );
    }

    #[tokio::test]
    async fn test_disabled_service_returns_fallback() {
        let service = DescriptionService::default();
        assert!(!service.is_enabled());
        assert_eq!(
            service.generate_description("Aewol sweep").await,
            FALLBACK_DESCRIPTION
        );
    }
}
