//! Gemini-backed [`ProviderPort`].
//!
//! Uses rstructor for the LLM call. The engine never depends on this module
//! directly; the CLI wires it in through [`build_provider`].

use crate::config::{Config, ConfigError, LOCAL_PROVIDER};
use crate::provider::{LocalProvider, ProviderError, ProviderPort};
use crate::summary::LengthPreference;
use async_trait::async_trait;
use rstructor::{GeminiClient, GeminiModel, LLMClient};
use tracing::debug;

/// Generates summaries with a Gemini model.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    persona: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String, persona: String) -> Self {
        Self {
            api_key,
            model,
            persona,
        }
    }

    fn prompt(&self, text: &str, length: LengthPreference) -> String {
        build_prompt(&self.persona, text, length)
    }
}

#[async_trait]
impl ProviderPort for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        text: &str,
        length: LengthPreference,
    ) -> Result<String, ProviderError> {
        let client = GeminiClient::new(self.api_key.as_str())
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?
            .model(parse_gemini_model(&self.model));

        debug!(model = %self.model, chars = text.len(), "requesting summary");
        let result = client
            .generate_with_metadata(&self.prompt(text, length))
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let cleaned = strip_code_fence(&result.text);
        if cleaned.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(cleaned)
    }
}

/// Pick the provider named in the configuration.
pub fn build_provider(config: &Config) -> Result<Box<dyn ProviderPort>, ConfigError> {
    match config.agent.provider.as_str() {
        LOCAL_PROVIDER => Ok(Box::new(LocalProvider)),
        "gemini" => Ok(Box::new(GeminiProvider::new(
            config.api_key()?.to_string(),
            config.agent.model.clone(),
            config.agent.persona.clone(),
        ))),
        other => Err(ConfigError::UnsupportedProvider(other.to_string())),
    }
}

fn length_hint(length: LengthPreference) -> &'static str {
    match length {
        LengthPreference::Short => "in a single sentence",
        LengthPreference::Medium => "in about three sentences",
        LengthPreference::Long => "in about five sentences",
    }
}

fn build_prompt(persona: &str, text: &str, length: LengthPreference) -> String {
    format!(
        r#"{}

Summarise the following content {}. Respond with plain prose only: no
headings, bullet points, Markdown or commentary about the task.

---

{}"#,
        persona,
        length_hint(length),
        text
    )
}

/// Strip a Markdown code block wrapper from the response
fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix("```") {
        // Drop an optional language tag on the opening fence line.
        let body = match rest.split_once('\n') {
            Some((_tag, body)) => body,
            None => rest,
        };
        if let Some(end_idx) = body.rfind("```") {
            return body[..end_idx].trim().to_string();
        }
    }

    trimmed.to_string()
}

/// Parse a model string into a GeminiModel
fn parse_gemini_model(model: &str) -> GeminiModel {
    match model {
        "gemini-2.0-flash" => GeminiModel::Gemini20Flash,
        "gemini-2.5-flash" => GeminiModel::Gemini25Flash,
        "gemini-2.5-pro" => GeminiModel::Gemini25Pro,
        _ => GeminiModel::Gemini20Flash,
    }
}
