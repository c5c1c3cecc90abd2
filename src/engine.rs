//! Strategy orchestration.
//!
//! The pure stages (normalize, segment, score, select) run synchronously.
//! The only suspension point is the optional provider call, which is bounded
//! by the configured timeout. Dropping a `summarize` future cancels that call;
//! the engine keeps no state between calls.

use crate::config::EngineConfig;
use crate::normalize::normalize;
use crate::provider::{ProviderError, ProviderPort};
use crate::score::score;
use crate::segment::segment;
use crate::select::{ensure_terminal, select, select_tail};
use crate::summary::{Focus, LengthPreference, Strategy};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("no text left to summarise after cleanup")]
    EmptyInput,
}

/// Turns raw text into a length-bounded summary.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: EngineConfig,
}

impl Summarizer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Summarise `text` with the given strategy.
    ///
    /// A provider that is absent, local, failing or too slow never surfaces
    /// as an error: the result degrades to the extractive summary.
    pub async fn summarize(
        &self,
        text: &str,
        length: LengthPreference,
        strategy: Strategy,
        provider: Option<&dyn ProviderPort>,
    ) -> Result<String, SummarizeError> {
        let normalized = normalize_nonempty(text)?;
        let provider = provider.filter(|p| !p.is_local());

        let summary = match strategy {
            Strategy::Extractive => extract(&normalized, length),
            Strategy::Abstractive => match provider {
                Some(provider) => match self.generate(provider, &normalized, length).await {
                    Ok(generated) => generated,
                    Err(err) => {
                        warn!(provider = provider.name(), error = %err, "abstractive summary failed, using extractive");
                        extract(&normalized, length)
                    }
                },
                None => extract(&normalized, length),
            },
            Strategy::Hybrid => {
                let key_points = extract(&normalized, length);
                match provider {
                    Some(provider) => match self.generate(provider, &key_points, length).await {
                        Ok(polished) => polished,
                        Err(err) => {
                            warn!(provider = provider.name(), error = %err, "hybrid refinement failed, keeping extractive");
                            key_points
                        }
                    },
                    None => key_points,
                }
            }
        };

        Ok(summary)
    }

    /// Deterministic extractive summary; never touches a provider.
    pub fn summarize_extractive(
        &self,
        text: &str,
        length: LengthPreference,
    ) -> Result<String, SummarizeError> {
        Ok(extract(&normalize_nonempty(text)?, length))
    }

    /// Summarise with a particular emphasis.
    ///
    /// `Conclusion` takes the closing sentences unscored, `KeyPoints` is the
    /// extractive summary, and `Main` defers to [`Summarizer::summarize`].
    pub async fn summarize_focused(
        &self,
        text: &str,
        focus: Focus,
        length: LengthPreference,
        strategy: Strategy,
        provider: Option<&dyn ProviderPort>,
    ) -> Result<String, SummarizeError> {
        match focus {
            Focus::Main => self.summarize(text, length, strategy, provider).await,
            Focus::KeyPoints => self.summarize_extractive(text, length),
            Focus::Conclusion => {
                let normalized = normalize_nonempty(text)?;
                Ok(select_tail(&segment(&normalized), length, &normalized))
            }
        }
    }

    async fn generate(
        &self,
        provider: &dyn ProviderPort,
        text: &str,
        length: LengthPreference,
    ) -> Result<String, ProviderError> {
        let timeout = self.config.provider_timeout();
        let generated = tokio::time::timeout(timeout, provider.generate(text, length))
            .await
            .map_err(|_| ProviderError::Timeout(timeout))??;

        if generated.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        info!(provider = provider.name(), "using generated summary");
        Ok(ensure_terminal(generated.trim()))
    }
}

fn normalize_nonempty(text: &str) -> Result<String, SummarizeError> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(SummarizeError::EmptyInput);
    }
    Ok(normalized)
}

fn extract(normalized: &str, length: LengthPreference) -> String {
    let sentences = segment(normalized);
    let scored = score(&sentences);
    debug!(
        sentences = sentences.len(),
        wanted = length.sentence_count(),
        "extractive selection"
    );
    select(&scored, length, normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "The cat sat. This is an important discovery in 2023! \
                           Why did it happen? The end.";

    #[test]
    fn short_summary_picks_best_sentence() {
        let summary = Summarizer::default()
            .summarize_extractive(ARTICLE, LengthPreference::Short)
            .unwrap();
        assert_eq!(summary, "This is an important discovery in 2023!...");
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = Summarizer::default().summarize_extractive("", LengthPreference::Short);
        assert_eq!(result, Err(SummarizeError::EmptyInput));

        let result = Summarizer::default().summarize_extractive("<p> </p>", LengthPreference::Short);
        assert_eq!(result, Err(SummarizeError::EmptyInput));
    }

    #[test]
    fn fragments_only_falls_back_to_excerpt() {
        let summary = Summarizer::default()
            .summarize_extractive("Hi there. Ok. Yes.", LengthPreference::Medium)
            .unwrap();
        assert_eq!(summary, "Hi there. Ok. Yes.");
    }

    #[test]
    fn unterminated_fragments_get_a_terminal_mark() {
        let summary = Summarizer::default()
            .summarize_extractive("Hi. Ok. Yes no", LengthPreference::Medium)
            .unwrap();
        assert_eq!(summary, "Hi. Ok. Yes no.");
    }

    #[test]
    fn keeps_the_configuration_it_was_built_with() {
        let config = EngineConfig {
            provider_timeout_secs: 7,
            ..EngineConfig::default()
        };
        let summarizer = Summarizer::new(config);
        assert_eq!(summarizer.config().provider_timeout_secs, 7);
        assert_eq!(Summarizer::default().config().length, LengthPreference::Medium);
    }

    #[tokio::test]
    async fn conclusion_focus_takes_closing_sentences() {
        let text = "Opening remarks come first. The middle has detail. \
                    Finally we conclude here.";
        let summary = Summarizer::default()
            .summarize_focused(
                text,
                Focus::Conclusion,
                LengthPreference::Short,
                Strategy::Extractive,
                None,
            )
            .await
            .unwrap();
        assert_eq!(summary, "Finally we conclude here....");
    }
}
