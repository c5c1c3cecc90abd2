//! The boundary to generative text backends.
//!
//! The engine only ever sees a [`ProviderPort`]. Concrete backends live
//! elsewhere (see [`crate::agent`]) and retry policy, if any, is theirs.

use crate::summary::LengthPreference;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider is not available")]
    Unavailable,
    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),
    #[error("provider request failed: {0}")]
    RequestFailed(String),
    #[error("provider returned an empty response")]
    EmptyResponse,
}

/// A backend that can rewrite text into a summary of the requested length.
#[async_trait]
pub trait ProviderPort: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// The local sentinel: configured, but never to be called.
    fn is_local(&self) -> bool {
        false
    }

    async fn generate(&self, text: &str, length: LengthPreference)
        -> Result<String, ProviderError>;
}

/// Stands in for "no generative backend"; summaries stay extractive.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProvider;

#[async_trait]
impl ProviderPort for LocalProvider {
    fn name(&self) -> &str {
        "local"
    }

    fn is_local(&self) -> bool {
        true
    }

    async fn generate(
        &self,
        _text: &str,
        _length: LengthPreference,
    ) -> Result<String, ProviderError> {
        Err(ProviderError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_provider_never_generates() {
        let local = LocalProvider;
        assert!(local.is_local());
        let result = local.generate("text", LengthPreference::Short).await;
        assert!(matches!(result, Err(ProviderError::Unavailable)));
    }

    #[test]
    fn errors_describe_themselves() {
        let error = ProviderError::Timeout(Duration::from_secs(2));
        assert_eq!(error.to_string(), "provider did not answer within 2s");
        let error = ProviderError::RequestFailed("quota exceeded".to_string());
        assert_eq!(error.to_string(), "provider request failed: quota exceeded");
    }
}
