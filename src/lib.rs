//! # Summa engine
//!
//! Turns extracted page or document text into a short summary.
//!
//! ## Features
//!
//! - **Heuristic extraction**: normalize, segment, score and select sentences
//!   with no models involved, so output is deterministic
//! - **Strategies**: extractive, abstractive and hybrid, where the last two
//!   refine through a generative backend when one is available
//! - **Graceful degradation**: a missing, failing or slow backend yields the
//!   extractive summary instead of an error
//!
//! ```no_run
//! use summa_engine::{LengthPreference, Strategy, Summarizer};
//!
//! # async fn demo() -> Result<(), summa_engine::SummarizeError> {
//! let summarizer = Summarizer::default();
//! let summary = summarizer
//!     .summarize("<p>Some long article text.</p>", LengthPreference::Short, Strategy::Hybrid, None)
//!     .await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod engine;
pub mod normalize;
pub mod provider;
pub mod score;
pub mod segment;
pub mod select;
pub mod source;
pub mod summary;

pub use config::{Config, EngineConfig};
pub use engine::{SummarizeError, Summarizer};
pub use provider::{LocalProvider, ProviderError, ProviderPort};
pub use summary::{Focus, LengthPreference, ScoredSentence, Sentence, Strategy};

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
