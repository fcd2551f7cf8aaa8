/// Text-completion provider abstraction
///
/// This module provides a pluggable architecture for generative AI backends.
/// Gemini is the only implementation today, but recommendation and
/// translation only ever see the trait: one prompt string in, one text blob
/// out.
use crate::error::AppResult;

pub mod gemini;

pub use gemini::GeminiProvider;

/// Trait for generative text-completion providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a single prompt to the model and return its text output
    ///
    /// Temperature is per-call: recommendations want some variety while
    /// translations should stay close to the source.
    async fn complete(&self, prompt: &str, temperature: f32) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
