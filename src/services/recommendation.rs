use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{canonical_mood, RecommendationField},
    services::providers::CompletionProvider,
};

/// Some variety between calls keeps repeat visits interesting
const RECOMMENDATION_TEMPERATURE: f32 = 0.3;

/// Asks the provider for a single restaurant matching the mood and location
///
/// Returns the model's raw text. How a failure surfaces to the client is the
/// handler's decision, not ours.
pub async fn recommend(
    provider: Arc<dyn CompletionProvider>,
    mood: &str,
    location: &str,
) -> AppResult<String> {
    let prompt = build_prompt(mood, location);
    let text = provider.complete(&prompt, RECOMMENDATION_TEMPERATURE).await?;

    tracing::info!(
        mood = %mood,
        location = %location,
        provider = provider.name(),
        "Recommendation generated"
    );

    Ok(text)
}

/// Builds the recommendation prompt
///
/// Known moods are canonicalized to their title-cased name; anything else is
/// forwarded verbatim and left to the model to interpret.
fn build_prompt(mood: &str, location: &str) -> String {
    let mood = canonical_mood(mood);
    let fields = RecommendationField::ALL
        .iter()
        .map(|field| format!("**{}**: ...", field.label()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a world famous restaurant expert. Recommend exactly one restaurant \
         in {location} that fits a {mood} mood. Answer with one line per field, each \
         tagged with a bolded label, in exactly this order and nothing else:\n\n{fields}",
        location = location,
        mood = mood,
        fields = fields,
    )
}
