use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Language,
    services::providers::CompletionProvider,
};

/// Translations should stay close to the source text
const TRANSLATION_TEMPERATURE: f32 = 0.1;

/// Translates a text blob into one of the supported languages
///
/// English is the identity case: recommendations are generated in English,
/// so there is nothing to round-trip through the model. Unsupported
/// languages are rejected before any provider call.
pub async fn translate(
    provider: Arc<dyn CompletionProvider>,
    text: &str,
    language: &str,
) -> AppResult<String> {
    let language = Language::parse(language)
        .ok_or_else(|| AppError::InvalidInput(format!("Language {} not supported", language)))?;

    if language == Language::English {
        return Ok(text.to_string());
    }

    let prompt = build_prompt(text, language);
    let translated = provider.complete(&prompt, TRANSLATION_TEMPERATURE).await?;

    tracing::info!(
        language = %language,
        provider = provider.name(),
        "Translation completed"
    );

    Ok(strip_preamble(&translated).to_string())
}

fn build_prompt(text: &str, language: Language) -> String {
    format!(
        "Translate the following text to {}. Return ONLY the translated text with \
         the same formatting and structure, no introduction:\n\n{}",
        language, text
    )
}

/// Some models prepend "Here's the translation:" despite the prompt
fn strip_preamble(text: &str) -> &str {
    let Some((_, rest)) = text.split_once("Here's the translation") else {
        return text;
    };
    let rest = match rest.split_once(':') {
        Some((_, after)) => after,
        None => rest,
    };
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockCompletionProvider;

    #[tokio::test]
    async fn test_english_is_identity() {
        // No expectations set: any provider call would panic the mock
        let provider = MockCompletionProvider::new();
        let text = "📝 Summary: A snug BYOB.\n📞 Phone: (215) 555-0188";

        let result = translate(Arc::new(provider), text, "English")
            .await
            .unwrap();
        assert_eq!(result, text);
    }

    #[tokio::test]
    async fn test_unsupported_language_is_rejected() {
        let provider = MockCompletionProvider::new();
        let result = translate(Arc::new(provider), "hello", "Klingon").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_translation_returns_provider_text() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .withf(|prompt, temperature| {
                prompt.contains("Translate the following text to Spanish")
                    && (temperature - 0.1).abs() < f32::EPSILON
            })
            .returning(|_, _| Ok("📝 Resumen: Un BYOB acogedor.".to_string()));
        provider.expect_name().return_const("mock");

        let result = translate(Arc::new(provider), "📝 Summary: A snug BYOB.", "Spanish")
            .await
            .unwrap();
        assert_eq!(result, "📝 Resumen: Un BYOB acogedor.");
    }

    #[tokio::test]
    async fn test_translation_preserves_line_structure() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_, _| Ok("ligne un\nligne deux\nligne trois".to_string()));
        provider.expect_name().return_const("mock");

        let result = translate(Arc::new(provider), "line one\nline two\nline three", "French")
            .await
            .unwrap();
        assert_eq!(result.lines().filter(|l| !l.trim().is_empty()).count(), 3);
    }

    #[tokio::test]
    async fn test_translation_propagates_provider_errors() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_, _| Err(AppError::Provider("timeout".to_string())));
        provider.expect_name().return_const("mock");

        let result = translate(Arc::new(provider), "hello", "German").await;
        assert!(matches!(result, Err(AppError::Provider(_))));
    }

    #[test]
    fn test_strip_preamble() {
        assert_eq!(
            strip_preamble("Here's the translation: Bonjour le monde"),
            "Bonjour le monde"
        );
        assert_eq!(strip_preamble("Bonjour le monde"), "Bonjour le monde");
    }

    #[test]
    fn test_strip_preamble_without_colon() {
        assert_eq!(
            strip_preamble("Here's the translation\nBonjour"),
            "Bonjour"
        );
    }
}
