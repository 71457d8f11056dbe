/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for the supported backends:
 * - Google: the public web translation endpoint (default)
 * - Ollama: Local LLM server
 * - Anthropic: Anthropic API integration
 * - Mock: deterministic fake used by tests
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::{TranslationConfig, TranslationProvider};
use crate::errors::{AppError, ProviderError};
use crate::language_utils;

pub mod anthropic;
pub mod google;
pub mod mock;
pub mod ollama;

/// Common trait for all translation backends
///
/// One call is one request: implementations never retry on their own, the
/// caller decides what a failure means.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate `text` into `target_language`
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `target_language` - Target language code (e.g. "zh-CN")
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The raw translated text or an error
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ProviderError>;

    /// Human readable backend name
    fn name(&self) -> &str;
}

/// Build the backend selected in the configuration
pub fn build_translator(config: &TranslationConfig, source_language: &str) -> Result<Arc<dyn Translator>, AppError> {
    let timeout = Duration::from_secs(config.get_timeout_secs());

    let translator: Arc<dyn Translator> = match config.provider {
        TranslationProvider::Google => Arc::new(google::GoogleTranslate::new(
            config.get_endpoint(),
            source_language,
            timeout,
        )),
        TranslationProvider::Ollama => Arc::new(ollama::Ollama::new(
            config.get_endpoint(),
            config.get_model(),
            config.common.system_prompt.clone(),
            config.common.temperature,
            timeout,
        )),
        TranslationProvider::Anthropic => {
            let api_key = config.get_api_key();
            if api_key.is_empty() {
                return Err(AppError::Config(
                    "Translation API key is required for Anthropic provider".to_string(),
                ));
            }
            Arc::new(anthropic::Anthropic::new(
                api_key,
                config.get_endpoint(),
                config.get_model(),
                config.common.system_prompt.clone(),
                config.common.temperature,
                timeout,
            ))
        }
    };

    Ok(translator)
}

/// Fill the `{target_language}` placeholder of an LLM system prompt
pub(crate) fn render_system_prompt(template: &str, target_language: &str) -> String {
    let language = language_utils::get_language_name(target_language)
        .unwrap_or_else(|_| target_language.to_string());
    template.replace("{target_language}", &language)
}
