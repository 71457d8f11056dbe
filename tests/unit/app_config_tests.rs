/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::str::FromStr;

use potrans::app_config::{CatalogConfig, Config, LogLevel, ProviderConfig, TranslationProvider};

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "auto");
    assert_eq!(config.target_language, "zh-CN");
    assert_eq!(config.locale, "zh_CN");
    assert_eq!(config.translation.provider, TranslationProvider::Google);
    assert_eq!(config.translation.common.request_delay_ms, 300);
    assert_eq!(config.catalog, CatalogConfig::default());
    assert_eq!(config.catalog.manifest_marker, "__manifest__.py");
    assert_eq!(config.catalog.i18n_dir, "i18n");
    assert_eq!(config.catalog.header_anchor, "Project-Id-Version: Odoo Server");
    assert_eq!(config.log_level, LogLevel::Info);

    let google = config
        .translation
        .get_provider_config(&TranslationProvider::Google)
        .expect("Google provider config should exist");
    assert_eq!(google.endpoint, "https://translate.googleapis.com");
    assert_eq!(google.timeout_secs, 30);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Invalid target language
    config.target_language = "xx-YY".to_string();
    assert!(config.validate().is_err());
    config.target_language = "zh-CN".to_string();

    // Invalid source language, "auto" is the only non-code value accepted
    config.source_language = "klingon".to_string();
    assert!(config.validate().is_err());
    config.source_language = "en".to_string();
    assert!(config.validate().is_ok());

    // Empty module layout
    config.catalog.i18n_dir = " ".to_string();
    assert!(config.validate().is_err());
    config.catalog.i18n_dir = "i18n".to_string();

    // Unreasonable delay
    config.translation.common.request_delay_ms = 120_000;
    assert!(config.validate().is_err());
    config.translation.common.request_delay_ms = 0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_withAnthropicWithoutKey_shouldFail() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Anthropic;
    assert!(config.validate().is_err());

    if let Some(provider) = config
        .translation
        .available_providers
        .iter_mut()
        .find(|p| p.provider_type == "anthropic")
    {
        provider.api_key = "sk-ant-test".to_string();
    }
    assert!(config.validate().is_ok());
}

#[test]
fn test_provider_getters_withEmptyValues_shouldFallBackToDefaults() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Ollama;
    config.translation.available_providers = vec![ProviderConfig {
        provider_type: "ollama".to_string(),
        model: String::new(),
        api_key: String::new(),
        endpoint: String::new(),
        timeout_secs: 0,
    }];

    assert_eq!(config.translation.get_model(), "llama3.2:3b");
    assert_eq!(config.translation.get_endpoint(), "http://localhost:11434");
    assert_eq!(config.translation.get_timeout_secs(), 30);
    assert_eq!(config.translation.get_api_key(), "");
}

#[test]
fn test_translation_provider_fromStr_shouldParseCaseInsensitively() -> Result<()> {
    assert_eq!(TranslationProvider::from_str("google")?, TranslationProvider::Google);
    assert_eq!(TranslationProvider::from_str("OLLAMA")?, TranslationProvider::Ollama);
    assert_eq!(TranslationProvider::from_str("Anthropic")?, TranslationProvider::Anthropic);
    assert!(TranslationProvider::from_str("deepl").is_err());

    assert_eq!(TranslationProvider::Ollama.to_string(), "ollama");
    assert_eq!(TranslationProvider::Anthropic.display_name(), "Anthropic");
    Ok(())
}

#[test]
fn test_config_save_and_load_shouldKeepValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("potrans.json");

    let mut config = Config::default();
    config.target_language = "ja".to_string();
    config.locale = "ja".to_string();
    config.translation.provider = TranslationProvider::Ollama;
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let loaded = Config::load(&path)?;
    assert_eq!(loaded.target_language, "ja");
    assert_eq!(loaded.locale, "ja");
    assert_eq!(loaded.translation.provider, TranslationProvider::Ollama);
    assert_eq!(loaded.log_level, LogLevel::Debug);
    Ok(())
}

#[test]
fn test_config_load_withPartialJson_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "potrans.json",
        r#"{ "target_language": "fr", "translation": { "provider": "ollama" } }"#,
    )?;

    let config = Config::load(&path)?;
    assert_eq!(config.target_language, "fr");
    assert_eq!(config.locale, "zh_CN");
    assert_eq!(config.translation.provider, TranslationProvider::Ollama);
    assert_eq!(config.translation.common.request_delay_ms, 300);
    assert_eq!(config.catalog.i18n_dir, "i18n");
    // No provider list in the file, getters fall back to defaults
    assert_eq!(config.translation.get_endpoint(), "http://localhost:11434");
    Ok(())
}

#[test]
fn test_config_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "potrans.json", "{ not json")?;

    assert!(Config::load(&path).is_err());
    Ok(())
}
