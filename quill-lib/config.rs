//! TOML language-profile configuration.
//!
//! Profiles are data, not code: a `[[language]]` table names the language and
//! declares its keyword vocabulary and `[[language.snippet]]` entries. The
//! same schema backs both the embedded `languages.toml` and any user-supplied
//! profile the hosting application hands in.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::{
  language::LanguageProfile,
  snippet::Snippet,
};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse language configuration: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("language entry without a name")]
  UnnamedLanguage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
struct Configuration {
  #[serde(default)]
  language: Vec<LanguageEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
struct LanguageEntry {
  name:     String,
  #[serde(default)]
  keywords: Vec<String>,
  #[serde(default, rename = "snippet")]
  snippets: Vec<Snippet>,
}

/// Parse a profile configuration document into shareable profiles, preserving
/// declaration order throughout.
pub fn profiles_from_toml(source: &str) -> Result<Vec<Arc<LanguageProfile>>, ConfigError> {
  let config: Configuration = toml::from_str(source)?;
  config
    .language
    .into_iter()
    .map(|entry| {
      if entry.name.is_empty() {
        return Err(ConfigError::UnnamedLanguage);
      }
      Ok(Arc::new(LanguageProfile::new(
        entry.name,
        entry.keywords,
        entry.snippets,
      )))
    })
    .collect()
}
