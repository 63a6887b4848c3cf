//! Language profiles and file-type detection.
//!
//! A [`LanguageProfile`] is the static data bundle the two engines run
//! against: the keyword vocabulary and the snippet table for one language.
//! Built-in profiles are declared in the embedded `languages.toml` and parsed
//! once on first use; profiles are immutable after construction and shared as
//! `Arc` across sessions.

use std::{
  path::Path,
  sync::{
    Arc,
    OnceLock,
  },
};

use once_cell::sync::Lazy;

use crate::{
  config,
  highlight::HighlightPatterns,
  snippet::Snippet,
};

/// Built-in language profiles, parsed from the embedded `languages.toml`.
static BUILTIN: Lazy<Vec<Arc<LanguageProfile>>> = Lazy::new(|| {
  match config::profiles_from_toml(include_str!("languages.toml")) {
    Ok(profiles) => profiles,
    Err(err) => {
      tracing::error!("embedded languages.toml failed to parse: {err}");
      Vec::new()
    },
  }
});

/// The closed set of languages the editor understands.
///
/// Adding a language is a new variant plus profile data in `languages.toml`,
/// never an open hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgrammingLanguage {
  Swift,
  Python,
}

impl ProgrammingLanguage {
  pub fn name(&self) -> &'static str {
    match self {
      ProgrammingLanguage::Swift => "swift",
      ProgrammingLanguage::Python => "python",
    }
  }

  /// The built-in profile for this language.
  pub fn profile(&self) -> Arc<LanguageProfile> {
    let name = self.name();
    BUILTIN
      .iter()
      .find(|profile| profile.name == name)
      .cloned()
      .unwrap_or_else(|| Arc::new(LanguageProfile::empty(name)))
  }
}

/// Document kinds the hosting application can create or open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
  Swift,
  /// Chosen at file creation; not distinguishable from [`FileType::Swift`]
  /// by extension.
  SwiftUi,
  Python,
  Text,
}

impl FileType {
  pub fn from_extension(extension: &str) -> Option<FileType> {
    match extension {
      "swift" => Some(FileType::Swift),
      "py" => Some(FileType::Python),
      "txt" => Some(FileType::Text),
      _ => None,
    }
  }

  pub fn from_path(path: &Path) -> Option<FileType> {
    path
      .extension()
      .and_then(|ext| ext.to_str())
      .and_then(FileType::from_extension)
  }

  /// The language whose profile drives highlighting and completion for this
  /// file type. Plain text files reuse the Swift profile.
  pub fn language(self) -> ProgrammingLanguage {
    match self {
      FileType::Swift | FileType::SwiftUi | FileType::Text => ProgrammingLanguage::Swift,
      FileType::Python => ProgrammingLanguage::Python,
    }
  }
}

/// Static per-language data: keyword vocabulary and snippet table.
///
/// Declared order matters for both fields. Keywords are scanned in order by
/// the highlighter and listed in order by completion; snippets are listed in
/// order within the snippet group.
#[derive(Debug)]
pub struct LanguageProfile {
  pub name:     String,
  pub keywords: Vec<String>,
  pub snippets: Vec<Snippet>,
  compiled:     OnceLock<HighlightPatterns>,
}

impl LanguageProfile {
  pub fn new(
    name: impl Into<String>,
    keywords: Vec<String>,
    snippets: Vec<Snippet>,
  ) -> LanguageProfile {
    LanguageProfile {
      name: name.into(),
      keywords,
      snippets,
      compiled: OnceLock::new(),
    }
  }

  pub fn empty(name: impl Into<String>) -> LanguageProfile {
    LanguageProfile::new(name, Vec::new(), Vec::new())
  }

  /// Look up a snippet by its exact trigger.
  pub fn snippet(&self, trigger: &str) -> Option<&Snippet> {
    self.snippets.iter().find(|s| s.trigger == trigger)
  }

  /// Compiled pattern set, built on first use and reused for every pass.
  pub(crate) fn patterns(&self) -> &HighlightPatterns {
    self
      .compiled
      .get_or_init(|| HighlightPatterns::compile(self))
  }
}
