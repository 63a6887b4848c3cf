//! Core engines for a smart code editor surface.
//!
//! The hosting application owns the text buffer and the cursor; this crate
//! supplies the two engines that make the surface "smart":
//!
//! 1. a **highlighter** ([`highlight`]) that classifies character spans of a
//!    document into lexical categories per a [`language::LanguageProfile`],
//!    and
//! 2. a **completion/snippet engine** ([`completion`], [`snippet`]) that
//!    derives the word being typed, lists candidate completions, and expands
//!    snippet templates into buffer edits.
//!
//! [`session::EditorSession`] composes both behind the three entry points a
//! surface needs: push a `(text, cursor)` snapshot, accept a candidate,
//! dismiss the popup.

pub mod completion;
pub mod config;
pub mod highlight;
pub mod language;
pub mod session;
pub mod snippet;

pub use completion::{
  CompletionCandidate,
  CompletionKind,
};
pub use config::ConfigError;
pub use highlight::{
  Category,
  HighlightSpan,
};
pub use language::{
  FileType,
  LanguageProfile,
  ProgrammingLanguage,
};
pub use session::{
  Edit,
  EditorSession,
  Update,
};
pub use snippet::Snippet;
