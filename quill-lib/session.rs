//! Per-surface editor session.
//!
//! [`EditorSession`] is the integration point the hosting text surface calls.
//! The surface owns the buffer and the cursor; on every change it pushes a
//! snapshot through [`EditorSession::update`] and gets back the highlight
//! spans for rendering and the completion candidates for its popup. Accepting
//! a candidate produces an [`Edit`] the surface applies to its buffer.
//!
//! One session per open surface; sessions are never shared across documents.
//! The only state a session holds is the last candidate list and whether the
//! completion popup is showing — both engines are pure over the snapshot
//! passed in, so a highlight pass and a completion pass commute.

use std::{
  ops::Range,
  sync::Arc,
};

use ropey::RopeSlice;

use crate::{
  completion::{
    self,
    CompletionCandidate,
    CompletionKind,
  },
  highlight::{
    self,
    HighlightSpan,
  },
  language::{
    LanguageProfile,
    ProgrammingLanguage,
  },
  snippet,
};

/// Result of one text-or-cursor change: spans for the renderer, candidates
/// for the completion popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
  pub spans:      Vec<HighlightSpan>,
  pub candidates: Vec<CompletionCandidate>,
}

/// A buffer edit for the surface to apply: replace the character range with
/// the text. A no-op edit has an empty range and empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
  pub range: Range<usize>,
  pub text:  String,
}

impl Edit {
  fn noop(cursor: usize) -> Edit {
    Edit {
      range: cursor..cursor,
      text:  String::new(),
    }
  }

  pub fn is_noop(&self) -> bool {
    self.range.is_empty() && self.text.is_empty()
  }
}

pub struct EditorSession {
  profile:         Arc<LanguageProfile>,
  last_candidates: Vec<CompletionCandidate>,
  popup_visible:   bool,
}

impl EditorSession {
  pub fn new(profile: Arc<LanguageProfile>) -> EditorSession {
    EditorSession {
      profile,
      last_candidates: Vec::new(),
      popup_visible: false,
    }
  }

  pub fn for_language(language: ProgrammingLanguage) -> EditorSession {
    EditorSession::new(language.profile())
  }

  pub fn profile(&self) -> &Arc<LanguageProfile> {
    &self.profile
  }

  /// Whether the completion popup should currently be showing.
  pub fn popup_visible(&self) -> bool {
    self.popup_visible
  }

  /// The candidate list computed by the most recent [`update`](Self::update).
  pub fn last_candidates(&self) -> &[CompletionCandidate] {
    &self.last_candidates
  }

  /// Recompute both engines against the snapshot. An empty candidate list
  /// dismisses the popup; a non-empty one shows it.
  pub fn update(&mut self, text: RopeSlice, cursor: usize) -> Update {
    let spans = highlight::highlight(text, &self.profile);
    let candidates = completion::candidates(text, cursor, &self.profile);
    self.popup_visible = !candidates.is_empty();
    self.last_candidates = candidates.clone();
    Update { spans, candidates }
  }

  /// Turn an accepted candidate into a buffer edit replacing the prefix span
  /// `[cursor - prefix_len, cursor)`.
  ///
  /// A keyword inserts its text verbatim; a snippet inserts its expanded
  /// template. A snippet trigger no longer present in the profile (profile
  /// swapped mid-session) degrades to a no-op edit.
  pub fn accept(
    &mut self,
    candidate: &CompletionCandidate,
    text: RopeSlice,
    cursor: usize,
  ) -> Edit {
    let cursor = cursor.min(text.len_chars());
    self.popup_visible = false;

    let insertion = match candidate.kind {
      CompletionKind::Keyword => candidate.text.clone(),
      CompletionKind::Snippet => match self.profile.snippet(&candidate.text) {
        Some(snippet) => snippet::expand(&snippet.template),
        None => {
          tracing::debug!(
            "accepted snippet trigger {:?} is missing from profile {:?}",
            candidate.text,
            self.profile.name
          );
          return Edit::noop(cursor);
        },
      },
    };

    let prefix = completion::prefix_at(text, cursor);
    let prefix_len = prefix.chars().count();
    Edit {
      range: cursor - prefix_len..cursor,
      text:  insertion,
    }
  }

  /// Hide the completion popup. No other effect.
  pub fn dismiss(&mut self) {
    self.popup_visible = false;
  }
}
