//! Completion candidates for the word being typed.
//!
//! The prefix is the maximal run of word characters (letters, digits,
//! underscore) immediately before the cursor. Candidates are the profile's
//! keywords starting with that prefix, then its snippet triggers starting
//! with it, each group in declared order. There is no deduplication and no
//! ranking beyond that grouping; an empty prefix yields no candidates.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use ropey::RopeSlice;

use crate::language::LanguageProfile;

/// Decides what acceptance does: plain substitution or snippet expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
  Keyword,
  Snippet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
  pub text: String,
  pub kind: CompletionKind,
}

static WORD_PREFIX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\w+$").expect("prefix pattern is valid"));

/// The in-progress word immediately before `cursor` (a character offset,
/// clamped into the document). Empty when the cursor sits at the document
/// start or right after whitespace/punctuation.
pub fn prefix_at(text: RopeSlice, cursor: usize) -> String {
  let cursor = cursor.min(text.len_chars());
  let source = Cow::<str>::from(text);
  let boundary = text.char_to_byte(cursor);
  WORD_PREFIX
    .find(&source[..boundary])
    .map(|m| m.as_str().to_owned())
    .unwrap_or_default()
}

/// Candidates for the prefix at `cursor`: matching keywords first, then
/// matching snippet triggers, each in the profile's declared order.
pub fn candidates(
  text: RopeSlice,
  cursor: usize,
  profile: &LanguageProfile,
) -> Vec<CompletionCandidate> {
  let prefix = prefix_at(text, cursor);
  if prefix.is_empty() {
    return Vec::new();
  }

  let keywords = profile
    .keywords
    .iter()
    .filter(|keyword| keyword.starts_with(prefix.as_str()))
    .map(|keyword| CompletionCandidate {
      text: keyword.clone(),
      kind: CompletionKind::Keyword,
    });
  let snippets = profile
    .snippets
    .iter()
    .filter(|snippet| snippet.trigger.starts_with(prefix.as_str()))
    .map(|snippet| CompletionCandidate {
      text: snippet.trigger.clone(),
      kind: CompletionKind::Snippet,
    });
  keywords.chain(snippets).collect()
}

#[cfg(test)]
mod test {
  use ropey::Rope;

  use super::*;
  use crate::language::ProgrammingLanguage;

  fn candidates_in(doc: &str, cursor: usize, language: ProgrammingLanguage) -> Vec<CompletionCandidate> {
    let rope = Rope::from_str(doc);
    candidates(rope.slice(..), cursor, &language.profile())
  }

  mod prefix {
    use super::*;

    fn prefix_in(doc: &str, cursor: usize) -> String {
      let rope = Rope::from_str(doc);
      prefix_at(rope.slice(..), cursor)
    }

    #[test]
    fn empty_at_document_start() {
      assert_eq!(prefix_in("let", 0), "");
    }

    #[test]
    fn empty_after_whitespace() {
      assert_eq!(prefix_in("let ", 4), "");
    }

    #[test]
    fn word_run_before_cursor() {
      assert_eq!(prefix_in("let fo", 6), "fo");
    }

    #[test]
    fn only_scans_text_before_cursor() {
      assert_eq!(prefix_in("let foo", 6), "fo");
    }

    #[test]
    fn includes_digits_and_underscores() {
      assert_eq!(prefix_in("x foo_2b", 8), "foo_2b");
    }

    #[test]
    fn out_of_range_cursor_is_clamped() {
      assert_eq!(prefix_in("fu", 999), "fu");
    }
  }

  #[test]
  fn empty_prefix_yields_no_candidates() {
    assert!(candidates_in("", 0, ProgrammingLanguage::Swift).is_empty());
    assert!(candidates_in("let ", 4, ProgrammingLanguage::Swift).is_empty());
  }

  #[test]
  fn keyword_and_snippet_trigger_both_listed() {
    // `fu` matches both the keyword `func` and the snippet trigger `func`;
    // the list is dedup-free by contract.
    assert_eq!(candidates_in("fu", 2, ProgrammingLanguage::Swift), vec![
      CompletionCandidate {
        text: "func".into(),
        kind: CompletionKind::Keyword,
      },
      CompletionCandidate {
        text: "func".into(),
        kind: CompletionKind::Snippet,
      },
    ]);
  }

  #[test]
  fn keywords_precede_snippets_in_declared_order() {
    assert_eq!(candidates_in("d", 1, ProgrammingLanguage::Python), vec![
      CompletionCandidate {
        text: "def".into(),
        kind: CompletionKind::Keyword,
      },
      CompletionCandidate {
        text: "del".into(),
        kind: CompletionKind::Keyword,
      },
      CompletionCandidate {
        text: "def".into(),
        kind: CompletionKind::Snippet,
      },
    ]);
  }

  #[test]
  fn matching_is_case_sensitive() {
    assert!(candidates_in("Fu", 2, ProgrammingLanguage::Swift).is_empty());
  }

  #[test]
  fn no_match_for_unknown_word() {
    assert!(candidates_in("zebra", 5, ProgrammingLanguage::Swift).is_empty());
  }
}
