//! Pattern-based syntax classification.
//!
//! [`highlight`] rescans the whole document on every call and tags each
//! character with a lexical [`Category`]. Passes run in a fixed order —
//! keywords, then string literals, then line comments — and a later pass
//! overwrites whatever an earlier pass marked, so the effective precedence is
//! Comment > StringLiteral > Keyword > Default. A comment dominates anything
//! it contains (quotes, keyword-looking tokens), and string contents dominate
//! keywords that happen to appear inside them.
//!
//! Documents are editor-sized, so the full rescan is cheap enough to run on
//! every edit; the compiled pattern set is cached per profile so repeated
//! passes don't rebuild regexes.

use std::{
  borrow::Cow,
  ops::Range,
};

use regex::Regex;
use ropey::RopeSlice;

use crate::language::LanguageProfile;

/// Lexical category of a run of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
  Default,
  Keyword,
  StringLiteral,
  Comment,
}

/// A maximal run of characters sharing one category.
///
/// `range` is a half-open character-offset range into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
  pub range:    Range<usize>,
  pub category: Category,
}

/// Compiled pattern set for one profile.
#[derive(Debug, Clone)]
pub(crate) struct HighlightPatterns {
  keywords: Vec<Regex>,
  string:   Regex,
  comment:  Regex,
}

impl HighlightPatterns {
  pub(crate) fn compile(profile: &LanguageProfile) -> Self {
    let keywords = profile
      .keywords
      .iter()
      .filter_map(|keyword| match Regex::new(&format!(r"\b{keyword}\b")) {
        Ok(re) => Some(re),
        Err(err) => {
          tracing::warn!(
            "keyword {keyword:?} does not form a valid word-boundary pattern, \
             it will never match: {err}"
          );
          None
        },
      })
      .collect();

    HighlightPatterns {
      keywords,
      // Shortest match between two quotes on the same line; `\r` and `\n`
      // both terminate a line, so an unterminated quote produces no span.
      string: Regex::new(r#""[^\r\n]*?""#).expect("string pattern is valid"),
      comment: Regex::new(r"//[^\r\n]*").expect("comment pattern is valid"),
    }
  }
}

/// Classify every character of `text` and return the category runs, in order,
/// tiling `[0, len_chars)` exactly.
pub fn highlight(text: RopeSlice, profile: &LanguageProfile) -> Vec<HighlightSpan> {
  if text.len_chars() == 0 {
    return Vec::new();
  }

  let source = Cow::<str>::from(text);
  let patterns = profile.patterns();

  // Per-byte category buffer; later passes overwrite earlier ones.
  let mut categories = vec![Category::Default; source.len()];
  for re in &patterns.keywords {
    for m in re.find_iter(&source) {
      categories[m.start()..m.end()].fill(Category::Keyword);
    }
  }
  for m in patterns.string.find_iter(&source) {
    categories[m.start()..m.end()].fill(Category::StringLiteral);
  }
  for m in patterns.comment.find_iter(&source) {
    categories[m.start()..m.end()].fill(Category::Comment);
  }

  // Collapse the per-byte buffer into char-offset runs.
  let mut spans: Vec<HighlightSpan> = Vec::new();
  for (idx, (byte, _)) in source.char_indices().enumerate() {
    let category = categories[byte];
    match spans.last_mut() {
      Some(last) if last.category == category => last.range.end = idx + 1,
      _ => spans.push(HighlightSpan {
        range: idx..idx + 1,
        category,
      }),
    }
  }
  spans
}
