//! Snippet definitions and template expansion.
//!
//! A snippet is a named template offered through completion: typing a prefix
//! of its trigger lists it, and accepting it inserts the expanded template in
//! place of the prefix.
//!
//! Templates may contain placeholders of the form `${<index>:<default>}`
//! (default optional) plus the final-cursor marker `${0}`. Expansion strips
//! every placeholder, including `${0}`, and keeps the remaining literal text
//! untouched and in order. Defaults are not substituted; the caret ends up at
//! the end of the inserted text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// A triggerable text template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snippet {
  /// The prefix that must match for this snippet to be offered.
  pub trigger:  String,
  /// Raw template body, placeholders included.
  pub template: String,
}

/// Matches `${1}`, `${2:default text}`, `${0}`, etc. The index must be
/// numeric; anything else (`${}`, `${name}`) is left alone.
static PLACEHOLDER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\$\{\d+:?[^}]*\}").expect("placeholder pattern is valid"));

/// Strip every placeholder from `template` and return the literal insertion
/// text.
pub fn expand(template: &str) -> String {
  PLACEHOLDER.replace_all(template, "").into_owned()
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn strips_swift_func_template() {
    let template = "func ${1:functionName}(${2:parameters}) -> ${3:ReturnType} {\n    ${0}\n}";
    // The template has a space on each side of `${3:ReturnType}`, so the
    // stripped text keeps both.
    assert_eq!(expand(template), "func () ->  {\n    \n}");
  }

  #[test]
  fn strips_python_def_template() {
    let template = "def ${1:function_name}(${2:params}):\n    ${0}";
    assert_eq!(expand(template), "def ():\n    ");
  }

  #[test]
  fn strips_placeholder_without_default() {
    assert_eq!(expand("a${1}b"), "ab");
  }

  #[test]
  fn strips_final_cursor_marker() {
    assert_eq!(expand("done${0}"), "done");
  }

  #[test]
  fn strips_multi_digit_indices() {
    assert_eq!(expand("x${10:long default}y"), "xy");
  }

  #[test]
  fn keeps_non_numeric_braces() {
    assert_eq!(expand("${name} ${} {}"), "${name} ${} {}");
  }

  #[test]
  fn plain_text_passes_through() {
    assert_eq!(expand("nothing to see"), "nothing to see");
  }
}
