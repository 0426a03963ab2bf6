use std::fmt::Display;
use std::fmt::Formatter;

use derive_builder::Builder;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::CodeFrame;
use super::ErrorKind;

/// Errors are reported as anyhow errors so that context can be chained; the
/// innermost cause is usually a [`Diagnostic`] and can be recovered with
/// `downcast`.
pub type DiagnosticError = anyhow::Error;

/// A user facing error for Zephyr.
///
/// Usually but not always this is linked to a location in a configuration
/// file.
#[derive(Builder, Clone, Debug, Default, Deserialize, Error, PartialEq, Serialize)]
#[builder(default)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
  /// A summary user-facing message
  #[builder(setter(into))]
  pub message: String,

  /// Indicates where this diagnostic was emitted from
  pub origin: Option<String>,

  /// Machine-readable category of the failure
  #[serde(default)]
  pub kind: ErrorKind,

  /// A list of files with source-code highlights
  #[builder(setter(strip_option))]
  pub code_frames: Option<Vec<CodeFrame>>,

  /// Hints for the user
  #[builder(setter(strip_option))]
  pub hints: Option<Vec<String>>,

  /// URL for the user to refer to documentation
  #[serde(rename = "documentationURL")]
  pub documentation_url: Option<String>,
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.message)
  }
}

/// An ordered collection of diagnostics reported together.
#[derive(Clone, Debug, Default, Deserialize, Error, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
  pub fn as_ref(&self) -> &Vec<Diagnostic> {
    &self.0
  }

  pub fn into_inner(self) -> Vec<Diagnostic> {
    self.0
  }
}

impl Display for Diagnostics {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let mut output = String::new();
    for diagnostic in &self.0 {
      output += &format!("{}\n", diagnostic);
    }
    write!(f, "{}", output.trim_end())
  }
}

impl From<Vec<Diagnostic>> for Diagnostics {
  fn from(diagnostics: Vec<Diagnostic>) -> Self {
    Diagnostics(diagnostics)
  }
}

impl From<Diagnostic> for Diagnostics {
  fn from(diagnostic: Diagnostic) -> Self {
    Diagnostics(vec![diagnostic])
  }
}

/// Creates a [`DiagnosticError`] from either a [`DiagnosticBuilder`] or a
/// format string, stamping the calling module as the origin.
#[macro_export]
macro_rules! diagnostic_error {
  ($builder:expr) => {
    $crate::types::DiagnosticError::from(
      $builder
        .origin(Some(String::from(module_path!())))
        .build()
        .unwrap_or_default(),
    )
  };
  ($fmt:expr, $($arg:tt)+) => {
    $crate::diagnostic_error!(
      $crate::types::DiagnosticBuilder::default().message(format!($fmt, $($arg)+))
    )
  };
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use pretty_assertions::assert_eq;

  use super::*;
  use crate::diagnostic_error;

  #[test]
  fn format_arm_sets_message_and_origin() {
    let error = diagnostic_error!("bad value {}", 7);
    let diagnostic = error.downcast::<Diagnostic>().unwrap();

    assert_eq!(diagnostic.message, "bad value 7");
    assert_eq!(
      diagnostic.origin,
      Some(String::from("zephyr_core::types::diagnostic::tests"))
    );
  }

  #[test]
  fn builder_arm_preserves_code_frames() {
    let error = diagnostic_error!(DiagnosticBuilder::default()
      .message("parse failure")
      .kind(ErrorKind::ParseError)
      .code_frames(vec![CodeFrame::from(PathBuf::from("/app/.zephyrrc"))]));
    let diagnostic = error.downcast::<Diagnostic>().unwrap();

    assert_eq!(diagnostic.message, "parse failure");
    assert_eq!(diagnostic.kind, ErrorKind::ParseError);
    assert_eq!(
      diagnostic
        .code_frames
        .unwrap()
        .first()
        .and_then(|frame| frame.file_path.clone()),
      Some(PathBuf::from("/app/.zephyrrc"))
    );
  }

  #[test]
  fn diagnostics_display_joins_messages() {
    let diagnostics = Diagnostics::from(vec![
      DiagnosticBuilder::default().message("first").build().unwrap(),
      DiagnosticBuilder::default().message("second").build().unwrap(),
    ]);

    assert_eq!(diagnostics.to_string(), "first\nsecond");
  }
}
