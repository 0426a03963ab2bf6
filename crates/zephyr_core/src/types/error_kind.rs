use serde::Deserialize;
use serde::Serialize;

/// Machine-readable categories for [`super::Diagnostic`]
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
  /// A referenced file, preset or palette could not be found
  NotFound,
  /// The configuration file could not be parsed
  ParseError,
  /// The configuration parsed but failed validation
  InvalidConfig,
  #[default]
  Unknown,
}
