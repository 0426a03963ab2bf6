use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use super::CodeHighlight;
use super::File;
use super::FileType;
use super::Language;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFrame {
  /// Source-code of the file at the time of error
  pub code: Option<String>,

  /// Path to the source file if applicable
  pub file_path: Option<PathBuf>,

  /// The language associated with the code
  pub language: Option<Language>,

  /// List of source-code highlight messages
  pub code_highlights: Vec<CodeHighlight>,
}

impl From<File> for CodeFrame {
  fn from(file: File) -> Self {
    let language = file
      .path
      .extension()
      .map(|ext| Language(FileType::from_extension(&ext.to_string_lossy())));

    CodeFrame {
      code: Some(file.contents),
      code_highlights: Vec::new(),
      language,
      file_path: Some(file.path),
    }
  }
}

impl From<PathBuf> for CodeFrame {
  fn from(path: PathBuf) -> Self {
    let language = path
      .extension()
      .map(|ext| Language(FileType::from_extension(&ext.to_string_lossy())));

    CodeFrame {
      code: None,
      code_highlights: Vec::new(),
      language,
      file_path: Some(path),
    }
  }
}
