use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

/// A file and its contents at the time an error was produced
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
  pub contents: String,
  pub path: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
  Css,
  Html,
  Js,
  Json,
  #[default]
  Unknown,
}

impl FileType {
  pub fn from_extension(ext: &str) -> FileType {
    match ext {
      "css" => FileType::Css,
      "htm" | "html" => FileType::Html,
      "cjs" | "js" | "mjs" => FileType::Js,
      "json" | "json5" => FileType::Json,
      _ => FileType::Unknown,
    }
  }
}

/// The language associated with a code frame
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Language(pub FileType);

impl From<FileType> for Language {
  fn from(value: FileType) -> Self {
    Self(value)
  }
}
