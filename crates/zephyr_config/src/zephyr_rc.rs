use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use zephyr_core::types::File;

use crate::content::ContentGlobs;
use crate::map::VariantsMap;
use crate::theme::ColorExtensions;
use crate::theme::DarkMode;
use crate::theme::FontFamilyMap;

/// One or more preset specifiers
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Presets {
  One(String),
  Many(Vec<String>),
}

impl Presets {
  pub fn as_slice(&self) -> &[String] {
    match self {
      Presets::One(preset) => std::slice::from_ref(preset),
      Presets::Many(presets) => presets,
    }
  }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtendRc {
  pub colors: Option<ColorExtensions>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRc {
  pub font_family: Option<FontFamilyMap>,
  pub extend: Option<ThemeExtendRc>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantsRc {
  pub extend: Option<VariantsMap>,
}

/// Deserialized .zephyrrc as it appears on disk, before any merging or
/// defaulting. Every section is optional so that presets can contribute
/// only the sections they care about.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZephyrRc {
  pub presets: Option<Presets>,
  pub mode: Option<crate::build_config::BuildMode>,
  /// `purge` is the legacy name for the same list of source globs
  #[serde(alias = "purge")]
  pub content: Option<ContentGlobs>,
  pub dark_mode: Option<DarkMode>,
  pub theme: Option<ThemeRc>,
  pub variants: Option<VariantsRc>,
  pub plugins: Option<Vec<String>>,
}

/// A parsed config file together with where it came from, so that errors
/// in later processing can still point at the source text.
#[derive(Clone, Debug, PartialEq)]
pub struct ZephyrRcFile {
  pub contents: ZephyrRc,
  pub path: PathBuf,
  pub raw: String,
}

impl From<&ZephyrRcFile> for File {
  fn from(rc_file: &ZephyrRcFile) -> Self {
    File {
      contents: rc_file.raw.clone(),
      path: rc_file.path.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn purge_is_an_alias_for_content() {
    let rc: ZephyrRc =
      serde_json5::from_str(r#"{ "purge": ["./js/**/*.js", "../lib/*_web/**/*.*ex"] }"#).unwrap();

    assert_eq!(
      rc.content,
      Some(ContentGlobs::from(vec![
        "./js/**/*.js",
        "../lib/*_web/**/*.*ex"
      ]))
    );
  }

  #[test]
  fn presets_accept_a_single_specifier_or_a_list() {
    let one: ZephyrRc = serde_json5::from_str(r#"{ "presets": "./base.json" }"#).unwrap();
    let many: ZephyrRc =
      serde_json5::from_str(r#"{ "presets": ["./base.json", "./brand.json"] }"#).unwrap();

    assert_eq!(
      one.presets.unwrap().as_slice(),
      &[String::from("./base.json")]
    );
    assert_eq!(
      many.presets.unwrap().as_slice(),
      &[String::from("./base.json"), String::from("./brand.json")]
    );
  }

  #[test]
  fn unknown_sections_are_ignored() {
    let rc: ZephyrRc =
      serde_json5::from_str(r#"{ "mode": "jit", "corePlugins": { "float": false } }"#).unwrap();

    assert_eq!(rc.mode, Some(crate::build_config::BuildMode::Jit));
  }
}
