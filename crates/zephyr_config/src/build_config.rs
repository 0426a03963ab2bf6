use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::content::ContentGlobs;
use crate::map::VariantsMap;
use crate::partial_build_config::PartialBuildConfig;
use crate::theme::DarkMode;
use crate::theme::Theme;

/// How utility CSS is generated.
///
/// In `jit` mode classes are compiled on demand from the content sources; in
/// `aot` mode the full utility set is generated up front.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  Jit,
  #[default]
  Aot,
}

/// A plugin together with the directory its specifier resolves from
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginNode {
  pub package_name: String,
  pub resolve_from: Arc<PathBuf>,
}

/// The variants section of a merged configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variants {
  #[serde(default)]
  pub extend: VariantsMap,
}

/// A fully merged build configuration with every defaultable field filled in
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
  pub mode: BuildMode,
  pub content: ContentGlobs,
  pub dark_mode: DarkMode,
  pub theme: Theme,
  pub variants: Variants,
  pub plugins: Vec<PluginNode>,
}

impl From<PartialBuildConfig> for BuildConfig {
  fn from(partial: PartialBuildConfig) -> Self {
    BuildConfig {
      mode: partial.mode.unwrap_or_default(),
      content: partial.content.unwrap_or_default(),
      dark_mode: partial.dark_mode.unwrap_or_default(),
      theme: Theme {
        font_family: partial.font_family.unwrap_or_default(),
        extend: crate::theme::ThemeExtend {
          colors: partial.colors.unwrap_or_default(),
        },
      },
      variants: Variants {
        extend: partial.variants.unwrap_or_default(),
      },
      plugins: partial.plugins,
    }
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn empty_partial_yields_the_default_config() {
    let config = BuildConfig::from(PartialBuildConfig::default());

    assert_eq!(config.mode, BuildMode::Aot);
    assert_eq!(config.dark_mode, DarkMode::Disabled);
    assert!(config.content.is_empty());
    assert!(config.plugins.is_empty());
  }

  #[test]
  fn serializes_with_camel_case_sections() {
    let config = BuildConfig {
      mode: BuildMode::Jit,
      dark_mode: DarkMode::Class,
      ..BuildConfig::default()
    };

    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["mode"], "jit");
    assert_eq!(value["darkMode"], "class");
    assert!(value["theme"]["fontFamily"].is_object());
    assert!(value["variants"]["extend"].is_object());
  }

  #[test]
  fn exposes_authored_globs_and_font_aliases_exactly() {
    let config: BuildConfig = serde_json::from_str(
      r#"{
        "mode": "aot",
        "content": ["./js/**/*.js"],
        "darkMode": false,
        "theme": {
          "fontFamily": { "times": ["Times New Roman"] },
          "extend": { "colors": {} }
        },
        "variants": { "extend": {} },
        "plugins": []
      }"#,
    )
    .unwrap();

    let globs: Vec<&str> = config.content.iter().collect();
    assert_eq!(globs, vec!["./js/**/*.js"]);
    assert_eq!(config.theme.font_family.len(), 1);
    assert_eq!(
      config.theme.font_family.get("times"),
      Some(&[String::from("Times New Roman")][..])
    );
  }

  #[test]
  fn round_trips_through_json() {
    let config = BuildConfig {
      mode: BuildMode::Jit,
      content: ContentGlobs::from(vec!["./js/**/*.js", "../lib/*_web/**/*.*ex"]),
      dark_mode: DarkMode::Media,
      plugins: vec![PluginNode {
        package_name: String::from("@zephyr/plugin-forms"),
        resolve_from: Arc::new(PathBuf::from("/app/.zephyrrc")),
      }],
      ..BuildConfig::default()
    };

    let json = serde_json::to_string(&config).unwrap();

    assert_eq!(serde_json::from_str::<BuildConfig>(&json).unwrap(), config);
  }
}
