use std::collections::HashSet;
use std::sync::Arc;

use zephyr_core::diagnostic_error;
use zephyr_core::types::CodeFrame;
use zephyr_core::types::DiagnosticBuilder;
use zephyr_core::types::DiagnosticError;
use zephyr_core::types::ErrorKind;
use zephyr_core::types::File;

use crate::build_config::BuildMode;
use crate::build_config::PluginNode;
use crate::content::ContentGlobs;
use crate::map::VariantsMap;
use crate::theme::ColorExtensions;
use crate::theme::DarkMode;
use crate::theme::FontFamilyMap;
use crate::zephyr_rc::ZephyrRcFile;

/// An intermediate representation of one config file's contribution, where
/// absent sections stay absent so that merging can tell "not specified"
/// apart from "specified as empty".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartialBuildConfig {
  pub mode: Option<BuildMode>,
  pub content: Option<ContentGlobs>,
  pub dark_mode: Option<DarkMode>,
  pub font_family: Option<FontFamilyMap>,
  pub colors: Option<ColorExtensions>,
  pub variants: Option<VariantsMap>,
  pub plugins: Vec<PluginNode>,
}

impl TryFrom<&ZephyrRcFile> for PartialBuildConfig {
  type Error = DiagnosticError;

  fn try_from(rc_file: &ZephyrRcFile) -> Result<Self, Self::Error> {
    let resolve_from = Arc::new(rc_file.path.clone());

    let mut plugins = Vec::new();
    let mut seen = HashSet::new();
    for package_name in rc_file.contents.plugins.iter().flatten() {
      if !seen.insert(package_name.as_str()) {
        return Err(diagnostic_error!(DiagnosticBuilder::default()
          .message(format!(
            "Plugin `{}` is listed more than once in {}",
            package_name,
            rc_file.path.display()
          ))
          .kind(ErrorKind::InvalidConfig)
          .code_frames(vec![CodeFrame::from(File::from(rc_file))])));
      }

      plugins.push(PluginNode {
        package_name: package_name.clone(),
        resolve_from: Arc::clone(&resolve_from),
      });
    }

    let contents = &rc_file.contents;
    Ok(PartialBuildConfig {
      mode: contents.mode,
      content: contents.content.clone(),
      dark_mode: contents.dark_mode,
      font_family: contents
        .theme
        .as_ref()
        .and_then(|theme| theme.font_family.clone()),
      colors: contents
        .theme
        .as_ref()
        .and_then(|theme| theme.extend.as_ref())
        .and_then(|extend| extend.colors.clone()),
      variants: contents
        .variants
        .as_ref()
        .and_then(|variants| variants.extend.clone()),
      plugins,
    })
  }
}

impl PartialBuildConfig {
  /// Combines two partial configs, with `self` taking precedence over
  /// `extension`.
  ///
  /// Scalars and content globs are replaced wholesale when `self` sets
  /// them; fontFamily, colors and variants merge per key with `self`
  /// winning conflicts; plugins keep `self`'s list followed by extension
  /// plugins not already present, deduplicated by package name.
  pub fn merge(self, extension: PartialBuildConfig) -> PartialBuildConfig {
    PartialBuildConfig {
      mode: self.mode.or(extension.mode),
      content: self.content.or(extension.content),
      dark_mode: self.dark_mode.or(extension.dark_mode),
      font_family: merge_options(self.font_family, extension.font_family, FontFamilyMap::merge),
      colors: merge_options(self.colors, extension.colors, ColorExtensions::merge),
      variants: merge_options(self.variants, extension.variants, VariantsMap::merge),
      plugins: merge_plugins(self.plugins, extension.plugins),
    }
  }
}

fn merge_options<T>(
  base: Option<T>,
  extension: Option<T>,
  merge: impl FnOnce(T, T) -> T,
) -> Option<T> {
  match (base, extension) {
    (Some(base), Some(extension)) => Some(merge(base, extension)),
    (base, extension) => base.or(extension),
  }
}

fn merge_plugins(base: Vec<PluginNode>, extension: Vec<PluginNode>) -> Vec<PluginNode> {
  let mut merged = base;
  for plugin in extension {
    if !merged
      .iter()
      .any(|existing| existing.package_name == plugin.package_name)
    {
      merged.push(plugin);
    }
  }
  merged
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use indexmap::indexmap;

  use zephyr_core::types::Diagnostic;

  use super::*;
  use crate::theme::PaletteRef;

  fn rc_file(raw: &str) -> ZephyrRcFile {
    ZephyrRcFile {
      contents: serde_json5::from_str(raw).unwrap(),
      path: PathBuf::from("/app/.zephyrrc"),
      raw: String::from(raw),
    }
  }

  fn plugin(package_name: &str, resolve_from: &str) -> PluginNode {
    PluginNode {
      package_name: String::from(package_name),
      resolve_from: Arc::new(PathBuf::from(resolve_from)),
    }
  }

  mod try_from {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plugins_resolve_from_the_declaring_file() {
      let rc_file = rc_file(r#"{ "plugins": ["@zephyr/plugin-forms", "./plugins/marketing"] }"#);

      let partial = PartialBuildConfig::try_from(&rc_file).unwrap();

      assert_eq!(
        partial.plugins,
        vec![
          plugin("@zephyr/plugin-forms", "/app/.zephyrrc"),
          plugin("./plugins/marketing", "/app/.zephyrrc"),
        ]
      );
    }

    #[test]
    fn rejects_a_plugin_listed_twice() {
      let rc_file =
        rc_file(r#"{ "plugins": ["@zephyr/plugin-forms", "@zephyr/plugin-forms"] }"#);

      let error = PartialBuildConfig::try_from(&rc_file).unwrap_err();
      let diagnostic = error.downcast::<Diagnostic>().unwrap();

      assert_eq!(
        diagnostic.message,
        "Plugin `@zephyr/plugin-forms` is listed more than once in /app/.zephyrrc"
      );
      assert_eq!(diagnostic.kind, ErrorKind::InvalidConfig);
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
    fn absent_sections_stay_absent() {
      let partial = PartialBuildConfig::try_from(&rc_file(r#"{ "mode": "jit" }"#)).unwrap();

      assert_eq!(partial.mode, Some(BuildMode::Jit));
      assert_eq!(partial.content, None);
      assert_eq!(partial.dark_mode, None);
      assert_eq!(partial.font_family, None);
      assert_eq!(partial.colors, None);
      assert_eq!(partial.variants, None);
    }
  }

  mod merge {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn base_scalars_win_over_extension() {
      let base = PartialBuildConfig {
        mode: Some(BuildMode::Jit),
        content: Some(ContentGlobs::from(vec!["./js/**/*.js"])),
        ..PartialBuildConfig::default()
      };
      let extension = PartialBuildConfig {
        mode: Some(BuildMode::Aot),
        content: Some(ContentGlobs::from(vec!["./src/**/*.html"])),
        dark_mode: Some(DarkMode::Media),
        ..PartialBuildConfig::default()
      };

      let merged = base.merge(extension);

      assert_eq!(merged.mode, Some(BuildMode::Jit));
      assert_eq!(merged.content, Some(ContentGlobs::from(vec!["./js/**/*.js"])));
      assert_eq!(merged.dark_mode, Some(DarkMode::Media));
    }

    #[test]
    fn maps_merge_per_key_with_base_winning_conflicts() {
      let base = PartialBuildConfig {
        colors: Some(ColorExtensions::new(indexmap! {
          String::from("gray") => PaletteRef::new("blueGray"),
        })),
        ..PartialBuildConfig::default()
      };
      let extension = PartialBuildConfig {
        colors: Some(ColorExtensions::new(indexmap! {
          String::from("gray") => PaletteRef::new("gray"),
          String::from("teal") => PaletteRef::new("teal"),
        })),
        ..PartialBuildConfig::default()
      };

      let merged = base.merge(extension).colors.unwrap();

      assert_eq!(merged.get("gray"), Some(&PaletteRef::new("blueGray")));
      assert_eq!(merged.get("teal"), Some(&PaletteRef::new("teal")));
    }

    #[test]
    fn plugins_dedupe_by_package_name_keeping_base_order() {
      let base = PartialBuildConfig {
        plugins: vec![
          plugin("@zephyr/plugin-forms", "/app/.zephyrrc"),
          plugin("@zephyr/plugin-aspect-ratio", "/app/.zephyrrc"),
        ],
        ..PartialBuildConfig::default()
      };
      let extension = PartialBuildConfig {
        plugins: vec![
          plugin("@zephyr/plugin-forms", "/presets/base.json"),
          plugin("@zephyr/plugin-typography", "/presets/base.json"),
        ],
        ..PartialBuildConfig::default()
      };

      let merged = base.merge(extension);

      assert_eq!(
        merged.plugins,
        vec![
          plugin("@zephyr/plugin-forms", "/app/.zephyrrc"),
          plugin("@zephyr/plugin-aspect-ratio", "/app/.zephyrrc"),
          plugin("@zephyr/plugin-typography", "/presets/base.json"),
        ]
      );
    }

    #[test]
    fn merge_with_default_is_identity() {
      let base = PartialBuildConfig {
        mode: Some(BuildMode::Jit),
        dark_mode: Some(DarkMode::Class),
        plugins: vec![plugin("@zephyr/plugin-forms", "/app/.zephyrrc")],
        ..PartialBuildConfig::default()
      };

      assert_eq!(
        base.clone().merge(PartialBuildConfig::default()),
        base.clone()
      );
      assert_eq!(PartialBuildConfig::default().merge(base.clone()), base);
    }
  }
}
