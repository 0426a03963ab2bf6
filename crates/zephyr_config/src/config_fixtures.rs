use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use indexmap::indexmap;

use crate::build_config::BuildConfig;
use crate::build_config::BuildMode;
use crate::build_config::PluginNode;
use crate::build_config::Variants;
use crate::content::ContentGlobs;
use crate::map::VariantsMap;
use crate::theme::ColorExtensions;
use crate::theme::DarkMode;
use crate::theme::FontFamilyMap;
use crate::theme::PaletteRef;
use crate::theme::Theme;
use crate::theme::ThemeExtend;

/// A config file fixture: the source text, where it lives, and the
/// [`BuildConfig`] loading it is expected to produce.
pub struct ConfigFixture {
  pub build_config: BuildConfig,
  pub path: PathBuf,
  pub zephyr_rc: String,
}

/// A user config that activates a preset, together with both files and the
/// expected merged result
pub struct PresetConfigFixture {
  pub base_config: ConfigFixture,
  pub preset_config: ConfigFixture,
  pub build_config: BuildConfig,
}

fn plugin(package_name: &str, resolve_from: &Arc<PathBuf>) -> PluginNode {
  PluginNode {
    package_name: String::from(package_name),
    resolve_from: Arc::clone(resolve_from),
  }
}

/// A representative standalone config, stationed at `resolve_from`
pub fn default_config(resolve_from: Arc<PathBuf>) -> ConfigFixture {
  ConfigFixture {
    build_config: BuildConfig {
      mode: BuildMode::Jit,
      content: ContentGlobs::from(vec!["./js/**/*.js", "../lib/*_web/**/*.*ex"]),
      dark_mode: DarkMode::Disabled,
      theme: Theme {
        font_family: FontFamilyMap::new(indexmap! {
          String::from("times") => vec![String::from("Times New Roman")],
          String::from("mono") => vec![
            String::from("ui-monospace"),
            String::from("SFMono-Regular"),
          ],
        }),
        extend: ThemeExtend {
          colors: ColorExtensions::new(indexmap! {
            String::from("teal") => PaletteRef::new("teal"),
            String::from("gray") => PaletteRef::new("blueGray"),
          }),
        },
      },
      variants: Variants {
        extend: VariantsMap::new(indexmap! {
          String::from("borderColor") => vec![String::from("active")],
          String::from("backgroundColor") => vec![String::from("active")],
          String::from("textColor") => vec![String::from("active")],
        }),
      },
      plugins: vec![
        plugin("@zephyr/plugin-forms", &resolve_from),
        plugin("@zephyr/plugin-aspect-ratio", &resolve_from),
      ],
    },
    path: PathBuf::from(resolve_from.as_ref()),
    zephyr_rc: String::from(
      r#"{
        "mode": "jit",
        "purge": ["./js/**/*.js", "../lib/*_web/**/*.*ex"],
        "darkMode": false,
        "theme": {
          "fontFamily": {
            "times": ["Times New Roman"],
            "mono": ["ui-monospace", "SFMono-Regular"]
          },
          "extend": {
            "colors": {
              "teal": "teal",
              "gray": "blueGray"
            }
          }
        },
        "variants": {
          "extend": {
            "borderColor": ["active"],
            "backgroundColor": ["active"],
            "textColor": ["active"]
          }
        },
        "plugins": ["@zephyr/plugin-forms", "@zephyr/plugin-aspect-ratio"]
      }"#,
    ),
  }
}

/// A config reachable through an explicit specifier rather than discovery
pub fn config(project_root: &Path) -> (String, ConfigFixture) {
  (
    String::from("./config/zephyr.config.json"),
    default_config(Arc::new(project_root.join("config/zephyr.config.json"))),
  )
}

/// A config used as a fallback when discovery finds nothing
pub fn fallback_config(project_root: &Path) -> (String, ConfigFixture) {
  (
    String::from("./fallback/.zephyrrc"),
    default_config(Arc::new(project_root.join("fallback/.zephyrrc"))),
  )
}

/// A user config extending a relative preset, with the merged expectation
pub fn preset_config(project_root: &Path) -> PresetConfigFixture {
  let base_path = Arc::new(project_root.join(".zephyrrc"));
  let preset_path = Arc::new(project_root.join("presets/base.json"));

  let base_config = ConfigFixture {
    build_config: BuildConfig {
      mode: BuildMode::Jit,
      theme: Theme {
        extend: ThemeExtend {
          colors: ColorExtensions::new(indexmap! {
            String::from("gray") => PaletteRef::new("blueGray"),
          }),
        },
        ..Theme::default()
      },
      plugins: vec![plugin("@zephyr/plugin-forms", &base_path)],
      ..BuildConfig::default()
    },
    path: PathBuf::from(base_path.as_ref()),
    zephyr_rc: String::from(
      r#"{
        "presets": ["./presets/base.json"],
        "mode": "jit",
        "theme": {
          "extend": {
            "colors": {
              "gray": "blueGray"
            }
          }
        },
        "plugins": ["@zephyr/plugin-forms"]
      }"#,
    ),
  };

  let preset_config = ConfigFixture {
    build_config: BuildConfig {
      dark_mode: DarkMode::Media,
      theme: Theme {
        font_family: FontFamilyMap::new(indexmap! {
          String::from("sans") => vec![String::from("Inter"), String::from("sans-serif")],
        }),
        extend: ThemeExtend {
          colors: ColorExtensions::new(indexmap! {
            String::from("gray") => PaletteRef::new("gray"),
            String::from("teal") => PaletteRef::new("teal"),
          }),
        },
      },
      variants: Variants {
        extend: VariantsMap::new(indexmap! {
          String::from("backgroundColor") => vec![String::from("active")],
        }),
      },
      plugins: vec![
        plugin("@zephyr/plugin-forms", &preset_path),
        plugin("@zephyr/plugin-typography", &preset_path),
      ],
      ..BuildConfig::default()
    },
    path: PathBuf::from(preset_path.as_ref()),
    zephyr_rc: String::from(
      r#"{
        "darkMode": "media",
        "theme": {
          "fontFamily": {
            "sans": ["Inter", "sans-serif"]
          },
          "extend": {
            "colors": {
              "gray": "gray",
              "teal": "teal"
            }
          }
        },
        "variants": {
          "extend": {
            "backgroundColor": ["active"]
          }
        },
        "plugins": ["@zephyr/plugin-forms", "@zephyr/plugin-typography"]
      }"#,
    ),
  };

  let build_config = BuildConfig {
    mode: BuildMode::Jit,
    dark_mode: DarkMode::Media,
    theme: Theme {
      font_family: FontFamilyMap::new(indexmap! {
        String::from("sans") => vec![String::from("Inter"), String::from("sans-serif")],
      }),
      extend: ThemeExtend {
        colors: ColorExtensions::new(indexmap! {
          String::from("gray") => PaletteRef::new("blueGray"),
          String::from("teal") => PaletteRef::new("teal"),
        }),
      },
    },
    variants: Variants {
      extend: VariantsMap::new(indexmap! {
        String::from("backgroundColor") => vec![String::from("active")],
      }),
    },
    plugins: vec![
      plugin("@zephyr/plugin-forms", &base_path),
      plugin("@zephyr/plugin-typography", &preset_path),
    ],
    ..BuildConfig::default()
  };

  PresetConfigFixture {
    base_config,
    preset_config,
    build_config,
  }
}
