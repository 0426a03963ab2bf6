use std::fmt;

use indexmap::IndexMap;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use zephyr_core::palette;
use zephyr_core::palette::Palette;
use zephyr_core::types::DiagnosticBuilder;
use zephyr_core::types::DiagnosticError;
use zephyr_core::types::Diagnostics;
use zephyr_core::types::ErrorKind;

/// Dark-mode activation strategy.
///
/// The wire form is `false` (disabled), `"media"` (prefers-color-scheme) or
/// `"class"` (a `.dark` ancestor class); serialization round-trips those
/// exact forms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DarkMode {
  #[default]
  Disabled,
  Media,
  Class,
}

impl Serialize for DarkMode {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      DarkMode::Disabled => serializer.serialize_bool(false),
      DarkMode::Media => serializer.serialize_str("media"),
      DarkMode::Class => serializer.serialize_str("class"),
    }
  }
}

impl<'de> Deserialize<'de> for DarkMode {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    struct DarkModeVisitor;

    impl Visitor<'_> for DarkModeVisitor {
      type Value = DarkMode;

      fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(r#"false, "media" or "class""#)
      }

      fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<Self::Value, E> {
        if value {
          Err(E::custom(
            r#"darkMode: true is not a strategy; use "media" or "class""#,
          ))
        } else {
          Ok(DarkMode::Disabled)
        }
      }

      fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        match value {
          "media" => Ok(DarkMode::Media),
          "class" => Ok(DarkMode::Class),
          _ => Err(E::unknown_variant(value, &["media", "class"])),
        }
      }
    }

    deserializer.deserialize_any(DarkModeVisitor)
  }
}

/// Maps a font alias to its ordered fallback chain of font-family names.
/// The first available font wins at render time in the consuming system.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FontFamilyMap {
  inner: IndexMap<String, Vec<String>>,
}

impl FontFamilyMap {
  pub fn new(inner: IndexMap<String, Vec<String>>) -> Self {
    Self { inner }
  }

  pub fn get(&self, alias: &str) -> Option<&[String]> {
    self.inner.get(alias).map(|chain| chain.as_slice())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
    self
      .inner
      .iter()
      .map(|(alias, chain)| (alias.as_str(), chain.as_slice()))
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  pub(crate) fn merge(self, extension: FontFamilyMap) -> FontFamilyMap {
    FontFamilyMap {
      inner: crate::map::merge_unique_maps(self.inner, extension.inner),
    }
  }
}

impl<'de> Deserialize<'de> for FontFamilyMap {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(FontFamilyMap {
      inner: crate::map::deserialize_unique_map(deserializer, "fontFamily")?,
    })
  }
}

/// A reference into the builtin palette registry, by conventional name
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PaletteRef(String);

impl PaletteRef {
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

/// Maps a color alias to the builtin palette it should expose
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorExtensions {
  inner: IndexMap<String, PaletteRef>,
}

impl ColorExtensions {
  pub fn new(inner: IndexMap<String, PaletteRef>) -> Self {
    Self { inner }
  }

  pub fn get(&self, alias: &str) -> Option<&PaletteRef> {
    self.inner.get(alias)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &PaletteRef)> {
    self.inner.iter().map(|(alias, reference)| (alias.as_str(), reference))
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  pub(crate) fn merge(self, extension: ColorExtensions) -> ColorExtensions {
    ColorExtensions {
      inner: crate::map::merge_unique_maps(self.inner, extension.inner),
    }
  }
}

impl<'de> Deserialize<'de> for ColorExtensions {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(ColorExtensions {
      inner: crate::map::deserialize_unique_map(deserializer, "colors")?,
    })
  }
}

/// Additions layered over the engine's base theme
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtend {
  #[serde(default)]
  pub colors: ColorExtensions,
}

/// The theme section of a merged configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
  #[serde(default)]
  pub font_family: FontFamilyMap,

  #[serde(default)]
  pub extend: ThemeExtend,
}

impl Theme {
  /// Materializes every palette reference in `extend.colors` against the
  /// builtin registry.
  ///
  /// All unknown references are reported together rather than one at a
  /// time, so a config with several bad aliases surfaces them in one pass.
  pub fn resolve(&self) -> Result<ResolvedTheme, DiagnosticError> {
    let mut colors = IndexMap::new();
    let mut unknown = Vec::new();

    for (alias, reference) in self.extend.colors.iter() {
      match palette::get_palette(reference.as_str()) {
        Some(palette) => {
          colors.insert(String::from(alias), palette.clone());
        }
        None => unknown.push(
          DiagnosticBuilder::default()
            .message(format!(
              "Unknown palette `{}` referenced by color alias `{}`",
              reference.as_str(),
              alias
            ))
            .kind(ErrorKind::NotFound)
            .origin(Some(String::from(module_path!())))
            .build()
            .unwrap_or_default(),
        ),
      }
    }

    if !unknown.is_empty() {
      return Err(DiagnosticError::from(Diagnostics::from(unknown)));
    }

    Ok(ResolvedTheme {
      font_family: self.font_family.clone(),
      colors,
    })
  }
}

/// A theme with every palette reference replaced by its color scale
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
  pub font_family: FontFamilyMap,
  pub colors: IndexMap<String, Palette>,
}
