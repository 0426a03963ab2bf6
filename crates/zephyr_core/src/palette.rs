use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// A named color scale: shade key to hex value, in declared shade order.
///
/// Shade order is meaningful to consumers generating utility classes, so the
/// map preserves the order the scale was authored in.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Palette {
  inner: IndexMap<String, String>,
}

impl Palette {
  pub fn new(inner: IndexMap<String, String>) -> Self {
    Self { inner }
  }

  /// Hex value for a shade key such as "500"
  pub fn shade(&self, key: &str) -> Option<&str> {
    self.inner.get(key).map(|value| value.as_str())
  }

  pub fn shades(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .inner
      .iter()
      .map(|(key, value)| (key.as_str(), value.as_str()))
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }
}

static BUILTIN_PALETTES: LazyLock<IndexMap<String, Palette>> = LazyLock::new(|| {
  serde_json::from_str(include_str!("../data/palettes.json"))
    .unwrap_or_else(|error| panic!("Invalid builtin palette data: {}", error))
});

/// Looks up a builtin color scale by its conventional name, e.g. "teal" or
/// "blueGray".
pub fn get_palette(name: &str) -> Option<&'static Palette> {
  BUILTIN_PALETTES.get(name)
}

pub fn palette_names() -> Vec<&'static str> {
  BUILTIN_PALETTES.keys().map(|name| name.as_str()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolves_palettes_referenced_by_conventional_name() {
    for name in ["teal", "blueGray", "gray"] {
      let palette = get_palette(name).unwrap_or_else(|| panic!("missing builtin palette {name}"));
      assert_eq!(palette.len(), 10, "{name} should carry shades 50-900");
    }
  }

  #[test]
  fn returns_none_for_unknown_palette() {
    assert!(get_palette("chartreuse").is_none());
    assert!(get_palette("").is_none());
  }

  #[test]
  fn shades_preserve_authored_order() {
    let teal = get_palette("teal").unwrap();
    let keys: Vec<&str> = teal.shades().map(|(key, _)| key).collect();

    assert_eq!(
      keys,
      vec!["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"]
    );
  }

  #[test]
  fn shade_lookup_returns_hex_values() {
    let teal = get_palette("teal").unwrap();

    assert_eq!(teal.shade("500"), Some("#14b8a6"));
    assert_eq!(teal.shade("950"), None);
  }

  #[test]
  fn palette_names_include_the_scales_shipped_by_default() {
    let names = palette_names();

    assert!(names.contains(&"teal"));
    assert!(names.contains(&"blueGray"));
    assert!(names.len() >= 2);
  }
}
