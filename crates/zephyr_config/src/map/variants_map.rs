use indexmap::IndexMap;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Maps a utility category (e.g. "backgroundColor") to the ordered list of
/// activation states (e.g. "active") that category should generate variant
/// classes for.
///
/// # Examples
///
/// ```
/// use indexmap::indexmap;
/// use zephyr_config::map::VariantsMap;
///
/// let variants = VariantsMap::new(indexmap! {
///   String::from("backgroundColor") => vec![String::from("active")],
/// });
///
/// assert_eq!(variants.get("backgroundColor"), &["active".to_string()]);
/// assert!(variants.get("textColor").is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VariantsMap {
  inner: IndexMap<String, Vec<String>>,
}

impl VariantsMap {
  pub fn new(inner: IndexMap<String, Vec<String>>) -> Self {
    Self { inner }
  }

  /// Activation states for a utility category, empty when none are declared
  pub fn get(&self, utility: &str) -> &[String] {
    self
      .inner
      .get(utility)
      .map(|states| states.as_slice())
      .unwrap_or_default()
  }

  pub fn contains_utility(&self, utility: impl AsRef<str>) -> bool {
    self.inner.contains_key(utility.as_ref())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
    self
      .inner
      .iter()
      .map(|(utility, states)| (utility.as_str(), states.as_slice()))
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  pub(crate) fn merge(self, extension: VariantsMap) -> VariantsMap {
    VariantsMap {
      inner: crate::map::merge_unique_maps(self.inner, extension.inner),
    }
  }
}

impl<'de> Deserialize<'de> for VariantsMap {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(VariantsMap {
      inner: crate::map::deserialize_unique_map(deserializer, "variants")?,
    })
  }
}
