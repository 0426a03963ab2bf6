use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::de::Error;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::Deserialize;

pub use self::variants_map::VariantsMap;

mod variants_map;

/// Deserializes a string-keyed map, rejecting duplicate keys.
///
/// The host format treats duplicate keys as last-write-wins; here that is a
/// hard error naming the offending key, since silently dropping an entry is
/// almost always an authoring mistake.
pub(crate) fn deserialize_unique_map<'de, D, V>(
  deserializer: D,
  what: &'static str,
) -> Result<IndexMap<String, V>, D::Error>
where
  D: Deserializer<'de>,
  V: Deserialize<'de>,
{
  struct UniqueMapVisitor<V> {
    what: &'static str,
    marker: PhantomData<V>,
  }

  impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueMapVisitor<V> {
    type Value = IndexMap<String, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(formatter, "a {} map with unique keys", self.what)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
      let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));

      while let Some((key, value)) = access.next_entry::<String, V>()? {
        if map.insert(key.clone(), value).is_some() {
          return Err(A::Error::custom(format!(
            "duplicate {} key `{}`",
            self.what, key
          )));
        }
      }

      Ok(map)
    }
  }

  deserializer.deserialize_map(UniqueMapVisitor {
    what,
    marker: PhantomData,
  })
}

/// Merges two unique-key maps: base entries keep their values and order,
/// extension entries that are new are appended in their own order.
pub(crate) fn merge_unique_maps<V>(
  mut base: IndexMap<String, V>,
  extension: IndexMap<String, V>,
) -> IndexMap<String, V> {
  for (key, value) in extension {
    base.entry(key).or_insert(value);
  }
  base
}
