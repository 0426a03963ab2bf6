use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::zephyr_rc::ZephyrRcFile;

const DEFAULT_PRESET: &str = include_str!("../presets/default.json");

static BUILTIN_PRESETS: LazyLock<HashMap<&'static str, &'static str>> =
  LazyLock::new(|| HashMap::from([("@zephyr/preset-default", DEFAULT_PRESET)]));

/// Looks up a preset that ships with the engine itself. The returned file
/// uses the preset name as its path, since it has no on-disk location.
pub fn get_builtin_preset(name: &str) -> Option<ZephyrRcFile> {
  let raw = String::from(*BUILTIN_PRESETS.get(name)?);
  let contents = serde_json5::from_str(&raw)
    .unwrap_or_else(|error| panic!("Builtin preset {} failed to parse: {}", name, error));

  Some(ZephyrRcFile {
    contents,
    path: PathBuf::from(name),
    raw,
  })
}
