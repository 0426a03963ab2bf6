use std::path::Path;

use glob_match::glob_match;
use serde::Deserialize;
use serde::Serialize;

/// The ordered list of file-path globs scanned for utility-class usage.
///
/// An empty list is a valid, degenerate configuration: the build succeeds
/// and generates no classes. Order is preserved as authored even though it
/// carries no matching semantics.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContentGlobs {
  inner: Vec<String>,
}

impl ContentGlobs {
  pub fn new(inner: Vec<String>) -> Self {
    Self { inner }
  }

  /// Whether a path, relative to the project root, is covered by any glob
  pub fn matches(&self, path: &Path) -> bool {
    let path = path.to_string_lossy();
    let path = normalize(&path);

    self
      .inner
      .iter()
      .any(|pattern| glob_match(normalize(pattern), path))
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.inner.iter().map(|pattern| pattern.as_str())
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }
}

impl From<Vec<&str>> for ContentGlobs {
  fn from(globs: Vec<&str>) -> Self {
    ContentGlobs::new(globs.into_iter().map(String::from).collect())
  }
}

fn normalize(path: &str) -> &str {
  path.strip_prefix("./").unwrap_or(path)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn globs() -> ContentGlobs {
    ContentGlobs::from(vec!["./js/**/*.js", "../lib/*_web/**/*.*ex"])
  }

  #[test]
  fn matches_paths_covered_by_a_glob() {
    assert!(globs().matches(Path::new("js/app.js")));
    assert!(globs().matches(Path::new("./js/hooks/chart.js")));
    assert!(globs().matches(Path::new("../lib/app_web/live/page.html.heex")));
    assert!(globs().matches(Path::new("../lib/app_web/views/layout_view.ex")));
  }

  #[test]
  fn rejects_paths_outside_every_glob() {
    assert!(!globs().matches(Path::new("css/app.css")));
    assert!(!globs().matches(Path::new("js/app.ts")));
    assert!(!globs().matches(Path::new("lib/app_web/live/page.html.heex")));
  }

  #[test]
  fn empty_globs_match_nothing() {
    assert!(!ContentGlobs::default().matches(Path::new("js/app.js")));
  }

  #[test]
  fn preserves_authored_order() {
    let globs = globs();
    let patterns: Vec<&str> = globs.iter().collect();
    assert_eq!(patterns, vec!["./js/**/*.js", "../lib/*_web/**/*.*ex"]);
  }
}
