use std::path::Path;
use std::path::PathBuf;

use crate::FileSystem;

/// Walks up from `from` towards `root` (inclusive), returning the first path
/// at which one of `filenames` exists as a file.
///
/// Returns None when `from` is not contained by `root`, or when no ancestor
/// directory holds any of the filenames.
pub fn find_ancestor_file(
  fs: &dyn FileSystem,
  filenames: &[&str],
  from: &Path,
  root: &Path,
) -> Option<PathBuf> {
  for dir in from.ancestors() {
    // Break if we moved past the root
    if !dir.starts_with(root) {
      break;
    }

    for filename in filenames {
      let candidate = dir.join(filename);
      if fs.is_file(&candidate) {
        return Some(candidate);
      }
    }
  }

  None
}
