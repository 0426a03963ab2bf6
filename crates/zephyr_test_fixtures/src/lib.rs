use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use zephyr_filesystem::in_memory_file_system::InMemoryFileSystem;
use zephyr_filesystem::FileSystemRef;

// Re-export indoc for convenience in tests
pub use indoc::indoc;

/// An in-memory file tree rooted at a directory, for building loader tests
#[derive(Clone)]
pub struct TestFixture {
  pub fs: FileSystemRef,
  pub in_memory_fs: Arc<InMemoryFileSystem>,
  pub dirname: PathBuf,
}

impl TestFixture {
  pub fn with_dirname(dirname: PathBuf) -> Self {
    let in_memory_fs = Arc::new(InMemoryFileSystem::default());

    Self {
      fs: in_memory_fs.clone() as FileSystemRef,
      in_memory_fs,
      dirname,
    }
  }

  /// Write a single file, resolving relative paths against the fixture root
  pub fn write_file(&self, path: &str, content: &str) -> &Self {
    let full_path = if Path::new(path).is_absolute() {
      PathBuf::from(path)
    } else {
      self.dirname.join(path)
    };
    self.in_memory_fs.write_file(&full_path, content.to_string());
    self
  }

  pub fn file_exists(&self, path: &Path) -> bool {
    self.fs.is_file(path)
  }
}

/// Creates an in-memory file tree and returns its FileSystemRef.
///
/// Contents wrapped in braces are run through indoc so that multi-line JSON
/// literals can be indented naturally at the call site.
#[macro_export]
macro_rules! test_fixture {
    ($dirname:expr, $($path:literal => {$content:literal}),* $(,)?) => {{
        let fixture = $crate::TestFixture::with_dirname($dirname);
        $(
            fixture.write_file($path, $crate::indoc!($content));
        )*
        fixture.fs
    }};

    ($dirname:expr, $($path:literal => $content:expr),* $(,)?) => {{
        let fixture = $crate::TestFixture::with_dirname($dirname);
        $(
            fixture.write_file($path, &$content);
        )*
        fixture.fs
    }};
}
