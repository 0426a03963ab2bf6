use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// In-memory file-system for testing
pub mod in_memory_file_system;

/// File-system implementation backed by std::fs
pub mod os_file_system;

pub mod search;

/// FileSystem abstraction instance
///
/// This should be `OsFileSystem` for non-testing environments and `InMemoryFileSystem` for testing.
pub type FileSystemRef = Arc<dyn FileSystem + Send + Sync>;

/// Trait abstracting file-system operations
#[mockall::automock]
pub trait FileSystem: std::fmt::Debug {
  fn cwd(&self) -> std::io::Result<PathBuf> {
    Err(std::io::Error::other("Not implemented: FileSystem::cwd"))
  }

  fn canonicalize_base(&self, _path: &Path) -> std::io::Result<PathBuf> {
    Err(std::io::Error::other(
      "Not implemented: FileSystem::canonicalize_base",
    ))
  }

  /// Create a directory at the specified path
  fn create_directory(&self, _path: &Path) -> std::io::Result<()> {
    Err(std::io::Error::other(
      "Not implemented: FileSystem::create_directory",
    ))
  }

  fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
  fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
  fn is_file(&self, path: &Path) -> bool;
  fn is_dir(&self, path: &Path) -> bool;
}
