use std::collections::HashMap;
use std::io;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use parking_lot::RwLock;

use crate::FileSystem;

#[cfg(not(target_os = "windows"))]
fn root_dir() -> PathBuf {
  PathBuf::from("/")
}

#[cfg(target_os = "windows")]
fn root_dir() -> PathBuf {
  PathBuf::from("C:/")
}

/// In memory implementation of a file-system entry
#[derive(Debug)]
enum InMemoryFileSystemEntry {
  File { contents: Vec<u8> },
  Directory,
}

/// In memory implementation of the `FileSystem` trait, for testing purposes.
#[derive(Debug)]
pub struct InMemoryFileSystem {
  files: RwLock<HashMap<PathBuf, InMemoryFileSystemEntry>>,
  current_working_directory: RwLock<PathBuf>,
}

impl Default for InMemoryFileSystem {
  fn default() -> Self {
    Self {
      files: Default::default(),
      current_working_directory: RwLock::new(root_dir()),
    }
  }
}

impl InMemoryFileSystem {
  /// Change the current working directory. Used for resolving relative paths.
  pub fn set_current_working_directory(&self, cwd: &Path) {
    let cwd = canonicalize_impl(&self.current_working_directory, cwd);
    let mut state = self.current_working_directory.write();
    *state = cwd;
  }

  pub fn write_file(&self, path: &Path, contents: String) {
    let path = canonicalize_impl(&self.current_working_directory, path);
    let mut files = self.files.write();

    files.insert(
      path.clone(),
      InMemoryFileSystemEntry::File {
        contents: contents.into_bytes(),
      },
    );

    let mut dir = path.parent();
    while let Some(path) = dir {
      files.insert(path.to_path_buf(), InMemoryFileSystemEntry::Directory);
      dir = path.parent();
    }
  }
}

impl FileSystem for InMemoryFileSystem {
  fn cwd(&self) -> io::Result<PathBuf> {
    Ok(self.current_working_directory.read().clone())
  }

  fn canonicalize_base(&self, path: &Path) -> io::Result<PathBuf> {
    Ok(canonicalize_impl(&self.current_working_directory, path))
  }

  fn create_directory(&self, path: &Path) -> io::Result<()> {
    let path = canonicalize_impl(&self.current_working_directory, path);
    let mut files = self.files.write();
    files.insert(path, InMemoryFileSystemEntry::Directory);
    Ok(())
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    let path = canonicalize_impl(&self.current_working_directory, path);
    let files = self.files.read();
    match files.get(&path) {
      None => Err(io::Error::new(io::ErrorKind::NotFound, "File not found")),
      Some(InMemoryFileSystemEntry::File { contents }) => Ok(contents.clone()),
      Some(InMemoryFileSystemEntry::Directory) => Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        "Path is a directory",
      )),
    }
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let bytes = self.read(path)?;
    String::from_utf8(bytes).map_err(|_| io::Error::other("Unable to read file as string"))
  }

  fn is_file(&self, path: &Path) -> bool {
    let path = canonicalize_impl(&self.current_working_directory, path);
    let files = self.files.read();
    matches!(files.get(&path), Some(InMemoryFileSystemEntry::File { .. }))
  }

  fn is_dir(&self, path: &Path) -> bool {
    let path = canonicalize_impl(&self.current_working_directory, path);
    let files = self.files.read();
    matches!(files.get(&path), Some(InMemoryFileSystemEntry::Directory))
  }
}

/// Lexical canonicalization; the in-memory file-system has no symlinks.
fn canonicalize_impl(current_working_directory: &RwLock<PathBuf>, path: &Path) -> PathBuf {
  let cwd = current_working_directory.read();
  let mut result = if path.is_absolute() {
    vec![]
  } else {
    cwd.components().collect()
  };

  for component in path.components() {
    match component {
      Component::Prefix(prefix) => {
        result = vec![Component::Prefix(prefix)];
      }
      Component::RootDir => {
        result.push(Component::RootDir);
      }
      Component::CurDir => {}
      Component::ParentDir => {
        result.pop();
      }
      Component::Normal(path) => {
        result.push(Component::Normal(path));
      }
    }
  }

  PathBuf::from_iter(result)
}
