use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostFsError {
	#[error("failed to read '{path}': {source}")]
	Read { path: PathBuf, #[source] source: std::io::Error },
	#[error("failed to write '{path}': {source}")]
	Write { path: PathBuf, #[source] source: std::io::Error },
	#[error("failed to canonicalize '{path}': {source}")]
	Canonicalize { path: PathBuf, #[source] source: std::io::Error },
}

/// The one host-I/O surface the compile-state driver depends on. Every
/// method is synchronous: spec.md §5 allows exactly one blocking host call
/// per source file read, with no suspension points otherwise.
pub trait HostFs {
	fn read_to_string(&self, path: &Path) -> Result<String, HostFsError>;

	fn write(&self, path: &Path, contents: &[u8]) -> Result<(), HostFsError>;

	fn exists(&self, path: &Path) -> bool;

	fn canonicalize(&self, path: &Path) -> Result<PathBuf, HostFsError>;

	/// Recursively lists every regular file under `root`, relative to `root`.
	fn walk(&self, root: &Path) -> Vec<PathBuf>;
}

/// The production `HostFs`, backed directly by `std::fs` and `walkdir` for
/// recursive traversal during wildcard source/asset resolution.
#[derive(Default, Clone, Copy)]
pub struct NativeFs;

impl HostFs for NativeFs {
	fn read_to_string(&self, path: &Path) -> Result<String, HostFsError> {
		std::fs::read_to_string(path).map_err(|source| HostFsError::Read { path: path.to_path_buf(), source })
	}

	fn write(&self, path: &Path, contents: &[u8]) -> Result<(), HostFsError> {
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent).map_err(|source| HostFsError::Write { path: path.to_path_buf(), source })?;
		}
		std::fs::write(path, contents).map_err(|source| HostFsError::Write { path: path.to_path_buf(), source })
	}

	fn exists(&self, path: &Path) -> bool {
		path.exists()
	}

	fn canonicalize(&self, path: &Path) -> Result<PathBuf, HostFsError> {
		std::fs::canonicalize(path).map_err(|source| HostFsError::Canonicalize { path: path.to_path_buf(), source })
	}

	fn walk(&self, root: &Path) -> Vec<PathBuf> {
		walkdir::WalkDir::new(root)
			.into_iter()
			.filter_map(Result::ok)
			.filter(|entry| entry.file_type().is_file())
			.filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
			.collect()
	}
}
