use std::{
	collections::HashMap,
	path::{Path, PathBuf},
	sync::atomic::{AtomicU32, Ordering},
};

use parking_lot::RwLock;

/// An interned, cheaply-copyable handle onto a canonical file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u32);

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Interns file paths so that every component can pass `FileId` by value
/// instead of cloning `PathBuf`s through the token stream.
#[derive(Default)]
pub struct FileTable {
	by_path: RwLock<HashMap<PathBuf, FileId>>,
	by_id: RwLock<HashMap<FileId, PathBuf>>,
}

impl FileTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn intern(&self, path: &Path) -> FileId {
		if let Some(id) = self.by_path.read().get(path) {
			return *id;
		}

		let id = FileId(NEXT_ID.fetch_add(1, Ordering::Relaxed));
		self.by_path.write().insert(path.to_path_buf(), id);
		self.by_id.write().insert(id, path.to_path_buf());
		id
	}

	pub fn path(&self, id: FileId) -> Option<PathBuf> {
		self.by_id.read().get(&id).cloned()
	}
}
