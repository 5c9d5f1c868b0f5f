//! Component H: source and include management — locating files relative
//! to an including source, matching wildcard asset patterns, and copying
//! required assets to their target location.

use std::{
	collections::HashSet,
	path::{Path, PathBuf},
};

use regex::Regex;

use lang_abstractions::host_fs::{HostFs, HostFsError};

const MAX_PARENT_WALK: usize = 32;

/// Tracks which canonical paths have already been included, so repeated
/// `[[source=...]]` directives for the same file are silently deduplicated
/// rather than re-parsed.
#[derive(Default)]
pub struct IncludeSet {
	seen: HashSet<String>,
}

fn dedup_key(path: &Path) -> String {
	let raw = path.to_string_lossy().to_string();
	if cfg!(target_os = "windows") {
		raw.to_lowercase()
	} else {
		raw
	}
}

impl IncludeSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `true` the first time a canonical path is seen, `false` on
	/// every subsequent attempt to include the same file.
	pub fn mark_seen(&mut self, canonical: &Path) -> bool {
		self.seen.insert(dedup_key(canonical))
	}
}

/// Walks upward from `start_dir` looking for `name`, matching the
/// original's "search ancestor directories" include resolution. The walk
/// is bounded (spec.md leaves the bound unspecified; see DESIGN.md).
pub fn locate_file(fs: &dyn HostFs, start_dir: &Path, name: &str) -> Option<PathBuf> {
	let mut dir = Some(start_dir.to_path_buf());
	for _ in 0..MAX_PARENT_WALK {
		let Some(current) = dir else { break };
		let candidate = current.join(name);
		if fs.exists(&candidate) {
			return Some(candidate);
		}
		dir = current.parent().map(Path::to_path_buf);
	}
	None
}

/// Compiles a `*`/`?`-wildcard pattern (with `/`-delimited components) into
/// an anchored regex: `*` matches any run of non-separator characters, `?`
/// matches any single run (including separators) lazily.
fn wildcard_to_regex(pattern: &str) -> Regex {
	let mut out = String::from("^");
	for ch in pattern.chars() {
		match ch {
			'*' => out.push_str("([^/]*)"),
			'?' => out.push_str("(.*?)"),
			c if regex_syntax::is_meta_character(c) => {
				out.push('\\');
				out.push(c);
			}
			c => out.push(c),
		}
	}
	out.push('$');
	Regex::new(&out).expect("wildcard pattern compiles to a valid regex")
}

/// One match of a wildcard pattern: the matched relative path plus the
/// captured `*`/`?` substrings, in left-to-right order.
#[derive(Debug, Clone)]
pub struct WildCardMatch {
	pub path: PathBuf,
	pub captures: Vec<String>,
}

/// Implements `locate-wild-card-files` (spec.md §6): recursively walks
/// `root` and returns every file whose path relative to `root` matches
/// `pattern`.
pub fn locate_wild_card_files(fs: &dyn HostFs, root: &Path, pattern: &str) -> Vec<WildCardMatch> {
	let regex = wildcard_to_regex(pattern);

	fs.walk(root)
		.into_iter()
		.filter_map(|relative| {
			let relative_str = relative.to_string_lossy().replace('\\', "/");
			let caps = regex.captures(&relative_str)?;
			let captures = caps.iter().skip(1).filter_map(|m| m.map(|m| m.as_str().to_string())).collect();
			Some(WildCardMatch { path: relative, captures })
		})
		.collect()
}

/// Copies a required asset from `source` to `destination`, creating parent
/// directories as needed.
pub fn copy_asset(fs: &dyn HostFs, source: &Path, destination: &Path) -> Result<(), HostFsError> {
	let contents = fs.read_to_string(source)?;
	fs.write(destination, contents.as_bytes())
}

mod regex_syntax {
	pub fn is_meta_character(c: char) -> bool {
		matches!(c, '.' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\')
	}
}
