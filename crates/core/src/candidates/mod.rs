//! Enumeration of the snippet tree into an immutable candidate set.
//!
//! A [`CandidateSet`] is built once per session by [`load`] and shared
//! read-only afterwards. Its order is the traversal order of the walk and is
//! what the filter preserves when narrowing.

mod options;
mod walk;

use std::fs;
use std::io;
use std::ops::Index;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

pub use options::{WalkOptions, normalize_extension};

/// One snippet file: where it lives and how it is shown and matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
	full_path: PathBuf,
	display_name: String,
}

impl Candidate {
	/// Create a candidate from its absolute path and root-relative name.
	pub fn new(full_path: impl Into<PathBuf>, display_name: impl Into<String>) -> Self {
		Self {
			full_path: full_path.into(),
			display_name: display_name.into(),
		}
	}

	/// Location of the snippet on disk.
	pub fn full_path(&self) -> &Path {
		&self.full_path
	}

	/// Path relative to the snippet root, always `/` separated.
	pub fn display_name(&self) -> &str {
		&self.display_name
	}
}

/// Ordered, read-only sequence of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
	entries: Vec<Candidate>,
}

impl CandidateSet {
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Candidate> {
		self.entries.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
		self.entries.iter()
	}
}

impl From<Vec<Candidate>> for CandidateSet {
	fn from(entries: Vec<Candidate>) -> Self {
		Self { entries }
	}
}

impl FromIterator<Candidate> for CandidateSet {
	fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl Index<usize> for CandidateSet {
	type Output = Candidate;

	fn index(&self, index: usize) -> &Self::Output {
		&self.entries[index]
	}
}

impl<'a> IntoIterator for &'a CandidateSet {
	type Item = &'a Candidate;
	type IntoIter = std::slice::Iter<'a, Candidate>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

/// Errors raised while loading the candidate set.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The snippet root does not exist.
	#[error("snippet directory not found: {}", .path.display())]
	NotFound { path: PathBuf },

	/// The snippet root exists but is not a directory.
	#[error("snippet root is not a directory: {}", .path.display())]
	NotADirectory { path: PathBuf },

	/// The snippet root could not be inspected.
	#[error("failed to inspect snippet root {}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Enumerate every regular file below `root` into a [`CandidateSet`].
///
/// Entries that cannot be read during the walk are logged and skipped; only a
/// missing or non-directory root is an error. An empty tree is a valid,
/// empty set.
pub fn load(root: &Path, options: &WalkOptions) -> Result<CandidateSet, StoreError> {
	let metadata = match fs::metadata(root) {
		Ok(metadata) => metadata,
		Err(err) if err.kind() == io::ErrorKind::NotFound => {
			return Err(StoreError::NotFound {
				path: root.to_path_buf(),
			});
		}
		Err(source) => {
			return Err(StoreError::Io {
				path: root.to_path_buf(),
				source,
			});
		}
	};
	if !metadata.is_dir() {
		return Err(StoreError::NotADirectory {
			path: root.to_path_buf(),
		});
	}

	let extension_filter = options.extension_filter();
	let mut entries = Vec::new();

	for result in walk::build_walk(root, options).build() {
		let entry = match result {
			Ok(entry) => entry,
			Err(err) => {
				warn!(error = %err, "skipping unreadable entry in snippet tree");
				continue;
			}
		};
		if !is_regular_file(&entry) {
			continue;
		}

		let path = entry.path();
		let relative = path.strip_prefix(root).unwrap_or(path);
		if let Some(filter) = extension_filter.as_ref() {
			let extension = relative
				.extension()
				.and_then(|ext| ext.to_str())
				.map(|ext| ext.to_ascii_lowercase());
			if extension.as_ref().is_none_or(|ext| !filter.contains(ext)) {
				continue;
			}
		}

		let display_name = relative.to_string_lossy().replace('\\', "/");
		entries.push(Candidate::new(path, display_name));
	}

	debug!(root = %root.display(), count = entries.len(), "loaded snippet candidates");
	Ok(CandidateSet::from(entries))
}

/// Regular files, and symlinks that resolve to one. Symlinked directories are
/// only descended when the walk follows links.
fn is_regular_file(entry: &ignore::DirEntry) -> bool {
	match entry.file_type() {
		Some(file_type) if file_type.is_file() => true,
		Some(file_type) if file_type.is_symlink() => {
			fs::metadata(entry.path()).is_ok_and(|metadata| metadata.is_file())
		}
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	fn write(root: &Path, relative: &str) {
		let path = root.join(relative);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).expect("create parent");
		}
		fs::write(path, relative).expect("write snippet");
	}

	fn names(set: &CandidateSet) -> Vec<&str> {
		set.iter().map(Candidate::display_name).collect()
	}

	#[test]
	fn loads_nested_files_in_traversal_order() {
		let dir = tempdir().expect("tempdir");
		write(dir.path(), "b/z.txt");
		write(dir.path(), "a/x.txt");
		write(dir.path(), "b/y.txt");

		let set = load(dir.path(), &WalkOptions::default()).expect("load");
		assert_eq!(names(&set), vec!["a/x.txt", "b/y.txt", "b/z.txt"]);
		assert_eq!(set[0].full_path(), dir.path().join("a/x.txt"));
	}

	#[test]
	fn files_come_before_subdirectories() {
		let dir = tempdir().expect("tempdir");
		write(dir.path(), "zeta.txt");
		write(dir.path(), "alpha/inner.txt");
		write(dir.path(), "alpha/deeper/leaf.txt");
		write(dir.path(), "alpha/beta.txt");

		let set = load(dir.path(), &WalkOptions::default()).expect("load");
		assert_eq!(
			names(&set),
			vec![
				"zeta.txt",
				"alpha/beta.txt",
				"alpha/inner.txt",
				"alpha/deeper/leaf.txt",
			]
		);
	}

	#[test]
	fn load_is_stable_across_runs() {
		let dir = tempdir().expect("tempdir");
		for name in ["c.txt", "a.txt", "sub/b.txt", ".hidden"] {
			write(dir.path(), name);
		}

		let first = load(dir.path(), &WalkOptions::default()).expect("first");
		let second = load(dir.path(), &WalkOptions::default()).expect("second");
		assert_eq!(first, second);
		assert_eq!(first.len(), 4, "hidden files are candidates by default");
	}

	#[test]
	fn empty_directory_yields_empty_set() {
		let dir = tempdir().expect("tempdir");
		fs::create_dir(dir.path().join("only-dirs")).expect("dir");

		let set = load(dir.path(), &WalkOptions::default()).expect("load");
		assert!(set.is_empty());
	}

	#[test]
	fn missing_root_is_not_found() {
		let dir = tempdir().expect("tempdir");
		let missing = dir.path().join("nope");

		let err = load(&missing, &WalkOptions::default()).expect_err("missing root");
		assert!(matches!(err, StoreError::NotFound { path } if path == missing));
	}

	#[test]
	fn file_root_is_rejected() {
		let dir = tempdir().expect("tempdir");
		write(dir.path(), "file.txt");

		let err = load(&dir.path().join("file.txt"), &WalkOptions::default())
			.expect_err("file root");
		assert!(matches!(err, StoreError::NotADirectory { .. }));
	}

	#[test]
	fn extension_filter_and_depth_limit_narrow_the_walk() {
		let dir = tempdir().expect("tempdir");
		write(dir.path(), "keep.md");
		write(dir.path(), "drop.txt");
		write(dir.path(), "nested/deep.md");

		let options = WalkOptions {
			allowed_extensions: Some(vec!["md".into()]),
			max_depth: Some(1),
			..WalkOptions::default()
		};
		let set = load(dir.path(), &options).expect("load");
		assert_eq!(names(&set), vec!["keep.md"]);
	}

	#[test]
	fn hidden_files_can_be_excluded() {
		let dir = tempdir().expect("tempdir");
		write(dir.path(), ".secret");
		write(dir.path(), "visible.txt");

		let options = WalkOptions {
			include_hidden: false,
			..WalkOptions::default()
		};
		let set = load(dir.path(), &options).expect("load");
		assert_eq!(names(&set), vec!["visible.txt"]);
	}

	#[cfg(unix)]
	#[test]
	fn symlinked_files_are_candidates() {
		use std::os::unix::fs::symlink;

		let dir = tempdir().expect("tempdir");
		let outside = tempdir().expect("outside");
		write(dir.path(), "plain.txt");
		write(outside.path(), "target.txt");
		write(outside.path(), "nested/deep.txt");
		symlink(outside.path().join("target.txt"), dir.path().join("linked.txt"))
			.expect("file symlink");
		symlink(outside.path().join("nested"), dir.path().join("linked-dir"))
			.expect("dir symlink");

		let set = load(dir.path(), &WalkOptions::default()).expect("load");
		assert_eq!(names(&set), vec!["linked.txt", "plain.txt"]);
		assert_eq!(
			fs::read_to_string(set[0].full_path()).expect("read through link"),
			"target.txt"
		);
	}

	#[test]
	fn git_directories_are_walked_by_default() {
		let dir = tempdir().expect("tempdir");
		write(dir.path(), "a.txt");
		write(dir.path(), ".git/notes.txt");

		let set = load(dir.path(), &WalkOptions::default()).expect("load");
		assert_eq!(names(&set), vec!["a.txt", ".git/notes.txt"]);
	}
}
