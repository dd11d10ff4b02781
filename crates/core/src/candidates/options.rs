use std::collections::HashSet;
use std::ffi::OsString;

/// Configuration options for enumerating the snippet tree.
///
/// The defaults keep the walk total: every regular file below the root is a
/// candidate, hidden files and `.git` included, ignore files disregarded.
#[derive(Debug, Clone)]
pub struct WalkOptions {
	/// Include hidden files and directories.
	pub include_hidden: bool,
	/// Follow symbolic links during traversal.
	pub follow_symlinks: bool,
	/// Respect `.ignore` and `.gitignore` files found in the tree.
	pub respect_ignore_files: bool,
	/// Maximum directory traversal depth.
	pub max_depth: Option<usize>,
	/// File extensions to keep. `None` keeps everything.
	pub allowed_extensions: Option<Vec<String>>,
	/// Directory names that are never descended into.
	pub global_ignores: Vec<String>,
}

impl Default for WalkOptions {
	fn default() -> Self {
		Self {
			include_hidden: true,
			follow_symlinks: false,
			respect_ignore_files: false,
			max_depth: None,
			allowed_extensions: None,
			global_ignores: Vec::new(),
		}
	}
}

impl WalkOptions {
	/// Build a set of allowed extensions if configured.
	pub fn extension_filter(&self) -> Option<HashSet<String>> {
		self.allowed_extensions.as_ref().map(|extensions| {
			extensions
				.iter()
				.map(|ext| normalize_extension(ext))
				.filter(|ext| !ext.is_empty())
				.collect::<HashSet<_>>()
		})
	}

	/// Create a set of directory names to globally ignore.
	pub fn global_ignore_set(&self) -> HashSet<OsString> {
		self.global_ignores
			.iter()
			.map(|entry| OsString::from(entry.as_str()))
			.collect()
	}
}

/// Normalize an extension by trimming and removing leading dots.
pub fn normalize_extension(ext: &str) -> String {
	ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
