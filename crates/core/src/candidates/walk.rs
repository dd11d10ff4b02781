use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;

use ignore::WalkBuilder;

use super::WalkOptions;

/// Build a sequential, deterministically ordered walker for the snippet root.
///
/// Within each directory files are yielded before subdirectories, both sorted
/// by name, and subdirectories are descended depth-first.
pub(crate) fn build_walk(root: &Path, options: &WalkOptions) -> WalkBuilder {
	let ignores = options.global_ignore_set();
	let respect = options.respect_ignore_files;
	let mut walker = WalkBuilder::new(root);

	walker
		.standard_filters(false)
		.hidden(!options.include_hidden)
		.follow_links(options.follow_symlinks)
		.ignore(respect)
		.git_ignore(respect)
		.git_global(respect)
		.git_exclude(respect)
		.parents(respect)
		.require_git(false)
		.max_depth(options.max_depth)
		.sort_by_file_path(files_before_directories);

	if !ignores.is_empty() {
		let ignores = Arc::new(ignores);
		walker.filter_entry(move |entry| {
			let is_dir = entry.file_type().is_some_and(|file_type| file_type.is_dir());
			!(is_dir && ignores.contains(entry.file_name()))
		});
	}

	walker
}

fn files_before_directories(a: &Path, b: &Path) -> Ordering {
	a.is_dir()
		.cmp(&b.is_dir())
		.then_with(|| a.file_name().cmp(&b.file_name()))
}
