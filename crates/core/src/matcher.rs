//! Case-insensitive substring-or-subsequence matching.
//!
//! [`matches`] is the visibility predicate used by the filter. It never
//! scores: a candidate either survives a query or it does not, and survivors
//! keep their load order. [`match_positions`] reports which characters
//! produced a match so front-ends can highlight them.

/// Lower-case `text` one character at a time.
///
/// Both operands go through the same folding so that positions computed on
/// the folded name can be mapped back onto the original characters.
fn fold(text: &str) -> Vec<char> {
	text.chars().flat_map(char::to_lowercase).collect()
}

/// Fold `name`, remembering the original character index of every folded char.
fn fold_with_origin(name: &str) -> (Vec<char>, Vec<usize>) {
	let mut folded = Vec::with_capacity(name.len());
	let mut origin = Vec::with_capacity(name.len());
	for (index, ch) in name.chars().enumerate() {
		for lower in ch.to_lowercase() {
			folded.push(lower);
			origin.push(index);
		}
	}
	(folded, origin)
}

fn find_substring(needle: &[char], haystack: &[char]) -> Option<usize> {
	if needle.len() > haystack.len() {
		return None;
	}
	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}

/// Greedy left-to-right scan consuming one needle char at a time.
fn scan_subsequence(needle: &[char], haystack: &[char], mut hit: impl FnMut(usize)) -> bool {
	let mut pending = needle.iter().peekable();
	for (offset, ch) in haystack.iter().enumerate() {
		let Some(&&wanted) = pending.peek() else {
			break;
		};
		if wanted == *ch {
			hit(offset);
			pending.next();
		}
	}
	pending.peek().is_none()
}

/// Decide whether `query` selects `name`.
///
/// Matching is case-insensitive. A contiguous substring matches first; failing
/// that, the query matches if its characters appear in `name` in order, not
/// necessarily adjacent. The empty query matches everything.
pub fn matches(query: &str, name: &str) -> bool {
	if query.is_empty() {
		return true;
	}

	let needle = fold(query);
	let haystack = fold(name);
	find_substring(&needle, &haystack).is_some() || scan_subsequence(&needle, &haystack, |_| {})
}

/// Character positions in `name` that satisfied `query`.
///
/// Returns the substring's range when the contiguous tier hits, otherwise the
/// positions picked by the subsequence scan. `None` for an empty query or a
/// name that does not match.
pub fn match_positions(query: &str, name: &str) -> Option<Vec<usize>> {
	if query.is_empty() {
		return None;
	}

	let needle = fold(query);
	let (haystack, origin) = fold_with_origin(name);

	let mut folded_hits = Vec::with_capacity(needle.len());
	if let Some(start) = find_substring(&needle, &haystack) {
		folded_hits.extend(start..start + needle.len());
	} else if !scan_subsequence(&needle, &haystack, |offset| folded_hits.push(offset)) {
		return None;
	}

	let mut positions: Vec<usize> = folded_hits.into_iter().map(|offset| origin[offset]).collect();
	positions.dedup();
	Some(positions)
}
