/// Human-readable labels rendered around the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Label shown in front of the query input. Empty hides it.
	pub prompt: String,
	/// Placeholder displayed while the query is empty.
	pub placeholder: String,
	/// Title rendered on the list border.
	pub list_title: String,
	/// Message shown inside the list when nothing matches.
	pub empty_message: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			prompt: "snipt".to_string(),
			placeholder: "Type to search snippets...".to_string(),
			list_title: "Snippets".to_string(),
			empty_message: "No matching snippets".to_string(),
		}
	}
}

impl UiLabels {
	/// Title for the list border, including the visible and total counts.
	#[must_use]
	pub fn list_title_with_counts(&self, visible: usize, total: usize) -> String {
		format!(" {} ({visible}/{total}) ", self.list_title)
	}
}
