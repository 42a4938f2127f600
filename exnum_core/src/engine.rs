use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use tracing::trace;

use crate::ExnumError;
use crate::ExnumResult;
use crate::lines::Manuscript;
use crate::section::Section;
use crate::section::section_at;

/// Heading text that opens a section whose items are renumbered.
pub const DEFAULT_SECTION_KEYWORD: &str = "Exercises";

/// Heading prefixes renumbered inside an exercises section. Each prefix keeps
/// its own counter.
pub const DEFAULT_ITEM_PREFIXES: [&str; 2] = ["Exercise", "Solution"];

static DEFAULT_RENUMBERER: LazyLock<Renumberer> = LazyLock::new(|| {
	Renumberer::new(RenumberOptions::default()).expect("default renumber options are valid")
});

/// Options controlling which headings are renumbered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenumberOptions {
	/// A heading containing this text opens a section.
	pub section_keyword: String,
	/// Headings starting with one of these prefixes are renumbered.
	pub item_prefixes: Vec<String>,
	/// Treat lines inside fenced code blocks as plain text.
	pub ignore_code_fences: bool,
}

impl Default for RenumberOptions {
	fn default() -> Self {
		Self {
			section_keyword: DEFAULT_SECTION_KEYWORD.to_string(),
			item_prefixes: Vec::from(DEFAULT_ITEM_PREFIXES.map(String::from)),
			ignore_code_fences: false,
		}
	}
}

/// A heading whose ordinal was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdinalChange {
	/// 1-indexed line number of the heading.
	pub line: usize,
	/// The item prefix that matched (e.g. `Exercise`).
	pub prefix: String,
	/// The digit run found in the heading before renumbering.
	pub previous: String,
	/// The ordinal written in its place.
	pub current: usize,
}

/// Result of renumbering a manuscript.
#[derive(Debug, Clone)]
pub struct RenumberOutcome {
	/// The renumbered manuscript text.
	pub content: String,
	/// Every exercises section found, in document order.
	pub sections: Vec<Section>,
	/// Rewritten headings ordered by line.
	pub changes: Vec<OrdinalChange>,
}

impl RenumberOutcome {
	/// Returns true if any heading was rewritten.
	pub fn is_changed(&self) -> bool {
		!self.changes.is_empty()
	}
}

/// Renumber `text` with the default keyword and prefixes.
///
/// ```rust
/// let input = "## Exercises\n### Exercise 5: Foo\n### Exercise 2: Bar";
/// let output = exnum_core::renumber(input);
/// assert_eq!(output, "## Exercises\n### Exercise 1: Foo\n### Exercise 2: Bar");
/// ```
pub fn renumber(text: &str) -> String {
	DEFAULT_RENUMBERER.renumber(text).content
}

/// Renumbers item headings inside exercises sections.
#[derive(Debug, Clone)]
pub struct Renumberer {
	options: RenumberOptions,
	patterns: Vec<ItemPattern>,
}

impl Renumberer {
	pub fn new(options: RenumberOptions) -> ExnumResult<Self> {
		validate_keyword("section keyword", &options.section_keyword)?;

		let mut patterns: Vec<ItemPattern> = Vec::with_capacity(options.item_prefixes.len());
		for prefix in &options.item_prefixes {
			validate_keyword("item prefix", prefix)?;
			if patterns.iter().any(|pattern| pattern.prefix == *prefix) {
				return Err(ExnumError::DuplicatePrefix(prefix.clone()));
			}
			patterns.push(ItemPattern::new(prefix)?);
		}

		Ok(Self { options, patterns })
	}

	pub fn options(&self) -> &RenumberOptions {
		&self.options
	}

	/// Renumber every item heading in every exercises section of `text`.
	///
	/// Sections are visited in document order. Within a section each prefix
	/// is numbered from 1 in order of appearance. Items inside a nested
	/// exercises section belong to that nested section only.
	pub fn renumber(&self, text: &str) -> RenumberOutcome {
		let keyword = self.options.section_keyword.as_str();
		let mut manuscript = Manuscript::new(text, self.options.ignore_code_fences);
		let mut sections = Vec::new();
		let mut changes = Vec::new();

		for index in 0..manuscript.len() {
			let Some(section) = section_at(&manuscript, index, keyword) else {
				continue;
			};

			debug!(
				line = section.line(),
				level = section.level,
				content_end = section.content_end + 1,
				"renumbering section"
			);

			for pattern in &self.patterns {
				let items = collect_items(&manuscript, &section, keyword, &pattern.prefix);
				for (position, item) in items.into_iter().enumerate() {
					if let Some(change) = pattern.apply(&mut manuscript, item, position + 1) {
						changes.push(change);
					}
				}
			}

			sections.push(section);
		}

		changes.sort_by_key(|change| change.line);

		RenumberOutcome {
			content: manuscript.to_text(),
			sections,
			changes,
		}
	}
}

fn validate_keyword(kind: &str, value: &str) -> ExnumResult<()> {
	if value.trim().is_empty() || value.contains(['\n', '\r']) {
		return Err(ExnumError::InvalidKeyword {
			kind: kind.to_string(),
			value: value.to_string(),
		});
	}

	Ok(())
}

/// Indices of headings in `section` whose content starts with `prefix`.
///
/// The content of a nested section is skipped. Its opening heading is still
/// an item of `section` whenever it starts with `prefix`, as in
/// `### Exercises recap` or `### Exercise 3: Exercises on generics`.
fn collect_items(
	manuscript: &Manuscript,
	section: &Section,
	keyword: &str,
	prefix: &str,
) -> Vec<usize> {
	let mut items = Vec::new();
	let mut index = section.content_start;

	while index <= section.content_end {
		let Some(content) = manuscript.heading_content(index) else {
			index += 1;
			continue;
		};

		if let Some(nested) = section_at(manuscript, index, keyword) {
			if content.starts_with(prefix) {
				items.push(index);
			}
			index = nested.content_end + 1;
			continue;
		}

		if content.starts_with(prefix) {
			items.push(index);
		}
		index += 1;
	}

	items
}

/// Matches the heading markers, the prefix and the digit run that follows it.
#[derive(Debug, Clone)]
struct ItemPattern {
	prefix: String,
	regex: Regex,
}

impl ItemPattern {
	fn new(prefix: &str) -> ExnumResult<Self> {
		let pattern = format!(r"^(#+\s*{}[ \t]*)([0-9]+)", regex::escape(prefix));
		let regex = Regex::new(&pattern).map_err(|_| ExnumError::InvalidKeyword {
			kind: "item prefix".to_string(),
			value: prefix.to_string(),
		})?;

		Ok(Self {
			prefix: prefix.to_string(),
			regex,
		})
	}

	/// Rewrite the ordinal of the heading at `index`. Returns `None` when the
	/// heading has no digit run after the prefix or already carries `ordinal`.
	fn apply(
		&self,
		manuscript: &mut Manuscript,
		index: usize,
		ordinal: usize,
	) -> Option<OrdinalChange> {
		let current = ordinal.to_string();
		let (previous, updated) = {
			let text = manuscript.line(index)?.text();
			let captures = self.regex.captures(text)?;
			let lead = captures.get(1)?;
			let digits = captures.get(2)?;
			if digits.as_str() == current {
				return None;
			}

			let updated = format!("{}{current}{}", lead.as_str(), &text[digits.end()..]);
			(digits.as_str().to_string(), updated)
		};
		manuscript.set_text(index, updated);

		let change = OrdinalChange {
			line: index + 1,
			prefix: self.prefix.clone(),
			previous,
			current: ordinal,
		};
		trace!(
			line = change.line,
			prefix = %change.prefix,
			previous = %change.previous,
			current = change.current,
			"renumbered heading"
		);

		Some(change)
	}
}
