use std::ops::RangeInclusive;

use crate::lines::Manuscript;

/// A heading-delimited region of a manuscript.
///
/// The content runs from the line after the heading up to, but not
/// including, the next heading of equal or lesser level. When no such
/// heading exists the content runs to the last line of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
	/// Zero-based index of the opening heading.
	pub heading_index: usize,
	/// Heading level of the opening heading.
	pub level: usize,
	/// First line of content, always `heading_index + 1`.
	pub content_start: usize,
	/// Last line of content (inclusive). Smaller than `content_start` when
	/// the section is empty.
	pub content_end: usize,
}

impl Section {
	pub fn content_range(&self) -> RangeInclusive<usize> {
		self.content_start..=self.content_end
	}

	pub fn contains(&self, index: usize) -> bool {
		self.content_range().contains(&index)
	}

	pub fn is_empty(&self) -> bool {
		self.content_start > self.content_end
	}

	/// 1-indexed line number of the opening heading.
	pub fn line(&self) -> usize {
		self.heading_index + 1
	}
}

/// Build the section opened by the line at `index` if that line is a heading
/// whose text contains `keyword`.
pub fn section_at(manuscript: &Manuscript, index: usize, keyword: &str) -> Option<Section> {
	let level = manuscript.heading_level(index)?;
	let content = manuscript.heading_content(index)?;
	if !content.contains(keyword) {
		return None;
	}

	let bound = (index + 1..manuscript.len())
		.find(|next| {
			manuscript
				.heading_level(*next)
				.is_some_and(|next_level| next_level <= level)
		})
		.unwrap_or(manuscript.len());

	Some(Section {
		heading_index: index,
		level,
		content_start: index + 1,
		content_end: bound - 1,
	})
}

/// Every section in document order whose heading contains `keyword`.
pub fn find_sections(manuscript: &Manuscript, keyword: &str) -> Vec<Section> {
	(0..manuscript.len())
		.filter_map(|index| section_at(manuscript, index, keyword))
		.collect()
}
