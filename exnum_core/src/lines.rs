/// A single line of a manuscript.
///
/// The `index` is assigned once when the manuscript is split and never
/// changes. The `text` may be rewritten while renumbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
	index: usize,
	text: String,
}

impl Line {
	pub fn new(index: usize, text: impl Into<String>) -> Self {
		Self {
			index,
			text: text.into(),
		}
	}

	/// Zero-based position of the line in the original manuscript.
	pub fn index(&self) -> usize {
		self.index
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// The ATX heading level computed from the current text. `None` means
	/// the line is not a heading.
	pub fn heading_level(&self) -> Option<usize> {
		heading_level(&self.text)
	}
}

/// Count the leading `#` characters of `text`. Returns `None` when there are
/// none, which callers treat as an infinitely deep level.
pub fn heading_level(text: &str) -> Option<usize> {
	let level = text.bytes().take_while(|byte| *byte == b'#').count();
	(level > 0).then_some(level)
}

/// Strip the heading markers and surrounding whitespace from a line.
pub fn heading_content(text: &str) -> &str {
	text.trim_start_matches('#').trim()
}

/// An ordered, index-addressable view over the lines of a manuscript.
///
/// Splitting and joining is lossless: `Manuscript::new(text).to_text()`
/// always returns `text` unchanged.
#[derive(Debug, Clone)]
pub struct Manuscript {
	lines: Vec<Line>,
	/// Lines that sit inside a fenced code block and therefore never count
	/// as headings. All `false` unless code fences are respected.
	fenced: Vec<bool>,
}

impl Manuscript {
	/// Split `text` on `\n`. When `ignore_code_fences` is set, lines inside
	/// ```` ``` ```` or `~~~` fences are never treated as headings.
	pub fn new(text: &str, ignore_code_fences: bool) -> Self {
		let lines: Vec<Line> = text
			.split('\n')
			.enumerate()
			.map(|(index, text)| Line::new(index, text))
			.collect();

		let fenced = if ignore_code_fences {
			code_fence_mask(&lines)
		} else {
			vec![false; lines.len()]
		};

		Self { lines, fenced }
	}

	pub fn len(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	pub fn lines(&self) -> &[Line] {
		&self.lines
	}

	pub fn line(&self, index: usize) -> Option<&Line> {
		self.lines.get(index)
	}

	/// Heading level of the line at `index`, taking code fences into
	/// account. `None` for non-headings and out of range indices.
	pub fn heading_level(&self, index: usize) -> Option<usize> {
		if self.fenced.get(index).copied().unwrap_or(true) {
			return None;
		}

		self.lines.get(index).and_then(Line::heading_level)
	}

	/// Stripped heading text of the line at `index`, or `None` when the
	/// line is not a heading.
	pub fn heading_content(&self, index: usize) -> Option<&str> {
		self.heading_level(index)?;
		self.lines.get(index).map(|line| heading_content(&line.text))
	}

	/// Replace the text of the line at `index`. Out of range indices are
	/// ignored.
	pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
		if let Some(line) = self.lines.get_mut(index) {
			line.text = text.into();
		}
	}

	/// Join all lines back together with `\n`.
	pub fn to_text(&self) -> String {
		let mut output = String::new();

		for (position, line) in self.lines.iter().enumerate() {
			if position > 0 {
				output.push('\n');
			}
			output.push_str(&line.text);
		}

		output
	}
}

fn code_fence_mask(lines: &[Line]) -> Vec<bool> {
	let mut mask = Vec::with_capacity(lines.len());
	let mut open: Option<(u8, usize)> = None;

	for line in lines {
		let trimmed = line.text.trim_start();
		let marker = fence_marker(trimmed);

		match (open, marker) {
			(None, Some(marker)) => {
				open = Some(marker);
				mask.push(true);
			}
			(Some((fence, length)), Some((candidate, candidate_length)))
				if fence == candidate
					&& candidate_length >= length
					&& trimmed[candidate_length..].trim().is_empty() =>
			{
				open = None;
				mask.push(true);
			}
			(Some(_), _) => mask.push(true),
			(None, None) => mask.push(false),
		}
	}

	mask
}

/// The fence character and run length if `text` opens or closes a fence.
fn fence_marker(text: &str) -> Option<(u8, usize)> {
	let first = *text.as_bytes().first()?;
	if first != b'`' && first != b'~' {
		return None;
	}

	let length = text.bytes().take_while(|byte| *byte == first).count();
	(length >= 3).then_some((first, length))
}
