use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::ExnumError;
use crate::ExnumResult;
use crate::RenumberOutcome;
use crate::Renumberer;

/// A manuscript read from disk together with its renumbered content.
#[derive(Debug)]
pub struct ManuscriptUpdate {
	/// Path of the manuscript.
	pub path: PathBuf,
	/// Content as read from disk.
	pub original: String,
	/// Result of renumbering `original`.
	pub outcome: RenumberOutcome,
}

impl ManuscriptUpdate {
	/// Returns true if writing the update would change the file.
	pub fn is_changed(&self) -> bool {
		self.outcome.content != self.original
	}

	/// Number of headings whose ordinal changed.
	pub fn changed_count(&self) -> usize {
		self.outcome.changes.len()
	}
}

/// Read a manuscript, refusing files larger than `max_file_size` bytes.
pub fn read_manuscript(path: &Path, max_file_size: u64) -> ExnumResult<String> {
	let size = std::fs::metadata(path)?.len();
	if size > max_file_size {
		return Err(ExnumError::FileTooLarge {
			path: path.display().to_string(),
			size,
			limit: max_file_size,
		});
	}

	debug!(path = %path.display(), size, "reading manuscript");
	Ok(std::fs::read_to_string(path)?)
}

/// Read and renumber the manuscript at `path` without writing it back.
pub fn compute_update(
	path: &Path,
	renumberer: &Renumberer,
	max_file_size: u64,
) -> ExnumResult<ManuscriptUpdate> {
	let original = read_manuscript(path, max_file_size)?;
	let outcome = renumberer.renumber(&original);

	Ok(ManuscriptUpdate {
		path: path.to_path_buf(),
		original,
		outcome,
	})
}

/// Write the renumbered content back to disk. Unchanged manuscripts are not
/// touched. Returns whether the file was written.
pub fn write_update(update: &ManuscriptUpdate) -> ExnumResult<bool> {
	if !update.is_changed() {
		return Ok(false);
	}

	std::fs::write(&update.path, &update.outcome.content)?;
	debug!(
		path = %update.path.display(),
		changes = update.changed_count(),
		"wrote manuscript"
	);

	Ok(true)
}

/// Read, renumber and write back the manuscript at `path`.
pub fn renumber_file(
	path: &Path,
	renumberer: &Renumberer,
	max_file_size: u64,
) -> ExnumResult<ManuscriptUpdate> {
	let update = compute_update(path, renumberer, max_file_size)?;
	write_update(&update)?;

	Ok(update)
}
