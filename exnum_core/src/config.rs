use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DEFAULT_ITEM_PREFIXES;
use crate::DEFAULT_SECTION_KEYWORD;
use crate::ExnumError;
use crate::ExnumResult;
use crate::RenumberOptions;
use crate::Renumberer;

/// Default maximum manuscript size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["exnum.toml", ".exnum.toml", ".config/exnum.toml"];

/// Configuration loaded from an `exnum.toml` file.
///
/// ```toml
/// files = ["book.md"]
/// section_keyword = "Exercises"
/// item_prefixes = ["Exercise", "Solution"]
/// ignore_code_fences = false
/// max_file_size = 10485760
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExnumConfig {
	/// Manuscripts to process when none are passed on the command line.
	/// Relative to the project root.
	#[serde(default)]
	pub files: Vec<PathBuf>,
	/// A heading containing this text opens an exercises section.
	#[serde(default = "default_section_keyword")]
	pub section_keyword: String,
	/// Heading prefixes renumbered inside an exercises section.
	#[serde(default = "default_item_prefixes")]
	pub item_prefixes: Vec<String>,
	/// When true, `#` lines inside fenced code blocks are not headings.
	#[serde(default)]
	pub ignore_code_fences: bool,
	/// Manuscripts larger than this many bytes are refused. Defaults to
	/// 10 MB.
	#[serde(default = "default_max_file_size")]
	pub max_file_size: u64,
}

impl Default for ExnumConfig {
	fn default() -> Self {
		Self {
			files: Vec::new(),
			section_keyword: default_section_keyword(),
			item_prefixes: default_item_prefixes(),
			ignore_code_fences: false,
			max_file_size: DEFAULT_MAX_FILE_SIZE,
		}
	}
}

fn default_section_keyword() -> String {
	DEFAULT_SECTION_KEYWORD.to_string()
}

fn default_item_prefixes() -> Vec<String> {
	Vec::from(DEFAULT_ITEM_PREFIXES.map(String::from))
}

fn default_max_file_size() -> u64 {
	DEFAULT_MAX_FILE_SIZE
}

impl ExnumConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ExnumResult<Option<ExnumConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Load the config at `root`, falling back to defaults when there is no
	/// config file.
	pub fn load_or_default(root: &Path) -> ExnumResult<ExnumConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	pub fn parse(content: &str) -> ExnumResult<ExnumConfig> {
		toml::from_str(content).map_err(|e| ExnumError::ConfigParse(e.to_string()))
	}

	pub fn renumber_options(&self) -> RenumberOptions {
		RenumberOptions {
			section_keyword: self.section_keyword.clone(),
			item_prefixes: self.item_prefixes.clone(),
			ignore_code_fences: self.ignore_code_fences,
		}
	}

	pub fn renumberer(&self) -> ExnumResult<Renumberer> {
		Renumberer::new(self.renumber_options())
	}

	/// The manuscripts to process, resolved against `root`. Paths given in
	/// `overrides` take precedence over the configured `files`.
	pub fn manuscripts(&self, root: &Path, overrides: &[PathBuf]) -> ExnumResult<Vec<PathBuf>> {
		let paths = if overrides.is_empty() {
			&self.files
		} else {
			overrides
		};

		if paths.is_empty() {
			return Err(ExnumError::NoManuscripts);
		}

		Ok(paths.iter().map(|path| root.join(path)).collect())
	}
}
