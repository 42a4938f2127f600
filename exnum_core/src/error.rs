use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ExnumError {
	#[error(transparent)]
	#[diagnostic(code(exnum::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(exnum::config_parse),
		help(
			"check that exnum.toml is valid TOML using the keys `files`, `section_keyword`, \
			 `item_prefixes`, `ignore_code_fences` and `max_file_size`"
		)
	)]
	ConfigParse(String),

	#[error("file too large: `{path}` is {size} bytes (limit: {limit} bytes)")]
	#[diagnostic(
		code(exnum::file_too_large),
		help("increase `max_file_size` in exnum.toml")
	)]
	FileTooLarge { path: String, size: u64, limit: u64 },

	#[error("invalid {kind}: `{value}`")]
	#[diagnostic(
		code(exnum::invalid_keyword),
		help("keywords must be non-empty and contain no line breaks")
	)]
	InvalidKeyword { kind: String, value: String },

	#[error("duplicate item prefix: `{0}`")]
	#[diagnostic(
		code(exnum::duplicate_prefix),
		help("each entry in `item_prefixes` must be unique")
	)]
	DuplicatePrefix(String),

	#[error("no manuscript files specified")]
	#[diagnostic(
		code(exnum::no_manuscripts),
		help("pass manuscript paths on the command line or set `files` in exnum.toml")
	)]
	NoManuscripts,
}

pub type ExnumResult<T> = Result<T, ExnumError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
