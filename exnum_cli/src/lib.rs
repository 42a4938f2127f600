use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Keep Exercise and Solution headings in your markdown manuscripts numbered in order.",
	long_about = "exnum renumbers the `Exercise N` and `Solution N` headings found under every \
	              `Exercises` heading of a markdown manuscript so that they always read 1, 2, 3 \
	              in document order.\n\nQuick start:\n  exnum init             Create an \
	              exnum.toml\n  exnum update book.md   Renumber headings in place\n  exnum \
	              check book.md    Verify headings are already numbered"
)]
pub struct ExnumCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory. Manuscript paths and the config
	/// file are resolved against it.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `exnum.toml` in the project root.
	///
	/// If a config file already exists, this command is a no-op and exits
	/// successfully.
	Init,
	/// Check that every exercise and solution heading is numbered in order.
	///
	/// Exits with a non-zero status code if any heading would be renumbered.
	/// Ideal for CI pipelines.
	Check {
		/// Manuscripts to check. Defaults to `files` from `exnum.toml`.
		#[arg(value_name = "FILE")]
		files: Vec<PathBuf>,

		/// Show a unified diff of each manuscript that would change.
		#[arg(long, default_value_t = false)]
		diff: bool,

		/// Output format for check results. Use `text` for human-readable
		/// output, `json` for programmatic consumption, or `github` for
		/// GitHub Actions annotations that appear inline on PRs.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Renumber exercise and solution headings in place.
	///
	/// Use `--dry-run` to preview changes without writing to disk, or
	/// `--watch` to re-run whenever a manuscript changes.
	Update {
		/// Manuscripts to update. Defaults to `files` from `exnum.toml`.
		#[arg(value_name = "FILE")]
		files: Vec<PathBuf>,

		/// Preview changes without writing files.
		#[arg(long, default_value_t = false)]
		dry_run: bool,

		/// Watch the manuscripts and re-run the update when they change.
		#[arg(long, default_value_t = false)]
		watch: bool,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption. Each entry includes the
	/// file path, line, prefix, previous ordinal and expected ordinal.
	Json,
	/// GitHub Actions annotation format. Emits `::warning` annotations that
	/// appear inline on pull request diffs.
	Github,
}
