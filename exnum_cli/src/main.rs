use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use exnum_cli::Commands;
use exnum_cli::ExnumCli;
use exnum_cli::OutputFormat;
use exnum_core::ExnumConfig;
use exnum_core::Renumberer;
use exnum_core::manuscript::ManuscriptUpdate;
use exnum_core::manuscript::compute_update;
use exnum_core::manuscript::write_update;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "EXNUM_LOG";

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = ExnumCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Check {
			files,
			diff,
			format,
		}) => run_check(&args, files, *diff, *format),
		Some(Commands::Update {
			files,
			dry_run,
			watch,
		}) => run_update(&args, files, *dry_run, *watch),
		None => {
			eprintln!("No subcommand specified. Run `exnum --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<exnum_core::ExnumError>() {
			Ok(exnum_err) => {
				let report: miette::Report = (*exnum_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr so that stdout stays machine readable. `EXNUM_LOG` takes
/// precedence over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose {
		"exnum_core=debug,exnum=debug"
	} else {
		"warn"
	};
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.without_time()
		.try_init()
		.ok();
}

fn resolve_root(args: &ExnumCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Everything a single check or update run needs.
struct RunContext {
	root: PathBuf,
	config: ExnumConfig,
	renumberer: Renumberer,
	manuscripts: Vec<PathBuf>,
}

fn load_context(
	args: &ExnumCli,
	files: &[PathBuf],
) -> Result<RunContext, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = ExnumConfig::load_or_default(&root)?;
	let renumberer = config.renumberer()?;
	let manuscripts = config.manuscripts(&root, files)?;

	tracing::debug!(
		root = %root.display(),
		manuscripts = manuscripts.len(),
		"resolved manuscripts"
	);

	Ok(RunContext {
		root,
		config,
		renumberer,
		manuscripts,
	})
}

fn compute_updates(ctx: &RunContext) -> Result<Vec<ManuscriptUpdate>, Box<dyn std::error::Error>> {
	let mut updates = Vec::with_capacity(ctx.manuscripts.len());
	for path in &ctx.manuscripts {
		updates.push(compute_update(
			path,
			&ctx.renumberer,
			ctx.config.max_file_size,
		)?);
	}
	Ok(updates)
}

fn run_init(args: &ExnumCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	if let Some(existing) = ExnumConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let config_path = root.join("exnum.toml");
	let sample_config = "# exnum configuration\n\n# Manuscripts renumbered when no files are \
	                     passed on the command line.\n# files = [\"book.md\"]\n\n# A heading \
	                     containing this text opens an exercises section.\n# section_keyword = \
	                     \"Exercises\"\n\n# Headings starting with these prefixes are \
	                     renumbered, each with its own counter.\n# item_prefixes = [\"Exercise\", \
	                     \"Solution\"]\n\n# Treat `#` lines inside fenced code blocks as plain \
	                     text.\n# ignore_code_fences = false\n";

	std::fs::write(&config_path, sample_config)?;
	println!("Created {}", config_path.display());
	println!();
	println!("Next steps:");
	println!("  1. List your manuscripts under `files` in exnum.toml");
	println!("  2. Run `exnum check` to see headings that are out of order");
	println!("  3. Run `exnum update` to renumber them");

	Ok(())
}

fn run_check(
	args: &ExnumCli,
	files: &[PathBuf],
	show_diff: bool,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = load_context(args, files)?;
	let updates = compute_updates(&ctx)?;
	let stale: Vec<&ManuscriptUpdate> = updates.iter().filter(|u| u.is_changed()).collect();

	if args.verbose {
		// Machine-readable formats own stdout.
		print_sections(&updates, &ctx.root, format != OutputFormat::Text);
	}

	match format {
		OutputFormat::Json => {
			let entries: Vec<serde_json::Value> = stale
				.iter()
				.flat_map(|update| {
					let rel = make_relative(&update.path, &ctx.root);
					update.outcome.changes.iter().map(move |change| {
						serde_json::json!({
							"file": &rel,
							"line": change.line,
							"prefix": change.prefix,
							"previous": change.previous,
							"expected": change.current,
						})
					})
				})
				.collect();
			let output = serde_json::json!({
				"ok": stale.is_empty(),
				"stale": entries,
			});
			println!("{output}");
		}
		OutputFormat::Github => {
			if stale.is_empty() {
				println!("All exercise headings are numbered in order.");
			}
			for update in &stale {
				let rel = make_relative(&update.path, &ctx.root);
				for change in &update.outcome.changes {
					println!(
						"::warning file={rel},line={}::`{} {}` should be numbered {}",
						change.line, change.prefix, change.previous, change.current
					);
				}
			}
			if !stale.is_empty() {
				eprintln!("{}", check_summary(&stale));
			}
		}
		OutputFormat::Text => {
			if stale.is_empty() {
				println!("Check passed: all exercise headings are numbered in order.");
			} else {
				eprintln!("Check failed.");
				for update in &stale {
					let rel = make_relative(&update.path, &ctx.root);
					eprintln!();
					eprintln!("{rel}:");
					for change in &update.outcome.changes {
						eprintln!(
							"  line {}: {} {} should be {} {}",
							change.line,
							change.prefix,
							colored!(change.previous, red),
							change.prefix,
							colored!(change.current, green)
						);
					}

					if show_diff {
						print_diff(&update.original, &update.outcome.content);
					}
				}
				eprintln!();
				eprintln!("{}", check_summary(&stale));
			}
		}
	}

	if !stale.is_empty() {
		process::exit(1);
	}

	Ok(())
}

fn check_summary(stale: &[&ManuscriptUpdate]) -> String {
	let headings: usize = stale.iter().map(|update| update.changed_count()).sum();
	format!(
		"{headings} heading(s) in {} manuscript(s) are out of order. Run `exnum update` to fix.",
		stale.len()
	)
}

fn run_update(
	args: &ExnumCli,
	files: &[PathBuf],
	dry_run: bool,
	watch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	// Run the initial update.
	run_update_once(args, files, dry_run)?;

	if !watch || dry_run {
		return Ok(());
	}

	// Watch mode
	println!("\nWatching for file changes... (press Ctrl+C to stop)");

	let root = resolve_root(args);
	let (tx, rx) = mpsc::channel();

	let mut watcher =
		notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
			if let Ok(event) = res {
				if matches!(
					event.kind,
					notify::EventKind::Modify(_) | notify::EventKind::Create(_)
				) {
					let _ = tx.send(());
				}
			}
		})?;

	use notify::Watcher;
	watcher.watch(&root, notify::RecursiveMode::Recursive)?;

	loop {
		rx.recv()?;
		// Debounce: drain additional events within 200ms.
		while rx.recv_timeout(Duration::from_millis(200)).is_ok() {}

		if let Err(e) = run_update_once(args, files, false) {
			eprintln!("{} {e}", colored!("error:", red));
		}
	}
}

fn run_update_once(
	args: &ExnumCli,
	files: &[PathBuf],
	dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = load_context(args, files)?;
	let updates = compute_updates(&ctx)?;

	if args.verbose {
		print_sections(&updates, &ctx.root, false);
	}

	let stale: Vec<&ManuscriptUpdate> = updates.iter().filter(|u| u.is_changed()).collect();
	if stale.is_empty() {
		println!("All manuscripts are already up to date.");
		return Ok(());
	}

	for update in stale {
		let rel = make_relative(&update.path, &ctx.root);
		if dry_run {
			println!(
				"Dry run: would update {} heading(s) in {rel}",
				update.changed_count()
			);
			for change in &update.outcome.changes {
				println!(
					"  line {}: {} {} -> {}",
					change.line, change.prefix, change.previous, change.current
				);
			}
		} else {
			write_update(update)?;
			println!("Updated {} heading(s) in {rel}", update.changed_count());
		}
	}

	Ok(())
}

fn print_sections(updates: &[ManuscriptUpdate], root: &Path, to_stderr: bool) {
	let emit = |line: String| {
		if to_stderr {
			eprintln!("{line}");
		} else {
			println!("{line}");
		}
	};

	for update in updates {
		let rel = make_relative(&update.path, root);
		let sections = &update.outcome.sections;
		if sections.is_empty() {
			emit(format!(
				"{} {rel} has no exercises sections",
				colored!("warning:", yellow)
			));
			continue;
		}

		let lines: Vec<String> = sections.iter().map(|s| s.line().to_string()).collect();
		emit(format!(
			"{rel}: {} exercises section(s) at line(s) {}",
			sections.len(),
			lines.join(", ")
		));
	}
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
