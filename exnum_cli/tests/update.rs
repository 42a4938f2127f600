mod common;

use common::IN_ORDER;
use common::OUT_OF_ORDER;
use exnum_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use similar_asserts::assert_eq;

#[test]
fn update_renumbers_manuscript() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("book.md"), OUT_OF_ORDER)?;

	common::exnum_cmd()
		.arg("update")
		.arg("book.md")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Updated 2 heading(s) in book.md"));

	let content = std::fs::read_to_string(tmp.path().join("book.md"))?;
	assert_eq!(content, IN_ORDER);

	Ok(())
}

#[test]
fn update_noop_when_numbered() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("book.md"), IN_ORDER)?;

	common::exnum_cmd()
		.arg("update")
		.arg("book.md")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already up to date"));

	Ok(())
}

#[test]
fn update_dry_run_does_not_write() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("book.md"), OUT_OF_ORDER)?;

	let output = common::exnum_cmd()
		.arg("update")
		.arg("--dry-run")
		.arg("book.md")
		.arg("--path")
		.arg(tmp.path())
		.output()?;

	assert!(output.status.success());
	insta::assert_snapshot!(String::from_utf8(output.stdout)?, @r"
	Dry run: would update 2 heading(s) in book.md
	  line 2: Exercise 5 -> 1
	  line 4: Solution 9 -> 1
	");

	let content = std::fs::read_to_string(tmp.path().join("book.md"))?;
	assert_eq!(content, OUT_OF_ORDER);

	Ok(())
}

#[test]
fn update_uses_files_from_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("book"))?;
	std::fs::write(tmp.path().join("book/manuscript.md"), OUT_OF_ORDER)?;
	std::fs::write(
		tmp.path().join("exnum.toml"),
		"files = [\"book/manuscript.md\"]\n",
	)?;

	common::exnum_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Updated 2 heading(s)"));

	let content = std::fs::read_to_string(tmp.path().join("book/manuscript.md"))?;
	assert_eq!(content, IN_ORDER);

	Ok(())
}

#[test]
fn update_uses_keywords_from_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("book.md"),
		"## Practice\n### Task 4: A\n### Task 4: B\n",
	)?;
	std::fs::write(
		tmp.path().join("exnum.toml"),
		"section_keyword = \"Practice\"\nitem_prefixes = [\"Task\"]\n",
	)?;

	common::exnum_cmd()
		.arg("update")
		.arg("book.md")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let content = std::fs::read_to_string(tmp.path().join("book.md"))?;
	assert_eq!(content, "## Practice\n### Task 1: A\n### Task 2: B\n");

	Ok(())
}

#[test]
fn update_verbose_lists_sections() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("book.md"), OUT_OF_ORDER)?;

	common::exnum_cmd()
		.arg("update")
		.arg("--verbose")
		.arg("book.md")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"book.md: 1 exercises section(s) at line(s) 1",
		));

	Ok(())
}

#[test]
fn update_without_manuscripts_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::exnum_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("no manuscript files specified"));

	Ok(())
}

#[test]
fn update_missing_manuscript_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::exnum_cmd()
		.arg("update")
		.arg("missing.md")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2);

	Ok(())
}

#[test]
fn update_refuses_files_over_the_size_limit() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("book.md"), OUT_OF_ORDER)?;
	std::fs::write(tmp.path().join("exnum.toml"), "max_file_size = 4\n")?;

	common::exnum_cmd()
		.arg("update")
		.arg("book.md")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("file too large"));

	let content = std::fs::read_to_string(tmp.path().join("book.md"))?;
	assert_eq!(content, OUT_OF_ORDER);

	Ok(())
}

#[test]
fn update_logs_to_stderr_with_env_filter() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("book.md"), OUT_OF_ORDER)?;

	common::exnum_cmd()
		.env("EXNUM_LOG", "exnum_core=debug")
		.arg("update")
		.arg("book.md")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("renumbering section").not())
		.stderr(predicates::str::contains("renumbering section"));

	let content = std::fs::read_to_string(tmp.path().join("book.md"))?;
	assert_eq!(content, IN_ORDER);

	Ok(())
}
