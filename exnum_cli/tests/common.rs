use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const OUT_OF_ORDER: &str = "## Exercises
### Exercise 5: Foo
### Exercise 2: Bar
### Solution 9: Foo
";

pub const IN_ORDER: &str = "## Exercises
### Exercise 1: Foo
### Exercise 2: Bar
### Solution 1: Foo
";

pub fn exnum_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("exnum"));
	cmd.env("NO_COLOR", "1").env_remove("EXNUM_LOG");
	cmd
}
