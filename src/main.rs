//! Program entrypoint.

use std::io;

use anyhow::Result;

use course_planner::shell::Shell;

fn main() -> Result<()> {
	env_logger::init();
	let stdin = io::stdin();
	let mut shell = Shell::new(stdin.lock(), io::stdout(), io::stderr());
	shell.run()
}
