//! Interactive menu loop.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::load::{self, DEFAULT_CATALOG_FILE};
use crate::query;
use crate::types::{Catalog, LoadError};

static MENU: &str = "1. Load Data Structure.\n\
	2. Print Course List.\n\
	3. Print Course.\n\
	9. Exit\n\
	What would you like to do? ";
static COURSE_PROMPT: &str = "What course do you want to know about? ";
static FAREWELL: &str = "Thank you for using the course planner!";

#[derive(Debug, PartialEq, Eq)]
enum MenuChoice {
	Load,
	List,
	Find,
	Exit,
	Invalid(String),
}

impl MenuChoice {
	fn parse(token: &str) -> Self {
		match token.parse::<i64>() {
			Ok(1) => MenuChoice::Load,
			Ok(2) => MenuChoice::List,
			Ok(3) => MenuChoice::Find,
			Ok(9) => MenuChoice::Exit,
			Ok(other) => MenuChoice::Invalid(other.to_string()),
			Err(_) => MenuChoice::Invalid(token.to_string()),
		}
	}
}

/// Shell
///
/// Owns the catalog and drives it from menu choices read on `input`. Regular output goes to
/// `output` and load failures to `errors`.
pub struct Shell<R, W, E> {
	input: R,
	output: W,
	errors: E,
	catalog: Catalog,
	catalog_path: PathBuf,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
	pub fn new(input: R, output: W, errors: E) -> Self {
		Self {
			input,
			output,
			errors,
			catalog: Catalog::new(),
			catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
		}
	}

	/// Load from `path` instead of the default catalog file.
	pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.catalog_path = path.as_ref().to_path_buf();
		self
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	/// Run
	///
	/// Show the menu and handle choices until the user exits. Running out of input before that is
	/// an error, as is any failure to read input or write output.
	pub fn run(&mut self) -> Result<()> {
		loop {
			self.prompt(MENU)?;
			let token = self.next_token()?;
			match MenuChoice::parse(&token) {
				MenuChoice::Load => self.load()?,
				MenuChoice::List => query::write_course_list(&mut self.output, &self.catalog)?,
				MenuChoice::Find => self.find()?,
				MenuChoice::Exit => {
					writeln!(self.output, "{}", FAREWELL)?;
					self.output.flush()?;
					return Ok(());
				}
				MenuChoice::Invalid(value) => {
					log::debug!("Invalid menu choice '{}'", value);
					writeln!(self.output, "{} is not a valid option.", value)?;
				}
			}
		}
	}

	/// The catalog is only replaced once the whole file has loaded.
	fn load(&mut self) -> Result<()> {
		match load::load_file(&self.catalog_path) {
			Ok(catalog) => self.catalog = catalog,
			Err(err) => {
				log::warn!("Keeping previous catalog: {}", err);
				match err {
					LoadError::Open { .. } => writeln!(self.errors, "{}", err)?,
					LoadError::Parse(cause) => writeln!(
						self.errors,
						"Error reading file {}: {}",
						self.catalog_path.display(),
						cause
					)?,
				}
				self.errors.flush()?;
			}
		}
		Ok(())
	}

	fn find(&mut self) -> Result<()> {
		self.prompt(COURSE_PROMPT)?;
		let number = self.next_token()?;
		let lookup = query::find(&self.catalog, &number);
		log::debug!("Lookup '{}': {:?}", number, lookup);
		query::write_lookup(&mut self.output, &number, &lookup)
	}

	fn prompt(&mut self, text: &str) -> Result<()> {
		write!(self.output, "{}", text)?;
		self.output.flush()?;
		Ok(())
	}

	/// Next Token
	///
	/// Read lines until one holds a non-whitespace token and return the first such token. Any
	/// further tokens on that line are dropped, so `3 CSCI100` selects option 3 and the course
	/// number is still prompted for.
	fn next_token(&mut self) -> Result<String> {
		let mut line = String::new();
		loop {
			line.clear();
			if self.input.read_line(&mut line)? == 0 {
				return Err(anyhow!("Standard input closed before exit was chosen"));
			}
			if let Some(token) = line.split_whitespace().next() {
				return Ok(token.to_string());
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;
	use std::io::Cursor;

	type TestShell = Shell<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

	fn shell(input: &str) -> TestShell {
		Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
			.with_catalog_path("data/courseInfo.txt")
	}

	fn output(shell: &TestShell) -> String {
		String::from_utf8_lossy(&shell.output).into_owned()
	}

	#[rstest]
	#[case("1", MenuChoice::Load)]
	#[case("2", MenuChoice::List)]
	#[case("3", MenuChoice::Find)]
	#[case("9", MenuChoice::Exit)]
	#[case("09", MenuChoice::Exit)]
	#[case("5", MenuChoice::Invalid("5".to_string()))]
	#[case("-1", MenuChoice::Invalid("-1".to_string()))]
	#[case("abc", MenuChoice::Invalid("abc".to_string()))]
	fn menu_choice_parse(#[case] token: &str, #[case] expected: MenuChoice) {
		assert_eq!(MenuChoice::parse(token), expected);
	}

	#[rstest]
	fn exit_prints_farewell() {
		let mut shell = shell("9\n");
		assert!(shell.run().is_ok());
		assert_eq!(output(&shell), format!("{}{}\n", MENU, FAREWELL));
	}

	#[rstest]
	fn invalid_choice_reports_and_continues() {
		let mut shell = shell("5\n9\n");
		assert!(shell.run().is_ok());
		assert!(output(&shell).contains("5 is not a valid option.\n"));
		assert_eq!(output(&shell).matches(MENU).count(), 2);
		assert!(shell.catalog().is_empty());
	}

	#[rstest]
	fn blank_lines_are_skipped_when_reading_a_token() {
		let mut shell = shell("\n   \n9\n");
		assert!(shell.run().is_ok());
		assert!(output(&shell).ends_with(&format!("{}\n", FAREWELL)));
	}

	#[rstest]
	fn end_of_input_is_an_error() {
		let mut shell = shell("2\n");
		assert!(shell.run().is_err());
	}
}
