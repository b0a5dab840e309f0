//! Catalog loading from delimited course files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{StringRecord, Trim};

use crate::types::{Catalog, Course, LoadError};

/// Catalog file read by the interactive shell, relative to the working directory.
pub const DEFAULT_CATALOG_FILE: &str = "courseInfo.txt";

/// Load File
///
/// Open `path` and parse it into a fresh catalog. The file is opened before anything else happens,
/// so a missing or unreadable file yields `LoadError::Open` and the caller's current catalog can
/// stay exactly as it was.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|source| LoadError::Open {
		path: path.to_path_buf(),
		source,
	})?;
	let catalog = load(file)?;
	log::info!(
		"Loaded {} courses from '{}'",
		catalog.len(),
		path.display()
	);
	Ok(catalog)
}

/// Load
///
/// Read course records from `input` (trait bound `std::io::Read`), one per line in the form
/// `number,title[,prerequisite...]`. There is no header row and no quoting. Blank lines are
/// ignored, as are empty prerequisite fields. Lines without both a number and a title are skipped
/// with a warning. Every bucket is sorted once all lines are read.
pub fn load<R: Read>(input: R) -> Result<Catalog, LoadError> {
	let buffered = BufReader::new(input);
	let mut rdr = csv::ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.quoting(false)
		.trim(Trim::None)
		.from_reader(buffered);

	let mut catalog = Catalog::new();
	for result in rdr.records() {
		let record = result?;
		let stored = match parse_course(&record) {
			Some(course) => {
				log::debug!("{:?}", course);
				catalog.insert(course)
			}
			None => false,
		};
		if !stored {
			log::warn!(
				"Skipping malformed line {}: '{}'",
				line_number(&record),
				record.iter().collect::<Vec<_>>().join(",")
			);
		}
	}
	catalog.sort();
	Ok(catalog)
}

/// Parse Course
///
/// Field 0 is the number, field 1 the title and the rest are prerequisites. Returns `None` for a
/// record that lacks a title field. An empty number is left for `Catalog::insert` to refuse.
fn parse_course(record: &StringRecord) -> Option<Course> {
	let number = record.get(0)?;
	let title = record.get(1)?;
	let mut course = Course::new(number, title);
	for prerequisite in record.iter().skip(2).filter(|p| !p.is_empty()) {
		course.add_prerequisite(prerequisite);
	}
	Some(course)
}

fn line_number(record: &StringRecord) -> u64 {
	record.position().map_or(0, |p| p.line())
}
