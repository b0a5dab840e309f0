//! Catalog queries and their user-facing rendering.

use std::io::Write;

use anyhow::Result;

use crate::types::{Catalog, Course, Lookup};

/// List All
///
/// Every course in the catalog, in full alphabetical order by number.
pub fn list_all(catalog: &Catalog) -> impl Iterator<Item = &Course> {
	catalog.buckets().flat_map(|(_, courses)| courses.iter())
}

/// Find
///
/// Look up `number` by exact, case-sensitive match. Only the bucket for its first character is
/// scanned. If the catalog holds duplicates, the first in bucket order is returned.
pub fn find<'a>(catalog: &'a Catalog, number: &str) -> Lookup<'a> {
	let bucket = match number.chars().next().and_then(|key| catalog.bucket(key)) {
		Some(bucket) => bucket,
		None => return Lookup::NoBucket,
	};
	match bucket.iter().find(|course| course.number() == number) {
		Some(course) => Lookup::Found(course),
		None => Lookup::NotFound,
	}
}

/// Write Course List
///
/// Write one `number, title` line per course in the catalog to `wtr`.
pub fn write_course_list<W: Write>(wtr: &mut W, catalog: &Catalog) -> Result<()> {
	for course in list_all(catalog) {
		write_course(wtr, course)?;
	}
	Ok(())
}

/// Write Lookup
///
/// Write the outcome of `find` for `number`. A found course is followed by its prerequisites, if
/// it has any.
pub fn write_lookup<W: Write>(wtr: &mut W, number: &str, lookup: &Lookup) -> Result<()> {
	match lookup {
		Lookup::Found(course) => {
			write_course(wtr, course)?;
			if !course.prerequisites().is_empty() {
				writeln!(wtr, "Prerequisites: {}", course.prerequisites().join(" "))?;
			}
		}
		Lookup::NotFound => writeln!(wtr, "Course {} not found.", number)?,
		Lookup::NoBucket => writeln!(wtr, "No courses found.")?,
	}
	Ok(())
}

fn write_course<W: Write>(wtr: &mut W, course: &Course) -> Result<()> {
	writeln!(wtr, "{}, {}", course.number(), course.title())?;
	Ok(())
}
