//! Global type definitions.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

/// Bucket key of a course number: its first character.
pub type BucketKey = char;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
	number: String,
	title: String,
	prerequisites: Vec<String>,
}

impl Course {
	pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			number: number.into(),
			title: title.into(),
			prerequisites: Vec::new(),
		}
	}

	/// Prerequisites keep the order they were added in. They are not checked against the catalog.
	pub fn add_prerequisite(&mut self, prerequisite: impl Into<String>) {
		self.prerequisites.push(prerequisite.into());
	}

	pub fn number(&self) -> &str {
		&self.number
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn prerequisites(&self) -> &[String] {
		&self.prerequisites
	}

	/// `None` only for an empty number, which the loader never produces.
	pub fn bucket_key(&self) -> Option<BucketKey> {
		self.number.chars().next()
	}
}

/// Catalog
///
/// All loaded courses, grouped by the first character of their number. Each group is kept sorted
/// by number and groups iterate in key order, so walking the catalog front to back visits courses
/// in full alphabetical order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
	buckets: BTreeMap<BucketKey, Vec<Course>>,
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a course to its bucket without re-sorting. Call `sort` once all courses are in.
	/// A course with an empty number has no bucket and is not stored; returns whether it was.
	pub fn insert(&mut self, course: Course) -> bool {
		match course.bucket_key() {
			Some(key) => {
				self.buckets.entry(key).or_default().push(course);
				true
			}
			None => false,
		}
	}

	/// Sort every bucket by course number. The sort is stable, so duplicate numbers keep the order
	/// they were inserted in.
	pub fn sort(&mut self) {
		for courses in self.buckets.values_mut() {
			courses.sort_by(|a, b| a.number.cmp(&b.number));
		}
	}

	pub fn bucket(&self, key: BucketKey) -> Option<&[Course]> {
		self.buckets.get(&key).map(Vec::as_slice)
	}

	pub fn buckets(&self) -> impl Iterator<Item = (BucketKey, &[Course])> {
		self.buckets.iter().map(|(key, courses)| (*key, courses.as_slice()))
	}

	pub fn len(&self) -> usize {
		self.buckets.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.buckets.is_empty()
	}
}

/// Failure to produce a catalog from an input file.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("Error opening file {}", path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Malformed catalog data: {0}")]
	Parse(#[from] csv::Error),
}

/// Outcome of looking up a single course number.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
	Found(&'a Course),
	/// The bucket exists but holds no course with this number.
	NotFound,
	/// No course in the catalog shares the query's first character.
	NoBucket,
}
