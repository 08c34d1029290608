//! # The package graph
//!
//! A [`PackageGraph`] is a snapshot view of a [`crate::Catalog`]: for every
//! package name, the single most recent record per source at or before the
//! snapshot date, with the dependency names already extracted from the
//! configured metadata fields. Build one with [`GraphBuilder`]; once built
//! it is never mutated, queries only read it.

mod graph_builder;
pub use graph_builder::GraphBuilder;

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

/// The record of one package in one source, as seen at the snapshot date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
	pub version: String,
	pub date: Option<NaiveDate>,
	/// Union of the whitespace-split tokens of the configured dependency
	/// fields, duplicates collapsed.
	pub dependencies: HashSet<String>,
	/// The record's remaining metadata, untouched.
	pub metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageGraph {
	packages: HashMap<String, HashMap<String, SourceRecord>>,
}

impl PackageGraph {
	pub(crate) fn new(packages: HashMap<String, HashMap<String, SourceRecord>>) -> Self {
		Self { packages }
	}

	/// All records of `package`, keyed by source name.
	pub fn get(&self, package: &str) -> Option<&HashMap<String, SourceRecord>> {
		self.packages.get(package)
	}

	pub fn get_record(&self, package: &str, source: &str) -> Option<&SourceRecord> {
		self.packages.get(package)?.get(source)
	}

	pub fn package_names(&self) -> impl Iterator<Item = &str> {
		self.packages.keys().map(|s| s.as_str())
	}

	pub fn package_count(&self) -> usize {
		self.packages.len()
	}

	/// The packages that have a record published by `source`.
	pub fn published_by<'a>(&'a self, source: &'a str) -> impl Iterator<Item = (&'a str, &'a SourceRecord)> {
		self.packages.iter()
			.filter_map(move |(name, sources)| sources.get(source).map(|r| (name.as_str(), r)))
	}

	/// Whether at least one record of `package` exists in an allowed source.
	///
	/// An empty `allowed_sources` makes every package unavailable. This is a
	/// plain membership check on graph keys; baseline membership is the
	/// resolver's concern, not this one's.
	pub fn is_available(&self, package: &str, allowed_sources: &HashSet<String>) -> bool {
		if allowed_sources.is_empty() {
			return false;
		}
		match self.packages.get(package) {
			Some(sources) => sources.keys().any(|s| allowed_sources.contains(s)),
			None => false,
		}
	}
}
