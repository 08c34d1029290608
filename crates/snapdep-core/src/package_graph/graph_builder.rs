use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use super::{PackageGraph, SourceRecord};
use crate::baseline::BaselineSet;
use crate::catalog::{Catalog, RawRecord};

/// Builds a [`PackageGraph`] from a catalog at a snapshot date.
///
/// Defaults: dependencies are read from the `Imports` and `Depends` fields,
/// the baseline set is empty, and baseline packages are excluded from graph
/// nodes (they stay legal as dependency edge targets).
pub struct GraphBuilder<'c> {
	catalog: &'c Catalog,
	snapshot_date: NaiveDate,
	dependency_fields: Vec<String>,
	baseline: BaselineSet,
	exclude_baseline: bool,
}

impl<'c> GraphBuilder<'c> {
	pub fn new(catalog: &'c Catalog, snapshot_date: NaiveDate) -> Self {
		Self {
			catalog,
			snapshot_date,
			dependency_fields: vec!["Imports".to_string(), "Depends".to_string()],
			baseline: BaselineSet::empty(),
			exclude_baseline: true,
		}
	}

	/// Which record fields are split into dependency edges.
	pub fn dependency_fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.dependency_fields = fields.into_iter().map(|f| f.into()).collect();
		self
	}

	pub fn baseline(mut self, baseline: BaselineSet) -> Self {
		self.baseline = baseline;
		self
	}

	pub fn exclude_baseline(mut self, exclude: bool) -> Self {
		self.exclude_baseline = exclude;
		self
	}

	pub fn build(self) -> PackageGraph {
		/* Latest record per (package, source), ties broken by catalog order (later row wins). */
		let mut latest = HashMap::<(&str, &str), &RawRecord>::new();
		for record in self.catalog.records() {
			if let Some(date) = record.date {
				if date > self.snapshot_date {
					continue;
				}
			}
			if self.exclude_baseline && self.baseline.contains(&record.package) {
				continue;
			}
			latest.entry((&record.package, &record.source))
				.and_modify(|kept| {
					if record.date >= kept.date {
						*kept = record;
					}
				})
				.or_insert(record);
		}

		let mut packages = HashMap::<String, HashMap<String, SourceRecord>>::new();
		for ((package, source), record) in latest {
			packages.entry(package.to_string())
				.or_default()
				.insert(source.to_string(), self.source_record(record));
		}

		log::debug!(
			"built graph at {}: {} packages from {} catalog rows",
			self.snapshot_date, packages.len(), self.catalog.len()
		);

		PackageGraph::new(packages)
	}

	fn source_record(&self, record: &RawRecord) -> SourceRecord {
		SourceRecord {
			version: record.version.clone(),
			date: record.date,
			dependencies: {
				let mut dependencies = HashSet::<String>::new();
				for field in &self.dependency_fields {
					/* A missing field reads as "" and yields no tokens. */
					for token in record.field(field).split_whitespace() {
						dependencies.insert(token.to_string());
					}
				}
				dependencies
			},
			metadata: record.fields.clone(),
		}
	}
}
