//! Deciding whether packages can be fully installed from a set of trusted sources.
//!
//! # Usage
//! 1. Build a [`crate::PackageGraph`] for the snapshot date of interest.
//! 1. Create an [`InstallabilityResolver`] with the allowed sources and the baseline set.
//! 1. Call [`InstallabilityResolver::is_installable`] for individual packages, or use
//! [`installable_from_source`] to get every package an origin source can fully deliver.
//!
//! A resolver is one query: it memoizes per package and is discarded afterwards.
//! "Not found", "no allowed source" and "dependency cycle" are all ordinary
//! `false` answers, never errors.

use std::collections::{HashMap, HashSet};

use crate::baseline::BaselineSet;
use crate::package_graph::PackageGraph;

/// Answers transitive installability queries against an immutable graph.
///
/// The memo table doubles as the cycle guard: a package's entry is set to
/// `false` before its sources are examined, so any recursive re-entry during
/// its own resolution observes `false` and terminates. A package that is
/// only installable through a path involving itself therefore resolves as
/// uninstallable.
pub struct InstallabilityResolver<'g> {
	graph: &'g PackageGraph,
	allowed_sources: &'g HashSet<String>,
	baseline: &'g BaselineSet,
	memo: HashMap<String, bool>,
}

impl<'g> InstallabilityResolver<'g> {
	pub fn new(graph: &'g PackageGraph, allowed_sources: &'g HashSet<String>, baseline: &'g BaselineSet) -> Self {
		Self {
			graph,
			allowed_sources,
			baseline,
			memo: HashMap::new(),
		}
	}

	/// Whether the full dependency closure of `package` can be satisfied
	/// using only the allowed sources.
	pub fn is_installable(&mut self, package: &str) -> bool {
		if let Some(&known) = self.memo.get(package) {
			return known;
		}

		/* Cycle sentinel, overwritten on success below. */
		self.memo.insert(package.to_string(), false);

		if self.baseline.contains(package) {
			self.memo.insert(package.to_string(), true);
			return true;
		}

		let graph = self.graph;
		let sources = match graph.get(package) {
			Some(sources) => sources,
			None => return false,
		};

		for (source, record) in sources {
			if !self.allowed_sources.contains(source) {
				continue;
			}

			if record.dependencies.is_empty() {
				self.memo.insert(package.to_string(), true);
				return true;
			}

			/* Availability is a cheap key lookup, recursion is not. Disqualify
			the source on any missing record before descending. */
			if !record.dependencies.iter().all(|dep| self.is_dependency_available(dep)) {
				continue;
			}

			if record.dependencies.iter().all(|dep| self.is_installable(dep)) {
				self.memo.insert(package.to_string(), true);
				return true;
			}
		}

		false
	}

	/// The availability fast-check, with baseline packages counting as
	/// trivially available.
	///
	/// `is_installable` accepts baseline packages unconditionally, so the
	/// pre-filter must not be stricter than the check it approximates: a
	/// baseline dependency with no record in any allowed source still passes.
	fn is_dependency_available(&self, package: &str) -> bool {
		self.baseline.contains(package) || self.graph.is_available(package, self.allowed_sources)
	}
}

/// One-shot installability check with a fresh memo table.
pub fn is_installable(graph: &PackageGraph, package: &str, allowed_sources: &HashSet<String>, baseline: &BaselineSet) -> bool {
	InstallabilityResolver::new(graph, allowed_sources, baseline).is_installable(package)
}

/// The packages published by `from_source` whose direct dependencies all
/// resolve as installable from the allowed sources.
///
/// Packages without dependencies always qualify. One memo table is shared
/// across the whole query; the result does not depend on iteration order.
pub fn installable_from_source(graph: &PackageGraph, from_source: &str, allowed_sources: &HashSet<String>, baseline: &BaselineSet) -> HashSet<String> {
	let mut resolver = InstallabilityResolver::new(graph, allowed_sources, baseline);

	let mut results = HashSet::<String>::new();
	for (package, record) in graph.published_by(from_source) {
		if record.dependencies.iter().all(|dep| resolver.is_installable(dep)) {
			results.insert(package.to_string());
		}
	}
	results
}
