//! The set of packages assumed to be pre-installed.

use std::collections::HashSet;
use serde::{Serialize, Deserialize};

/// Package names considered always available regardless of catalog contents.
///
/// Baseline packages are excluded from graph nodes when requested at build
/// time but remain valid targets for dependency edges. The set is always
/// supplied by the caller; [`BaselineSet::r_distribution`] is a convenience
/// for the common case, not a default the library falls back to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineSet(HashSet<String>);

impl BaselineSet {
	/// An empty baseline: no package is assumed pre-installed.
	pub fn empty() -> Self {
		Self(HashSet::new())
	}

	/// The packages bundled with a standard R distribution.
	pub fn r_distribution() -> Self {
		[
			"R", "MASS", "Matrix", "base", "boot", "class", "cluster", "codetools",
			"compiler", "datasets", "foreign", "grDevices", "graphics", "grid",
			"lattice", "methods", "mgcv", "nlme", "nnet", "parallel", "rpart",
			"spatial", "splines", "stats", "stats4", "survival", "tcltk", "tools",
			"translations", "utils",
		].iter().map(|s| s.to_string()).collect()
	}

	pub fn contains(&self, package: &str) -> bool {
		self.0.contains(package)
	}

	pub fn insert(&mut self, package: impl Into<String>) {
		self.0.insert(package.into());
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|s| s.as_str())
	}
}

impl FromIterator<String> for BaselineSet {
	fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> FromIterator<&'a str> for BaselineSet {
	fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
		Self(iter.into_iter().map(|s| s.to_string()).collect())
	}
}
