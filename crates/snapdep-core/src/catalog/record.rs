use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

/// A single published record of a package in one source.
///
/// Everything beyond the identity fields sits untyped in `fields`; which of
/// those fields count as dependency declarations is decided at graph-build
/// time, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
	pub package: String,
	pub source: String,
	pub version: String,
	/// Publication date. `None` compares as older than any dated record and
	/// is visible at every snapshot.
	pub date: Option<NaiveDate>,
	/// Opaque metadata bag, e.g. "Imports", "Depends", "Maintainer".
	pub fields: HashMap<String, String>,
}

impl RawRecord {
	/// Returns the named metadata field, or `""` when absent.
	pub fn field(&self, name: &str) -> &str {
		self.fields.get(name).map(|s| s.as_str()).unwrap_or("")
	}
}
