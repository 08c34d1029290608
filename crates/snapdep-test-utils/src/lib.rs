//! Various helper functions for building catalog fixtures in tests.

use std::collections::HashMap;

use snapdep_core::{Catalog, Config, RawRecord};

/// Builds a record row for test catalogs.
/// # Parameters
/// - `date` - ISO-8601, or `""` for an undated record.
/// - `fields` - metadata key/value pairs, e.g. `("Imports", "digest gtable")`.
pub fn record(package: &str, source: &str, date: &str, fields: &[(&str, &str)]) -> RawRecord {
	RawRecord {
		package: package.to_string(),
		source: source.to_string(),
		version: "1.0".to_string(),
		date: if date.is_empty() {
			None
		} else {
			Some(date.parse().expect("fixture date must be ISO-8601"))
		},
		fields: fields.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>(),
	}
}

/// A record whose only metadata is a `Depends` field.
pub fn record_depending_on(package: &str, source: &str, date: &str, depends: &str) -> RawRecord {
	record(package, source, date, &[("Depends", depends)])
}

pub fn catalog(records: impl IntoIterator<Item = RawRecord>) -> Catalog {
	Catalog::new(records.into_iter().collect())
}

/// A `Config` whose data dir lives in a fresh temp directory.
///
/// The `TempDir` guard must be kept alive for as long as the config is used.
pub fn temp_config() -> (tempfile::TempDir, Config) {
	let dir = tempfile::tempdir().expect("failed to create temp dir");
	let mut config = Config::default();
	assert!(config.set_data_dir(dir.path().to_path_buf()), "temp dir should be a valid data dir");
	(dir, config)
}
