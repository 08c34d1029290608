//! # The package catalog
//!
//! A [`Catalog`] holds the raw time-stamped rows collected from the package
//! hosting sources, exactly as tabulated. It is the input to
//! [`crate::GraphBuilder`] and carries no graph semantics of its own.
//!
//! Catalogs are imported from JSON with [`Catalog::generate_from_json`] and
//! cached on disk in a compact binary form between runs.

mod record;
pub use record::RawRecord;

mod import;

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
	records: Vec<RawRecord>,
}

/// Result of a bulk import.
///
/// Rows that could not be placed in the catalog are reported, not silently
/// dropped: each appears as an [`crate::Error::DataFormat`] carrying its row
/// position. Callers decide whether a non-empty `rejected` is acceptable.
#[derive(Debug)]
pub struct CatalogImport {
	pub catalog: Catalog,
	pub rejected: Vec<crate::Error>,
}

impl Catalog {
	pub fn new(records: Vec<RawRecord>) -> Self {
		Self { records }
	}

	pub fn records(&self) -> &[RawRecord] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Builds a catalog from a JSON array of flat record objects.
	///
	/// Rows missing the `Package` or `Source` identity fields, or carrying a
	/// malformed `Date`, are rejected and reported in the returned
	/// [`CatalogImport`]. `Err` is returned only when the document itself is
	/// not an array.
	pub fn generate_from_json(v: &serde_json::Value) -> crate::Result<CatalogImport> {
		let rows = v.as_array()
			.ok_or_else(|| crate::Error::Parse("catalog document must be a JSON array".to_string()))?;

		let mut records = Vec::<RawRecord>::with_capacity(rows.len());
		let mut rejected = Vec::<crate::Error>::new();

		for (row, value) in rows.iter().enumerate() {
			match RawRecord::read_from_json(value) {
				Ok(r) => records.push(r),
				Err(e) => {
					let error = crate::Error::DataFormat { row, reason: e.to_string() };
					log::warn!("{}", error);
					rejected.push(error);
				},
			}
		}

		log::debug!("catalog import: {} rows accepted, {} rejected", records.len(), rejected.len());
		Ok(CatalogImport { catalog: Catalog::new(records), rejected })
	}

	/// Reads and imports a JSON catalog document, see [`Catalog::generate_from_json`].
	pub fn generate_from_json_slice(data: &[u8]) -> crate::Result<CatalogImport> {
		Self::generate_from_json(&serde_json::from_slice::<serde_json::Value>(data)?)
	}

	pub fn save_to_disk(&self, config: &crate::Config) -> crate::Result<()> {
		let data = bincode::serialize(self)?;
		std::fs::write(config.data_dir().join("catalog.bin"), data)?;
		Ok(())
	}

	pub fn load_from_disk(config: &crate::Config) -> crate::Result<Self> {
		let data = std::fs::read(config.data_dir().join("catalog.bin"))?;
		Ok(bincode::deserialize::<Self>(&data)?)
	}
}
