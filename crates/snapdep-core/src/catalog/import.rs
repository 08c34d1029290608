//! Reading catalog rows from JSON.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::RawRecord;
use crate::Error::Parse;

impl RawRecord {
	/// Reads a record from a flat JSON object.
	///
	/// `Package` and `Source` are required string fields; a row without them
	/// has no identity and cannot be placed in a graph. `Version` and `Date`
	/// are optional, `Date` must be ISO-8601 (`YYYY-MM-DD`) when present.
	/// Every other string-valued key is kept verbatim in the metadata bag.
	pub fn read_from_json(v: &serde_json::Value) -> crate::Result<Self> {
		let obj = v.as_object()
			.ok_or_else(|| Parse("record must be a JSON object".to_string()))?;

		let required_string = |key: &str| -> crate::Result<String> {
			obj.get(key)
				.and_then(|f| f.as_str())
				.filter(|s| !s.is_empty())
				.map(|s| s.to_string())
				.ok_or_else(|| Parse(format!("record is missing required field `{}`", key)))
		};

		let date = match obj.get("Date").and_then(|f| f.as_str()) {
			None | Some("") => None,
			Some(s) => Some(
				s.parse::<NaiveDate>()
					.map_err(|e| Parse(format!("invalid `Date` value `{}`: {}", s, e)))?
			),
		};

		Ok(RawRecord {
			package: required_string("Package")?,
			source: required_string("Source")?,
			version: obj.get("Version").and_then(|f| f.as_str()).unwrap_or("").to_string(),
			date,
			fields: {
				let mut fields = HashMap::<String, String>::new();
				for (key, value) in obj {
					if matches!(key.as_str(), "Package" | "Source" | "Version" | "Date") {
						continue;
					}
					/* Source tables are CSV-shaped, non-string values carry no dependency tokens. */
					if let Some(s) = value.as_str() {
						fields.insert(key.clone(), s.to_string());
					}
				}
				fields
			},
		})
	}
}
