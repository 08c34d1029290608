use snapdep_core::Catalog;
use snapdep_test_utils::{catalog, record, temp_config};

#[test]
fn import_accepts_rows_and_reports_rejections() {
	let import = Catalog::generate_from_json(&serde_json::json!([
		{ "Package": "ggplot2", "Source": "cran", "Date": "2014-05-21", "Imports": "digest" },
		{ "Source": "cran" },
		{ "Package": "plyr", "Source": "cran" },
		{ "Package": "broken", "Source": "cran", "Date": "not-a-date" },
	])).expect("array documents should import");

	assert_eq!(import.catalog.len(), 2);
	assert_eq!(import.rejected.len(), 2);
	assert!(matches!(import.rejected[0], snapdep_core::Error::DataFormat { row: 1, .. }));
	assert!(matches!(import.rejected[1], snapdep_core::Error::DataFormat { row: 3, .. }));
	assert!(import.rejected[0].to_string().contains("Package"));
	assert!(import.rejected[1].to_string().contains("Date"));
}

#[test]
fn non_array_document_is_an_error() {
	assert!(Catalog::generate_from_json(&serde_json::json!({ "Package": "ggplot2" })).is_err());
	assert!(Catalog::generate_from_json_slice(b"not json at all").is_err());
}

#[test]
fn catalog_round_trips_through_disk() {
	let (_guard, config) = temp_config();

	let original = catalog([
		record("ggplot2", "cran", "2014-05-21", &[("Imports", "digest gtable")]),
		record("plyr", "cran", "", &[]),
	]);
	original.save_to_disk(&config).expect("failed to save catalog");

	let loaded = Catalog::load_from_disk(&config).expect("failed to load catalog");
	assert_eq!(loaded.len(), original.len());
	assert_eq!(loaded.records()[0].package, "ggplot2");
	assert_eq!(loaded.records()[0].field("Imports"), "digest gtable");
	assert_eq!(loaded.records()[1].date, None);
}

#[test]
fn loading_a_missing_catalog_fails() {
	let (_guard, config) = temp_config();
	assert!(Catalog::load_from_disk(&config).is_err());
}
