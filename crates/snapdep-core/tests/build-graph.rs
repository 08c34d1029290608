use snapdep_core::{BaselineSet, GraphBuilder};
use snapdep_test_utils::{catalog, record, record_depending_on};

fn date(s: &str) -> chrono::NaiveDate {
	s.parse().expect("test date must be ISO-8601")
}

#[test]
fn latest_record_wins_per_package_and_source() {
	let catalog = catalog([
		record("ggplot2", "cran", "2014-01-10", &[("Imports", "old")]),
		record("ggplot2", "cran", "2014-06-01", &[("Imports", "new")]),
		record("ggplot2", "github", "2014-03-01", &[("Imports", "dev")]),
	]);

	let graph = GraphBuilder::new(&catalog, date("2015-01-01")).build();

	assert_eq!(graph.package_count(), 1);
	let record = graph.get_record("ggplot2", "cran").expect("cran record should survive");
	assert!(record.dependencies.contains("new"));
	assert!(!record.dependencies.contains("old"));
	assert!(graph.get_record("ggplot2", "github").is_some());
}

#[test]
fn records_after_snapshot_are_invisible() {
	let catalog = catalog([
		record("ggplot2", "cran", "2014-01-10", &[]),
		record("shiny", "cran", "2015-06-01", &[]),
	]);

	let graph = GraphBuilder::new(&catalog, date("2015-01-01")).build();

	assert!(graph.get("ggplot2").is_some());
	/* Only record for shiny is after the snapshot, so the package has no node at all. */
	assert!(graph.get("shiny").is_none());
}

#[test]
fn snapshot_can_roll_back_to_an_older_record() {
	let catalog = catalog([
		record("ggplot2", "cran", "2014-01-10", &[("Imports", "old")]),
		record("ggplot2", "cran", "2014-06-01", &[("Imports", "new")]),
	]);

	let graph = GraphBuilder::new(&catalog, date("2014-03-01")).build();

	let record = graph.get_record("ggplot2", "cran").expect("older record should be visible");
	assert!(record.dependencies.contains("old"));
}

#[test]
fn baseline_packages_are_not_graph_nodes() {
	let baseline: BaselineSet = ["base"].into_iter().collect();
	let catalog = catalog([
		record("base", "cran", "2014-01-10", &[]),
		record_depending_on("ggplot2", "cran", "2014-01-10", "base"),
	]);

	let graph = GraphBuilder::new(&catalog, date("2015-01-01"))
		.baseline(baseline.clone())
		.build();

	assert!(graph.get("base").is_none());
	/* The edge to the baseline package is still there. */
	assert!(graph.get_record("ggplot2", "cran").expect("node should exist").dependencies.contains("base"));

	let graph = GraphBuilder::new(&catalog, date("2015-01-01"))
		.baseline(baseline)
		.exclude_baseline(false)
		.build();
	assert!(graph.get("base").is_some());
}

#[test]
fn dependency_fields_are_split_and_unioned() {
	let catalog = catalog([
		record("ggplot2", "cran", "2014-01-10", &[
			("Imports", "digest  gtable plyr"),
			("Depends", "plyr methods"),
			("Suggests", "testthat"),
		]),
	]);

	let graph = GraphBuilder::new(&catalog, date("2015-01-01")).build();

	let deps = &graph.get_record("ggplot2", "cran").expect("node should exist").dependencies;
	assert_eq!(deps.len(), 4);
	assert!(deps.contains("digest"));
	assert!(deps.contains("gtable"));
	assert!(deps.contains("plyr"));
	assert!(deps.contains("methods"));
	/* Suggests is not a dependency field by default. */
	assert!(!deps.contains("testthat"));
}

#[test]
fn dependency_fields_are_configurable() {
	let catalog = catalog([
		record("ggplot2", "cran", "2014-01-10", &[
			("Imports", "digest"),
			("Suggests", "testthat"),
		]),
	]);

	let graph = GraphBuilder::new(&catalog, date("2015-01-01"))
		.dependency_fields(["Suggests"])
		.build();

	let deps = &graph.get_record("ggplot2", "cran").expect("node should exist").dependencies;
	assert!(deps.contains("testthat"));
	assert!(!deps.contains("digest"));
}

#[test]
fn missing_dependency_fields_yield_no_edges() {
	let catalog = catalog([
		record("ggplot2", "cran", "2014-01-10", &[("Maintainer", "someone")]),
	]);

	let graph = GraphBuilder::new(&catalog, date("2015-01-01")).build();

	assert!(graph.get_record("ggplot2", "cran").expect("node should exist").dependencies.is_empty());
}

#[test]
fn undated_records_are_visible_but_lose_to_dated_ones() {
	let catalog = catalog([
		record("ggplot2", "cran", "", &[("Imports", "undated")]),
		record("ggplot2", "cran", "2014-01-10", &[("Imports", "dated")]),
		record("plyr", "cran", "", &[]),
	]);

	let graph = GraphBuilder::new(&catalog, date("2015-01-01")).build();

	assert!(graph.get_record("ggplot2", "cran").expect("node should exist").dependencies.contains("dated"));
	assert!(graph.get_record("plyr", "cran").is_some());
}
