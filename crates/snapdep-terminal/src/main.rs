use std::collections::HashSet;

use snapdep_core::{BaselineSet, Catalog, GraphBuilder};

fn main() {
	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag( "h", "help",          "Show help");
		opts.optflag( "v", "verbose",       "Increased verbosity");
		opts.optopt(  "c", "catalog",       "Catalog JSON file to import (cached for later runs)", "FILE");
		opts.optopt(  "d", "date",          "Snapshot date", "YYYY-MM-DD");
		opts.optopt(  "f", "from",          "Origin source whose packages are checked", "SOURCE");
		opts.optopt(  "s", "sources",       "Comma separated allowed sources (defaults to the origin source)", "S1,S2");
		opts.optopt(  "",  "fields",        "Comma separated dependency fields (default: Imports,Depends)", "F1,F2");
		opts.optopt(  "",  "baseline",      "File with one baseline package name per line (default: R distribution)", "FILE");
		opts.optflag( "",  "keep-baseline", "Keep baseline packages as graph nodes");

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { println!("Unable to parse options: {}", e); return }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Lists the packages an origin source can fully deliver from a set of trusted sources."));
			return;
		}

		parsed_options
	};

	{
		let mut builder = env_logger::Builder::from_default_env();
		if parsed_options.opt_present("v") {
			builder.filter_level(log::LevelFilter::Debug);
		}
		builder.init();
	}

	let config = snapdep_core::Config::load_from_disk().unwrap_or_else(|e| {
		log::warn!("Failed to read config file: {}", e);
		log::warn!("Using default config.");
		snapdep_core::Config::default()
	});

	let (snapshot_date, from_source) = match (parsed_options.opt_str("d"), parsed_options.opt_str("f")) {
		(Some(d), Some(f)) => {
			match d.parse::<chrono::NaiveDate>() {
				Ok(date) => (date, f),
				Err(e) => {
					log::error!("Invalid snapshot date `{}`: {}", d, e);
					return;
				}
			}
		},
		_ => {
			eprintln!("{}", opts.usage("Both --date and --from are required."));
			return;
		}
	};

	let catalog = match parsed_options.opt_str("c") {
		Some(path) => {
			let data = match std::fs::read(&path) {
				Ok(data) => data,
				Err(e) => {
					log::error!("Failed to read catalog file `{}`: {}", path, e);
					return;
				}
			};
			let import = match Catalog::generate_from_json_slice(&data) {
				Ok(import) => import,
				Err(e) => {
					log::error!("Failed to import catalog `{}`: {}", path, e);
					return;
				}
			};
			if !import.rejected.is_empty() {
				log::warn!("{} of {} catalog rows rejected at import.", import.rejected.len(), import.rejected.len() + import.catalog.len());
			}
			if let Err(e) = import.catalog.save_to_disk(&config) {
				log::warn!("Failed to cache imported catalog: {}", e);
			}
			import.catalog
		},
		None => {
			match Catalog::load_from_disk(&config) {
				Ok(catalog) => catalog,
				Err(e) => {
					log::error!("No cached catalog available ({}), import one with --catalog.", e);
					return;
				}
			}
		}
	};

	let baseline = match parsed_options.opt_str("baseline") {
		Some(path) => {
			match std::fs::read_to_string(&path) {
				Ok(data) => data.lines().map(|l| l.trim()).filter(|l| !l.is_empty()).collect::<BaselineSet>(),
				Err(e) => {
					log::error!("Failed to read baseline file `{}`: {}", path, e);
					return;
				}
			}
		},
		None => BaselineSet::r_distribution(),
	};

	let mut builder = GraphBuilder::new(&catalog, snapshot_date)
		.baseline(baseline.clone())
		.exclude_baseline(!parsed_options.opt_present("keep-baseline"));
	if let Some(fields) = parsed_options.opt_str("fields") {
		builder = builder.dependency_fields(fields.split(','));
	}
	let graph = builder.build();

	let allowed_sources = parsed_options.opt_str("s")
		.map(|s| s.split(',').map(|s| s.to_string()).collect::<HashSet<_>>())
		.unwrap_or_else(|| HashSet::from([from_source.clone()]));

	let mut installable = snapdep_core::installability_resolver::installable_from_source(
		&graph, &from_source, &allowed_sources, &baseline
	).into_iter().collect::<Vec<_>>();
	installable.sort();

	log::info!("{} installable packages from `{}` at {}.", installable.len(), from_source, snapshot_date);
	for package in installable {
		println!("{}", package);
	}
}
