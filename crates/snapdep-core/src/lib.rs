pub mod error;
pub use error::Result;
pub use error::Error;

pub mod catalog;
pub use catalog::Catalog;
pub use catalog::RawRecord;

pub mod baseline;
pub use baseline::BaselineSet;

pub mod package_graph;
pub use package_graph::PackageGraph;
pub use package_graph::GraphBuilder;

pub mod installability_resolver;

pub mod config;
pub use config::Config;
