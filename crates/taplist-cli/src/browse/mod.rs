//! Browse pipelines for the CLI: the catalog listing, the featured-beer
//! store lookup, and postal-code management. `session` is the composition
//! root that wires components to their collaborators once per run.

mod catalog;
mod postal;
mod session;
mod stores;

pub(crate) use catalog::run_browse_beers;
pub(crate) use postal::run_postal;
pub(crate) use stores::run_find_stores;
