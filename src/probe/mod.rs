//! Probe primitives shared by the resolvers.
//!
//! Every probe is a single blocking check against the host:
//!
//! - `find_on_search_path`: `PATH` lookup via the `which` crate
//! - `existing_file` / `existing_dir`: existence checks
//! - `registry_path`: registry read that swallows expected failures
//! - `query_version` / `parse_version`: `--version` output of an executable

mod parser;
mod path_finder;
mod registry;
mod version;

pub(crate) use parser::parse_version;
pub(crate) use path_finder::{existing_dir, existing_file, find_on_search_path};
pub(crate) use registry::registry_path;
pub(crate) use version::query_version;
