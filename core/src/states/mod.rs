//! Reference Dataset: the bundled, immutable table of U.S. states.

mod data;
mod filter;
mod format;
mod types;

pub use data::{dataset, Dataset};
pub use filter::{ContigFilter, NON_CONTIGUOUS_CODES};
pub use format::format_population;
pub use types::{StateCode, StateRecord};
