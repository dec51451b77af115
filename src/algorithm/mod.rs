pub mod traits;
pub mod path;
pub mod path_search;
pub mod parent_pointer;

pub use traits::{unreachable_weight, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
