pub mod path_sequence;
pub mod priority_queue;

pub use path_sequence::PathSequence;
pub use priority_queue::{Comparator, NaturalOrder, PriorityQueue};
