pub mod path_list;
pub mod priority_queue;

pub use path_list::PathList;
pub use priority_queue::PriorityQueueSet;
