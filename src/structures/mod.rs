pub mod circular_queue;
pub mod double_linked_list;
pub mod dequeue;
pub mod linked_list;
pub mod queue;
pub mod stack;
