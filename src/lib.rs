//! Linear containers built on explicit list engines.
//!
//! `SinglyLinkedList` backs `Stack` and `Queue`, `DoublyLinkedList` backs
//! `Dequeue`, and `CircularQueue` is a fixed-capacity ring over a slot array.

pub mod structures;

pub use container_core::{Container, ContainerError, Describe, Result};
pub use structures::{
    circular_queue::{CircularQueue, OverflowPolicy},
    dequeue::Dequeue,
    double_linked_list::DoublyLinkedList,
    linked_list::SinglyLinkedList,
    queue::Queue,
    stack::Stack,
};

#[cfg(test)]
mod tests {
    use super::{
        CircularQueue, Container, Dequeue, DoublyLinkedList, OverflowPolicy, Queue,
        SinglyLinkedList, Stack,
    };

    fn sizes<C: Container>(container: &C) -> (usize, bool) {
        (container.length(), container.is_empty())
    }

    #[test]
    fn containers_share_the_same_surface() {
        let mut stack = Stack::new();
        let mut queue = Queue::new();
        let mut dequeue = Dequeue::new();
        let mut ring = CircularQueue::with_policy(2, OverflowPolicy::Overwrite).unwrap();

        for value in 1..=3 {
            stack.push(value);
            queue.enqueue(value);
            dequeue.enqueue(value);
            ring.enqueue(value).unwrap();
        }

        assert_eq!(sizes(&stack), (3, false));
        assert_eq!(sizes(&queue), (3, false));
        assert_eq!(sizes(&dequeue), (3, false));
        assert_eq!(sizes(&ring), (2, false));

        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(dequeue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    /// No `Debug`, `Clone` or `PartialEq`.
    struct Opaque(u8);

    #[test]
    fn size_queries_need_no_element_bounds() {
        let mut stack = Stack::new();
        let mut queue = Queue::new();
        let mut dequeue = Dequeue::new();
        let mut singly = SinglyLinkedList::new();
        let mut doubly = DoublyLinkedList::new();
        let mut ring = CircularQueue::new(4).unwrap();

        assert_eq!(sizes(&stack), (0, true));
        assert_eq!(sizes(&ring), (0, true));

        for value in 0..2 {
            stack.push(Opaque(value));
            queue.enqueue(Opaque(value));
            dequeue.enqueue_front(Opaque(value));
            singly.append(Opaque(value));
            doubly.prepend(Opaque(value));
            assert!(ring.enqueue(Opaque(value)).is_ok());
        }

        assert_eq!(sizes(&stack), (2, false));
        assert_eq!(sizes(&queue), (2, false));
        assert_eq!(sizes(&dequeue), (2, false));
        assert_eq!(sizes(&singly), (2, false));
        assert_eq!(sizes(&doubly), (2, false));
        assert_eq!(sizes(&ring), (2, false));
        assert_eq!(singly.iter().map(|opaque| opaque.0).sum::<u8>(), 1);
    }
}
