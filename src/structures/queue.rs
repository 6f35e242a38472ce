use std::fmt;

use container_core::{Container, ContainerError, Describe, Result};

use super::linked_list::{self, SinglyLinkedList};

/// FIFO queue. Enqueue appends through the list's tail cache, dequeue takes the head.
pub struct Queue<T> {
    values: SinglyLinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            values: SinglyLinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn enqueue(&mut self, value: T) {
        self.values.append(value)
    }

    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::empty("queue", "dequeue"));
        }
        self.values.remove(0)
    }

    pub fn peek(&self) -> Result<&T> {
        self.values
            .get(0)
            .ok_or_else(|| ContainerError::empty("queue", "peek"))
    }

    /// Front to rear.
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = linked_list::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = linked_list::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Container for Queue<T> {
    const KIND: &'static str = "Queue";

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: fmt::Debug> Describe for Queue<T> {
    fn describe(&self) -> String {
        format!("{} {{ length: {}, front: {:?} }}", Self::KIND, self.len(), self.peek().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::Queue;
    use container_core::{ContainerError, Describe};
    use quickcheck_macros::quickcheck;

    const TEST_VALS: [i64; 9] = [-100, -10, 0, 10, 20, 30, 40, 50, 60];

    #[test]
    fn empty_queue() {
        let mut queue = Queue::<i64>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(ContainerError::empty("queue", "dequeue")));
        assert_eq!(queue.peek(), Err(ContainerError::empty("queue", "peek")));
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn enqueue_and_dequeue() {
        let mut queue = Queue::new();
        for value in TEST_VALS {
            queue.enqueue(value);
        }
        assert_eq!(queue.len(), TEST_VALS.len());
        for value in TEST_VALS {
            assert_eq!(queue.peek(), Ok(&value));
            assert_eq!(queue.dequeue(), Ok(value));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn refills_after_draining() {
        let mut queue = Queue::new();
        queue.enqueue(123456);
        assert_eq!(queue.dequeue(), Ok(123456));
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn describe() {
        let queue: Queue<_> = TEST_VALS.into_iter().collect();
        assert_eq!(queue.describe(), "Queue { length: 9, front: Some(-100) }");
        assert_eq!(Queue::<i64>::new().describe(), "Queue { length: 0, front: None }");
    }

    #[quickcheck]
    fn drains_in_enqueue_order(values: Vec<i32>) -> bool {
        let mut queue = Queue::new();
        queue.extend(values.iter().copied());
        let mut drained = Vec::new();
        while let Ok(value) = queue.dequeue() {
            drained.push(value);
        }
        drained == values && queue.is_empty()
    }
}
