use std::fmt;

use container_core::{Container, ContainerError, Describe, Result};

use super::double_linked_list::{self, DoublyLinkedList};

/**
 * Double-ended queue
 * front = head of the list, back = tail of the list
 */
pub struct Dequeue<T> {
    values: DoublyLinkedList<T>,
}

impl<T> Dequeue<T> {
    pub fn new() -> Self {
        Self {
            values: DoublyLinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adds to the back.
    pub fn enqueue(&mut self, value: T) {
        self.values.append(value)
    }

    pub fn enqueue_front(&mut self, value: T) {
        self.values.prepend(value)
    }

    /// Removes from the front.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::empty("dequeue", "dequeue"));
        }
        self.values.remove(0)
    }

    pub fn dequeue_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::empty("dequeue", "dequeue_back"));
        }
        self.values.remove(self.len() - 1)
    }

    pub fn peek(&self) -> Result<&T> {
        self.values
            .get(0)
            .ok_or_else(|| ContainerError::empty("dequeue", "peek"))
    }

    pub fn peek_back(&self) -> Result<&T> {
        self.len()
            .checked_sub(1)
            .and_then(|last| self.values.get(last))
            .ok_or_else(|| ContainerError::empty("dequeue", "peek_back"))
    }

    /// Front to back; `rev()` walks back to front.
    pub fn iter(&self) -> double_linked_list::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T> Default for Dequeue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Dequeue<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Dequeue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Dequeue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter)
    }
}

impl<T> FromIterator<T> for Dequeue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Dequeue<T> {
    type Item = T;
    type IntoIter = double_linked_list::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Dequeue<T> {
    type Item = &'a T;
    type IntoIter = double_linked_list::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Container for Dequeue<T> {
    const KIND: &'static str = "Dequeue";

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: fmt::Debug> Describe for Dequeue<T> {
    fn describe(&self) -> String {
        format!(
            "{} {{ length: {}, front: {:?}, back: {:?} }}",
            Self::KIND,
            self.len(),
            self.peek().ok(),
            self.peek_back().ok(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Dequeue;
    use container_core::{ContainerError, Describe};
    use quickcheck_macros::quickcheck;
    use std::collections::VecDeque;

    const TEST_VALS: [i64; 9] = [-100, -10, 0, 10, 20, 30, 40, 50, 60];

    #[test]
    fn empty_dequeue() {
        let mut dequeue = Dequeue::<i64>::new();
        assert!(dequeue.is_empty());
        assert_eq!(dequeue.dequeue(), Err(ContainerError::empty("dequeue", "dequeue")));
        assert_eq!(
            dequeue.dequeue_back(),
            Err(ContainerError::empty("dequeue", "dequeue_back"))
        );
        assert_eq!(dequeue.peek(), Err(ContainerError::empty("dequeue", "peek")));
        assert_eq!(dequeue.peek_back(), Err(ContainerError::empty("dequeue", "peek_back")));
        assert_eq!(dequeue.len(), 0);
    }

    #[test]
    fn enqueue_and_dequeue() {
        let mut dequeue = Dequeue::new();
        for value in TEST_VALS {
            dequeue.enqueue(value);
        }
        for value in TEST_VALS {
            assert_eq!(dequeue.peek(), Ok(&value));
            assert_eq!(dequeue.dequeue(), Ok(value));
        }
        assert!(dequeue.is_empty());
    }

    #[test]
    fn enqueue_front_and_dequeue_back() {
        let mut dequeue = Dequeue::new();
        for value in TEST_VALS {
            dequeue.enqueue_front(value);
        }
        for value in TEST_VALS {
            assert_eq!(dequeue.peek_back(), Ok(&value));
            assert_eq!(dequeue.dequeue_back(), Ok(value));
        }
        assert!(dequeue.is_empty());
    }

    #[test]
    fn mixed_ends() {
        let mut dequeue = Dequeue::new();
        dequeue.enqueue(1);
        dequeue.enqueue(2);
        dequeue.enqueue_front(0);
        assert_eq!(dequeue.peek(), Ok(&0));
        assert_eq!(dequeue.peek_back(), Ok(&2));
        assert_eq!(dequeue.dequeue_back(), Ok(2));
        assert_eq!(dequeue.len(), 2);
        assert_eq!(dequeue.iter().rev().copied().collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(
            dequeue.describe(),
            "Dequeue { length: 2, front: Some(0), back: Some(1) }"
        );
    }

    #[quickcheck]
    fn behaves_like_vec_deque(ops: Vec<(u8, i32)>) -> bool {
        let mut dequeue = Dequeue::new();
        let mut model = VecDeque::new();

        for (op, value) in ops {
            let agrees = match op % 6 {
                0 => {
                    dequeue.enqueue(value);
                    model.push_back(value);
                    true
                }
                1 => {
                    dequeue.enqueue_front(value);
                    model.push_front(value);
                    true
                }
                2 => dequeue.dequeue().ok() == model.pop_front(),
                3 => dequeue.dequeue_back().ok() == model.pop_back(),
                4 => dequeue.peek().ok() == model.front(),
                _ => dequeue.peek_back().ok() == model.back(),
            };
            if !agrees || dequeue.len() != model.len() {
                return false;
            }
        }
        dequeue.into_iter().eq(model)
    }
}
