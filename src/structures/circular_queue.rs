use std::fmt;

use container_core::{Container, ContainerError, Describe, Result};

/// What `enqueue` does once every slot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Fail with `ContainerError::Overflow`.
    #[default]
    Reject,
    /// Replace the oldest element.
    Overwrite,
}

impl From<bool> for OverflowPolicy {
    fn from(overwrite_if_full: bool) -> Self {
        if overwrite_if_full {
            Self::Overwrite
        } else {
            Self::Reject
        }
    }
}

/**
 * Fixed capacity ring buffer
 * buffer[0] ... buffer[capacity - 1], `None` marks an empty slot.
 * Live elements run from `front` for `size` slots, wrapping at the end,
 * and `rear` is the next slot to write.
 */
#[derive(Clone)]
pub struct CircularQueue<T> {
    buffer: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    size: usize,
    policy: OverflowPolicy,
}

impl<T> CircularQueue<T> {
    /// Queue that rejects enqueues once full.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_policy(capacity, OverflowPolicy::Reject)
    }

    pub fn with_policy(capacity: usize, policy: OverflowPolicy) -> Result<Self> {
        if capacity == 0 {
            return Err(ContainerError::InvalidConfiguration(
                "capacity for a circular queue must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            buffer: (0..capacity).map(|_| None).collect(),
            front: 0,
            rear: 0,
            size: 0,
            policy,
        })
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn overwrite_if_full(&self) -> bool {
        self.policy == OverflowPolicy::Overwrite
    }

    /// Writes `value` at the rear. Under `Overwrite` a full queue hands back
    /// the element it evicted.
    pub fn enqueue(&mut self, value: T) -> Result<Option<T>> {
        self.enqueue_slot(Some(value))
    }

    /// Same as `enqueue` for a raw slot, e.g. one taken out of another ring.
    /// The empty marker itself is refused.
    pub fn enqueue_slot(&mut self, slot: Option<T>) -> Result<Option<T>> {
        let value = slot.ok_or(ContainerError::InvalidValue)?;
        let full = self.is_full();
        if full && self.policy == OverflowPolicy::Reject {
            return Err(ContainerError::Overflow {
                capacity: self.capacity(),
            });
        }
        if !full && self.buffer[self.rear].is_some() {
            panic!(
                "Circular queue consistency broken: rear slot {} is occupied",
                self.rear
            );
        }

        let evicted = self.buffer[self.rear].replace(value);
        self.rear = self.advance(self.rear);
        if full {
            // the oldest element is gone, front follows rear
            self.front = self.rear;
        } else {
            self.size += 1;
        }
        Ok(evicted)
    }

    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::empty("circular queue", "dequeue"));
        }
        let value = match self.buffer[self.front].take() {
            Some(value) => value,
            None => Self::empty_slot(self.front),
        };
        self.front = self.advance(self.front);
        self.size -= 1;
        Ok(value)
    }

    pub fn peek(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ContainerError::empty("circular queue", "peek"));
        }
        Ok(self.occupied(self.front))
    }

    /// Front to rear, starting at `front` rather than at slot 0.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            position: self.front,
            remaining: self.size,
        }
    }

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    fn occupied(&self, index: usize) -> &T {
        match &self.buffer[index] {
            Some(value) => value,
            None => Self::empty_slot(index),
        }
    }

    fn empty_slot(index: usize) -> ! {
        panic!("Circular queue consistency broken: live slot {} is empty", index)
    }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.policy == other.policy
            && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Container for CircularQueue<T> {
    const KIND: &'static str = "CircularQueue";

    fn length(&self) -> usize {
        self.size
    }
}

impl<T: fmt::Debug> Describe for CircularQueue<T> {
    fn describe(&self) -> String {
        let (front, rear) = if self.is_empty() {
            (None, None)
        } else {
            let last = (self.rear + self.capacity() - 1) % self.capacity();
            (Some(self.occupied(self.front)), Some(self.occupied(last)))
        };
        format!(
            "{} {{ size: {}, capacity: {}, front: {:?}, rear: {:?} }}",
            Self::KIND,
            self.size,
            self.capacity(),
            front,
            rear,
        )
    }
}

pub struct Iter<'a, T> {
    queue: &'a CircularQueue<T>,
    position: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.queue.occupied(self.position);
        self.position = self.queue.advance(self.position);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IntoIter<T>(CircularQueue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for CircularQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
