use std::fmt;

use container_core::{Container, ContainerError, Describe, Result};

use super::linked_list::{self, SinglyLinkedList};

/**
 * LIFO stack, the top lives at the head of the list
 */
pub struct Stack<T> {
    values: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
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

    pub fn push(&mut self, value: T) {
        self.values.prepend(value)
    }

    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::empty("stack", "pop"));
        }
        self.values.remove(0)
    }

    pub fn peek(&self) -> Result<&T> {
        self.values
            .get(0)
            .ok_or_else(|| ContainerError::empty("stack", "peek"))
    }

    /// Value `depth` slots below the top, `peek_at(0)` is the top.
    pub fn peek_at(&self, depth: usize) -> Option<&T> {
        self.values.get(depth)
    }

    /// Top to bottom.
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Pushes in iteration order, so the last item ends up on top.
impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = linked_list::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = linked_list::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Container for Stack<T> {
    const KIND: &'static str = "Stack";

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: fmt::Debug> Describe for Stack<T> {
    fn describe(&self) -> String {
        format!("{} {{ length: {}, top: {:?} }}", Self::KIND, self.len(), self.peek().ok())
    }
}
