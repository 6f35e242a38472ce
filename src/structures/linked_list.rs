use std::{fmt, mem, ptr::NonNull};

use container_core::{Container, ContainerError, Describe, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

fn broken_chain(index: usize) -> ! {
    panic!("Linked list consistency broken: no node at index {}", index)
}

/**
 * Singly linked list
 * head -> Node[value|next] -> Node[value|next] -> ... -> Node[value|None] <- tail
 *
 * Every node is owned through the `next` chain that starts at `head`.
 * `tail` only points at the last node of that chain so `append` stays O(1).
 */
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    tail: Option<NonNull<Node<T>>>,
    length: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            length: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        match (self.head.is_some(), self.tail.is_some(), self.length) {
            (false, false, 0) => true,
            (true, true, length) if length > 0 => false,
            _ => panic!("Linked list consistency broken: head, tail and length disagree"),
        }
    }

    /**
     * Append
     * head -> ... -> tail turns into
     * head -> ... -> prev_tail -> new_tail
     */
    pub fn append(&mut self, value: T) {
        let mut new_tail = Box::new(Node { value, next: None });
        let tail = NonNull::from(&mut *new_tail);
        if self.is_empty() {
            self.head = Some(new_tail);
        } else if let Some(prev_tail) = self.tail {
            // SAFETY: a non-empty list caches the last node of its own chain
            unsafe { (*prev_tail.as_ptr()).next = Some(new_tail) };
        }
        self.tail = Some(tail);
        self.length += 1;
    }

    /**
     * Prepend
     * head -> next -> next ... turns into
     * new_head -> prev_head -> next ...
     */
    pub fn prepend(&mut self, value: T) {
        let was_empty = self.is_empty();
        let mut new_head = Box::new(Node {
            value,
            next: self.head.take(),
        });
        if was_empty {
            self.tail = Some(NonNull::from(&mut *new_head));
        }
        self.head = Some(new_head);
        self.length += 1;
    }

    /// Inserts `value` so that it ends up at `index`. `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.length {
            return Err(ContainerError::IndexOutOfRange {
                index,
                length: self.length,
            });
        }

        if index == 0 {
            self.prepend(value);
        } else if index == self.length {
            self.append(value);
        } else {
            let prev = self.node_mut(index - 1);
            let next = prev.next.take();
            prev.next = Some(Box::new(Node { value, next }));
            self.length += 1;
        }
        Ok(())
    }

    /// Unlinks the node at `index` and hands its value back.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let removed = if index == 0 {
            let mut old_head = self.head.take().unwrap_or_else(|| broken_chain(0));
            self.head = old_head.next.take();
            if self.head.is_none() {
                self.tail = None;
            }
            old_head
        } else {
            let prev = self.node_mut(index - 1);
            let mut removed = prev.next.take().unwrap_or_else(|| broken_chain(index));
            prev.next = removed.next.take();
            if prev.next.is_none() {
                let new_tail = NonNull::from(prev);
                self.tail = Some(new_tail);
            }
            removed
        };
        self.length -= 1;
        Ok(removed.value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.length {
            return None;
        }
        Some(&self.node(index).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.length {
            return None;
        }
        Some(&mut self.node_mut(index).value)
    }

    /// Overwrites the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.check_index(index)?;
        Ok(mem::replace(&mut self.node_mut(index).value, value))
    }

    /// Position of the first value equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|current| current == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|current| current == value)
    }

    /// Snapshot of the current values, head first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.length,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.length,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.length {
            Ok(())
        } else {
            Err(ContainerError::IndexOutOfRange {
                index,
                length: self.length,
            })
        }
    }

    /// Walks from head. `index` must be below `length`.
    fn node(&self, index: usize) -> &Node<T> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref());
        }
        current.unwrap_or_else(|| broken_chain(index))
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref_mut());
        }
        current.unwrap_or_else(|| broken_chain(index))
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.tail = None;
        let mut current = self.head.take();
        while let Some(mut boxed_node) = current {
            current = boxed_node.next.take();
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Container for SinglyLinkedList<T> {
    const KIND: &'static str = "SinglyLinkedList";

    fn length(&self) -> usize {
        self.length
    }

    fn is_empty(&self) -> bool {
        SinglyLinkedList::is_empty(self)
    }
}

impl<T: fmt::Debug> Describe for SinglyLinkedList<T> {
    fn describe(&self) -> String {
        format!("{} {{ length: {}, head: {:?} }}", Self::KIND, self.length, self.get(0))
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove(0).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
