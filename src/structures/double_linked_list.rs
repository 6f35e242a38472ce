use std::{fmt, marker::PhantomData, mem, ptr::NonNull};

use container_core::{Container, ContainerError, Describe, Result};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
    // back reference, never used to free a node
    prev: Link<T>,
}

impl<T> Node<T> {
    fn alloc(value: T, prev: Link<T>, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next, prev })))
    }

    /// # Safety
    /// `node` must come from `Node::alloc` and must already be unlinked.
    unsafe fn free(node: NonNull<Self>) -> T {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.value
    }
}

fn broken_chain(index: usize) -> ! {
    panic!("Linked list consistency broken: no node at index {}", index)
}

/**
 * Doubly linked list
 * head -> <-[prev][Node(value)][next]-> <-[prev][Node(value)][next]-> ... <- tail
 */
pub struct DoublyLinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    length: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            length: 0,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        match (self.head, self.tail, self.length) {
            (None, None, 0) => true,
            (Some(_), Some(_), length) if length > 0 => false,
            _ => panic!("Linked list consistency broken: head, tail and length disagree"),
        }
    }

    pub fn append(&mut self, value: T) {
        let was_empty = self.is_empty();
        let node = Node::alloc(value, self.tail, None);
        if was_empty {
            self.head = Some(node);
        } else if let Some(tail) = self.tail {
            // SAFETY: a non-empty list has a live tail
            unsafe { (*tail.as_ptr()).next = Some(node) };
        }
        self.tail = Some(node);
        self.length += 1;
    }

    pub fn prepend(&mut self, value: T) {
        let was_empty = self.is_empty();
        let node = Node::alloc(value, None, self.head);
        if was_empty {
            self.tail = Some(node);
        } else if let Some(head) = self.head {
            // SAFETY: a non-empty list has a live head
            unsafe { (*head.as_ptr()).prev = Some(node) };
        }
        self.head = Some(node);
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
            let next = self.node(index);
            // SAFETY: `next` is an interior node, so it has a live predecessor
            unsafe {
                let prev = (*next.as_ptr()).prev.unwrap_or_else(|| broken_chain(index - 1));
                let node = Node::alloc(value, Some(prev), Some(next));
                (*prev.as_ptr()).next = Some(node);
                (*next.as_ptr()).prev = Some(node);
            }
            self.length += 1;
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let node = self.node(index);
        // SAFETY: `node` was just looked up in this list
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes the last value, `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let tail = self.tail.unwrap_or_else(|| broken_chain(self.length - 1));
        // SAFETY: `tail` belongs to this list
        Some(unsafe { self.unlink(tail) })
    }

    /// Removes the first value, `None` when empty.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let head = self.head.unwrap_or_else(|| broken_chain(0));
        // SAFETY: `head` belongs to this list
        Some(unsafe { self.unlink(head) })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.length {
            return None;
        }
        let node = self.node(index);
        // SAFETY: the node lives as long as the shared borrow of the list
        Some(unsafe { &(*node.as_ptr()).value })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.length {
            return None;
        }
        let node = self.node(index);
        // SAFETY: the exclusive borrow of the list covers the node
        Some(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Overwrites the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.check_index(index)?;
        let node = self.node(index);
        // SAFETY: the exclusive borrow of the list covers the node
        Ok(unsafe { mem::replace(&mut (*node.as_ptr()).value, value) })
    }

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
            head: self.head,
            tail: self.tail,
            remaining: self.length,
            marker: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.head,
            tail: self.tail,
            remaining: self.length,
            marker: PhantomData,
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

    /// Walks from whichever end is closer. `index` must be below `length`.
    fn node(&self, index: usize) -> NonNull<Node<T>> {
        // SAFETY: every link reachable from head or tail points to a live node
        let current = if index < self.length / 2 {
            (0..index).fold(self.head, |current, _| {
                current.and_then(|node| unsafe { (*node.as_ptr()).next })
            })
        } else {
            (0..self.length - index - 1).fold(self.tail, |current, _| {
                current.and_then(|node| unsafe { (*node.as_ptr()).prev })
            })
        };
        current.unwrap_or_else(|| broken_chain(index))
    }

    /// Splices `node` out and frees it.
    ///
    /// # Safety
    /// `node` must be a live node of this list.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        let (prev, next) = unsafe { ((*node.as_ptr()).prev, (*node.as_ptr()).next) };
        match (prev, next) {
            // sole node
            (None, None) => {
                self.head = None;
                self.tail = None;
            }
            // head
            (None, Some(next)) => {
                unsafe { (*next.as_ptr()).prev = None };
                self.head = Some(next);
            }
            // tail
            (Some(prev), None) => {
                unsafe { (*prev.as_ptr()).next = None };
                self.tail = Some(prev);
            }
            // interior
            (Some(prev), Some(next)) => unsafe {
                (*prev.as_ptr()).next = Some(next);
                (*next.as_ptr()).prev = Some(prev);
            },
        }
        self.length -= 1;
        unsafe { Node::free(node) }
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        self.length = 0;
        while let Some(node) = current {
            // SAFETY: nodes are reached through the owning `next` chain only
            current = unsafe { (*node.as_ptr()).next };
            drop(unsafe { Node::free(node) });
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Container for DoublyLinkedList<T> {
    const KIND: &'static str = "DoublyLinkedList";

    fn length(&self) -> usize {
        self.length
    }

    fn is_empty(&self) -> bool {
        DoublyLinkedList::is_empty(self)
    }
}

impl<T: fmt::Debug> Describe for DoublyLinkedList<T> {
    fn describe(&self) -> String {
        format!(
            "{} {{ length: {}, head: {:?}, tail: {:?} }}",
            Self::KIND,
            self.length,
            self.get(0),
            self.length.checked_sub(1).and_then(|last| self.get(last)),
        )
    }
}

pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.head?;
        // SAFETY: the list stays borrowed for 'a
        let node: &'a Node<T> = unsafe { &*node.as_ptr() };
        self.head = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.tail?;
        // SAFETY: the list stays borrowed for 'a
        let node: &'a Node<T> = unsafe { &*node.as_ptr() };
        self.tail = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.head?;
        // SAFETY: `remaining` stops both ends before they yield the same node twice
        let node: &'a mut Node<T> = unsafe { &mut *node.as_ptr() };
        self.head = node.next;
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.tail?;
        // SAFETY: see `next`
        let node: &'a mut Node<T> = unsafe { &mut *node.as_ptr() };
        self.tail = node.prev;
        self.remaining -= 1;
        Some(&mut node.value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
