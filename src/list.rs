//! A doubly linked list. Every element lives in its own heap node that the
//! [`List`] owns; nodes point at their neighbours through `prev`/`next` links
//! that never own anything. This is the container handed back by the
//! traversals of a [`Tree`][crate::tree::Tree].
//!
//! # Examples
//!
//! ```
//! use linked_bst::error::Error;
//! use linked_bst::list::List;
//!
//! let mut list = List::new();
//! list.push_back(2);
//! list.push_front(1);
//! list.insert(3, 2).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list[0], 1);
//! assert_eq!(list.search(&3), 2);
//!
//! // `search` hands back the length when nothing matches.
//! assert_eq!(list.search(&42), list.len());
//!
//! // Indices past the end are reported instead of walked off of.
//! assert_eq!(list.erase(7), Err(Error::IndexOutOfRange { index: 7, len: 3 }));
//!
//! // Concatenation copies both sides into a brand new list.
//! let joined = list.concatenate(&list);
//! assert_eq!(joined.len(), 6);
//! assert_eq!(list.len(), 3);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::error::{Error, Result};

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node and gives up the `Box`. The list that links it in becomes its owner and
    /// is the only thing allowed to turn it back into a `Box`.
    fn new_leaked(value: T, prev: Link<T>, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { value, prev, next })))
    }
}

/// A doubly linked list that owns its nodes.
pub struct List<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: A `List` owns its nodes outright, exactly like a `Box<Node<T>>` chain would, so it can
// move or be shared across threads whenever `T` can.
unsafe impl<T: Send> Send for List<T> {}
unsafe impl<T: Sync> Sync for List<T> {}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> List<T> {
    /// Creates an empty `List`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` in front of the current first element.
    pub fn push_front(&mut self, value: T) {
        let node = Node::new_leaked(value, None, self.head);
        match self.head {
            // SAFETY: `old_head` is a live node owned by this list and we hold `&mut self`, so
            // nobody else is looking at it.
            Some(mut old_head) => unsafe { old_head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;

        self.debug_check_link(Some(node), self.link_after(node));
    }

    /// Adds `value` after the current last element.
    pub fn push_back(&mut self, value: T) {
        let node = Node::new_leaked(value, self.tail, None);
        match self.tail {
            // SAFETY: See `push_front`.
            Some(mut old_tail) => unsafe { old_tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;

        self.debug_check_link(self.link_before(node), Some(node));
    }

    /// Inserts `value` so that it ends up at position `index`, shifting everything from `index`
    /// onwards back by one. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index > len()`. The list is left untouched.
    pub fn insert(&mut self, value: T, index: usize) -> Result<()> {
        if index > self.len {
            log::debug!("insert at {index} rejected, list has {} elements", self.len);
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len {
            self.push_back(value);
            return Ok(());
        }

        let mut next = self.node_at(index).expect("0 < index < len");
        // SAFETY: `next` is a live, non-head node of this list so it has a live predecessor.
        // Both are only reachable through `self`, which we borrow mutably.
        let node = unsafe {
            let mut prev = next.as_ref().prev.expect("non-head node has a predecessor");
            let node = Node::new_leaked(value, Some(prev), Some(next));
            prev.as_mut().next = Some(node);
            next.as_mut().prev = Some(node);
            node
        };
        self.len += 1;

        self.debug_check_link(self.link_before(node), Some(node));
        self.debug_check_link(Some(node), self.link_after(node));
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len()`. The list is left untouched.
    pub fn erase(&mut self, index: usize) -> Result<T> {
        match self.node_at(index) {
            // SAFETY: `node_at` only hands out live nodes of this list.
            Some(node) => Ok(unsafe { self.unlink(node) }),
            None => {
                log::debug!("erase at {index} rejected, list has {} elements", self.len);
                Err(Error::IndexOutOfRange {
                    index,
                    len: self.len,
                })
            }
        }
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] when the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        match self.head {
            // SAFETY: The head is a live node of this list.
            Some(head) => Ok(unsafe { self.unlink(head) }),
            None => Err(Error::EmptyStructure("pop_front")),
        }
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStructure`] when the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        match self.tail {
            // SAFETY: The tail is a live node of this list.
            Some(tail) => Ok(unsafe { self.unlink(tail) }),
            None => Err(Error::EmptyStructure("pop_back")),
        }
    }

    /// Returns the position of the first element equal to `value`, or `len()` when there is none.
    pub fn search(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value).unwrap_or(self.len)
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.search(value) != self.len
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        match self.node_at(index) {
            // SAFETY: `node_at` only hands out live nodes and the returned reference borrows
            // `self`, so the node can't be freed while it's alive.
            Some(node) => Ok(unsafe { &(*node.as_ptr()).value }),
            None => Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        match self.node_at(index) {
            // SAFETY: As in `get`, plus the `&mut self` borrow rules out any other reference into
            // the list for as long as the returned one lives.
            Some(node) => Ok(unsafe { &mut (*node.as_ptr()).value }),
            None => Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// The first element, if any.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: See `get`.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// The last element, if any.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: See `get`.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// The first element mutably, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: See `get_mut`.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// The last element mutably, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: See `get_mut`.
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Builds a new list holding copies of this list's elements followed by copies of `other`'s.
    /// Neither list is changed.
    ///
    /// ```
    /// use linked_bst::list::List;
    ///
    /// let a: List<_> = [1, 2].into_iter().collect();
    /// let b: List<_> = [3].into_iter().collect();
    ///
    /// let c = a.concatenate(&b);
    /// assert_eq!(c.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// assert_eq!(a.len() + b.len(), c.len());
    /// ```
    pub fn concatenate(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Removes and drops every element, front to back.
    pub fn clear(&mut self) {
        while let Some(head) = self.head {
            // SAFETY: The head is a live node of this list.
            drop(unsafe { self.unlink(head) });
        }
    }

    /// Iterates over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Iterates mutably over the elements from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Finds the node at `index`, starting from whichever end is closer.
    fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }

        // SAFETY (both loops): every link we follow belongs to a live node of this list and there
        // are at least `len` of them, so we never step past either end.
        if index <= self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|node| unsafe { node.as_ref().next });
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in index + 1..self.len {
                cursor = cursor.and_then(|node| unsafe { node.as_ref().prev });
            }
            cursor
        }
    }

    /// Detaches `node`, stitches its neighbours back together and frees it.
    ///
    /// # Safety
    ///
    /// `node` must be a live node of this list. It is dangling once this returns.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        // SAFETY: The caller promises the node came from `Node::new_leaked` and is still linked
        // into this list, so we are its only owner.
        let Node { value, prev, next } = *unsafe { Box::from_raw(node.as_ptr()) };

        // SAFETY: The neighbours are live nodes of this list and nothing else references them
        // while we hold `&mut self`.
        unsafe {
            match prev {
                Some(mut prev) => prev.as_mut().next = next,
                None => self.head = next,
            }
            match next {
                Some(mut next) => next.as_mut().prev = prev,
                None => self.tail = prev,
            }
        }
        self.len -= 1;

        self.debug_check_link(prev, next);
        value
    }

    fn link_before(&self, node: NonNull<Node<T>>) -> Link<T> {
        // SAFETY: Only called with live nodes of this list.
        unsafe { node.as_ref().prev }
    }

    fn link_after(&self, node: NonNull<Node<T>>) -> Link<T> {
        // SAFETY: Only called with live nodes of this list.
        unsafe { node.as_ref().next }
    }

    /// In debug builds, checks that `prev` and `next` are adjacent: each points at the other, or
    /// the list's `head`/`tail` stands in for a missing side.
    fn debug_check_link(&self, prev: Link<T>, next: Link<T>) {
        if cfg!(debug_assertions) {
            match prev {
                Some(prev) => assert_eq!(self.link_after(prev), next),
                None => assert_eq!(self.head, next),
            }
            match next {
                Some(next) => assert_eq!(self.link_before(next), prev),
                None => assert_eq!(self.tail, prev),
            }
            assert_eq!(self.head.is_none(), self.len == 0);
        }
    }

    /// Walks the whole list checking every link and the element count.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let mut count = 0;
        let mut prev: Link<T> = None;
        let mut cursor = self.head;
        while let Some(node) = cursor {
            assert_eq!(self.link_before(node), prev);
            count += 1;
            prev = cursor;
            cursor = self.link_after(node);
        }
        assert_eq!(self.tail, prev);
        assert_eq!(count, self.len);
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    /// # Panics
    ///
    /// When `index >= len()`. Use [`List::get`] to get an [`Error`] instead.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    /// # Panics
    ///
    /// When `index >= len()`. Use [`List::get_mut`] to get an [`Error`] instead.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Ok(value) => value,
            Err(_) => panic!("{}", Error::IndexOutOfRange { index, len }),
        }
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Reuses this list's nodes, overwriting their values in place, and only allocates or frees
    /// the difference in length.
    fn clone_from(&mut self, source: &Self) {
        while self.len > source.len {
            drop(self.pop_back());
        }
        let mut values = source.iter();
        for (dst, src) in self.iter_mut().zip(&mut values) {
            dst.clone_from(src);
        }
        self.extend(values.cloned());
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Borrowing iterator returned by [`List::iter`].
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| {
            // SAFETY: The iterator borrows the list for `'a`, so every node it still has to visit
            // stays alive and unaliased by `&mut` for that long.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|node| {
            // SAFETY: See `next`.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Mutably borrowing iterator returned by [`List::iter_mut`].
pub struct IterMut<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| {
            // SAFETY: The iterator holds the list's unique borrow for `'a` and hands out each node
            // at most once (`len` stops the two ends from crossing), so no two `&mut` overlap.
            let node = unsafe { &mut *node.as_ptr() };
            self.len -= 1;
            self.head = node.next;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|node| {
            // SAFETY: See `next`.
            let node = unsafe { &mut *node.as_ptr() };
            self.len -= 1;
            self.tail = node.prev;
            &mut node.value
        })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator returned by [`List::into_iter`].
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> List<i32> {
        values.iter().copied().collect()
    }

    fn to_vec(list: &List<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn pushes_keep_order() {
        let mut list = List::new();
        list.push_back(2);
        list.push_back(3);
        list.push_front(1);
        list.push_front(0);

        assert_eq!(list.len(), 4);
        for i in 0..4 {
            assert_eq!(list[i], i as i32);
        }
        list.assert_invariants();
    }

    #[test]
    fn pop_returns_what_was_pushed() {
        let mut list = List::new();
        list.push_back(7);
        assert_eq!(list.pop_back(), Ok(7));
        list.push_front(8);
        assert_eq!(list.pop_front(), Ok(8));
        assert!(list.is_empty());
        list.assert_invariants();
    }

    #[test]
    fn pop_on_empty_fails() {
        let mut list: List<i32> = List::new();
        assert_eq!(list.pop_front(), Err(Error::EmptyStructure("pop_front")));
        assert_eq!(list.pop_back(), Err(Error::EmptyStructure("pop_back")));
    }

    #[test]
    fn insert_past_end_fails_without_change() {
        let mut list = List::new();
        assert_eq!(
            list.insert(5, 1),
            Err(Error::IndexOutOfRange { index: 1, len: 0 })
        );
        assert!(list.is_empty());

        list.push_back(1);
        assert_eq!(
            list.insert(5, 2),
            Err(Error::IndexOutOfRange { index: 2, len: 1 })
        );
        assert_eq!(to_vec(&list), [1]);
    }

    #[test]
    fn insert_at_every_position() {
        let mut list = List::new();
        list.insert(1, 0).unwrap();
        list.insert(3, 1).unwrap();
        list.insert(2, 1).unwrap();
        list.insert(0, 0).unwrap();
        list.insert(4, 4).unwrap();

        assert_eq!(to_vec(&list), [0, 1, 2, 3, 4]);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&4));
        list.assert_invariants();
    }

    #[test]
    fn erase_head_middle_and_tail() {
        let mut list = list_of(&[0, 1, 2, 3, 4]);

        assert_eq!(list.erase(2), Ok(2));
        list.assert_invariants();
        assert_eq!(list.erase(0), Ok(0));
        list.assert_invariants();
        assert_eq!(list.erase(2), Ok(4));
        list.assert_invariants();

        assert_eq!(to_vec(&list), [1, 3]);
        assert_eq!(
            list.erase(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(to_vec(&list), [1, 3]);
    }

    #[test]
    fn erase_last_element_empties() {
        let mut list = list_of(&[9]);
        assert_eq!(list.erase(0), Ok(9));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.assert_invariants();
    }

    #[test]
    fn search_finds_first_match_or_len() {
        let list = list_of(&[4, 5, 4, 6]);
        assert_eq!(list.search(&4), 0);
        assert_eq!(list.search(&6), 3);
        assert_eq!(list.search(&7), 4);
        assert!(list.contains(&5));
        assert!(!list.contains(&7));
    }

    #[test]
    fn indexing_walks_from_both_ends() {
        let mut list = list_of(&[10, 11, 12, 13, 14, 15, 16]);
        for i in 0..7 {
            assert_eq!(list.get(i), Ok(&(10 + i as i32)));
        }
        *list.get_mut(5).unwrap() = 50;
        list[1] = 110;

        assert_eq!(to_vec(&list), [10, 110, 12, 13, 14, 50, 16]);
        assert_eq!(
            list.get(7),
            Err(Error::IndexOutOfRange { index: 7, len: 7 })
        );
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for length 3")]
    fn index_operator_panics_past_end() {
        let list = list_of(&[1, 2, 3]);
        let _value = &list[3];
    }

    #[test]
    fn concatenate_copies_both_operands() {
        let a = list_of(&[1, 2]);
        let b = list_of(&[3, 4, 5]);
        let c = a.concatenate(&b);

        assert_eq!(to_vec(&c), [1, 2, 3, 4, 5]);
        assert_eq!(to_vec(&a), [1, 2]);
        assert_eq!(to_vec(&b), [3, 4, 5]);
        c.assert_invariants();

        let empty = List::new();
        assert_eq!(a.concatenate(&empty), a);
        assert_eq!(empty.concatenate(&a), a);
    }

    #[test]
    fn equality_is_length_and_values() {
        assert_eq!(list_of(&[1, 2, 3]), list_of(&[1, 2, 3]));
        assert_ne!(list_of(&[1, 2, 3]), list_of(&[1, 2]));
        assert_ne!(list_of(&[1, 2, 3]), list_of(&[1, 3, 2]));
        assert_eq!(List::<i32>::new(), List::new());
    }

    #[test]
    fn clone_is_deep() {
        let original = list_of(&[1, 2, 3]);
        let mut copy = original.clone();
        copy[0] = 100;
        copy.push_back(4);

        assert_eq!(to_vec(&original), [1, 2, 3]);
        assert_eq!(to_vec(&copy), [100, 2, 3, 4]);
    }

    #[test]
    fn clone_from_shrinks_and_grows() {
        let source = list_of(&[1, 2, 3]);

        let mut longer = list_of(&[9, 9, 9, 9, 9]);
        longer.clone_from(&source);
        assert_eq!(longer, source);
        longer.assert_invariants();

        let mut shorter = list_of(&[9]);
        shorter.clone_from(&source);
        assert_eq!(shorter, source);
        shorter.assert_invariants();
    }

    #[test]
    fn iterators_meet_in_the_middle() {
        let mut list = list_of(&[1, 2, 3, 4]);

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        for value in list.iter_mut().rev() {
            *value *= 10;
        }
        assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), [40, 30, 20, 10]);
    }

    #[test]
    fn drops_every_value() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut list = List::new();
            for _ in 0..10 {
                list.push_back(Rc::clone(&tracker));
            }
            drop(list.erase(3));
            drop(list.pop_front());
            assert_eq!(Rc::strong_count(&tracker), 9);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn debug_lists_values() {
        assert_eq!(format!("{:?}", list_of(&[1, 2])), "[1, 2]");
    }
}
