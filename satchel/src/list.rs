//  Copyright 2026 satchel Project Authors
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Singly linked list over slab storage.

use std::fmt::Display;

use satchel_common::assert::OptionExt;
use slab::Slab;

use crate::error::{Error, Result};

#[derive(Debug)]
struct Node<T> {
    next: Option<usize>,

    data: T,
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Self { next: None, data }
    }
}

/// Singly linked list with forward-only links.
///
/// Each node points at its right-hand neighbor; the last node points at
/// nothing. Front operations are O(1), back removal is O(n) since there is no
/// backward link to follow.
#[derive(Debug)]
pub struct SinglyList<T> {
    head: Option<usize>,
    tail: Option<usize>,
    slab: Slab<Node<T>>,
    len: usize,
}

impl<T> Default for SinglyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            slab: Slab::new(),
            len: 0,
        }
    }

    /// Insert an element at the beginning of the list.
    pub fn push_front(&mut self, value: T) {
        let key = self.slab.insert(Node::new(value));
        self.slab[key].next = self.head;
        self.head = Some(key);
        if self.tail.is_none() {
            self.tail = Some(key);
        }
        self.len += 1;
    }

    /// Append an element to the end of the list.
    pub fn push_back(&mut self, value: T) {
        let key = self.slab.insert(Node::new(value));
        match self.tail {
            Some(tail) => self.slab[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.len += 1;
    }

    /// Insert an element at `index`, shifting later elements right.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds {
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

        let prev = self.node_at(index - 1);
        let key = self.slab.insert(Node::new(value));
        self.slab[key].next = self.slab[prev].next;
        self.slab[prev].next = Some(key);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the first element.
    ///
    /// Fails with [`Error::Empty`] on an empty list.
    pub fn pop_front(&mut self) -> Result<T> {
        let key = self.head.ok_or(Error::Empty)?;
        let node = self.slab.remove(key);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.data)
    }

    /// Remove and return the last element.
    ///
    /// Fails with [`Error::Empty`] on an empty list. O(n): the predecessor of
    /// the tail is found by walking from the head.
    pub fn pop_back(&mut self) -> Result<T> {
        let key = self.tail.ok_or(Error::Empty)?;
        let node = self.slab.remove(key);
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let prev = self.node_at(self.len - 2);
            self.slab[prev].next = None;
            self.tail = Some(prev);
        }
        self.len -= 1;
        Ok(node.data)
    }

    /// Get a reference to the first element.
    ///
    /// Fails with [`Error::Empty`] on an empty list.
    pub fn peek_front(&self) -> Result<&T> {
        self.head
            .map(|key| &self.slab[key].data)
            .ok_or(Error::Empty)
    }

    /// Get a reference to the last element.
    ///
    /// Fails with [`Error::Empty`] on an empty list.
    pub fn peek_back(&self) -> Result<&T> {
        self.tail
            .map(|key| &self.slab[key].data)
            .ok_or(Error::Empty)
    }

    /// Reverse the list in place by flipping every forward link once.
    ///
    /// Fails with [`Error::Empty`] on an empty list.
    pub fn reverse(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        let mut prev = None;
        let mut current = self.head;
        while let Some(key) = current {
            let next = self.slab[key].next;
            self.slab[key].next = prev;
            prev = current;
            current = next;
        }
        self.tail = self.head;
        self.head = prev;
        Ok(())
    }

    /// Sort the list ascending with adjacent-payload bubble passes.
    ///
    /// Passes repeat until one completes without a swap. Fails with
    /// [`Error::Empty`] on an empty list.
    pub fn sort(&mut self) -> Result<()>
    where
        T: Ord,
    {
        if self.is_empty() {
            return Err(Error::Empty);
        }

        let mut swapped = true;
        while swapped {
            swapped = false;
            let mut current = self.head;
            while let Some(key) = current {
                let next = self.slab[key].next;
                if let Some(next_key) = next {
                    // Distinct keys of live nodes, the pair lookup cannot fail.
                    if let Some((a, b)) = self.slab.get2_mut(key, next_key) {
                        if a.data > b.data {
                            std::mem::swap(&mut a.data, &mut b.data);
                            swapped = true;
                        }
                    }
                }
                current = next;
            }
        }
        Ok(())
    }

    /// Check whether the list reads the same forwards and backwards.
    ///
    /// Two indices walk inward over the element order and short-circuit on
    /// the first mismatch.
    pub fn is_palindrome(&self) -> bool
    where
        T: PartialEq,
    {
        let items: Vec<&T> = self.iter().collect();
        let mut min = 0;
        let mut max = items.len().saturating_sub(1);
        while min < max {
            if items[min] != items[max] {
                return false;
            }
            min += 1;
            max -= 1;
        }
        true
    }

    /// Get the element reference iterator of the list, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            key: self.head,
            list: self,
        }
    }

    /// Get the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the list like `[ 1 -> 2 -> nil ]`.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        let mut out = String::from("[ ");
        for item in self.iter() {
            out.push_str(&format!("{item} -> "));
        }
        out.push_str("nil ]");
        out
    }

    /// Walk from the head to the node at `index`.
    ///
    /// `index` MUST be within bounds.
    fn node_at(&self, index: usize) -> usize {
        let mut key = self.head;
        for _ in 0..index {
            key = key.and_then(|k| self.slab[k].next);
        }
        // The walk stays on live nodes while `index` is in bounds.
        unsafe { key.strict_unwrap_unchecked() }
    }
}

/// Element reference iterator over a [`SinglyList`], front to back.
#[derive(Debug)]
pub struct Iter<'a, T> {
    key: Option<usize>,
    list: &'a SinglyList<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.slab[self.key?];
        self.key = node.next;
        Some(&node.data)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn from_values(values: &[i32]) -> SinglyList<i32> {
        let mut list = SinglyList::new();
        for &v in values {
            list.push_back(v);
        }
        list
    }

    #[test]
    fn test_list_push_and_pop() {
        let mut list = from_values(&[1, 2]);
        list.push_front(0);

        assert_eq!(list.iter().copied().collect_vec(), vec![0, 1, 2]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.peek_front(), Ok(&0));
        assert_eq!(list.peek_back(), Ok(&2));

        assert_eq!(list.pop_front(), Ok(0));
        assert_eq!(list.pop_back(), Ok(2));
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert_eq!(list.peek_front(), Err(Error::Empty));
    }

    #[test]
    fn test_list_insert() {
        let mut list = from_values(&[1, 3]);
        list.insert(1, 2).unwrap();
        list.insert(0, 0).unwrap();
        list.insert(4, 4).unwrap();

        assert_eq!(list.iter().copied().collect_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            list.insert(9, 9),
            Err(Error::IndexOutOfBounds { index: 9, len: 5 })
        );
    }

    #[test]
    fn test_list_reverse() {
        let mut list = from_values(&[1, 2, 3, 4]);
        list.reverse().unwrap();
        assert_eq!(list.iter().copied().collect_vec(), vec![4, 3, 2, 1]);
        assert_eq!(list.peek_front(), Ok(&4));
        assert_eq!(list.peek_back(), Ok(&1));

        // Links must stay usable after the flip.
        list.push_back(0);
        assert_eq!(list.pop_back(), Ok(0));

        let mut empty = SinglyList::<i32>::new();
        assert_eq!(empty.reverse(), Err(Error::Empty));
    }

    #[test]
    fn test_list_sort() {
        let mut list = from_values(&[5, 1, 4, 2, 3]);
        list.sort().unwrap();
        assert_eq!(list.iter().copied().collect_vec(), vec![1, 2, 3, 4, 5]);

        let mut sorted = from_values(&[1, 2]);
        sorted.sort().unwrap();
        assert_eq!(sorted.iter().copied().collect_vec(), vec![1, 2]);

        let mut empty = SinglyList::<i32>::new();
        assert_eq!(empty.sort(), Err(Error::Empty));
    }

    #[test]
    fn test_list_palindrome() {
        assert!(SinglyList::<i32>::new().is_palindrome());
        assert!(from_values(&[7]).is_palindrome());
        assert!(from_values(&[1, 2, 2, 1]).is_palindrome());
        assert!(from_values(&[1, 2, 1]).is_palindrome());
        assert!(!from_values(&[1, 2, 3, 4]).is_palindrome());
    }

    #[test]
    fn test_list_render() {
        assert_eq!(from_values(&[1, 2, 3]).render(), "[ 1 -> 2 -> 3 -> nil ]");
        assert_eq!(SinglyList::<i32>::new().render(), "[ nil ]");
    }
}
