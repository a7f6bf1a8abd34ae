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

//! Doubly linked chain over slab storage.
//!
//! Links are slab indices instead of owning pointers, so the chain needs no
//! unsafe pointer surgery and the slab owns every node. Nodes never leave the
//! chain; only payloads do.

use std::num::NonZeroUsize;

use satchel_common::strict_assert;
use slab::Slab;

/// Position of a live node in the chain's slab.
///
/// Stored as `raw + 1` so that `Option<Index>` occupies a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(NonZeroUsize);

impl Index {
    fn from_raw(raw: usize) -> Self {
        strict_assert!(raw != usize::MAX);
        // Slab keys are indices of live entries, `raw + 1` cannot wrap.
        Self(unsafe { NonZeroUsize::new_unchecked(raw + 1) })
    }

    fn to_raw(self) -> usize {
        self.0.get() - 1
    }
}

#[derive(Debug)]
struct Node<T> {
    prev: Option<Index>,
    next: Option<Index>,

    data: T,
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Self {
            prev: None,
            next: None,
            data,
        }
    }
}

/// Doubly linked chain with O(1) insertion and removal at both ends.
///
/// `head` is the front of the sequence, `tail` the back; `len` counts live
/// nodes and is never recomputed by traversal.
#[derive(Debug)]
pub struct Chain<T> {
    head: Option<Index>,
    tail: Option<Index>,
    slab: Slab<Node<T>>,
    len: usize,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chain<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            slab: Slab::new(),
            len: 0,
        }
    }

    /// Link a new node before the current head.
    pub fn push_front(&mut self, data: T) {
        let index = Index::from_raw(self.slab.insert(Node::new(data)));
        match self.head {
            Some(head) => {
                self.node_mut(index).next = Some(head);
                self.node_mut(head).prev = Some(index);
            }
            None => {
                strict_assert!(self.tail.is_none());
                self.tail = Some(index);
            }
        }
        self.head = Some(index);
        self.len += 1;
    }

    /// Link a new node after the current tail.
    pub fn push_back(&mut self, data: T) {
        let index = Index::from_raw(self.slab.insert(Node::new(data)));
        match self.tail {
            Some(tail) => {
                self.node_mut(index).prev = Some(tail);
                self.node_mut(tail).next = Some(index);
            }
            None => {
                strict_assert!(self.head.is_none());
                self.head = Some(index);
            }
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Unlink the head node and return its payload.
    pub fn pop_front(&mut self) -> Option<T> {
        let index = self.head?;
        let node = self.slab.remove(index.to_raw());
        strict_assert!(node.prev.is_none());
        self.head = node.next;
        match self.head {
            Some(head) => self.node_mut(head).prev = None,
            // The sole node left, both ends become empty.
            None => self.tail = None,
        }
        self.len -= 1;
        Some(node.data)
    }

    /// Unlink the tail node and return its payload.
    pub fn pop_back(&mut self) -> Option<T> {
        let index = self.tail?;
        let node = self.slab.remove(index.to_raw());
        strict_assert!(node.next.is_none());
        self.tail = node.prev;
        match self.tail {
            Some(tail) => self.node_mut(tail).next = None,
            None => self.head = None,
        }
        self.len -= 1;
        Some(node.data)
    }

    /// Get the reference of the payload at the front of the chain.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).data)
    }

    /// Get the reference of the payload at the back of the chain.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).data)
    }

    /// Get the length of the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the sequence reads the same front-to-back and back-to-front.
    ///
    /// Two cursors walk inward from both ends comparing payloads pairwise and
    /// short-circuit on the first mismatch. Empty and singleton chains are
    /// trivially palindromic.
    pub fn is_palindrome(&self) -> bool
    where
        T: PartialEq,
    {
        let mut front = self.head;
        let mut back = self.tail;
        // The cursors meet (odd length) or cross (even length) after len / 2
        // pairwise comparisons.
        for _ in 0..self.len / 2 {
            strict_assert!(front.is_some());
            strict_assert!(back.is_some());
            let (Some(f), Some(b)) = (front, back) else {
                return true;
            };
            let (f, b) = (self.node(f), self.node(b));
            if f.data != b.data {
                return false;
            }
            front = f.next;
            back = b.prev;
        }
        true
    }

    /// Get the payload reference iterator of the chain, front to back.
    pub fn iter(&self) -> Cursor<'_, T> {
        Cursor {
            index: self.head,
            chain: self,
        }
    }

    fn node(&self, index: Index) -> &Node<T> {
        &self.slab[index.to_raw()]
    }

    fn node_mut(&mut self, index: Index) -> &mut Node<T> {
        &mut self.slab[index.to_raw()]
    }
}

/// Payload reference iterator over a [`Chain`], front to back.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    index: Option<Index>,
    chain: &'a Chain<T>,
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.chain.node(self.index?);
        self.index = node.next;
        Some(&node.data)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_repr() {
        assert_eq!(
            std::mem::size_of::<Index>(),
            std::mem::size_of::<Option<Index>>()
        );
    }

    #[test]
    fn test_chain_both_ends() {
        let mut c = Chain::new();

        c.push_back(2);
        c.push_front(1);
        c.push_back(3);

        let v = c.iter().copied().collect_vec();
        assert_eq!(v, vec![1, 2, 3]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.front(), Some(&1));
        assert_eq!(c.back(), Some(&3));

        assert_eq!(c.pop_back(), Some(3));
        assert_eq!(c.pop_front(), Some(1));
        assert_eq!(c.pop_front(), Some(2));
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());

        assert!(c.pop_front().is_none());
        assert!(c.pop_back().is_none());
    }

    #[test]
    fn test_chain_slab_reuse() {
        let mut c = Chain::new();
        for i in 0..8 {
            c.push_back(i);
        }
        for _ in 0..4 {
            c.pop_front();
        }
        for i in 8..12 {
            c.push_back(i);
        }
        let v = c.iter().copied().collect_vec();
        assert_eq!(v, (4..12).collect_vec());
    }

    #[test]
    fn test_chain_palindrome() {
        let mut c = Chain::new();
        assert!(c.is_palindrome());

        c.push_back(1);
        assert!(c.is_palindrome());

        c.push_back(2);
        assert!(!c.is_palindrome());

        c.push_back(1);
        assert!(c.is_palindrome());

        c.push_back(1);
        assert!(!c.is_palindrome());

        c.push_front(1);
        // 1 1 2 1 1
        assert!(c.is_palindrome());
        c.pop_back();
        // 1 1 2 1
        assert!(!c.is_palindrome());
        c.push_back(1);
        // 1 1 2 1 1
        assert!(c.is_palindrome());
    }
}
