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

//! LIFO stacks.

use parking_lot::Mutex;
use satchel_common::{code::Value, strict_assert_eq};
use slab::Slab;

use crate::error::{Error, Result};

/// Operations of a last-in-first-out stack.
///
/// Methods take `&self`; implementations guard their own state so a stack can
/// be shared across threads as-is.
pub trait Stack<T> {
    /// Add an element on top of the stack.
    fn push(&self, value: T);

    /// Remove and return the element on top of the stack.
    ///
    /// Fails with [`Error::Empty`] on an empty stack.
    fn pop(&self) -> Result<T>;

    /// Return a copy of the element on top of the stack without removing it.
    ///
    /// Fails with [`Error::Empty`] on an empty stack.
    fn peek(&self) -> Result<T>
    where
        T: Clone;

    /// Get the number of elements on the stack.
    fn len(&self) -> usize;

    /// Check if the stack holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct Node<T> {
    next: Option<usize>,

    data: T,
}

#[derive(Debug)]
struct Links<T> {
    top: Option<usize>,
    slab: Slab<Node<T>>,
    len: usize,
}

impl<T> Links<T> {
    fn new() -> Self {
        Self {
            top: None,
            slab: Slab::new(),
            len: 0,
        }
    }
}

/// Linked LIFO stack guarded by one exclusive lock.
///
/// Every operation holds the lock for its whole duration, so concurrent
/// pushes and pops never observe a torn top pointer or counter.
#[derive(Debug)]
pub struct LinkedStack<T> {
    links: Mutex<Links<T>>,
}

impl<T> Default for LinkedStack<T>
where
    T: Value,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedStack<T>
where
    T: Value,
{
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Links::new()),
        }
    }
}

impl<T> Stack<T> for LinkedStack<T>
where
    T: Value,
{
    fn push(&self, value: T) {
        let mut links = self.links.lock();
        let node = Node {
            next: links.top,
            data: value,
        };
        let key = links.slab.insert(node);
        links.top = Some(key);
        links.len += 1;
        tracing::trace!(len = links.len, "push");
    }

    fn pop(&self) -> Result<T> {
        let mut links = self.links.lock();
        let key = links.top.ok_or(Error::Empty)?;
        let node = links.slab.remove(key);
        links.top = node.next;
        links.len -= 1;
        strict_assert_eq!(links.top.is_none(), links.len == 0);
        tracing::trace!(len = links.len, "pop");
        Ok(node.data)
    }

    fn peek(&self) -> Result<T>
    where
        T: Clone,
    {
        let links = self.links.lock();
        let key = links.top.ok_or(Error::Empty)?;
        Ok(links.slab[key].data.clone())
    }

    fn len(&self) -> usize {
        self.links.lock().len
    }
}
