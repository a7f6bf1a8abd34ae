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

//! Lock-guarded double-ended queue.

use std::fmt::Display;

use parking_lot::Mutex;
use satchel_common::code::Value;

use crate::{
    chain::Chain,
    error::{Error, Result},
};

/// Double-ended queue guarded by one exclusive lock.
///
/// Every operation, reads included, holds the lock for its whole duration, so
/// each call takes effect atomically relative to all others and no partial
/// state is ever observable. The guard is released on every exit path; a
/// rejected insertion never keeps it held.
///
/// Payloads are never nil. Insertions take `impl Into<Option<T>>` and reject
/// `None` with [`Error::NilElement`] before touching the chain.
///
/// # Example
///
/// ```
/// use satchel::Dequeue;
///
/// let dequeue = Dequeue::new();
/// dequeue.push_back(1).unwrap();
/// dequeue.push_back(2).unwrap();
/// dequeue.push_front(0).unwrap();
/// assert_eq!(dequeue.pop_front(), Ok(0));
/// assert_eq!(dequeue.pop_back(), Ok(2));
/// assert_eq!(dequeue.len(), 1);
/// ```
#[derive(Debug)]
pub struct Dequeue<T> {
    chain: Mutex<Chain<T>>,
}

impl<T> Default for Dequeue<T>
where
    T: Value,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Dequeue<T>
where
    T: Value,
{
    /// Create an empty dequeue.
    pub fn new() -> Self {
        Self {
            chain: Mutex::new(Chain::new()),
        }
    }

    /// Add an element at the front.
    ///
    /// Fails with [`Error::NilElement`] if `value` is nil, without mutating.
    pub fn push_front(&self, value: impl Into<Option<T>>) -> Result<()> {
        let mut chain = self.chain.lock();
        let value = value.into().ok_or(Error::NilElement)?;
        chain.push_front(value);
        tracing::trace!(len = chain.len(), "push front");
        Ok(())
    }

    /// Add an element at the back.
    ///
    /// Fails with [`Error::NilElement`] if `value` is nil, without mutating.
    pub fn push_back(&self, value: impl Into<Option<T>>) -> Result<()> {
        let mut chain = self.chain.lock();
        let value = value.into().ok_or(Error::NilElement)?;
        chain.push_back(value);
        tracing::trace!(len = chain.len(), "push back");
        Ok(())
    }

    /// Remove and return the element at the front.
    ///
    /// Fails with [`Error::Empty`] on an empty dequeue, without mutating.
    pub fn pop_front(&self) -> Result<T> {
        let mut chain = self.chain.lock();
        let value = chain.pop_front().ok_or(Error::Empty)?;
        tracing::trace!(len = chain.len(), "pop front");
        Ok(value)
    }

    /// Remove and return the element at the back.
    ///
    /// Fails with [`Error::Empty`] on an empty dequeue, without mutating.
    pub fn pop_back(&self) -> Result<T> {
        let mut chain = self.chain.lock();
        let value = chain.pop_back().ok_or(Error::Empty)?;
        tracing::trace!(len = chain.len(), "pop back");
        Ok(value)
    }

    /// Return a copy of the element at the front without removing it.
    ///
    /// Fails with [`Error::Empty`] on an empty dequeue.
    pub fn peek_front(&self) -> Result<T>
    where
        T: Clone,
    {
        self.chain.lock().front().cloned().ok_or(Error::Empty)
    }

    /// Return a copy of the element at the back without removing it.
    ///
    /// Fails with [`Error::Empty`] on an empty dequeue.
    pub fn peek_back(&self) -> Result<T>
    where
        T: Clone,
    {
        self.chain.lock().back().cloned().ok_or(Error::Empty)
    }

    /// Get the number of elements.
    ///
    /// O(1), reads the maintained counter under the lock.
    pub fn len(&self) -> usize {
        self.chain.lock().len()
    }

    /// Check if the dequeue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.chain.lock().is_empty()
    }

    /// Check if the sequence reads the same front-to-back and back-to-front.
    ///
    /// Empty and single-element dequeues are trivially symmetrical. The walk
    /// short-circuits on the first mismatching pair.
    pub fn is_symmetrical(&self) -> bool
    where
        T: PartialEq,
    {
        self.chain.lock().is_palindrome()
    }

    /// Render the elements front-to-back as a space-separated line.
    ///
    /// Diagnostic only, not meant for machine parsing.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        let chain = self.chain.lock();
        if chain.is_empty() {
            return "Dequeue is empty.".to_string();
        }
        itertools::join(chain.iter(), " ")
    }

    /// Print the front-to-back rendering to stdout.
    pub fn print(&self)
    where
        T: Display,
    {
        println!("{}", self.render());
    }
}
