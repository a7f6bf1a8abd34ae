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

//! satchel - guarded classic containers.
//!
//! The centerpiece is [`Dequeue`], a double-ended queue over slab-backed
//! doubly linked storage, guarded by one exclusive lock so that every
//! operation takes effect atomically relative to concurrent callers. Around
//! it live a few siblings sharing the same error surface: a singly linked
//! list ([`SinglyList`]), a lock-guarded linked LIFO stack ([`LinkedStack`]),
//! and an array-backed undo/redo history ([`HistoryStack`]).
//!
//! All chains store their nodes in a [`slab::Slab`]; links are slab indices,
//! not owning pointers, so reclaimed slots are reused and no unsafe pointer
//! management is involved.

mod chain;

/// Lock-guarded double-ended queue.
pub mod dequeue;
/// Error types for container operations.
pub mod error;
/// Array-backed undo/redo stack.
pub mod history;
/// Singly linked list.
pub mod list;
/// LIFO stacks.
pub mod stack;

pub use crate::{
    dequeue::Dequeue,
    error::{Error, Result},
    history::HistoryStack,
    list::SinglyList,
    stack::{LinkedStack, Stack},
};
