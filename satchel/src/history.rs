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

//! Array-backed undo/redo stack.

/// Undo/redo history over a growable array of entries.
///
/// A cursor marks the current entry. Recording a new entry discards any
/// entries past the cursor, so a redo never replays overwritten history.
/// `undo` and `redo` move the cursor and return the entry it lands on; both
/// stop at the boundary instead of falling off.
#[derive(Debug)]
pub struct HistoryStack<T> {
    entries: Vec<T>,
    // `None` iff no entries are recorded.
    cursor: Option<usize>,
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HistoryStack<T> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Record an entry at the cursor, discarding any redoable suffix.
    pub fn push(&mut self, value: T) {
        match self.cursor {
            Some(cursor) => self.entries.truncate(cursor + 1),
            None => self.entries.clear(),
        }
        self.entries.push(value);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step the cursor back and return the entry it lands on.
    ///
    /// Returns `None` when the cursor is already on the first entry, or when
    /// no entry is recorded.
    pub fn undo(&mut self) -> Option<&T> {
        let cursor = self.cursor?.checked_sub(1)?;
        self.cursor = Some(cursor);
        self.entries.get(cursor)
    }

    /// Step the cursor forward and return the entry it lands on.
    ///
    /// Returns `None` when the cursor is already on the last entry, or when
    /// no entry is recorded.
    pub fn redo(&mut self) -> Option<&T> {
        let cursor = self.cursor? + 1;
        if cursor >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor);
        self.entries.get(cursor)
    }

    /// Get the entry under the cursor.
    pub fn peek(&self) -> Option<&T> {
        self.entries.get(self.cursor?)
    }

    /// Drop every entry and reset the cursor.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Get the number of recorded entries, including undone ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entry is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
