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

/// Error type for container operations.
///
/// Every failure is detected before any mutation, so a failed operation is a
/// no-op on the container.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A nil element was handed to an insertion.
    #[error("cannot add a nil element")]
    NilElement,
    /// A removal or peek was attempted on an empty container.
    #[error("cannot take from an empty container")]
    Empty,
    /// An insertion targeted a position past the end of the sequence.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

/// Result type over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
