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

//! Assertion macros that only fire when the `strict_assertions` feature is enabled.
//!
//! Structural invariant checks on container internals are hot-path code; in a
//! release build without the feature they compile to nothing.

/// Equivalent to [`assert!`] with the `strict_assertions` feature, otherwise no-op.
#[macro_export]
macro_rules! strict_assert {
    ($($arg:tt)*) => {
        #[cfg(feature = "strict_assertions")]
        assert!($($arg)*);
    };
}

/// Equivalent to [`assert_eq!`] with the `strict_assertions` feature, otherwise no-op.
#[macro_export]
macro_rules! strict_assert_eq {
    ($($arg:tt)*) => {
        #[cfg(feature = "strict_assertions")]
        assert_eq!($($arg)*);
    };
}

/// Extension for [`Option`] with strictly checked unwraps.
pub trait OptionExt<T> {
    /// Unwrap the option without checking in release builds.
    ///
    /// With `strict_assertions` enabled this behaves like [`Option::unwrap`].
    ///
    /// # Safety
    ///
    /// The option MUST be `Some(..)`.
    unsafe fn strict_unwrap_unchecked(self) -> T;
}

impl<T> OptionExt<T> for Option<T> {
    unsafe fn strict_unwrap_unchecked(self) -> T {
        #[cfg(feature = "strict_assertions")]
        {
            self.unwrap()
        }
        #[cfg(not(feature = "strict_assertions"))]
        {
            self.unwrap_unchecked()
        }
    }
}
