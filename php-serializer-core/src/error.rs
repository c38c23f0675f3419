// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error type shared by every stage of serialization.
//!
//! None of these errors is recoverable at the point where it is detected: a
//! missing adapter is a configuration defect, an illegal writer operation or a
//! double `track` is a defect in an adapter. The failing `serialize` call
//! returns the error and whatever the writer already holds must be discarded.

use std::borrow::Cow;

use thiserror::Error;

/// Set `PHP_SERIALIZER_PANIC_ON_ERROR` at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("PHP_SERIALIZER_PANIC_ON_ERROR").is_some();

/// Check if `PHP_SERIALIZER_PANIC_ON_ERROR` was set at compile time.
#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for serialization operations.
///
/// # IMPORTANT: Always Use Static Constructor Functions
///
/// **DO NOT** construct error variants directly using the enum syntax.
/// **ALWAYS** use the provided static constructor functions instead, they
/// accept anything convertible into `Cow<'static, str>` and honour
/// `PHP_SERIALIZER_PANIC_ON_ERROR`.
///
/// ```rust
/// use php_serializer_core::error::Error;
///
/// let err = Error::no_adapter_found("Foo");
/// let err = Error::illegal_state_transition(format!("cannot end {}", "array"));
/// ```
///
/// ## Debug Mode: PHP_SERIALIZER_PANIC_ON_ERROR
///
/// ```bash
/// RUST_BACKTRACE=1 PHP_SERIALIZER_PANIC_ON_ERROR=1 cargo test
/// ```
///
/// Every constructor then panics with the error message, so the backtrace
/// points at the adapter or registry call that produced it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No registered adapter accepts the runtime type of a value.
    ///
    /// Do not construct this variant directly; use [`Error::no_adapter_found`] instead.
    #[error("No adapter registered for {0}")]
    NoAdapterFound(Cow<'static, str>),

    /// An operation was issued that the writer's current state does not allow.
    ///
    /// Do not construct this variant directly; use [`Error::illegal_state_transition`] instead.
    #[error("{0}")]
    IllegalStateTransition(Cow<'static, str>),

    /// A value was tracked twice by the reference tracker.
    ///
    /// Do not construct this variant directly; use [`Error::tracker_misuse`] instead.
    #[error("{0}")]
    TrackerMisuse(Cow<'static, str>),

    /// An adapter received a value it does not know how to encode.
    ///
    /// Do not construct this variant directly; use [`Error::type_error`] instead.
    #[error("{0}")]
    TypeError(Cow<'static, str>),

    /// Encoded output could not be represented as requested.
    ///
    /// Do not construct this variant directly; use [`Error::encoding_error`] instead.
    #[error("{0}")]
    EncodingError(Cow<'static, str>),

    /// Nesting went deeper than the configured maximum.
    ///
    /// Do not construct this variant directly; use [`Error::depth_exceed`] instead.
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// Unsupported operation or feature.
    ///
    /// Do not construct this variant directly; use [`Error::unsupported`] instead.
    #[error("{0}")]
    Unsupported(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::NoAdapterFound`] naming the unresolved type.
    ///
    /// # Example
    /// ```
    /// use php_serializer_core::error::Error;
    ///
    /// let err = Error::no_adapter_found("Integer");
    /// assert_eq!(err.to_string(), "No adapter registered for Integer");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn no_adapter_found<S: Into<Cow<'static, str>>>(type_name: S) -> Self {
        let err = Error::NoAdapterFound(type_name.into());
        if PANIC_ON_ERROR {
            panic!("PHP_SERIALIZER_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::IllegalStateTransition`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn illegal_state_transition<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::IllegalStateTransition(s.into());
        if PANIC_ON_ERROR {
            panic!("PHP_SERIALIZER_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::TrackerMisuse`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn tracker_misuse<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::TrackerMisuse(s.into());
        if PANIC_ON_ERROR {
            panic!("PHP_SERIALIZER_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::TypeError`] from a string or static message.
    ///
    /// # Example
    /// ```
    /// use php_serializer_core::error::Error;
    ///
    /// let err = Error::type_error("Expected a string value");
    /// let err = Error::type_error(format!("Expected {}", "Integer"));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::TypeError(s.into());
        if PANIC_ON_ERROR {
            panic!("PHP_SERIALIZER_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::EncodingError`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encoding_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::EncodingError(s.into());
        if PANIC_ON_ERROR {
            panic!("PHP_SERIALIZER_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DepthExceed`] from a string or static message.
    ///
    /// # Example
    /// ```
    /// use php_serializer_core::error::Error;
    ///
    /// let err = Error::depth_exceed(format!("Depth {} exceeds max {}", 100, 64));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DepthExceed(s.into());
        if PANIC_ON_ERROR {
            panic!("PHP_SERIALIZER_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Unsupported`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Unsupported(s.into());
        if PANIC_ON_ERROR {
            panic!("PHP_SERIALIZER_PANIC_ON_ERROR: {}", err);
        }
        err
    }
}

/// Ensures a condition is true; otherwise returns the given [`enum@Error`].
///
/// # Examples
/// ```
/// use php_serializer_core::ensure;
/// use php_serializer_core::error::Error;
///
/// fn check_count(n: usize) -> Result<(), Error> {
///     ensure!(n > 0, Error::unsupported("empty"));
///     Ok(())
/// }
/// assert!(check_count(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
