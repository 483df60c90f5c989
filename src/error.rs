// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of binding [`Reporter`] operations by their keyword names.
//!
//! Operations of a [`Reporter`] itself never fail: only a host calling them
//! by name may get an unknown keyword or a wrong number of arguments.
//!
//! [`Reporter`]: crate::Reporter

use derive_more::{Display, Error};

use crate::reporter::Keyword;

/// Caller misuse detected while binding a keyword.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum Error {
    /// No [`Keyword`] is known under the given name.
    #[display("Unknown keyword: `{name}`")]
    UnknownKeyword {
        /// Name the host tried to call.
        #[error(not(source))]
        name: String,
    },

    /// [`Keyword`] was called with a wrong number of arguments.
    #[display(
        "Keyword `{keyword}` expects {expected} argument(s), got {actual}"
    )]
    Arity {
        /// Called [`Keyword`].
        #[error(not(source))]
        keyword: Keyword,

        /// Number of arguments the [`Keyword`] takes.
        #[error(not(source))]
        expected: usize,

        /// Number of arguments actually passed.
        #[error(not(source))]
        actual: usize,
    },
}

/// Result type alias for keyword binding.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new [`Error::UnknownKeyword`].
    #[must_use]
    pub fn unknown_keyword(name: impl Into<String>) -> Self {
        Self::UnknownKeyword { name: name.into() }
    }

    /// Returns true if this is an [`Error::UnknownKeyword`].
    #[must_use]
    pub const fn is_unknown_keyword(&self) -> bool {
        matches!(self, Self::UnknownKeyword { .. })
    }
}
