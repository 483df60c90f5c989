// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Vocabulary of the reported test events.
//!
//! A line-level event carries a [`Level`], while a finished test carries its
//! [`Status`].

use std::{convert::Infallible, str::FromStr};

use derive_more::with_trait::Display;

/// Severity/category of a single reported line.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Level {
    /// Progress of a test, including its numbered steps.
    #[display("INFO")]
    Info,

    /// Something went as expected.
    #[display("PASS")]
    Pass,

    /// A check didn't hold.
    #[display("FAIL")]
    Fail,

    /// Something broke while running a test.
    #[display("ERROR")]
    Error,

    /// Something worth attention, but not a failure.
    #[display("WARNING")]
    Warning,
}

impl Level {
    /// Returns the bracketed tag of this [`Level`], like `[INFO]`.
    #[must_use]
    pub fn tag(self) -> String {
        format!("[{self}]")
    }
}

/// Verdict of a finished test, as passed by a host engine.
///
/// Any text is accepted: the recognized words map onto dedicated variants
/// (case-insensitively) and everything else is kept in [`Status::Other`], so
/// a misspelled verdict still gets rendered.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub enum Status {
    /// Test passed.
    #[display("PASS")]
    Pass,

    /// Test failed.
    #[display("FAIL")]
    Fail,

    /// Test crashed with an error.
    #[display("ERROR")]
    Error,

    /// Test was skipped.
    #[display("SKIP")]
    Skip,

    /// Unrecognized verdict, rendered as is.
    #[display("{_0}")]
    Other(String),
}

impl Status {
    /// Returns the icon glyph prefixing the closing banner of a test.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Fail => "❌",
            Self::Error => "💥",
            Self::Skip => "⏭️",
            Self::Other(_) => "📋",
        }
    }

    /// Indicates whether this [`Status`] is one of the known verdicts.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "PASS" => Self::Pass,
            "FAIL" => Self::Fail,
            "ERROR" => Self::Error,
            "SKIP" => Self::Skip,
            _ => Self::Other(s.to_owned()),
        })
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}
