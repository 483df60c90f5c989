// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interface a host test-automation engine drives while executing tests.
//!
//! A host either calls [`Reporter`] methods directly, or binds them by their
//! keyword names (as keyword-driven engines do) via [`invoke()`].

use std::str::FromStr;

use derive_more::with_trait::Display;

use crate::{
    error::{Error, Result},
    event::Status,
};

/// Receiver of test execution events.
///
/// None of the operations fails: reporting is never a reason to abort a test
/// run.
pub trait Reporter {
    /// Starts a new test with the given `name`, resetting step numbering.
    fn start_test(&mut self, name: &str);

    /// Reports the next numbered step of the current test.
    fn step(&mut self, description: &str);

    /// Reports a passed check of the current test.
    fn pass_test(&mut self, message: &str);

    /// Reports a failed check of the current test.
    fn fail(&mut self, message: &str);

    /// Reports an error happened while running the current test.
    fn error(&mut self, message: &str);

    /// Finishes the current test with its final [`Status`].
    fn end_test(&mut self, status: Status);

    /// Reports an informational message without numbering it as a step.
    fn info(&mut self, message: &str);

    /// Reports a warning about the current test.
    fn warning(&mut self, message: &str);

    /// Reports the details of an assertion made by the current test.
    fn assertion(&mut self, kind: &str, expected: &str, actual: &str) {
        self.info(&format_assertion(kind, expected, actual));
    }

    /// Reports an error of the given `kind` happened while running the
    /// current test.
    fn error_details(&mut self, kind: &str, message: &str) {
        self.error(&format_error(kind, message));
    }
}

/// Formats an assertion summary, omitting its empty parts.
#[must_use]
pub fn format_assertion(kind: &str, expected: &str, actual: &str) -> String {
    let mut parts = vec!["🔍 Assertion:".to_owned()];
    if !kind.is_empty() {
        parts.push(format!("Type: {kind}"));
    }
    if !expected.is_empty() {
        parts.push(format!("Expected: {expected}"));
    }
    if !actual.is_empty() {
        parts.push(format!("Actual: {actual}"));
    }
    parts.join(" | ")
}

/// Formats an error summary, omitting its empty parts.
#[must_use]
pub fn format_error(kind: &str, message: &str) -> String {
    let mut parts = vec!["❌ Error:".to_owned()];
    if !kind.is_empty() {
        parts.push(format!("Type: {kind}"));
    }
    if !message.is_empty() {
        parts.push(message.to_owned());
    }
    parts.join(" | ")
}

/// Name under which a [`Reporter`] operation is bound by a host engine.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Keyword {
    /// [`Reporter::start_test()`].
    #[display("Start Test")]
    StartTest,

    /// [`Reporter::step()`].
    #[display("Step")]
    Step,

    /// [`Reporter::pass_test()`].
    #[display("Pass Test")]
    PassTest,

    /// [`Reporter::fail()`].
    #[display("Fail")]
    Fail,

    /// [`Reporter::error()`].
    #[display("Error")]
    Error,

    /// [`Reporter::end_test()`].
    #[display("End Test")]
    EndTest,

    /// [`Reporter::info()`].
    #[display("Info")]
    Info,

    /// [`Reporter::warning()`].
    #[display("Warning")]
    Warning,

    /// [`Reporter::assertion()`].
    #[display("Assertion")]
    Assertion,

    /// [`Reporter::error_details()`].
    #[display("Error Details")]
    ErrorDetails,
}

impl Keyword {
    /// All the [`Keyword`]s, in the order a test usually uses them.
    pub const ALL: [Self; 10] = [
        Self::StartTest,
        Self::Step,
        Self::Info,
        Self::Assertion,
        Self::PassTest,
        Self::Fail,
        Self::Error,
        Self::ErrorDetails,
        Self::Warning,
        Self::EndTest,
    ];

    /// Number of positional arguments this [`Keyword`] takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Assertion => 3,
            Self::ErrorDetails => 2,
            Self::StartTest
            | Self::Step
            | Self::PassTest
            | Self::Fail
            | Self::Error
            | Self::EndTest
            | Self::Info
            | Self::Warning => 1,
        }
    }

    /// Calls the [`Reporter`] operation bound to this [`Keyword`] with the
    /// given positional `args`.
    ///
    /// # Errors
    ///
    /// If the number of `args` doesn't match the [`Keyword::arity()`]. Nothing
    /// is reported then.
    pub fn call<R, S>(self, reporter: &mut R, args: &[S]) -> Result<()>
    where
        R: Reporter + ?Sized,
        S: AsRef<str>,
    {
        let expected = self.arity();
        if args.len() != expected {
            return Err(Error::Arity {
                keyword: self,
                expected,
                actual: args.len(),
            });
        }

        let arg = |n: usize| args[n].as_ref();
        match self {
            Self::StartTest => reporter.start_test(arg(0)),
            Self::Step => reporter.step(arg(0)),
            Self::PassTest => reporter.pass_test(arg(0)),
            Self::Fail => reporter.fail(arg(0)),
            Self::Error => reporter.error(arg(0)),
            Self::EndTest => reporter.end_test(Status::from(arg(0))),
            Self::Info => reporter.info(arg(0)),
            Self::Warning => reporter.warning(arg(0)),
            Self::Assertion => reporter.assertion(arg(0), arg(1), arg(2)),
            Self::ErrorDetails => reporter.error_details(arg(0), arg(1)),
        }
        Ok(())
    }
}

impl FromStr for Keyword {
    type Err = Error;

    /// Matches keyword names ignoring case, spaces and underscores, so
    /// `Start Test`, `start_test` and `STARTTEST` are the same [`Keyword`].
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kw| {
                kw.to_string().replace(' ', "").to_lowercase() == normalized
            })
            .ok_or_else(|| Error::unknown_keyword(s))
    }
}

/// Calls the [`Reporter`] operation bound under the given keyword `name`.
///
/// # Errors
///
/// - If no [`Keyword`] is bound under the given `name`.
/// - If the number of `args` doesn't match the [`Keyword::arity()`].
pub fn invoke<R, S>(reporter: &mut R, name: &str, args: &[S]) -> Result<()>
where
    R: Reporter + ?Sized,
    S: AsRef<str>,
{
    name.parse::<Keyword>()?.call(reporter, args)
}
