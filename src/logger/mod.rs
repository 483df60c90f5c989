// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Default [`Reporter`] implementation.

mod cli;

use std::io;

use chrono::Local;

use crate::{
    event::{Level, Status},
    reporter::Reporter,
    writer::{
        out::{Styles, WriteStrExt as _},
        Coloring,
    },
};

/// Name reported for lines emitted outside of any started test.
pub const UNKNOWN_TEST: &str = "UNKNOWN";

/// Default width (in characters) of banners' horizontal rules.
pub const DEFAULT_RULE_WIDTH: usize = 40;

pub use self::cli::Cli;

/// Format of the timestamp prefixing every line.
const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Default [`Reporter`] writing timestamped and colored lines into an
/// [`io::Write`] implementor ([`io::Stdout`] by default).
///
/// Tracks the current test and numbers its steps. The state lives as long as
/// this [`Logger`] does: a host creates one per run (or per worker, if it runs
/// tests in parallel) and passes it to everything reporting events.
///
/// Every line looks like:
/// ```text
/// 14:03:27 [INFO] | Login Test | Step 1: Navigate to login page
/// ```
///
/// Pretty-prints with colors if terminal was successfully detected, otherwise
/// has simple output. Useful for running tests with CI tools.
#[derive(Clone, Debug)]
pub struct Logger<Out: io::Write = io::Stdout> {
    /// [`io::Write`] implementor to write the output into.
    output: Out,

    /// [`Styles`] for terminal output.
    styles: Styles,

    /// Width of banners' horizontal rules.
    rule_width: usize,

    /// Name of the currently running test, if any was started.
    test_name: Option<String>,

    /// Number of the last reported step of the current test.
    step: usize,
}

impl Logger {
    /// Creates a new [`Logger`] outputting to [`io::Stdout`] with
    /// [`Coloring::Auto`].
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), Coloring::Auto)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<Out: io::Write> Logger<Out> {
    /// Creates a new [`Logger`] outputting to the given `output`.
    #[must_use]
    pub fn new(output: Out, color: Coloring) -> Self {
        let mut styles = Styles::new();
        styles.apply_coloring(color);
        Self {
            output,
            styles,
            rule_width: DEFAULT_RULE_WIDTH,
            test_name: None,
            step: 0,
        }
    }

    /// Sets the width of banners' horizontal rules.
    #[must_use]
    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    /// Applies the given [`Cli`] options to this [`Logger`].
    pub fn apply_cli(&mut self, cli: Cli) {
        self.styles.apply_coloring(cli.color);
        self.rule_width = cli.rule_width;
    }

    /// Returns the name of the current test, if any was started.
    #[must_use]
    pub fn current_test(&self) -> Option<&str> {
        self.test_name.as_deref()
    }

    /// Returns the number of steps reported since the last
    /// [`Reporter::start_test()`].
    #[must_use]
    pub const fn step_count(&self) -> usize {
        self.step
    }

    /// Returns the [`io::Write`] implementor this [`Logger`] outputs into.
    #[must_use]
    pub const fn output(&self) -> &Out {
        &self.output
    }

    /// Unwraps this [`Logger`] into its output.
    #[must_use]
    pub fn into_output(self) -> Out {
        self.output
    }

    /// Returns the name the lines are attributed to.
    fn test_name(&self) -> &str {
        self.test_name.as_deref().unwrap_or(UNKNOWN_TEST)
    }

    /// Renders a single `<timestamp> [<LEVEL>] | <test> | <message>` line.
    fn line(&self, level: Level, message: &str) -> String {
        format!(
            "{} {} | {} | {message}",
            Local::now().format(TIMESTAMP_FORMAT),
            self.styles.level(level),
            self.test_name(),
        )
    }

    /// Renders a banner around the given (already styled) `title`.
    fn banner(&self, title: &str) -> [String; 4] {
        let rule = self.styles.header("─".repeat(self.rule_width));
        [String::new(), rule.to_string(), title.to_owned(), rule.into_owned()]
    }

    /// Outputs a single line of the given [`Level`].
    fn log(&mut self, level: Level, message: &str) {
        let line = self.line(level, message);
        self.emit(&[line]);
    }

    /// Writes the given `lines` and flushes them.
    ///
    /// Failures are only traced: a broken output mustn't abort a test run.
    fn emit(&mut self, lines: &[String]) {
        let res = lines
            .iter()
            .try_for_each(|l| self.output.write_line(l))
            .and_then(|()| self.output.flush());
        if let Err(e) = res {
            tracing::warn!(error = %e, "failed to write test event");
        }
    }
}

impl<Out: io::Write> Reporter for Logger<Out> {
    fn start_test(&mut self, name: &str) {
        tracing::debug!(test = name, "test started");

        self.test_name = Some(name.to_owned());
        self.step = 0;

        let title = self.styles.title(None, format!("🚀 {name}"));
        let banner = self.banner(&title);
        self.emit(&banner);
    }

    fn step(&mut self, description: &str) {
        if self.test_name.is_none() {
            tracing::debug!(description, "step reported outside of a test");
        }

        self.step += 1;
        let message = format!("Step {}: {description}", self.step);
        self.log(Level::Info, &message);
    }

    fn pass_test(&mut self, message: &str) {
        self.log(Level::Pass, message);
    }

    fn fail(&mut self, message: &str) {
        self.log(Level::Fail, message);
    }

    fn error(&mut self, message: &str) {
        self.log(Level::Error, message);
    }

    fn end_test(&mut self, status: Status) {
        if status.is_recognized() {
            tracing::debug!(test = self.test_name(), %status, "test finished");
        } else {
            tracing::warn!(
                test = self.test_name(),
                %status,
                "test finished with unrecognized status"
            );
        }

        let title = self.styles.title(
            Some(&status),
            format!("{} {}: {status}", status.icon(), self.test_name()),
        );
        let mut banner = self.banner(&title).to_vec();
        banner.push(String::new());
        self.emit(&banner);
    }

    fn info(&mut self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warning(&mut self, message: &str) {
        self.log(Level::Warning, message);
    }
}
