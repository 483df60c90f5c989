// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for composing CLI options.
//!
//! The main thing in this module is [`Opts`], which composes the strongly
//! typed CLI options of a [`Logger`] with the custom ones of a host engine, so
//! both end up in a single CLI without any boilerplate burden.
//!
//! If the host doesn't need any CLI options, it may just use the prepared
//! [`cli::Empty`] stub.
//!
//! [`cli::Empty`]: self::Empty
//! [`Logger`]: crate::Logger

use crate::{logger, writer::Coloring};

pub use clap::{Args, Parser};

/// Root CLI (command line interface) of a host driving a [`Logger`].
///
/// # Example
///
/// ```rust
/// # use robot_logger::{cli, Logger};
/// #
/// #[derive(clap::Args)] // also re-exported as `cli::Args`
/// struct CustomOpts {
///     /// Name of the suite to run.
///     #[arg(long)]
///     suite: Option<String>,
/// }
///
/// let opts = cli::Opts::<CustomOpts>::parsed();
/// let mut logger = Logger::stdout();
/// logger.apply_cli(opts.logger);
/// # drop(opts.custom.suite);
/// ```
///
/// [`Logger`]: crate::Logger
#[derive(clap::Parser, Clone, Debug, Default)]
#[command(
    name = "robot-logger",
    about = "Print test progress as timestamped, color-coded lines"
)]
pub struct Opts<Custom = Empty>
where
    Custom: Args,
{
    /// [`Logger`] CLI options.
    ///
    /// [`Logger`]: crate::Logger
    #[command(flatten)]
    pub logger: logger::Cli,

    /// Additional custom CLI options.
    #[command(flatten)]
    pub custom: Custom,
}

impl<Custom: Args> Opts<Custom> {
    /// Shortcut for [`clap::Parser::parse()`], which doesn't require the trait
    /// being imported.
    #[must_use]
    pub fn parsed() -> Self {
        <Self as Parser>::parse()
    }

    /// Returns the [`Coloring`] policy requested on the command line.
    #[must_use]
    pub const fn coloring(&self) -> Coloring {
        self.logger.color
    }
}

/// Empty CLI options.
#[derive(Args, Clone, Copy, Debug, Default)]
#[group(skip)]
pub struct Empty;
