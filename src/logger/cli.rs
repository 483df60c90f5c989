// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options of a [`Logger`].
//!
//! [`Logger`]: super::Logger

use smart_default::SmartDefault;

use crate::writer::Coloring;

use super::DEFAULT_RULE_WIDTH;

/// CLI options of a [`Logger`].
///
/// [`Logger`]: super::Logger
#[derive(Clone, Copy, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Coloring policy for a console output.
    #[arg(
        long,
        value_name = "auto|always|never",
        default_value = "auto",
        global = true
    )]
    #[default(Coloring::Auto)]
    pub color: Coloring,

    /// Width of the horizontal rules framing test banners.
    #[arg(
        long,
        value_name = "columns",
        default_value_t = DEFAULT_RULE_WIDTH,
        global = true
    )]
    #[default(DEFAULT_RULE_WIDTH)]
    pub rule_width: usize,
}
