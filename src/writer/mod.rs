// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for outputting test events to a console.

pub mod out;

use std::str::FromStr;

#[doc(inline)]
pub use self::out::{Styles, WritableString, WriteStrExt};

/// Possible policies of a [`console`] output coloring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Coloring {
    /// Letting the environment decide whether output should be colored.
    ///
    /// Colors are used only when [`io::Stdout`] is a terminal, `TERM` isn't
    /// `dumb` and `NO_COLOR` isn't set.
    ///
    /// [`io::Stdout`]: std::io::Stdout
    Auto,

    /// Forcing of a colored output.
    Always,

    /// Forcing of a non-colored output.
    Never,
}

impl FromStr for Coloring {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("possible options: auto, always, never"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Coloring;

    #[test]
    fn parses_coloring_case_insensitively() {
        assert_eq!("auto".parse(), Ok(Coloring::Auto));
        assert_eq!("ALWAYS".parse(), Ok(Coloring::Always));
        assert_eq!("Never".parse(), Ok(Coloring::Never));
    }

    #[test]
    fn rejects_unknown_coloring() {
        assert_eq!(
            "sometimes".parse::<Coloring>(),
            Err("possible options: auto, always, never"),
        );
    }
}
