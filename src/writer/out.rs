// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for writing output.

use std::{borrow::Cow, env, io, str};

use console::Style;
use derive_more::with_trait::{Deref, DerefMut, Display, From, Into};

use crate::event::{Level, Status};

use super::Coloring;

/// [`Style`]s for terminal output.
#[derive(Clone, Debug)]
pub struct Styles {
    /// [`Style`] for rendering [`Level::Info`] tags.
    pub info: Style,

    /// [`Style`] for rendering successful events.
    pub ok: Style,

    /// [`Style`] for rendering failed events.
    pub err: Style,

    /// [`Style`] for rendering [`Level::Error`] tags.
    pub error: Style,

    /// [`Style`] for rendering warnings and skipped events.
    pub warn: Style,

    /// [`Style`] for rendering banner rules and titles.
    pub header: Style,

    /// Indicates whether the output should be styled at all.
    pub is_present: bool,
}

impl Default for Styles {
    fn default() -> Self {
        // Styling is gated by `is_present` only, so `console`'s own detection
        // must not strip it a second time.
        let style = || Style::new().force_styling(true);
        Self {
            info: style().blue(),
            ok: style().green(),
            err: style().red(),
            error: style().red().bold(),
            warn: style().yellow(),
            header: style().cyan(),
            is_present: colors_detected(),
        }
    }
}

impl Styles {
    /// Creates new [`Styles`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the given [`Coloring`] policy to these [`Styles`].
    pub fn apply_coloring(&mut self, color: Coloring) {
        self.is_present = match color {
            Coloring::Auto => colors_detected(),
            Coloring::Always => true,
            Coloring::Never => false,
        };
    }

    /// If terminal is present colors `input` with the given `style` or leaves
    /// "as is" otherwise.
    #[must_use]
    pub fn apply<'a>(
        &self,
        style: &Style,
        input: impl Into<Cow<'a, str>>,
    ) -> Cow<'a, str> {
        if self.is_present {
            style.apply_to(input.into()).to_string().into()
        } else {
            input.into()
        }
    }

    /// If terminal is present colors `input` with [`Styles::header`] color or
    /// leaves "as is" otherwise.
    #[must_use]
    pub fn header<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.header, input)
    }

    /// Renders the bracketed tag of the given [`Level`] in its color.
    #[must_use]
    pub fn level(&self, level: Level) -> Cow<'static, str> {
        let style = match level {
            Level::Info => &self.info,
            Level::Pass => &self.ok,
            Level::Fail => &self.err,
            Level::Error => &self.error,
            Level::Warning => &self.warn,
        };
        self.apply(style, level.tag())
    }

    /// Renders a banner title line in __bold__.
    ///
    /// `None` stands for a starting banner, otherwise the color follows the
    /// finishing [`Status`].
    #[must_use]
    pub fn title<'a>(
        &self,
        status: Option<&Status>,
        input: impl Into<Cow<'a, str>>,
    ) -> Cow<'a, str> {
        let style = match status {
            None => &self.header,
            Some(Status::Pass) => &self.ok,
            Some(Status::Skip) => &self.warn,
            Some(_) => &self.err,
        };
        self.apply(&style.clone().bold(), input)
    }
}

/// Checks whether colors should be used for [`io::Stdout`].
///
/// `NO_COLOR` always wins; otherwise [`console`] decides based on terminal
/// presence, `TERM=dumb` and `CLICOLOR`/`CLICOLOR_FORCE`.
fn colors_detected() -> bool {
    env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// [`io::Write`] extension for easier manipulation with strings.
pub trait WriteStrExt: io::Write {
    /// Writes the given `string` into this writer.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_str(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write_all(string.as_ref().as_bytes())
    }

    /// Writes the given `string` into this writer followed by a newline.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_line(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write_str(string.as_ref())
            .and_then(|()| self.write_str("\n"))
    }
}

impl<T: io::Write + ?Sized> WriteStrExt for T {}

/// [`String`] wrapper implementing [`io::Write`].
#[derive(
    Clone,
    Debug,
    Default,
    Deref,
    DerefMut,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct WritableString(pub String);

impl io::Write for WritableString {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.push_str(
            str::from_utf8(buf)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        );
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn styles(color: Coloring) -> Styles {
        let mut styles = Styles::new();
        styles.apply_coloring(color);
        styles
    }

    #[test]
    fn leaves_input_as_is_without_colors() {
        let styles = styles(Coloring::Never);

        assert_eq!(styles.header("─────"), "─────");
        assert_eq!(styles.level(Level::Error), "[ERROR]");
        assert_eq!(styles.title(None, "🚀 Login"), "🚀 Login");
    }

    #[test]
    fn resets_color_at_the_end() {
        let styles = styles(Coloring::Always);

        for level in [Level::Info, Level::Pass, Level::Fail, Level::Error] {
            let tag = styles.level(level);

            assert!(tag.starts_with("\x1b["), "not styled: {tag:?}");
            assert!(tag.ends_with("\x1b[0m"), "not reset: {tag:?}");
            assert!(tag.contains(&level.tag()));
        }
    }

    #[test]
    fn distinguishes_levels_by_color() {
        let styles = styles(Coloring::Always);

        assert_ne!(styles.level(Level::Info), styles.level(Level::Pass));
        assert_ne!(styles.level(Level::Pass), styles.level(Level::Fail));
        assert_ne!(
            styles.level(Level::Fail).replace("[FAIL]", ""),
            styles.level(Level::Error).replace("[ERROR]", ""),
        );
    }

    #[test]
    fn no_color_disables_auto_coloring() {
        env::set_var("NO_COLOR", "1");
        let detected = Styles::new().is_present;
        let auto = styles(Coloring::Auto).is_present;
        let forced = styles(Coloring::Always).is_present;
        env::remove_var("NO_COLOR");

        assert!(!detected);
        assert!(!auto);
        assert!(forced);
    }

    #[test]
    fn writes_lines_into_string() {
        let mut out = WritableString::default();

        out.write_line("first").unwrap();
        out.write_str("second").unwrap();
        out.flush().unwrap();

        assert_eq!(out.0, "first\nsecond");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let mut out = WritableString::default();

        let err = out.write(&[0xff, 0xfe]).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(out.is_empty());
    }
}
