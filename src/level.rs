/*
Copyright (C) 2022 Aurora McGinnis

This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at http://mozilla.org/MPL/2.0/.
*/

use std::fmt;

// ANSI foreground colors
const RED: u8 = 31;
const YELLOW: u8 = 33;
const BLUE: u8 = 34;
const GRAY: u8 = 37;

/// Severity of a rendered entry, ordered by increasing urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    /// Not produced by the `log` macros. Build an `Entry` by hand to use it.
    Fatal,
}

impl Level {
    /// The label printed inside the level block.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// The SGR foreground code used for the label when colors are enabled.
    pub fn ansi_color(self) -> u8 {
        match self {
            Level::Debug => GRAY,
            Level::Info => BLUE,
            Level::Warn => YELLOW,
            Level::Error | Level::Fatal => RED,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_collapses_into_debug() {
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Error), Level::Error);
    }

    #[test]
    fn urgency_order() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn fatal_shares_the_error_color() {
        assert_eq!(Level::Fatal.ansi_color(), Level::Error.ansi_color());
        assert_eq!(Level::Debug.ansi_color(), 37);
        assert_eq!(Level::Info.ansi_color(), 34);
    }

    #[test]
    fn display_honors_padding() {
        assert_eq!(format!("{:>5}", Level::Info), " INFO");
        assert_eq!(format!("{:>5}", Level::Error), "ERROR");
    }
}
