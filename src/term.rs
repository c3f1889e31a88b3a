/*
Copyright (C) 2022 Aurora McGinnis

This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at http://mozilla.org/MPL/2.0/.
*/

use std::io::IsTerminal;

/// Determines if this handle references an interactive terminal. Any failure to query the handle
/// is reported as `false`.
pub fn is_terminal<S: IsTerminal>(stream: &S) -> bool {
    stream.is_terminal()
}

/// `TerminalDetection` decides how a `HandlerBuilder` picks its initial color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalDetection {
    /// Ask the operating system whether the output handle is a terminal.
    Introspect,
    /// Never treat the output as a terminal. Colors stay off unless forced.
    Never,
}

impl TerminalDetection {
    pub fn is_terminal<S: IsTerminal>(self, stream: &S) -> bool {
        match self {
            TerminalDetection::Introspect => is_terminal(stream),
            TerminalDetection::Never => false,
        }
    }
}

impl Default for TerminalDetection {
    /// Introspection on unix. Other consoles are not assumed to understand ANSI escapes.
    fn default() -> Self {
        if cfg!(unix) {
            TerminalDetection::Introspect
        } else {
            TerminalDetection::Never
        }
    }
}
