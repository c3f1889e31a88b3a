/*
Copyright (C) 2022 Aurora McGinnis

This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at http://mozilla.org/MPL/2.0/.
*/

use crate::fields::{sort_fields, SortedFields};
use crate::Entry;
use chrono::{DateTime, TimeZone};
use std::fmt::{self, Write};

/// strftime pattern of the leading timestamp, e.g. `2023/01/02 15:04:05 +0000`
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S %z";

const GREEN: u8 = 32;

/// `LineRenderer` turns an `Entry` into one line of text:
///
/// `2023/01/02 15:04:05 +0000 | INFO| [api] server started   port=8080`
///
/// The level label is right aligned to 5 columns and every field name to 6. Fields are sorted by
/// name and the `service` field, if present, is printed in brackets before the message. When colors
/// are enabled the label and the field names are wrapped in ANSI escape sequences, otherwise the
/// output is plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineRenderer {
    use_colors: bool,
}

impl LineRenderer {
    pub fn new(use_colors: bool) -> Self {
        LineRenderer { use_colors }
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Render `entry` as it would be printed at the moment `now`. The returned line always ends with
    /// a single `\n`.
    pub fn render<Tz>(&self, entry: &Entry<'_>, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut dst = String::with_capacity(128);
        // A Display impl that errors cuts the line short, it still gets terminated.
        let _ = self.write_entry(&mut dst, entry, now);
        dst.push('\n');
        dst
    }

    fn write_entry<Tz>(&self, dst: &mut String, entry: &Entry<'_>, now: &DateTime<Tz>) -> fmt::Result
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let fields = entry.source().map(sort_fields).unwrap_or_default();

        write!(dst, "{}", now.format(TIME_FORMAT))?;

        let level = entry.level();
        if self.use_colors {
            write!(dst, " |\x1b[{}m{:>5}\x1b[0m| ", level.ansi_color(), level.as_str())?;
        } else {
            write!(dst, " |{:>5}| ", level.as_str())?;
        }

        if let Some(service) = fields.service() {
            write!(dst, "[{}] ", service)?;
        }

        dst.write_fmt(entry.message())?;

        self.write_fields(dst, fields)
    }

    fn write_fields(&self, dst: &mut String, fields: SortedFields<'_>) -> fmt::Result {
        for field in fields {
            if self.use_colors {
                write!(dst, " \x1b[{}m{:>6}\x1b[0m={}", GREEN, field.key.as_str(), field.value)?;
            } else {
                write!(dst, " {:>6}={}", field.key.as_str(), field.value)?;
            }
        }
        Ok(())
    }
}
