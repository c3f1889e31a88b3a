/*
Copyright (C) 2022 Aurora McGinnis

This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at http://mozilla.org/MPL/2.0/.
*/

use crate::Level;
use log::kv::Source;
use log::Record;
use std::fmt;

/// `Entry` is a single log event as seen by the `Handler`: a level, a message and an optional set of
/// key/value fields. Entries are usually built from a `log::Record`, but can also be constructed
/// directly, which is the only way to emit a `Level::Fatal` line.
#[derive(Clone, Copy)]
pub struct Entry<'a> {
    level: Level,
    message: fmt::Arguments<'a>,
    fields: Option<&'a dyn Source>,
}

impl<'a> Entry<'a> {
    /// Create an entry without fields.
    pub fn new(level: Level, message: fmt::Arguments<'a>) -> Self {
        Entry {
            level,
            message,
            fields: None,
        }
    }

    /// Attach the key/value fields for this entry.
    pub fn fields(mut self, fields: &'a dyn Source) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn from_record(record: &'a Record<'_>) -> Self {
        Entry {
            level: record.level().into(),
            message: *record.args(),
            fields: Some(record.key_values()),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> fmt::Arguments<'a> {
        self.message
    }

    pub fn source(&self) -> Option<&'a dyn Source> {
        self.fields
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("level", &self.level)
            .field("message", &self.message)
            .field("fields", &self.fields.map(|s| s.count()).unwrap_or(0))
            .finish()
    }
}
