/*
Copyright (C) 2022 Aurora McGinnis

This Source Code Form is subject to the terms of the Mozilla Public
License, v. 2.0. If a copy of the MPL was not distributed with this
file, You can obtain one at http://mozilla.org/MPL/2.0/.
*/

use chrono::Local;
use derivative::Derivative;
use log::{set_boxed_logger, set_max_level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{self, IsTerminal, Stderr, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

mod entry;
pub use entry::Entry;
mod fields;
pub use fields::{sort_fields, Field, SortedFields, SERVICE_KEY};
mod level;
pub use level::Level;
// Turns entries into text lines
mod render;
pub use render::{LineRenderer, TIME_FORMAT};
mod term;
pub use term::{is_terminal, TerminalDetection};

/// The only way handling an entry can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output stream rejected the line or could not complete the write.
    #[error("failed to write log line: {0}")]
    Write(#[from] io::Error),
}

/// `HandlerBuilder` is used to construct a `Handler`.
#[must_use = "Has no effect unless .build() is called."]
pub struct HandlerBuilder<W> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HandlerBuilder<W> {
    /// Construct a builder writing to `writer`. Colors start disabled since an arbitrary writer
    /// can't be inspected; use `detect_colors` or `use_colors` to change that.
    pub fn new(writer: W) -> HandlerBuilder<W> {
        HandlerBuilder {
            writer,
            use_colors: false,
        }
    }

    /// Force colors on or off.
    pub fn use_colors(mut self, use_colors: bool) -> HandlerBuilder<W> {
        self.use_colors = use_colors;
        self
    }

    pub fn build(self) -> Handler<W> {
        Handler {
            use_colors: AtomicBool::new(self.use_colors),
            writer: Mutex::new(self.writer),
        }
    }
}

impl<W: Write + IsTerminal> HandlerBuilder<W> {
    /// Enable colors if the writer is a terminal according to `detection`. The answer is taken once,
    /// here, and never re-checked while logging.
    pub fn detect_colors(mut self, detection: TerminalDetection) -> HandlerBuilder<W> {
        self.use_colors = detection.is_terminal(&self.writer);
        self
    }
}

/// Logger implementation that renders every record as one human readable line and writes it to the
/// wrapped stream. A mutex around the stream keeps lines from concurrent callers whole.
///
/// Nothing is installed globally unless `apply` is called.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Handler<W = Stderr> {
    use_colors: AtomicBool,
    #[derivative(Debug = "ignore")]
    writer: Mutex<W>,
}

impl<W: Write> Handler<W> {
    /// A handler without colors.
    pub fn new(writer: W) -> Handler<W> {
        HandlerBuilder::new(writer).build()
    }

    /// A handler whose color mode comes from the platform's default terminal detection.
    pub fn detect(writer: W) -> Handler<W>
    where
        W: IsTerminal,
    {
        HandlerBuilder::new(writer)
            .detect_colors(TerminalDetection::default())
            .build()
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors.load(Ordering::Relaxed)
    }

    /// Override the color mode chosen at construction.
    pub fn set_use_colors(&self, use_colors: bool) {
        self.use_colors.store(use_colors, Ordering::Relaxed);
    }

    /// Render `record` and write it as a single line.
    pub fn handle_log(&self, record: &Record) -> Result<(), Error> {
        self.handle_entry(&Entry::from_record(record))
    }

    /// Render `entry` and write it as a single line. Rendering happens before the stream lock is
    /// taken; only the write itself is serialized.
    pub fn handle_entry(&self, entry: &Entry<'_>) -> Result<(), Error> {
        let line = LineRenderer::new(self.use_colors()).render(entry, &Local::now());

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Consume the handler, returning the stream.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Handler<Stderr> {
    /// A handler bound to standard error, with colors if standard error is a terminal.
    pub fn stderr() -> Handler<Stderr> {
        Handler::detect(io::stderr())
    }
}

impl Default for Handler<Stderr> {
    fn default() -> Self {
        Handler::stderr()
    }
}

impl<W: Write + Send + 'static> Handler<W> {
    /// Installs the handler as the logger for the entire program. Records above `max_level` are
    /// discarded by the `log` macros before they get here.
    /// Calling this (or any similar function from other libraries) more than once is a bug.
    pub fn apply(self, max_level: LevelFilter) -> Result<(), SetLoggerError> {
        set_max_level(max_level);
        set_boxed_logger(Box::new(self))
    }
}

impl<W: Write + Send> Log for Handler<W> {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Err(e) = self.handle_log(record) {
            // log has no way to hand the failure back to the caller
            let _ = writeln!(io::stderr(), "(log_term) {}", e);
        }
    }

    fn flush(&self) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}
