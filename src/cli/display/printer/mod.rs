// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Printers for command results

mod json;
mod text;

pub use self::json::JsonPrinter;
pub use self::text::TextPrinter;

use super::result::CommandResult;
use crate::domain::config::{OutputFormat, RenderOptions};
use crate::shared::Result;
use std::io::Write;
use tracing::debug;

/// Output stream owned by a printer
pub type Stream = Box<dyn Write + Send>;

/// Renders command results to an output and an error stream.
///
/// Printers are single-writer; wrap one in a mutex to share it.
pub trait Printer: Send {
    /// Print a command result to the output stream
    fn print(&mut self, result: &CommandResult) -> Result<()>;

    /// Print a bare status message
    fn print_message(&mut self, message: &str) -> Result<()> {
        self.print(&CommandResult::message(message))
    }

    /// Print a diagnostic message to the error stream when verbose is on
    fn verbose(&mut self, message: &str) -> Result<()>;

    fn format(&self) -> OutputFormat;
}

/// Build the printer for `format` over the given streams
pub fn build_printer(
    format: OutputFormat,
    out: Stream,
    err: Stream,
    options: RenderOptions,
) -> Box<dyn Printer> {
    debug!("Using {} printer with {:?}", format, options);
    match format {
        OutputFormat::Text => Box::new(TextPrinter::new(out, err, options)),
        OutputFormat::Json => Box::new(JsonPrinter::new(out, err, options)),
    }
}

/// Maps an output format name to a printer.
///
/// Unknown names are rejected here, before any command runs.
pub struct PrinterRegistry {
    out: Stream,
    err: Stream,
    options: RenderOptions,
}

impl PrinterRegistry {
    pub fn new(out: Stream, err: Stream, options: RenderOptions) -> Self {
        Self { out, err, options }
    }

    /// Registry over the process stdout/stderr
    pub fn stdio(options: RenderOptions) -> Self {
        Self::new(
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
            options,
        )
    }

    pub fn get(self, format: &str) -> Result<Box<dyn Printer>> {
        let format: OutputFormat = format.parse()?;
        Ok(build_printer(format, self.out, self.err, self.options))
    }
}
