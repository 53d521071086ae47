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

use super::{Printer, Stream};
use crate::cli::display::result::CommandResult;
use crate::domain::config::{OutputFormat, RenderOptions};
use crate::shared::constants::VERBOSE_PREFIX;
use crate::shared::Result;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Envelope<'a> {
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
    #[serde(rename = "items", skip_serializing_if = "Option::is_none")]
    items: Option<&'a Value>,
}

impl Envelope<'_> {
    fn is_empty(&self) -> bool {
        self.status.is_none() && self.request_id.is_none() && self.items.is_none()
    }
}

#[derive(Debug, Serialize)]
struct Diagnostic {
    #[serde(rename = "Message")]
    message: String,
}

/// Machine readable output, one indented JSON document per print
pub struct JsonPrinter {
    out: Stream,
    err: Stream,
    options: RenderOptions,
}

impl JsonPrinter {
    pub fn new(out: Stream, err: Stream, options: RenderOptions) -> Self {
        Self { out, err, options }
    }
}

fn write_json<W: Write, T: Serialize>(mut w: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut w, value)?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}

impl Printer for JsonPrinter {
    fn print(&mut self, result: &CommandResult) -> Result<()> {
        let request_id = result.request_id()?;

        // Quiet keeps the payload and drops the summary fields
        let envelope = Envelope {
            status: if self.options.quiet { None } else { result.status_message() },
            request_id: if self.options.quiet { None } else { request_id },
            items: result.raw_payload.as_ref().filter(|v| !v.is_null()),
        };

        if envelope.is_empty() {
            return Ok(());
        }
        write_json(&mut self.out, &envelope)
    }

    fn verbose(&mut self, message: &str) -> Result<()> {
        if !self.options.verbose {
            return Ok(());
        }
        let diagnostic = Diagnostic {
            message: format!("{} {}", VERBOSE_PREFIX, message),
        };
        write_json(&mut self.err, &diagnostic)
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
