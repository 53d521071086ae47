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

//! Table rendering for text output

use super::cell::{CellValue, Row};
use crate::shared::constants::{TABLE_MIN_WIDTH, TABLE_PADDING};
use crate::shared::Result;
use std::io::Write;
use tabwriter::TabWriter;

/// Tab-stop aligned table renderer
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    min_width: usize,
    padding: usize,
    no_headers: bool,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    pub fn new() -> Self {
        Self {
            min_width: TABLE_MIN_WIDTH,
            padding: TABLE_PADDING,
            no_headers: false,
        }
    }

    pub fn no_headers(mut self, no_headers: bool) -> Self {
        self.no_headers = no_headers;
        self
    }

    /// Write the header line (unless suppressed) and one line per row.
    ///
    /// Columns missing from a row render as empty cells. Write errors abort
    /// the render; lines already flushed stay written.
    pub fn render<W: Write>(&self, out: W, columns: &[String], rows: &[Row]) -> Result<()> {
        if columns.is_empty() {
            return Ok(());
        }

        // tabwriter sizes a column as max(cell, minwidth) + padding, so the
        // minimum is lowered by the padding to get max(cell + padding, min_width)
        let mut tw = TabWriter::new(out)
            .minwidth(self.min_width.saturating_sub(self.padding))
            .padding(self.padding);

        if !self.no_headers {
            writeln!(tw, "{}", columns.join("\t"))?;
        }

        let absent = CellValue::Absent;
        for row in rows {
            let line = columns
                .iter()
                .map(|col| row.get(col).unwrap_or(&absent).to_string())
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(tw, "{}", line)?;
        }

        tw.flush()?;
        Ok(())
    }
}

/// Render `rows` under `columns` into `out` with the default layout.
pub fn render_text<W: Write>(out: W, columns: &[String], rows: &[Row], no_headers: bool) -> Result<()> {
    TableRenderer::new().no_headers(no_headers).render(out, columns, rows)
}
