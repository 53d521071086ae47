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
use crate::cli::display::table::TableRenderer;
use crate::domain::config::{OutputFormat, RenderOptions};
use crate::shared::constants::{REQUEST_ID_LABEL, VERBOSE_PREFIX};
use crate::shared::Result;
use std::io::Write;

/// Human readable output: an aligned table followed by summary lines
pub struct TextPrinter {
    out: Stream,
    err: Stream,
    options: RenderOptions,
}

impl TextPrinter {
    pub fn new(out: Stream, err: Stream, options: RenderOptions) -> Self {
        Self { out, err, options }
    }
}

impl Printer for TextPrinter {
    fn print(&mut self, result: &CommandResult) -> Result<()> {
        // Extract first so a bad location fails before anything is written
        let request_id = result.request_id()?;

        if result.has_table() {
            TableRenderer::new()
                .no_headers(self.options.no_headers)
                .render(&mut self.out, &result.columns, &result.rows)?;
        }

        if self.options.quiet {
            return Ok(());
        }

        if let Some(message) = result.status_message() {
            writeln!(self.out, "{}", message)?;
        }
        if let Some(id) = request_id {
            writeln!(self.out, "{}: {}", REQUEST_ID_LABEL, id)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn verbose(&mut self, message: &str) -> Result<()> {
        if self.options.verbose {
            writeln!(self.err, "{} {}", VERBOSE_PREFIX, message)?;
        }
        Ok(())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::display::cell::{row, CellValue};
    use crate::cli::display::printer::test_support::SharedBuf;
    use crate::shared::CtlError;

    fn printer(options: RenderOptions) -> (TextPrinter, SharedBuf, SharedBuf) {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        (TextPrinter::new(out.stream(), err.stream(), options), out, err)
    }

    fn quiet() -> RenderOptions {
        RenderOptions {
            quiet: true,
            ..RenderOptions::default()
        }
    }

    fn table_result() -> CommandResult {
        CommandResult::message("listed").with_table(
            vec!["ID".to_string(), "Name".to_string()],
            vec![row([("ID", CellValue::from(1)), ("Name", CellValue::from("web"))])],
        )
    }

    #[test]
    fn test_resource_verb_wait() {
        let (mut p, out, _) = printer(RenderOptions::default());
        let result = CommandResult::for_resource("datacenter", "create").with_wait_for_request(true);
        p.print(&result).unwrap();
        assert_eq!(
            out.contents(),
            "Command datacenter create & wait have been successfully executed\n"
        );
    }

    #[test]
    fn test_table_before_status() {
        let (mut p, out, _) = printer(RenderOptions::default());
        p.print(&table_result()).unwrap();
        assert_eq!(out.contents(), "ID   Name\n1    web\nlisted\n");
    }

    #[test]
    fn test_request_id_line() {
        let (mut p, out, _) = printer(RenderOptions::default());
        let result = CommandResult::for_resource("server", "delete")
            .with_location("https://api.ionos.com/cloudapi/v6/requests/r-1/status");
        p.print(&result).unwrap();
        assert_eq!(
            out.contents(),
            "Command server delete have been successfully executed\nRequestId: r-1\n"
        );
    }

    #[test]
    fn test_malformed_location_aborts_without_output() {
        let (mut p, out, _) = printer(RenderOptions::default());
        let result = table_result().with_location("https://api.ionos.com/servers/123456");
        let err = p.print(&result).unwrap_err();
        assert!(matches!(err, CtlError::MalformedLocation(_)));
        assert!(out.contents().is_empty());
    }

    #[test]
    fn test_quiet_suppresses_message() {
        let (mut p, out, _) = printer(quiet());
        p.print(&CommandResult::message("x")).unwrap();
        assert!(out.contents().is_empty());
    }

    #[test]
    fn test_quiet_keeps_table() {
        let (mut p, out, _) = printer(quiet());
        p.print(&table_result()).unwrap();
        assert_eq!(out.contents(), "ID   Name\n1    web\n");
    }

    #[test]
    fn test_no_headers() {
        let options = RenderOptions {
            no_headers: true,
            ..RenderOptions::default()
        };
        let (mut p, out, _) = printer(options);
        p.print(&table_result()).unwrap();
        assert_eq!(out.contents(), "1    web\nlisted\n");
    }

    #[test]
    fn test_header_without_rows() {
        let (mut p, out, _) = printer(RenderOptions::default());
        let result = CommandResult::new().with_table(vec!["ID".to_string()], Vec::new());
        p.print(&result).unwrap();
        assert_eq!(out.contents(), "ID\n");
    }

    #[test]
    fn test_empty_result_prints_nothing() {
        let (mut p, out, _) = printer(RenderOptions::default());
        p.print(&CommandResult::new()).unwrap();
        assert!(out.contents().is_empty());
    }

    #[test]
    fn test_verbose_goes_to_stderr() {
        let (mut p, out, err) = printer(RenderOptions {
            verbose: true,
            ..RenderOptions::default()
        });
        p.verbose("getting server").unwrap();
        assert!(out.contents().is_empty());
        assert_eq!(err.contents(), "[INFO] getting server\n");

        let (mut p, _, err) = printer(RenderOptions::default());
        p.verbose("hidden").unwrap();
        assert!(err.contents().is_empty());
    }
}
