//! Command handlers

use super::display::{parse_cols, resolve_columns, row, CellValue, CommandResult, Printer, Row};
use crate::shared::CtlError;
use clap::Parser;
use serde_json::{Map, Value};
use std::fs::read_to_string;

#[derive(Parser, Debug)]
pub struct VersionCommand {
    /// Columns to display (Name, Version)
    #[arg(long, value_name = "COLS")]
    pub cols: Option<String>,
}

#[derive(Parser, Debug)]
pub struct RenderCommand {
    /// Path to the JSON response (reads stdin if not given)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<String>,

    /// Columns to display, comma separated, in display order
    #[arg(long, value_name = "COLS")]
    pub cols: Option<String>,

    /// Columns shown when --cols is not given (defaults to every field)
    #[arg(long, value_name = "COLS")]
    pub default_cols: Option<String>,

    /// Status location of the API request, used to report the request id
    #[arg(long, value_name = "URL")]
    pub location: Option<String>,

    /// Resource name for the success message
    #[arg(long, requires = "verb")]
    pub resource: Option<String>,

    /// Verb for the success message
    #[arg(long, requires = "resource")]
    pub verb: Option<String>,

    /// Report that the command waited for the request to finish
    #[arg(long, short = 'w')]
    pub wait: bool,
}

const VERSION_COLS: [&str; 2] = ["Name", "Version"];

impl VersionCommand {
    pub fn execute(&self, printer: &mut dyn Printer) -> anyhow::Result<()> {
        let name = env!("CARGO_PKG_NAME");
        let version = env!("CARGO_PKG_VERSION");
        let custom = self.cols.as_deref().and_then(parse_cols);

        let columns = resolve_columns(&VERSION_COLS, &VERSION_COLS, custom.as_deref());
        let rows = vec![row([("Name", name), ("Version", version)])];

        let result = CommandResult::new()
            .with_table(columns, rows)
            .with_raw_payload(&serde_json::json!({ "name": name, "version": version }))?;

        printer.print(&result)?;
        Ok(())
    }
}

impl RenderCommand {
    pub fn execute(&self, printer: &mut dyn Printer) -> anyhow::Result<()> {
        let content = match self.file {
            Some(ref path) => {
                printer.verbose(&format!("Reading response from {}", path))?;
                read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?
            }
            None => {
                printer.verbose("Reading response from stdin")?;
                std::io::read_to_string(std::io::stdin())?
            }
        };

        let response: Value = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse response: {}", e))?;

        let result = build_result(self, response)?;
        printer.verbose(&format!("Rendering {} row(s)", result.rows.len()))?;
        printer.print(&result)?;
        Ok(())
    }
}

/// Turn an API response into a printable result.
///
/// The response is a single object, an array of objects, or an object
/// wrapping an `items` array.
fn build_result(cmd: &RenderCommand, response: Value) -> crate::Result<CommandResult> {
    let items = response_items(&response)?;

    // Union of keys, first-seen order
    let mut all: Vec<String> = Vec::new();
    for item in &items {
        for key in item.keys() {
            if !all.contains(key) {
                all.push(key.clone());
            }
        }
    }

    let default = cmd
        .default_cols
        .as_deref()
        .and_then(parse_cols)
        .unwrap_or_else(|| all.clone());
    let custom = cmd.cols.as_deref().and_then(parse_cols);
    let columns = resolve_columns(&all, &default, custom.as_deref());

    let rows: Vec<Row> = items
        .iter()
        .map(|item| {
            item.iter()
                .map(|(k, v)| (k.clone(), CellValue::from(v.clone())))
                .collect()
        })
        .collect();

    let mut result = match (&cmd.resource, &cmd.verb) {
        (Some(resource), Some(verb)) => CommandResult::for_resource(resource, verb),
        _ => CommandResult::new(),
    }
    .with_wait_for_request(cmd.wait)
    .with_table(columns, rows);

    result.raw_payload = Some(response);
    if let Some(ref location) = cmd.location {
        result = result.with_location(location);
    }
    Ok(result)
}

fn response_items(response: &Value) -> crate::Result<Vec<&Map<String, Value>>> {
    let values: Vec<&Value> = match response {
        Value::Array(items) => items.iter().collect(),
        Value::Object(obj) => match obj.get("items") {
            Some(Value::Array(items)) => items.iter().collect(),
            _ => vec![response],
        },
        _ => {
            return Err(CtlError::invalid_input(
                "response must be a JSON object or an array of objects",
            ))
        }
    };

    values
        .into_iter()
        .map(|v| {
            v.as_object()
                .ok_or_else(|| CtlError::invalid_input(format!("expected an object, found {}", v)))
        })
        .collect()
}
