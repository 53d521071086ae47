//! Display module for formatted CLI output

pub mod cell;
pub mod columns;
pub mod printer;
pub mod request;
pub mod result;
pub mod table;

pub use cell::{row, CellValue, Row};
pub use columns::{parse_cols, resolve_columns, resolve_columns_all_default};
pub use printer::{build_printer, JsonPrinter, Printer, PrinterRegistry, Stream, TextPrinter};
pub use request::extract_request_id;
pub use result::CommandResult;
pub use table::{render_text, TableRenderer};
