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

//! Table cell values
//!
//! Every cell is classified into a closed set of kinds when the row is
//! built, so the renderer only has to match on [`CellValue`].

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A single row of a table, keyed by column name
pub type Row = BTreeMap<String, CellValue>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    StringList(Vec<String>),
    /// Pre-rendered text of a value outside the primitive kinds
    Other(String),
    #[default]
    Absent,
}

impl CellValue {
    /// Wrap any displayable value as an `Other` cell
    pub fn other(value: impl fmt::Display) -> Self {
        Self::Other(value.to_string())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{:.6}", v),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::StringList(items) => f.write_str(&items.join(",")),
            CellValue::Other(s) => f.write_str(s),
            CellValue::Absent => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for CellValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}

impl From<Vec<&str>> for CellValue {
    fn from(value: Vec<&str>) -> Self {
        Self::StringList(value.into_iter().map(String::from).collect())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(s) => Self::String(s),
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if n.is_u64() {
                    // Out of i64 range, keep the exact digits
                    Self::Other(n.to_string())
                } else {
                    n.as_f64().map_or_else(|| Self::Other(n.to_string()), Self::Float)
                }
            }
            Value::Array(items) if items.iter().all(Value::is_string) => Self::StringList(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            other => Self::Other(other.to_string()),
        }
    }
}

/// Build a row from `(column, value)` pairs
pub fn row<I, K, V>(cells: I) -> Row
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<CellValue>,
{
    cells
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
