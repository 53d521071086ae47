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

//! Column set resolution for `--cols`

use tracing::debug;

/// Resolve the columns to render.
///
/// Without a custom selection the `default` set is returned unchanged.
/// Otherwise the custom names that exist in `all` are kept in the order the
/// user gave them. Unknown names are dropped without an error, and if none
/// survive the `default` set is used instead.
pub fn resolve_columns<A, D, C>(all: &[A], default: &[D], custom: Option<&[C]>) -> Vec<String>
where
    A: AsRef<str>,
    D: AsRef<str>,
    C: AsRef<str>,
{
    select(all, custom).unwrap_or_else(|| owned(default))
}

/// Same as [`resolve_columns`], falling back to every column in `all`.
pub fn resolve_columns_all_default<A, C>(all: &[A], custom: Option<&[C]>) -> Vec<String>
where
    A: AsRef<str>,
    C: AsRef<str>,
{
    select(all, custom).unwrap_or_else(|| owned(all))
}

/// Split a raw `--cols` value into column names.
///
/// Returns `None` when nothing but separators and whitespace is given.
pub fn parse_cols(raw: &str) -> Option<Vec<String>> {
    let cols: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect();

    if cols.is_empty() {
        None
    } else {
        Some(cols)
    }
}

fn select<A, C>(all: &[A], custom: Option<&[C]>) -> Option<Vec<String>>
where
    A: AsRef<str>,
    C: AsRef<str>,
{
    let custom = custom.filter(|c| !c.is_empty())?;

    let mut known = Vec::with_capacity(custom.len());
    let mut unknown = Vec::new();
    for col in custom {
        let col: &str = col.as_ref();
        if all.iter().map(AsRef::<str>::as_ref).any(|a| a == col) {
            known.push(col.to_string());
        } else {
            unknown.push(col);
        }
    }

    if !unknown.is_empty() {
        debug!("Ignoring unknown columns: {:?}", unknown);
    }

    if known.is_empty() {
        debug!("No valid custom columns, using defaults");
        return None;
    }

    Some(known)
}

fn owned<S: AsRef<str>>(cols: &[S]) -> Vec<String> {
    cols.iter().map(AsRef::<str>::as_ref).map(String::from).collect()
}
