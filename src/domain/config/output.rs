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

use crate::shared::constants::CONFIG_FILE_ENV;
use crate::shared::{CtlError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CtlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CtlError::ConfigError(format!(
                "Invalid output format: {} (expected json or text)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings a printer reads while rendering. Built once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub quiet: bool,
    pub verbose: bool,
    pub no_headers: bool,
}

/// Output settings from the config file.
///
/// Every field is optional so the command line can override per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    pub output: Option<String>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub no_headers: Option<bool>,
}

impl OutputConfig {
    pub fn from<T: AsRef<Path>>(path: T) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            CtlError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let conf: Self = toml::from_str(&content)?;
        Ok(conf)
    }

    /// Load from an explicit path, else from `IONOSCTL_CONFIG`, else defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from(path);
        }

        match std::env::var(CONFIG_FILE_ENV) {
            Ok(env_path) if !env_path.is_empty() => Self::from(env_path),
            _ => Ok(Self::default()),
        }
    }

    /// Output format name: flag > config file > text
    pub fn resolve_output(&self, flag: Option<&str>) -> String {
        flag.or(self.output.as_deref())
            .map(String::from)
            .unwrap_or_else(|| OutputFormat::default().to_string())
    }

    /// A set flag wins, an unset one defers to the file
    pub fn resolve_options(&self, quiet: bool, verbose: bool, no_headers: bool) -> RenderOptions {
        RenderOptions {
            quiet: quiet || self.quiet.unwrap_or(false),
            verbose: verbose || self.verbose.unwrap_or(false),
            no_headers: no_headers || self.no_headers.unwrap_or(false),
        }
    }
}
