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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, CtlError>;

#[derive(Error, Debug)]
pub enum CtlError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Malformed location: {0}")]
    MalformedLocation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl CtlError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn malformed_location(location: impl AsRef<str>) -> Self {
        Self::MalformedLocation(format!(
            "path does not contain requestId: {}",
            location.as_ref()
        ))
    }

    pub fn invalid_input(context: impl Into<String>) -> Self {
        Self::InvalidInput(context.into())
    }
}
