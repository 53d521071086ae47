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

//! Request id extraction from API status locations

use crate::shared::{CtlError, Result};
use regex::Regex;
use tracing::debug;

/// Extract the request id from a status location such as
/// `https://api.ionos.com/cloudapi/v6/requests/{id}/status`.
pub fn extract_request_id(location: &str) -> Result<String> {
    let re = Regex::new(r"/requests/([^/?#]+)")?;
    let id = re
        .captures(location)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| CtlError::malformed_location(location))?;

    debug!("Extracted request id {} from {}", id, location);
    Ok(id)
}
