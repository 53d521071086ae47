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

//! Format-agnostic command result

use super::cell::Row;
use super::request::extract_request_id;
use crate::shared::Result;
use serde::Serialize;
use serde_json::Value;

/// What a command wants to show the user.
///
/// `resource` + `verb` take precedence over `message` when both are set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandResult {
    pub message: Option<String>,
    pub resource: Option<String>,
    pub verb: Option<String>,
    pub wait_for_request: bool,
    pub wait_for_state: bool,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    pub raw_payload: Option<Value>,
    pub api_response_location: Option<String>,
}

impl CommandResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn for_resource(resource: impl Into<String>, verb: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
            verb: Some(verb.into()),
            ..Self::default()
        }
    }

    pub fn with_wait_for_request(mut self, wait: bool) -> Self {
        self.wait_for_request = wait;
        self
    }

    pub fn with_wait_for_state(mut self, wait: bool) -> Self {
        self.wait_for_state = wait;
        self
    }

    pub fn with_table(mut self, columns: Vec<String>, rows: Vec<Row>) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub fn with_raw_payload<T: Serialize>(mut self, payload: &T) -> Result<Self> {
        self.raw_payload = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.api_response_location = Some(location.into());
        self
    }

    /// Status line to show, if any
    pub fn status_message(&self) -> Option<String> {
        match (&self.resource, &self.verb) {
            (Some(resource), Some(verb)) => {
                let wait = if self.wait_for_request || self.wait_for_state {
                    " & wait"
                } else {
                    ""
                };
                Some(format!(
                    "Command {} {}{} have been successfully executed",
                    resource, verb, wait
                ))
            }
            _ => self.message.clone().filter(|m| !m.is_empty()),
        }
    }

    /// Request id carried by the response location, if one was set
    pub fn request_id(&self) -> Result<Option<String>> {
        self.api_response_location
            .as_deref()
            .map(extract_request_id)
            .transpose()
    }

    /// A table is rendered whenever columns are set, even with no rows
    pub fn has_table(&self) -> bool {
        !self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_message() {
        let result = CommandResult::for_resource("datacenter", "create");
        assert_eq!(
            result.status_message().as_deref(),
            Some("Command datacenter create have been successfully executed")
        );
    }

    #[test]
    fn test_synthesized_message_with_wait() {
        let by_request = CommandResult::for_resource("datacenter", "create").with_wait_for_request(true);
        let by_state = CommandResult::for_resource("datacenter", "create").with_wait_for_state(true);
        let expected = "Command datacenter create & wait have been successfully executed";
        assert_eq!(by_request.status_message().as_deref(), Some(expected));
        assert_eq!(by_state.status_message().as_deref(), Some(expected));
    }

    #[test]
    fn test_resource_verb_wins_over_message() {
        let mut result = CommandResult::for_resource("server", "delete");
        result.message = Some("ignored".to_string());
        assert!(result.status_message().unwrap().starts_with("Command server delete"));
    }

    #[test]
    fn test_resource_without_verb_uses_message() {
        let mut result = CommandResult::message("plain");
        result.resource = Some("server".to_string());
        assert_eq!(result.status_message().as_deref(), Some("plain"));
    }

    #[test]
    fn test_empty_message_is_none() {
        assert_eq!(CommandResult::message("").status_message(), None);
        assert_eq!(CommandResult::new().status_message(), None);
    }

    #[test]
    fn test_request_id() {
        assert_eq!(CommandResult::new().request_id().unwrap(), None);

        let result = CommandResult::new()
            .with_location("https://api.ionos.com/cloudapi/v6/requests/abc/status");
        assert_eq!(result.request_id().unwrap().as_deref(), Some("abc"));

        let bad = CommandResult::new().with_location("https://api.ionos.com/servers/1");
        assert!(bad.request_id().is_err());
    }

    #[test]
    fn test_has_table() {
        assert!(!CommandResult::message("x").has_table());
        assert!(CommandResult::new()
            .with_table(vec!["ID".to_string()], Vec::new())
            .has_table());
    }

    #[test]
    fn test_raw_payload() {
        #[derive(Serialize)]
        struct Item {
            id: u32,
        }

        let result = CommandResult::new().with_raw_payload(&vec![Item { id: 7 }]).unwrap();
        assert_eq!(result.raw_payload, Some(serde_json::json!([{"id": 7}])));
    }
}
