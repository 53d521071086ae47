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

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn ionosctl() -> Command {
    let mut cmd = Command::cargo_bin("ionosctl").unwrap();
    cmd.env_remove("IONOSCTL_CONFIG");
    cmd
}

const SERVERS: &str = r#"{"items": [
    {"id": "s-1", "name": "web", "cores": 2, "ram": 2048.5, "public": true},
    {"id": "s-2", "name": "db", "cores": 4, "ram": 4096, "public": false}
]}"#;

#[test]
fn test_version_text() {
    ionosctl()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Name       Version\nionosctl   "));
}

#[test]
fn test_version_json() {
    ionosctl()
        .args(["version", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"items\": {"))
        .stdout(predicate::str::contains("\"name\": \"ionosctl\""));
}

#[test]
fn test_render_custom_columns() {
    ionosctl()
        .args(["render", "--cols", "name,bogus,id"])
        .write_stdin(SERVERS)
        .assert()
        .success()
        .stdout("name   id\nweb    s-1\ndb     s-2\n");
}

#[test]
fn test_render_quiet_with_status() {
    ionosctl()
        .args(["render", "--cols", "id", "--resource", "server", "--verb", "list", "-q"])
        .write_stdin(SERVERS)
        .assert()
        .success()
        .stdout("id\ns-1\ns-2\n");
}

#[test]
fn test_render_status_and_request_id() {
    ionosctl()
        .args([
            "render",
            "--no-headers",
            "--cols",
            "id",
            "--resource",
            "server",
            "--verb",
            "create",
            "--wait",
            "--location",
            "https://api.ionos.com/cloudapi/v6/requests/r-9/status",
        ])
        .write_stdin(r#"{"id": "s-3"}"#)
        .assert()
        .success()
        .stdout("s-3\nCommand server create & wait have been successfully executed\nRequestId: r-9\n");
}

#[test]
fn test_render_bad_location_fails() {
    ionosctl()
        .args(["render", "--location", "https://api.ionos.com/servers/1"])
        .write_stdin(SERVERS)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("does not contain requestId"));
}

#[test]
fn test_unknown_output_format_fails() {
    ionosctl()
        .args(["version", "--output", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output format: yaml"));
}

#[test]
fn test_config_file_selects_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "output = \"json\"").unwrap();

    ionosctl()
        .args(["render", "--config"])
        .arg(file.path())
        .write_stdin(r#"{"id": "s-1"}"#)
        .assert()
        .success()
        .stdout("{\n  \"items\": {\n    \"id\": \"s-1\"\n  }\n}\n");
}

#[test]
fn test_verbose_from_config_enables_debug_logs() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "verbose = true").unwrap();

    ionosctl()
        .args(["version", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO]").not())
        .stderr(predicate::str::contains("Using text printer"));
}

#[test]
fn test_verbose_json_on_stderr() {
    ionosctl()
        .args(["render", "-o", "json", "-v", "--cols", "id"])
        .write_stdin(r#"{"id": "s-1"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("[INFO]").not())
        .stderr(predicate::str::contains("\"Message\": \"[INFO] Reading response from stdin\""));
}
