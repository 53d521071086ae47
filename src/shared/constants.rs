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

/// Table layout (tab stops)
pub const TABLE_MIN_WIDTH: usize = 5;
pub const TABLE_PADDING: usize = 3;

/// Prefix for diagnostic messages
pub const VERBOSE_PREFIX: &str = "[INFO]";

/// Text label for the extracted request id
pub const REQUEST_ID_LABEL: &str = "RequestId";

/// Environment variable naming the output config file
pub const CONFIG_FILE_ENV: &str = "IONOSCTL_CONFIG";
