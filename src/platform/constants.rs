// Copyright 2025 dentsusoken
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

//! Platform-specific constants.

/// Present on Debian, Ubuntu and derivatives.
pub const DEBIAN_MARKER: &str = "/etc/debian_version";

/// Present on RHEL, Fedora, CentOS, Rocky and Alma.
pub const REDHAT_MARKER: &str = "/etc/redhat-release";

pub(crate) const UNIX_PYTHON: &str = "python3";
pub(crate) const UNIX_PIP: &str = "pip3";
pub(crate) const WINDOWS_PYTHON: &str = "python";
pub(crate) const WINDOWS_PIP: &str = "pip";
