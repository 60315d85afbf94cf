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

use crate::error::ToolcheckError;

pub struct ErrorContext<'a> {
    pub error: &'a ToolcheckError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a ToolcheckError) -> Self {
        let (suggestion, details) = match error {
            ToolcheckError::UnsupportedPlatform { searched } => {
                let suggestion = Some(
                    "toolcheck supports Debian/Ubuntu, Red Hat/Fedora and Windows hosts."
                        .to_string(),
                );
                let details = if searched.is_empty() {
                    None
                } else {
                    Some(format!(
                        "Looked for:\n{}",
                        searched
                            .iter()
                            .map(|p| format!("  - {p}"))
                            .collect::<Vec<_>>()
                            .join("\n")
                    ))
                };
                (suggestion, details)
            }
            ToolcheckError::PermissionDenied(path) => {
                let suggestion = if cfg!(windows) {
                    Some(
                        "Re-run from a terminal that can read the reported location, or fix \
                         its ACL."
                            .to_string(),
                    )
                } else {
                    Some(
                        "Check the ownership and mode of the reported path (ls -l), then \
                         re-run the audit."
                            .to_string(),
                    )
                };
                let details = Some(format!("Access denied while probing: {path}"));
                (suggestion, details)
            }
            ToolcheckError::InvalidCategory(_) => {
                let suggestion = Some(
                    "Valid categories: system-packages, compilers, build-tools, python, \
                     test-frameworks, cache, git, formatting."
                        .to_string(),
                );
                (suggestion, None)
            }
            ToolcheckError::ConfigFile(msg) => {
                let suggestion = Some(
                    "Fix the syntax in config.toml or remove it to fall back to defaults."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            ToolcheckError::ProbeFault { probe, .. } => {
                let suggestion = Some(format!(
                    "The audit environment could not evaluate '{probe}'. Resolve the fault \
                     and run toolcheck again."
                ));
                (suggestion, None)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}
