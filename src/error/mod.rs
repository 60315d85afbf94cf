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

mod context;
mod exit_codes;
mod format;
#[cfg(test)]
mod tests;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_with_color;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolcheckError {
    #[error("Unsupported platform: no Debian, Red Hat or Windows indicator found")]
    UnsupportedPlatform { searched: Vec<String> },

    #[error("Probe '{probe}' failed: {message}")]
    ProbeFault { probe: String, message: String },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid check category: {0}")]
    InvalidCategory(String),

    #[error("Configuration file error: {0}")]
    ConfigFile(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ToolcheckError {
    /// Classify an I/O error raised while probing `probe`.
    pub fn from_probe_io(probe: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                ToolcheckError::PermissionDenied(format!("{probe}: {err}"))
            }
            _ => ToolcheckError::ProbeFault {
                probe: probe.to_string(),
                message: err.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolcheckError>;
