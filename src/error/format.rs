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

use crate::error::{ErrorContext, ToolcheckError};
use colored::Colorize;

/// Format a fatal error in the same `[ERROR]` layout the audit report uses.
pub fn format_error_with_color(error: &ToolcheckError, use_color: bool) -> String {
    let context = ErrorContext::new(error);
    let mut output = String::new();

    let tag = if use_color {
        "[ERROR]".red().bold().to_string()
    } else {
        "[ERROR]".to_string()
    };
    output.push_str(&format!("{tag} {}\n", context.error));

    if let Some(details) = &context.details {
        for line in details.lines() {
            output.push_str(&format!("    {line}\n"));
        }
    }

    if let Some(suggestion) = &context.suggestion {
        let header = if use_color {
            "Suggestions:".yellow().bold().to_string()
        } else {
            "Suggestions:".to_string()
        };
        output.push_str(&format!("\n{header}\n"));
        for line in suggestion.lines() {
            if !line.trim().is_empty() {
                let bullet = format!("• {line}");
                if use_color {
                    output.push_str(&format!("{}\n", bullet.as_str().cyan()));
                } else {
                    output.push_str(&format!("{bullet}\n"));
                }
            }
        }
    }

    output
}
