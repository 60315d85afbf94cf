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

use crate::doctor::{AuditReport, CheckResult};
use crate::platform::Platform;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "[INFO]"),
            Level::Success => write!(f, "[SUCCESS]"),
            Level::Warning => write!(f, "[WARNING]"),
            Level::Error => write!(f, "[ERROR]"),
        }
    }
}

impl Level {
    fn tag(&self, use_color: bool) -> String {
        let plain = self.to_string();
        if !use_color {
            return plain;
        }
        let plain = plain.as_str();
        match self {
            Level::Info => plain.blue().to_string(),
            Level::Success => plain.green().to_string(),
            Level::Warning => plain.yellow().to_string(),
            Level::Error => plain.red().bold().to_string(),
        }
    }
}

/// Write one `[LEVEL] message` line.
pub fn write_status<W: Write>(
    writer: &mut W,
    level: Level,
    message: &str,
    use_color: bool,
) -> std::io::Result<()> {
    writeln!(writer, "{} {message}", level.tag(use_color))
}

fn write_group<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    use_color: bool,
) -> std::io::Result<()> {
    if let Some(fault) = &result.fault {
        write_status(
            writer,
            Level::Error,
            &format!("{}: {fault}", result.category),
            use_color,
        )?;
        if result.missing.is_empty() {
            return Ok(());
        }
    }

    if result.satisfied {
        return write_status(
            writer,
            Level::Success,
            &format!("{}: all {} items found", result.category, result.total),
            use_color,
        );
    }

    write_status(
        writer,
        Level::Warning,
        &format!(
            "{}: missing {} of {} items",
            result.category,
            result.missing.len(),
            result.total
        ),
        use_color,
    )?;
    for item in &result.missing {
        writeln!(writer, "    - {item}")?;
    }
    Ok(())
}

pub fn format_human_readable<W: Write>(
    writer: &mut W,
    report: &AuditReport,
    use_color: bool,
) -> std::io::Result<()> {
    write_status(
        writer,
        Level::Info,
        &format!("Detected platform: {}", report.platform),
        use_color,
    )?;

    for result in &report.results {
        write_group(writer, result, use_color)?;
    }

    if report.satisfied() {
        write_status(writer, Level::Success, "Toolchain is ready", use_color)
    } else {
        write_status(
            writer,
            Level::Error,
            &format!(
                "Toolchain is not ready ({} of {} groups unsatisfied)",
                report.unsatisfied_count(),
                report.results.len()
            ),
            use_color,
        )
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: String,
    timestamp: DateTime<Utc>,
    platform: Platform,
    satisfied: bool,
    exit_code: i32,
    groups: Vec<JsonGroup<'a>>,
}

#[derive(Serialize)]
struct JsonGroup<'a> {
    name: String,
    #[serde(flatten)]
    result: &'a CheckResult,
}

pub fn format_json<W: Write>(writer: &mut W, report: &AuditReport) -> std::io::Result<()> {
    let output = JsonOutput {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        platform: report.platform,
        satisfied: report.satisfied(),
        exit_code: report.determine_exit_code(),
        groups: report
            .results
            .iter()
            .map(|result| JsonGroup {
                name: result.category.to_string(),
                result,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *writer, &output)?;
    writeln!(writer)?;
    Ok(())
}
