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

use crate::config::ToolcheckConfig;
use crate::doctor::formatters::{format_human_readable, format_json};
use crate::doctor::{AuditEngine, AuditReport, CheckCategory, CheckContext, CheckGroup};
use crate::error::Result;
use crate::platform::{Platform, detect_platform};
use crate::probe::{HostProbe, SystemProbe};
use std::io::{self, IsTerminal, Write};

pub struct AuditCommand<'a> {
    config: &'a ToolcheckConfig,
}

impl<'a> AuditCommand<'a> {
    pub fn new(config: &'a ToolcheckConfig) -> Result<Self> {
        Ok(Self { config })
    }

    /// Detect the host, audit it and print the report. Returns the exit code.
    pub fn execute(&self, categories: &[CheckCategory], json: bool) -> Result<i32> {
        let platform = detect_platform()?;
        let probe = HostProbe::new(platform);

        let report = self.run(platform, &probe, categories)?;

        let use_color = !json && self.config.use_color(io::stdout().is_terminal());
        let mut stdout = io::stdout().lock();
        write_report(&mut stdout, &report, json, use_color)?;
        stdout.flush()?;

        Ok(report.determine_exit_code())
    }

    /// Audit `categories` (all when empty) in report order.
    pub fn run(
        &self,
        platform: Platform,
        probe: &dyn SystemProbe,
        categories: &[CheckCategory],
    ) -> Result<AuditReport> {
        let context = CheckContext::from_config(self.config)?;
        let groups = build_groups(platform, &context, categories);

        Ok(AuditEngine::new(platform, probe).audit(&groups))
    }
}

fn build_groups(
    platform: Platform,
    context: &CheckContext,
    categories: &[CheckCategory],
) -> Vec<CheckGroup> {
    let mut selected = if categories.is_empty() {
        CheckCategory::all()
    } else {
        categories.to_vec()
    };
    selected.sort();
    selected.dedup();

    selected
        .iter()
        .map(|category| category.create_group(platform, context))
        .collect()
}

pub fn write_report<W: Write>(
    writer: &mut W,
    report: &AuditReport,
    json: bool,
    use_color: bool,
) -> Result<()> {
    if json {
        format_json(writer, report)?;
    } else {
        format_human_readable(writer, report, use_color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormattingConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Host probe for commands, real filesystem for files.
    struct CommandsOnly(&'static [&'static str]);

    impl SystemProbe for CommandsOnly {
        fn command_on_path(&self, name: &str) -> bool {
            self.0.contains(&name)
        }

        fn package_registered(&self, _name: &str) -> bool {
            false
        }

        fn python_package_installed(&self, _name: &str) -> bool {
            false
        }

        fn file_exists(&self, path: &Path) -> Result<bool> {
            Ok(path.exists())
        }

        fn config_value(&self, _key: &str) -> Option<String> {
            None
        }
    }

    fn config_with_formatting_dir(dir: &Path) -> ToolcheckConfig {
        ToolcheckConfig {
            formatting: FormattingConfig {
                directory: Some(dir.to_path_buf()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_runs_all_groups_when_none_selected() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_with_formatting_dir(temp_dir.path());
        let command = AuditCommand::new(&config).unwrap();

        let report = command
            .run(Platform::Debian, &CommandsOnly(&[]), &[])
            .unwrap();

        let categories: Vec<CheckCategory> = report.results.iter().map(|r| r.category).collect();
        assert_eq!(categories, CheckCategory::all());
        assert!(!report.satisfied());
    }

    #[test]
    fn test_selected_groups_keep_report_order() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_with_formatting_dir(temp_dir.path());
        let command = AuditCommand::new(&config).unwrap();

        let report = command
            .run(
                Platform::RedHat,
                &CommandsOnly(&["cmake", "ninja", "make", "ccache"]),
                &[CheckCategory::Cache, CheckCategory::BuildTools],
            )
            .unwrap();

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].category, CheckCategory::BuildTools);
        assert_eq!(report.results[1].category, CheckCategory::Cache);
        assert!(report.satisfied());
        assert_eq!(report.determine_exit_code(), 0);
    }

    #[test]
    fn test_formatting_directory_absent_or_empty_is_the_same() {
        let temp_dir = TempDir::new().unwrap();
        let empty = temp_dir.path().join("empty");
        fs::create_dir_all(&empty).unwrap();
        let absent = temp_dir.path().join("absent");

        let run = |dir: &Path| {
            let config = config_with_formatting_dir(dir);
            AuditCommand::new(&config)
                .unwrap()
                .run(Platform::Debian, &CommandsOnly(&[]), &[CheckCategory::Formatting])
                .unwrap()
        };

        let from_empty = run(&empty);
        let from_absent = run(&absent);
        assert_eq!(from_empty, from_absent);
        assert_eq!(
            from_empty.results[0].missing,
            vec![".clang-format", ".clang-tidy", ".cmake-format.yaml"]
        );
    }

    #[test]
    fn test_formatting_files_present() {
        let temp_dir = TempDir::new().unwrap();
        for file in [".clang-format", ".clang-tidy", ".cmake-format.yaml"] {
            fs::write(temp_dir.path().join(file), "").unwrap();
        }
        let config = config_with_formatting_dir(temp_dir.path());

        let report = AuditCommand::new(&config)
            .unwrap()
            .run(Platform::Debian, &CommandsOnly(&[]), &[CheckCategory::Formatting])
            .unwrap();

        assert!(report.satisfied());
    }

    #[test]
    fn test_write_report_json_and_text() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_with_formatting_dir(temp_dir.path());
        let report = AuditCommand::new(&config)
            .unwrap()
            .run(Platform::Debian, &CommandsOnly(&["ccache"]), &[CheckCategory::Cache])
            .unwrap();

        let mut text = Vec::new();
        write_report(&mut text, &report, false, false).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert!(text.contains("[SUCCESS] Compiler cache: all 1 items found"));

        let mut json = Vec::new();
        write_report(&mut json, &report, true, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["satisfied"], true);
    }
}
