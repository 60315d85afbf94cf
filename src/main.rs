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

use clap::Parser;
use std::io::IsTerminal;
use toolcheck::commands::audit::AuditCommand;
use toolcheck::config::new_toolcheck_config;
use toolcheck::doctor::{CheckCategory, parse_categories};
use toolcheck::error::{Result, format_error_with_color, get_exit_code};
use toolcheck::logging;

#[derive(Parser)]
#[command(name = "toolcheck")]
#[command(
    author,
    version,
    about = "Audit this machine for the C++ project toolchain",
    long_about = "Audit this machine for the C++ project toolchain

Detects the OS family, probes for the required packages, compilers, build
tools, Python tooling, test frameworks, compiler cache, git identity and
formatting configuration, and reports what is missing. Nothing is installed.

With no category flags every group runs. Exit status is 0 when every
selected group is satisfied and non-zero otherwise."
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output the report as JSON
    #[arg(long)]
    json: bool,

    /// Check system packages
    #[arg(long)]
    system_packages: bool,

    /// Check compiler tools
    #[arg(long)]
    compilers: bool,

    /// Check build tools
    #[arg(long)]
    build_tools: bool,

    /// Check Python tooling
    #[arg(long)]
    python: bool,

    /// Check header-only test frameworks
    #[arg(long)]
    test_frameworks: bool,

    /// Check the compiler cache
    #[arg(long)]
    cache: bool,

    /// Check git installation and identity
    #[arg(long)]
    git: bool,

    /// Check per-user formatting configuration
    #[arg(long)]
    formatting: bool,

    /// Comma separated categories to check (e.g. "compilers,build-tools")
    #[arg(long, value_name = "CATEGORIES")]
    check: Option<String>,
}

impl Cli {
    fn selected_categories(&self) -> Result<Vec<CheckCategory>> {
        let flags = [
            (self.system_packages, CheckCategory::SystemPackages),
            (self.compilers, CheckCategory::Compilers),
            (self.build_tools, CheckCategory::BuildTools),
            (self.python, CheckCategory::Python),
            (self.test_frameworks, CheckCategory::TestFrameworks),
            (self.cache, CheckCategory::Cache),
            (self.git, CheckCategory::Git),
            (self.formatting, CheckCategory::Formatting),
        ];

        let mut categories: Vec<CheckCategory> = flags
            .into_iter()
            .filter_map(|(enabled, category)| enabled.then_some(category))
            .collect();

        if let Some(spec) = &self.check {
            categories.extend(parse_categories(spec)?);
        }

        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let config = new_toolcheck_config();
    // A config that failed to load still gets a coloured error on a terminal.
    let stderr_is_terminal = std::io::stderr().is_terminal();
    let use_color = match &config {
        Ok(config) => config.use_color(stderr_is_terminal),
        Err(_) => stderr_is_terminal,
    };

    let result: Result<i32> = (|| {
        let config = config?;
        let categories = cli.selected_categories()?;
        let command = AuditCommand::new(&config)?;
        command.execute(&categories, cli.json)
    })();

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprint!("{}", format_error_with_color(&e, use_color));
            std::process::exit(get_exit_code(&e));
        }
    }
}
