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

//! Query-only process execution.

use std::process::{Command, Stdio};

/// Captured outcome of a query command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    pub success: bool,
    pub stdout: String,
}

/// Run `program` with stdin closed and capture its stdout.
///
/// Returns `None` when the program cannot be spawned, which callers treat
/// the same as "not installed".
pub fn run_query<S: AsRef<str>>(program: &str, args: &[S]) -> Option<QueryOutput> {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

    match Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) => {
            log::trace!(
                "{program} {} exited with {}",
                args.join(" "),
                output.status
            );
            Some(QueryOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            })
        }
        Err(e) => {
            log::debug!("Could not run {program}: {e}");
            None
        }
    }
}
