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

use crate::error::*;
use std::io;

#[test]
fn test_error_context_unsupported_platform() {
    let error = ToolcheckError::UnsupportedPlatform {
        searched: vec![
            "/etc/debian_version".to_string(),
            "/etc/redhat-release".to_string(),
        ],
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("Debian"));
    let details = context.details.unwrap();
    assert!(details.contains("  - /etc/debian_version"));
    assert!(details.contains("  - /etc/redhat-release"));
}

#[test]
fn test_error_context_permission_denied() {
    let error = ToolcheckError::PermissionDenied("/root/.config".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    assert!(context.details.unwrap().contains("/root/.config"));
}

#[test]
fn test_error_context_invalid_category() {
    let error = ToolcheckError::InvalidCategory("linters".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("build-tools"));
    assert!(context.details.is_none());
}

#[test]
fn test_error_context_without_hints() {
    let error = ToolcheckError::Io(io::Error::other("boom"));
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_none());
    assert!(context.details.is_none());
}

#[test]
fn test_exit_codes() {
    assert_eq!(
        get_exit_code(&ToolcheckError::InvalidCategory("x".to_string())),
        2
    );
    assert_eq!(get_exit_code(&ToolcheckError::ConfigFile("x".to_string())), 2);
    assert_eq!(
        get_exit_code(&ToolcheckError::UnsupportedPlatform { searched: vec![] }),
        3
    );
    assert_eq!(
        get_exit_code(&ToolcheckError::PermissionDenied("x".to_string())),
        13
    );
    assert_eq!(
        get_exit_code(&ToolcheckError::ProbeFault {
            probe: "gcc".to_string(),
            message: "x".to_string()
        }),
        1
    );
}

#[test]
fn test_from_probe_io_classification() {
    let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    assert!(matches!(
        ToolcheckError::from_probe_io(".clang-format", denied),
        ToolcheckError::PermissionDenied(msg) if msg.starts_with(".clang-format")
    ));

    let other = io::Error::other("stale handle");
    assert!(matches!(
        ToolcheckError::from_probe_io("doctest", other),
        ToolcheckError::ProbeFault { probe, .. } if probe == "doctest"
    ));
}

#[test]
fn test_format_error_without_color() {
    let error = ToolcheckError::UnsupportedPlatform {
        searched: vec!["/etc/debian_version".to_string()],
    };
    let output = format_error_with_color(&error, false);

    assert!(output.starts_with("[ERROR] Unsupported platform"));
    assert!(output.contains("Suggestions:"));
    assert!(output.contains("• toolcheck supports"));
    assert!(!output.contains("\x1b["));
}

#[test]
fn test_format_error_includes_details() {
    let error = ToolcheckError::ConfigFile("expected `=`".to_string());
    let output = format_error_with_color(&error, false);

    assert!(output.starts_with("[ERROR] Configuration file error"));
    assert!(output.contains("    expected `=`"));
    assert!(output.contains("• Fix the syntax in config.toml"));
}
