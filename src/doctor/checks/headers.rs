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

use crate::platform::Platform;
use crate::probe::CheckItem;
use std::path::{Path, PathBuf};

/// Header-only test and benchmark libraries: display name and include path.
pub const FRAMEWORK_HEADERS: &[(&str, &str)] = &[
    ("catch2", "catch2/catch.hpp"),
    ("doctest", "doctest/doctest.h"),
    ("nanobench", "nanobench.h"),
];

const UNIX_INCLUDE_DIRS: &[&str] = &["/usr/include", "/usr/local/include"];

const WINDOWS_INCLUDE_DIRS: &[&str] = &[
    r"C:\vcpkg\installed\x64-windows\include",
    r"C:\tools\vcpkg\installed\x64-windows\include",
    r"C:\msys64\mingw64\include",
    r"C:\msys64\ucrt64\include",
];

/// Include directories for `platform`, most likely first, then configured extras.
pub fn include_dirs(platform: Platform, extra: &[PathBuf]) -> Vec<PathBuf> {
    let builtin = match platform {
        Platform::Debian | Platform::RedHat => UNIX_INCLUDE_DIRS,
        Platform::Windows => WINDOWS_INCLUDE_DIRS,
    };

    builtin
        .iter()
        .map(PathBuf::from)
        .chain(extra.iter().cloned())
        .collect()
}

pub fn items(platform: Platform, extra: &[PathBuf]) -> Vec<CheckItem> {
    let dirs = include_dirs(platform, extra);

    FRAMEWORK_HEADERS
        .iter()
        .map(|(name, header)| CheckItem::file(*name, candidates(&dirs, header)))
        .collect()
}

fn candidates(dirs: &[PathBuf], header: &str) -> Vec<PathBuf> {
    dirs.iter().map(|dir| join_header(dir, header)).collect()
}

fn join_header(dir: &Path, header: &str) -> PathBuf {
    header.split('/').fold(dir.to_path_buf(), |path, part| path.join(part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeKind;

    fn candidates_of(item: &CheckItem) -> &[PathBuf] {
        match &item.kind {
            ProbeKind::FileExists { candidates } => candidates,
            other => panic!("unexpected probe kind {other:?}"),
        }
    }

    #[test]
    fn test_three_frameworks() {
        let items = items(Platform::Debian, &[]);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["catch2", "doctest", "nanobench"]);
    }

    #[test]
    fn test_unix_candidates_in_order() {
        let items = items(Platform::RedHat, &[]);
        assert_eq!(
            candidates_of(&items[1]),
            &[
                PathBuf::from("/usr/include/doctest/doctest.h"),
                PathBuf::from("/usr/local/include/doctest/doctest.h"),
            ]
        );
    }

    #[test]
    fn test_windows_candidates_start_with_vcpkg() {
        let items = items(Platform::Windows, &[]);
        let first = &candidates_of(&items[2])[0];
        assert!(first.starts_with(r"C:\vcpkg\installed\x64-windows\include"));
        assert_eq!(candidates_of(&items[2]).len(), WINDOWS_INCLUDE_DIRS.len());
    }

    #[test]
    fn test_extra_paths_come_last() {
        let extra = vec![PathBuf::from("/opt/third_party/include")];
        let items = items(Platform::Debian, &extra);
        let candidates = candidates_of(&items[0]);

        assert_eq!(candidates.len(), 3);
        assert_eq!(
            candidates[2],
            PathBuf::from("/opt/third_party/include/catch2/catch.hpp")
        );
    }
}
