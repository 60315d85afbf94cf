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

use super::commands;
use crate::platform::Platform;
use crate::probe::CheckItem;

pub fn compiler_items(platform: Platform) -> Vec<CheckItem> {
    match platform {
        Platform::Debian | Platform::RedHat => commands(&["gcc", "g++", "clang", "clangd", "gdb"]),
        // LLVM for Windows ships lldb rather than gdb
        Platform::Windows => commands(&["gcc", "g++", "clang", "clangd", "lldb"]),
    }
}

pub fn build_tool_items(_platform: Platform) -> Vec<CheckItem> {
    commands(&["cmake", "ninja", "make"])
}

pub fn cache_items(_platform: Platform) -> Vec<CheckItem> {
    commands(&["ccache"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: Vec<CheckItem>) -> Vec<String> {
        items.into_iter().map(|i| i.name).collect()
    }

    #[test]
    fn test_compilers_per_platform() {
        assert_eq!(
            names(compiler_items(Platform::Debian)),
            vec!["gcc", "g++", "clang", "clangd", "gdb"]
        );
        assert_eq!(names(compiler_items(Platform::Windows)).last().unwrap(), "lldb");
    }

    #[test]
    fn test_build_tools_order() {
        assert_eq!(
            names(build_tool_items(Platform::RedHat)),
            vec!["cmake", "ninja", "make"]
        );
    }

    #[test]
    fn test_cache_is_single_tool() {
        assert_eq!(names(cache_items(Platform::Windows)), vec!["ccache"]);
    }
}
