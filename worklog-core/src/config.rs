// Copyright 2026 Worklog Contributors
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

//! Configuration for the prefix grouper.

use serde::{Deserialize, Serialize};

/// Configuration for prefix-grouper initialization.
///
/// The baseline is a static seed list inserted into the index after the
/// history source is drained, so completions work before any matching
/// history exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrouperConfig {
    /// Seed strings inserted identically to historical descriptions.
    #[serde(default)]
    pub baseline: Vec<String>,
}

impl GrouperConfig {
    /// Config with the given baseline seed list.
    pub fn with_baseline<I, S>(baseline: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            baseline: baseline.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(GrouperConfig::default().baseline.is_empty());
    }

    #[test]
    fn test_deserialize_missing_baseline() {
        let config: GrouperConfig = serde_json::from_str("{}").unwrap();
        assert!(config.baseline.is_empty());
    }

    #[test]
    fn test_with_baseline() {
        let config = GrouperConfig::with_baseline(["daily standup", "code review"]);
        assert_eq!(config.baseline.len(), 2);
    }
}
