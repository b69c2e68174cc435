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

//! Segmentation output unit.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Whether a group was recognized from previously recorded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    /// Covered by a matching path through the index.
    Match,
    /// Trailing text with no matching path; at most one per segmentation,
    /// always last.
    Remainder,
}

/// A contiguous run of the segmented input.
///
/// `range` is a half-open span of character (codepoint) offsets into the
/// segmented input. Groups appear in left-to-right order without
/// overlapping; the whitespace separating two runs belongs to no group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Recognized or trailing-novel.
    pub kind: GroupKind,
    /// The substring of the input this group covers.
    pub content: String,
    /// Character-offset span `[start, end)` within the input.
    pub range: Range<usize>,
}

impl Group {
    /// Construct a group over `content` spanning `range`.
    pub fn new(kind: GroupKind, content: impl Into<String>, range: Range<usize>) -> Self {
        Self {
            kind,
            content: content.into(),
            range,
        }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    /// Whether the group covers no characters.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
