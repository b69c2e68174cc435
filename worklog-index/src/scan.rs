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

//! Segmentation scan over the prefix tree.
//!
//! Splits typed text into whitespace-aligned runs recognized from the
//! index, followed by at most one trailing run of novel text. Runs are
//! normally cut at whitespace, unless the resulting run would be shorter
//! than [`MINIMUM_GROUP_LENGTH`], in which case the run extends to the
//! next whitespace regardless of where the tree branches.

use worklog_core::{Group, GroupKind};

use crate::trie::{Trie, TrieNode};

/// A recognized run shorter than this is merged into the following token
/// instead of standing alone.
pub const MINIMUM_GROUP_LENGTH: usize = 3;

/// Single-pass scanner state. Offsets are character (codepoint) offsets
/// into the input.
pub(crate) struct GroupScanner<'a> {
    chars: Vec<char>,
    n: usize,
    node: Option<&'a TrieNode>,
    /// Outer cursor: characters consumed by the trie walk.
    i: usize,
    /// Start of the group being scanned.
    start: usize,
    /// Candidate cut point for the current group.
    cut: usize,
    groups: Vec<Group>,
}

impl<'a> GroupScanner<'a> {
    pub(crate) fn new(text: &str, trie: &'a Trie) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let n = chars.len();
        Self {
            chars,
            n,
            node: Some(trie.root()),
            i: 0,
            start: 0,
            cut: 0,
            groups: Vec::new(),
        }
    }

    pub(crate) fn scan(mut self) -> Vec<Group> {
        // Input whose very first character was never indexed is entirely
        // novel: no recognized run exists, only the remainder.
        if let (Some(first), Some(root)) = (self.chars.first(), self.node) {
            if root.child(*first).is_none() {
                self.push(GroupKind::Remainder, 0, self.n);
                return self.groups;
            }
        }

        while self.i < self.n && self.node.is_some() {
            self.cut = self.start;
            self.advance_to_branch();
            self.extend_to_whitespace();
            self.i = self.i.max(self.cut);
            self.skip_whitespace();
            self.push(GroupKind::Match, self.start, self.cut);
            self.start = self.i;
        }
        if self.start < self.n {
            self.push(GroupKind::Remainder, self.start, self.n);
        }
        self.groups
    }

    /// Step the outer cursor and the trie walk forward in lockstep until
    /// the path breaks, the node is a decision point, or input ends. The
    /// last non-whitespace offset consumed becomes the candidate cut.
    fn advance_to_branch(&mut self) {
        loop {
            let ch = self.chars[self.i];
            if !ch.is_whitespace() {
                self.cut = self.i;
            }
            self.node = self.node.and_then(|node| node.child(ch));
            self.i += 1;
            match self.node {
                Some(node) if self.i < self.n && !node.is_decision_point() => {}
                _ => break,
            }
        }
    }

    /// Push the candidate cut to the next whitespace boundary, honoring
    /// the minimum group length. The second cursor re-synchronizes the
    /// trie walk wherever it overtakes the outer cursor.
    fn extend_to_whitespace(&mut self) {
        loop {
            if self.cut >= self.i {
                if let Some(node) = self.node {
                    self.node = node.child(self.chars[self.cut]);
                }
            }
            self.cut += 1;
            if self.cut >= self.n {
                break;
            }
            let ch = self.chars[self.cut];
            if ch.is_whitespace() && self.cut - self.start >= MINIMUM_GROUP_LENGTH {
                break;
            }
        }
    }

    /// Consume the whitespace run following the cut, walking the trie in
    /// lockstep so the next group starts on the matching node.
    fn skip_whitespace(&mut self) {
        while self.i < self.n && self.chars[self.i].is_whitespace() {
            if let Some(node) = self.node {
                self.node = node.child(self.chars[self.i]);
            }
            self.i += 1;
        }
    }

    fn push(&mut self, kind: GroupKind, from: usize, to: usize) {
        let content: String = self.chars[from..to].iter().collect();
        self.groups.push(Group::new(kind, content, from..to));
    }
}
