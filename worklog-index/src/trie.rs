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

//! Character-level prefix tree.
//!
//! Each node owns its children exclusively; there are no back-references
//! and no deletion, so the tree only grows. End-of-word is an explicit
//! flag on the node rather than a sentinel child key.

use std::collections::HashMap;

/// One position along some inserted string(s).
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// The child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Number of outgoing edges. The terminal flag is not an edge.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether some inserted string ends exactly here.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// All outgoing edges, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// Some outgoing edge, or `None` for a leaf. When the node has more
    /// than one child the selection is unspecified (map iteration order).
    pub fn any_child(&self) -> Option<(char, &TrieNode)> {
        self.children.iter().next().map(|(c, node)| (*c, node))
    }

    /// The single outgoing edge of an unambiguous node, or `None` if the
    /// node is a leaf or a branch point.
    pub fn sole_child(&self) -> Option<(char, &TrieNode)> {
        if self.children.len() == 1 {
            self.children.iter().next().map(|(c, node)| (*c, node))
        } else {
            None
        }
    }

    /// Whether a scan must cut here: more than one outgoing edge, or an
    /// inserted string ends here while others continue. The end-of-word
    /// marker counts toward the branch degree.
    pub fn is_decision_point(&self) -> bool {
        self.children.len() > 1 || (self.terminal && !self.children.is_empty())
    }
}

/// Mutable prefix tree owning its root for the life of the index.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// An empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node (the empty prefix).
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Insert `text` character by character, creating nodes for the
    /// unmatched suffix and marking the final node terminal. Idempotent
    /// for shared prefixes; an empty string marks the root terminal.
    pub fn insert(&mut self, text: &str) {
        let mut node = &mut self.root;
        for ch in text.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.terminal = true;
    }

    /// Walk from the root consuming one character of `prefix` per step.
    /// `None` as soon as any character has no matching child.
    pub fn lookup(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_string_is_terminal() {
        let mut trie = Trie::new();
        trie.insert("group subgroup one");

        let node = trie.lookup("group subgroup one").unwrap();
        assert!(node.is_terminal());
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_lookup_unknown_prefix() {
        let mut trie = Trie::new();
        trie.insert("test");

        assert!(trie.lookup("x").is_none());
        assert!(trie.lookup("tex").is_none());
        assert!(trie.lookup("te").is_some());
    }

    #[test]
    fn test_shared_prefix_single_path() {
        let mut trie = Trie::new();
        trie.insert("group one");
        trie.insert("group two");

        // Shared prefix stays a single chain up to the divergence.
        let node = trie.lookup("group ").unwrap();
        assert_eq!(node.child_count(), 2);
        assert!(trie.lookup("g").unwrap().sole_child().is_some());

        // Ambiguous nodes still yield some edge, but never a sole one.
        assert!(node.any_child().is_some());
        assert!(node.sole_child().is_none());
    }

    #[test]
    fn test_empty_insert_marks_root() {
        let mut trie = Trie::new();
        assert!(!trie.root().is_terminal());
        trie.insert("");
        assert!(trie.root().is_terminal());
    }

    #[test]
    fn test_decision_point_includes_terminal() {
        let mut trie = Trie::new();
        trie.insert("aaaa");
        trie.insert("aaaa bbbb");

        // "aaaa" ends here while "aaaa bbbb" continues: a scan must cut.
        let node = trie.lookup("aaaa").unwrap();
        assert_eq!(node.child_count(), 1);
        assert!(node.is_decision_point());

        // A terminal leaf is not a decision point.
        let leaf = trie.lookup("aaaa bbbb").unwrap();
        assert!(!leaf.is_decision_point());
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("test");
        trie.insert("test");

        let node = trie.lookup("tes").unwrap();
        assert_eq!(node.child_count(), 1);
    }
}
