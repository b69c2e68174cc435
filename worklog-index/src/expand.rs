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

//! Completion expansion over the prefix tree.
//!
//! One suggestion per outgoing edge of the resolved prefix node, with the
//! unambiguous continuation chain behind each edge collapsed into the
//! suggestion. Suggestion order is unspecified; callers that need a single
//! insertable string use [`completion_hint`].

use crate::trie::TrieNode;

/// One suggestion per outgoing edge of `node`: the edge character followed
/// by the longest chain of sole-child, non-terminal nodes behind it.
pub(crate) fn expansions_at(node: &TrieNode) -> Vec<String> {
    node.children()
        .map(|(edge, child)| {
            let mut suggestion = String::new();
            suggestion.push(edge);
            let mut current = child;
            while !current.is_terminal() {
                match current.sole_child() {
                    Some((next, grandchild)) => {
                        suggestion.push(next);
                        current = grandchild;
                    }
                    None => break,
                }
            }
            suggestion
        })
        .collect()
}

/// Longest common prefix of two strings, on character boundaries.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end += ca.len_utf8();
    }
    &a[..end]
}

/// The longest prefix shared by every suggestion, the string a completion
/// consumer inserts at the caret. `None` when there are no suggestions;
/// empty when the suggestions share nothing.
pub fn completion_hint(expansions: &[String]) -> Option<&str> {
    let (first, rest) = expansions.split_first()?;
    Some(
        rest.iter()
            .fold(first.as_str(), |acc, next| common_prefix(acc, next)),
    )
}
