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

//! Worklog Index Layer
//!
//! A character-level prefix tree over previously recorded activity
//! descriptions, driving two read-only query engines:
//!
//! - **Expansion**: completion suggestions for a partially typed
//!   description, with unambiguous trie chains collapsed into a single
//!   suggestion per branch.
//! - **Segmentation**: splitting freshly typed text into whitespace-aligned
//!   runs that are recognized from history versus a trailing novel run,
//!   for downstream highlighting.
//!
//! The index is built lazily, exactly once, from an
//! [`ActivitySource`](worklog_core::ActivitySource) plus a configured
//! baseline seed list, and is append-only afterwards.

pub mod expand;
pub mod grouper;
pub mod trie;

mod scan;

pub use expand::{common_prefix, completion_hint};
pub use grouper::PrefixGrouper;
pub use scan::MINIMUM_GROUP_LENGTH;
pub use trie::{Trie, TrieNode};
