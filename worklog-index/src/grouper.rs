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

//! Lazily initialized prefix grouper.
//!
//! Owns the shared trie and answers both query surfaces: completion
//! expansions and segmentation into recognized/novel groups. The trie is
//! built exactly once, on first query, from the history source followed by
//! the configured baseline, and only grows afterwards.

use std::time::Instant;

use parking_lot::RwLock;
use tracing::info;

use worklog_core::{ActivitySource, Group, GrouperConfig, Result};

use crate::expand::expansions_at;
use crate::scan::GroupScanner;
use crate::trie::Trie;

/// Prefix index over historical activity descriptions.
///
/// `None` inside the lock means not yet initialized; the trie is only
/// stored after the history source and the baseline have both been drained
/// completely, so a failed drain is retried by the next query instead of
/// being mistaken for a finished build.
pub struct PrefixGrouper<S> {
    source: S,
    config: GrouperConfig,
    trie: RwLock<Option<Trie>>,
}

impl<S: ActivitySource> PrefixGrouper<S> {
    /// A grouper over the given history source and configuration. No work
    /// happens until the first query.
    pub fn new(source: S, config: GrouperConfig) -> Self {
        Self {
            source,
            config,
            trie: RwLock::new(None),
        }
    }

    /// Completion suggestions for `text`: one per branch reachable from
    /// the prefix, with unambiguous chains collapsed. Empty for unknown
    /// prefixes; order unspecified.
    pub fn expansions(&self, text: &str) -> Result<Vec<String>> {
        self.with_trie(|trie| match trie.lookup(text) {
            Some(node) => expansions_at(node),
            None => Vec::new(),
        })
    }

    /// Segment `text` into recognized runs and at most one trailing novel
    /// run, for highlighting.
    pub fn groups_of(&self, text: &str) -> Result<Vec<Group>> {
        self.with_trie(|trie| GroupScanner::new(text, trie).scan())
    }

    /// Insert a newly recorded description, initializing first if no query
    /// has run yet.
    pub fn insert(&self, text: &str) -> Result<()> {
        let mut guard = self.trie.write();
        if guard.is_none() {
            *guard = Some(self.load()?);
        }
        if let Some(trie) = guard.as_mut() {
            trie.insert(text);
        }
        Ok(())
    }

    /// Run `f` against the trie, building it first if this is the first
    /// query. Double-checked so concurrent first queries build at most
    /// once.
    fn with_trie<T>(&self, f: impl FnOnce(&Trie) -> T) -> Result<T> {
        {
            let guard = self.trie.read();
            if let Some(trie) = guard.as_ref() {
                return Ok(f(trie));
            }
        }
        let mut guard = self.trie.write();
        if guard.is_none() {
            *guard = Some(self.load()?);
        }
        // The write lock was held across the check, so the trie is present;
        // the fallback never runs.
        Ok(f(guard.get_or_insert_with(Trie::new)))
    }

    fn load(&self) -> Result<Trie> {
        let started = Instant::now();
        let activities = self.source.activities()?;

        let mut trie = Trie::new();
        for activity in &activities {
            trie.insert(&activity.description);
        }
        for seed in &self.config.baseline {
            trie.insert(seed);
        }

        info!(
            history = activities.len(),
            baseline = self.config.baseline.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "prefix index built"
        );
        Ok(trie)
    }
}
