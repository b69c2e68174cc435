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

//! History-source collaborator trait.

use crate::activity::Activity;
use crate::error::Result;

/// Yields all previously recorded activities as a finite, unordered batch.
///
/// Drained exactly once, when the index initializes lazily on first query.
/// A returned error surfaces as an initialization failure and the drain is
/// retried on the next query.
pub trait ActivitySource {
    /// All known activities, in no particular order.
    fn activities(&self) -> Result<Vec<Activity>>;
}

/// In-memory source backed by a vector, for tests and embedding callers
/// that already hold the history.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    items: Vec<Activity>,
}

impl VecSource {
    /// Source over the given activities.
    pub fn new(items: Vec<Activity>) -> Self {
        Self { items }
    }

    /// Source over bare descriptions, all marked ongoing from an arbitrary
    /// fixed instant. Ordering of the timestamps is irrelevant to indexing.
    pub fn from_descriptions<I, S>(descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let epoch = chrono::NaiveDateTime::default();
        Self {
            items: descriptions
                .into_iter()
                .map(|d| Activity::ongoing(d, epoch))
                .collect(),
        }
    }
}

impl ActivitySource for VecSource {
    fn activities(&self) -> Result<Vec<Activity>> {
        Ok(self.items.clone())
    }
}
