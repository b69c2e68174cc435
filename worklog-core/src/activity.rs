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

//! Recorded activity model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorklogError};

/// One recorded activity: a free-text description plus the time span it
/// covers. An ongoing activity has no end yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description of what was worked on.
    pub description: String,
    /// When the activity started.
    pub start: NaiveDateTime,
    /// When the activity ended, if it has.
    pub end: Option<NaiveDateTime>,
}

impl Activity {
    /// Create an ongoing activity starting at `start`.
    pub fn ongoing(description: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            start,
            end: None,
        }
    }

    /// Create a finished activity. Fails if `end` precedes `start`.
    pub fn finished(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self> {
        if end < start {
            return Err(WorklogError::InvalidActivity(format!(
                "end {} precedes start {}",
                end, start
            )));
        }
        Ok(Self {
            description: description.into(),
            start,
            end: Some(end),
        })
    }

    /// Whether the activity is still running.
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 28)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_ongoing_has_no_end() {
        let activity = Activity::ongoing("write report", at(9));
        assert!(activity.is_ongoing());
        assert_eq!(activity.description, "write report");
    }

    #[test]
    fn test_finished_validates_span() {
        let ok = Activity::finished("standup", at(9), at(10));
        assert!(ok.is_ok());
        assert!(!ok.unwrap().is_ongoing());

        let backwards = Activity::finished("standup", at(10), at(9));
        assert!(backwards.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let activity = Activity::ongoing("review pull request", at(14));
        let json = serde_json::to_string(&activity).unwrap();
        let back: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, activity);
    }
}
