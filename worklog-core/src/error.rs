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

//! Error types for worklog operations.

use thiserror::Error;

/// Result type for worklog operations.
pub type Result<T> = std::result::Result<T, WorklogError>;

/// Errors that can occur across the worklog engine.
#[derive(Debug, Error)]
pub enum WorklogError {
    /// The history source failed while being drained. The index stays
    /// uninitialized so the next query retries the drain.
    #[error("history query failed: {0}")]
    History(String),

    /// An activity record was rejected during construction.
    #[error("invalid activity: {0}")]
    InvalidActivity(String),
}
