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

//! Worklog Core
//!
//! Fundamental data types shared by the worklog engine layers: recorded
//! activities, segmentation groups, grouper configuration, errors, and the
//! history-source collaborator trait.

pub mod activity;
pub mod config;
pub mod error;
pub mod group;
pub mod source;

pub use activity::Activity;
pub use config::GrouperConfig;
pub use error::{Result, WorklogError};
pub use group::{Group, GroupKind};
pub use source::{ActivitySource, VecSource};
