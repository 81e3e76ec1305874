// Copyright 2025 Fernando Borretti
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

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

const MILLIS_PER_MINUTE: i64 = 60 * 1000;
const MILLIS_PER_DAY: i64 = 24 * 60 * MILLIS_PER_MINUTE;

/// An instant in time, as milliseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[cfg(test)]
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[cfg(test)]
    pub fn as_millis(self) -> i64 {
        self.0
    }

    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Arithmetic saturates so that runaway intervals cannot wrap the epoch.
    pub fn plus_minutes(self, minutes: i64) -> Self {
        Self(
            self.0
                .saturating_add(minutes.saturating_mul(MILLIS_PER_MINUTE)),
        )
    }

    pub fn plus_days(self, days: i64) -> Self {
        Self(self.0.saturating_add(days.saturating_mul(MILLIS_PER_DAY)))
    }

    /// Format as a human-readable UTC date, for terminal output.
    pub fn format_date(self) -> String {
        match DateTime::<Utc>::from_timestamp_millis(self.0) {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => "far future".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_minutes() {
        let ts = Timestamp::from_millis(1_000);
        assert_eq!(ts.plus_minutes(10).as_millis(), 1_000 + 600_000);
    }

    #[test]
    fn test_plus_days() {
        let ts = Timestamp::from_millis(0);
        assert_eq!(ts.plus_days(3).as_millis(), 3 * 86_400_000);
    }

    #[test]
    fn test_plus_days_saturates() {
        let ts = Timestamp::from_millis(i64::MAX - 1);
        assert_eq!(ts.plus_days(i64::MAX).as_millis(), i64::MAX);
    }

    #[test]
    fn test_ordering() {
        assert!(Timestamp::from_millis(1) < Timestamp::from_millis(2));
    }

    #[test]
    fn test_format_date() {
        let ts = Timestamp::from_millis(0);
        assert_eq!(ts.format_date(), "1970-01-01");
    }
}
