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

use serde::Deserialize;
use serde::Serialize;

use crate::types::grade::Grade;
use crate::types::timestamp::Timestamp;

/// One immutable, append-only review event.
///
/// Serialized camelCase, one object per line of `history.jsonl`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewLog {
    pub card_id: String,
    pub ts: Timestamp,
    pub grade: Grade,
    /// How long the learner spent answering, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,
}

impl ReviewLog {
    pub fn new(card_id: impl Into<String>, ts: Timestamp, grade: Grade) -> Self {
        Self {
            card_id: card_id.into(),
            ts,
            grade,
            duration_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let log = ReviewLog {
            card_id: "a.md".to_string(),
            ts: Timestamp::from_millis(1000),
            grade: Grade::Good,
            duration_ms: Some(250),
        };
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(
            json,
            "{\"cardId\":\"a.md\",\"ts\":1000,\"grade\":\"good\",\"durationMs\":250}"
        );
    }

    #[test]
    fn test_duration_is_optional() {
        let log: ReviewLog =
            serde_json::from_str("{\"cardId\":\"a.md\",\"ts\":5,\"grade\":\"view\"}").unwrap();
        assert_eq!(log.duration_ms, None);
        let json = serde_json::to_string(&log).unwrap();
        assert!(!json.contains("durationMs"));
    }
}
