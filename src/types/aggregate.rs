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

use serde::Serialize;

use crate::types::timestamp::Timestamp;

/// Initial ease factor for a card that has never been graded.
pub const INITIAL_EASE: f64 = 2.5;

/// Derived per-card memory state, recomputed from the review log on every
/// scheduling call and never persisted.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAggregate {
    pub card_id: String,
    /// Number of scoring (non-view) reviews.
    pub reviews: usize,
    /// Memory-strength multiplier, clamped to [1.3, 3.5].
    pub ease: f64,
    /// Days between the last two scheduled presentations.
    pub interval_days: i64,
    /// When the card next becomes eligible for review.
    pub due: Timestamp,
    /// Most recent event of any grade, views included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<Timestamp>,
}

impl CardAggregate {
    /// The state of a card with no scoring history, due at the evaluation
    /// instant.
    pub fn new(card_id: impl Into<String>, now: Timestamp) -> Self {
        Self {
            card_id: card_id.into(),
            reviews: 0,
            ease: INITIAL_EASE,
            interval_days: 0,
            due: now,
            last_reviewed: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.reviews == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let now = Timestamp::from_millis(1_000);
        let agg = CardAggregate::new("a.md", now);
        assert_eq!(agg.reviews, 0);
        assert_eq!(agg.ease, 2.5);
        assert_eq!(agg.interval_days, 0);
        assert_eq!(agg.due, now);
        assert_eq!(agg.last_reviewed, None);
        assert!(agg.is_new());
    }
}
