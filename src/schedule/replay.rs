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

use std::collections::HashMap;

use crate::types::aggregate::CardAggregate;
use crate::types::grade::Grade;
use crate::types::review::ReviewLog;
use crate::types::timestamp::Timestamp;

/// Ease factor bounds.
const MIN_EASE: f64 = 1.3;
const MAX_EASE: f64 = 3.5;

/// How much a failed recall lowers the ease factor.
const AGAIN_EASE_PENALTY: f64 = 0.2;

/// How much a strained recall lowers the ease factor.
const HARD_EASE_PENALTY: f64 = 0.05;

/// How much an effortless recall raises the ease factor.
const EASY_EASE_BONUS: f64 = 0.05;

/// Interval growth factor for a strained recall.
const HARD_INTERVAL_FACTOR: f64 = 1.2;

/// Growth margin on top of the ease factor for an effortless recall.
const EASY_EASE_MARGIN: f64 = 0.15;

/// The first interval after an effortless recall of a learning card.
const EASY_FIRST_INTERVAL: i64 = 3;

/// How soon a failed card comes back.
const AGAIN_RETRY_MINUTES: i64 = 10;

/// Replay a card's review log and return its memory state at `now`.
///
/// A pure fold over the logs in ascending timestamp order. The logs are
/// sorted internally, so the caller's ordering is irrelevant: the same set
/// of events always produces the same aggregate. `now` only seeds the due
/// date of a card with no scoring history.
pub fn replay(card_id: &str, logs: &[ReviewLog], now: Timestamp) -> CardAggregate {
    let mut ordered: Vec<&ReviewLog> = logs.iter().collect();
    ordered.sort_by_key(|log| log.ts);

    let mut agg = CardAggregate::new(card_id, now);
    for log in ordered {
        agg.last_reviewed = Some(log.ts);
        if log.grade.is_scoring() {
            agg.reviews += 1;
        }
        match log.grade {
            Grade::Again => {
                agg.ease = (agg.ease - AGAIN_EASE_PENALTY).max(MIN_EASE);
                agg.interval_days = 0;
                agg.due = log.ts.plus_minutes(AGAIN_RETRY_MINUTES);
            }
            Grade::Hard => {
                agg.ease = (agg.ease - HARD_EASE_PENALTY).max(MIN_EASE);
                agg.interval_days = scale(agg.interval_days, HARD_INTERVAL_FACTOR).max(1);
                agg.due = log.ts.plus_days(agg.interval_days);
            }
            Grade::Good => {
                let base = if agg.interval_days == 0 {
                    1
                } else {
                    scale(agg.interval_days, agg.ease)
                };
                agg.interval_days = base.max(1);
                agg.due = log.ts.plus_days(agg.interval_days);
            }
            Grade::Easy => {
                agg.ease = (agg.ease + EASY_EASE_BONUS).min(MAX_EASE);
                let growth = if agg.interval_days == 0 {
                    EASY_FIRST_INTERVAL
                } else {
                    scale(agg.interval_days, agg.ease + EASY_EASE_MARGIN)
                };
                agg.interval_days = growth.max(1);
                agg.due = log.ts.plus_days(agg.interval_days);
            }
            Grade::View => {}
        }
    }
    agg
}

/// Replay the full history into one aggregate per card that appears in it.
///
/// Shares the fold with `replay`, so the scheduler's internal states and
/// these agree bit-for-bit on the same inputs.
pub fn build_aggregates(history: &[ReviewLog], now: Timestamp) -> HashMap<String, CardAggregate> {
    let mut by_card: HashMap<String, Vec<ReviewLog>> = HashMap::new();
    for log in history {
        by_card
            .entry(log.card_id.clone())
            .or_default()
            .push(log.clone());
    }
    by_card
        .into_iter()
        .map(|(card_id, logs)| {
            let agg = replay(&card_id, &logs, now);
            (card_id, agg)
        })
        .collect()
}

fn scale(interval_days: i64, factor: f64) -> i64 {
    (interval_days as f64 * factor).ceil() as i64
}
