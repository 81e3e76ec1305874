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

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::Serialize;

use crate::schedule::replay::build_aggregates;
use crate::types::card::Card;
use crate::types::review::ReviewLog;
use crate::types::timestamp::Timestamp;

/// Cards without a group fall under this label in summaries.
const UNGROUPED: &str = "(ungrouped)";

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub card_count: usize,
    pub group_count: usize,
    pub review_count: usize,
    pub view_count: usize,
    pub due_count: usize,
    pub new_count: usize,
    pub groups: Vec<GroupSummary>,
}

/// Per-group review activity.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub group: String,
    pub reviews: usize,
    pub views: usize,
}

/// Summarize a deck and its history at the given instant. Due/new counts go
/// through the same replay the scheduler uses.
pub fn deck_stats(cards: &[Card], history: &[ReviewLog], now: Timestamp) -> Stats {
    let aggregates = build_aggregates(history, now);

    let mut due_count = 0;
    let mut new_count = 0;
    for card in cards {
        match aggregates.get(&card.id) {
            Some(agg) if !agg.is_new() => {
                if agg.due <= now {
                    due_count += 1;
                }
            }
            _ => new_count += 1,
        }
    }

    let review_count = history.iter().filter(|log| log.grade.is_scoring()).count();
    let view_count = history.len() - review_count;

    let groups = group_summaries(cards, history);

    Stats {
        card_count: cards.len(),
        group_count: groups.len(),
        review_count,
        view_count,
        due_count,
        new_count,
        groups,
    }
}

/// Count scoring reviews and views per card group, sorted by group name.
/// Events for cards no longer in the catalog are ignored.
pub fn group_summaries(cards: &[Card], history: &[ReviewLog]) -> Vec<GroupSummary> {
    let group_of: HashMap<&str, &str> = cards
        .iter()
        .map(|card| (card.id.as_str(), card.group.as_deref().unwrap_or(UNGROUPED)))
        .collect();

    let mut by_group: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for log in history {
        let Some(group) = group_of.get(log.card_id.as_str()).copied() else {
            continue;
        };
        let entry = by_group.entry(group).or_default();
        if log.grade.is_scoring() {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }

    by_group
        .into_iter()
        .map(|(group, (reviews, views))| GroupSummary {
            group: group.to_string(),
            reviews,
            views,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::grade::Grade;

    const DAY: i64 = 86_400_000;

    fn card(id: &str, group: Option<&str>) -> Card {
        Card {
            id: id.to_string(),
            title: None,
            front: "front".to_string(),
            back: "back".to_string(),
            group: group.map(|g| g.to_string()),
        }
    }

    fn log(card_id: &str, ts: i64, grade: Grade) -> ReviewLog {
        ReviewLog::new(card_id, Timestamp::from_millis(ts), grade)
    }

    #[test]
    fn test_group_summaries() {
        let cards = [
            card("math/a.md", Some("math")),
            card("math/b.md", Some("math")),
            card("loose.md", None),
        ];
        let history = [
            log("math/a.md", 1, Grade::View),
            log("math/a.md", 2, Grade::Good),
            log("math/b.md", 3, Grade::Again),
            log("loose.md", 4, Grade::View),
            log("gone.md", 5, Grade::Good),
        ];
        let summaries = group_summaries(&cards, &history);
        assert_eq!(
            summaries,
            vec![
                GroupSummary {
                    group: "(ungrouped)".to_string(),
                    reviews: 0,
                    views: 1,
                },
                GroupSummary {
                    group: "math".to_string(),
                    reviews: 2,
                    views: 1,
                },
            ]
        );
    }

    #[test]
    fn test_deck_stats() {
        let t = 100 * DAY;
        let now = Timestamp::from_millis(t);
        let cards = [
            card("a.md", None),
            card("b.md", None),
            card("c.md", None),
        ];
        let history = [
            // a: overdue.
            log("a.md", t - 10 * DAY, Grade::Good),
            // b: shown but never graded, still new.
            log("b.md", t - DAY, Grade::View),
        ];
        let stats = deck_stats(&cards, &history, now);
        assert_eq!(stats.card_count, 3);
        assert_eq!(stats.review_count, 1);
        assert_eq!(stats.view_count, 1);
        assert_eq!(stats.due_count, 1);
        assert_eq!(stats.new_count, 2);
    }

    #[test]
    fn test_empty_deck_stats() {
        let stats = deck_stats(&[], &[], Timestamp::from_millis(0));
        assert_eq!(stats.card_count, 0);
        assert_eq!(stats.due_count, 0);
        assert!(stats.groups.is_empty());
    }
}
