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

use crate::schedule::SchedulerContext;
use crate::schedule::SchedulingPolicy;
use crate::schedule::replay::replay;
use crate::types::aggregate::CardAggregate;
use crate::types::card::Card;
use crate::types::review::ReviewLog;

/// The default scheduling policy.
///
/// Overdue cards come first, earliest due date leading, so reinforcement
/// beats novelty. New cards follow in catalog order to keep the pipeline
/// full, and cards scheduled for the future bring up the rear.
pub struct DefaultPolicy;

impl SchedulingPolicy for DefaultPolicy {
    fn name(&self) -> &'static str {
        "default"
    }

    fn description(&self) -> &'static str {
        "Simple SM-2-like: due-first, then new"
    }

    fn pick_next(&self, count: usize, ctx: &SchedulerContext) -> Vec<String> {
        let mut by_card: HashMap<&str, Vec<ReviewLog>> = HashMap::new();
        for log in ctx.history {
            by_card
                .entry(log.card_id.as_str())
                .or_default()
                .push(log.clone());
        }

        let empty: Vec<ReviewLog> = Vec::new();
        let mut aggregates: HashMap<&str, CardAggregate> = HashMap::new();
        for card in ctx.cards {
            let logs = by_card.get(card.id.as_str()).unwrap_or(&empty);
            aggregates.insert(card.id.as_str(), replay(&card.id, logs, ctx.now));
        }

        // Partition the catalog, preserving catalog order within each
        // bucket.
        let mut seen: Vec<&Card> = Vec::new();
        let mut new: Vec<&Card> = Vec::new();
        for card in ctx.cards {
            if aggregates[card.id.as_str()].is_new() {
                new.push(card);
            } else {
                seen.push(card);
            }
        }

        // The sort is stable, so cards with equal due dates keep their
        // catalog order.
        seen.sort_by_key(|card| aggregates[card.id.as_str()].due);
        let (due, upcoming): (Vec<&Card>, Vec<&Card>) = seen
            .into_iter()
            .partition(|card| aggregates[card.id.as_str()].due <= ctx.now);

        due.into_iter()
            .chain(new)
            .chain(upcoming)
            .take(count)
            .map(|card| card.id.clone())
            .collect()
    }
}
