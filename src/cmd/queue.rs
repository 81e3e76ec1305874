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

use crate::collection::Collection;
use crate::config::DEFAULT_COUNT;
use crate::error::Fallible;
use crate::schedule::SchedulerContext;
use crate::schedule::get_algorithm;
use crate::schedule::replay::build_aggregates;
use crate::types::timestamp::Timestamp;

/// Print the next cards the scheduler would present, with their state.
pub fn print_queue(
    directory: Option<String>,
    count: Option<usize>,
    algorithm: Option<String>,
) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let count = count
        .or(collection.config.scheduler.count)
        .unwrap_or(DEFAULT_COUNT);
    let key = algorithm.or_else(|| collection.config.scheduler.algorithm.clone());

    let now = Timestamp::now();
    let aggregates = build_aggregates(&collection.history, now);
    let scheduler = get_algorithm(key.as_deref());
    log::debug!("Scheduling with the '{}' algorithm.", scheduler.name());
    let ctx = SchedulerContext {
        now,
        cards: &collection.cards,
        history: &collection.history,
        aggregates: &aggregates,
    };
    let ids = scheduler.pick_next(count, &ctx);

    if ids.is_empty() {
        println!("Nothing to review.");
        return Ok(());
    }
    for (position, id) in ids.iter().enumerate() {
        let state = match aggregates.get(id) {
            Some(agg) if !agg.is_new() => {
                if agg.due <= now {
                    format!("due since {}", agg.due.format_date())
                } else {
                    format!("upcoming on {}", agg.due.format_date())
                }
            }
            _ => "new".to_string(),
        };
        println!("{:>3}. {id}  ({state})", position + 1);
    }
    Ok(())
}
