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

use std::io::stdin;
use std::time::Instant;

use crate::collection::Collection;
use crate::config::DEFAULT_COUNT;
use crate::error::Fallible;
use crate::history::append_history;
use crate::schedule::SchedulerContext;
use crate::schedule::get_algorithm;
use crate::schedule::replay::build_aggregates;
use crate::types::grade::Grade;
use crate::types::review::ReviewLog;
use crate::types::timestamp::Timestamp;

/// Review the scheduled cards in the terminal, appending a `view` event
/// when a front is shown and a graded event once the learner answers.
pub fn drill(
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
    println!("Reviewing {} cards.", ids.len());

    let history_path = collection.history_path();
    for id in &ids {
        let card = match collection.find_card(id) {
            Some(card) => card,
            None => {
                log::warn!("scheduled card {id} is not in the catalog.");
                continue;
            }
        };
        println!();
        match &card.title {
            Some(title) => println!("=== {title}"),
            None => println!("=== {id}"),
        }
        println!("{}", card.front);
        // The card is on screen now. Record the view before the learner does
        // anything else.
        let view = ReviewLog::new(id.clone(), Timestamp::now(), Grade::View);
        append_history(&history_path, &view)?;

        let shown_at = Instant::now();
        println!("[press enter to reveal]");
        wait_for_enter()?;
        println!("{}", card.back);

        let grade = read_grade()?;
        let graded = ReviewLog {
            card_id: id.clone(),
            ts: Timestamp::now(),
            grade,
            duration_ms: Some(shown_at.elapsed().as_millis() as i64),
        };
        append_history(&history_path, &graded)?;
    }
    println!();
    println!("Session complete.");
    Ok(())
}

fn wait_for_enter() -> Fallible<()> {
    let mut input = String::new();
    stdin().read_line(&mut input)?;
    Ok(())
}

fn read_grade() -> Fallible<Grade> {
    loop {
        println!("Grade: (1 = Again, 2 = Hard, 3 = Good, 4 = Easy)");
        let mut input = String::new();
        stdin().read_line(&mut input)?;
        match input.trim().parse::<u8>() {
            Ok(key) => {
                if let Some(grade) = Grade::from_key(key) {
                    return Ok(grade);
                }
                println!("Invalid input. Please enter a number between 1 and 4.");
            }
            Err(_) => println!("Invalid input. Please enter a number between 1 and 4."),
        }
    }
}
