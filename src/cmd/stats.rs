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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::stats::deck_stats;
use crate::types::timestamp::Timestamp;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Plain,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Plain => write!(f, "plain"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_deck_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let collection = Collection::new(directory)?;
    let stats = deck_stats(&collection.cards, &collection.history, Timestamp::now());
    match format {
        StatsFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsFormat::Plain => {
            println!("cards:    {}", stats.card_count);
            println!("groups:   {}", stats.group_count);
            println!("reviews:  {}", stats.review_count);
            println!("views:    {}", stats.view_count);
            println!("due now:  {}", stats.due_count);
            println!("new:      {}", stats.new_count);
            for group in &stats.groups {
                println!(
                    "  {}: {} reviews, {} views",
                    group.group, group.reviews, group.views
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_directory() {
        assert!(print_deck_stats(Some("./test".to_string()), StatsFormat::Plain).is_ok());
    }

    #[test]
    fn test_non_existent_directory() {
        assert!(print_deck_stats(Some("./derpherp".to_string()), StatsFormat::Json).is_err());
    }
}
