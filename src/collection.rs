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

use std::env::current_dir;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::config::load_config;
use crate::error::Fallible;
use crate::error::fail;
use crate::history::history_path;
use crate::history::read_history;
use crate::parser::parse_deck;
use crate::types::card::Card;
use crate::types::review::ReviewLog;

/// A loaded deck: the card catalog, its review history, and its config.
pub struct Collection {
    pub directory: PathBuf,
    pub config: Config,
    pub cards: Vec<Card>,
    pub history: Vec<ReviewLog>,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config = load_config(&directory)?;

        let cards = {
            log::debug!("Loading deck...");
            let start = Instant::now();
            let cards = parse_deck(&directory)?;
            let end = Instant::now();
            let duration = end.duration_since(start).as_millis();
            log::debug!("Deck loaded in {duration}ms.");
            cards
        };

        let history = read_history(&history_path(&directory))?;

        Ok(Self {
            directory,
            config,
            cards,
            history,
        })
    }

    pub fn history_path(&self) -> PathBuf {
        history_path(&self.directory)
    }

    pub fn find_card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_existent_directory() {
        let result = Collection::new(Some("./derpherp".to_string()));
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[test]
    fn test_test_directory() -> Fallible<()> {
        let collection = Collection::new(Some("./test".to_string()))?;
        assert!(!collection.cards.is_empty());
        Ok(())
    }
}
