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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

pub const CONFIG_FILE: &str = "deck.toml";

/// How many cards a session schedules when neither the command line nor the
/// deck config says otherwise.
pub const DEFAULT_COUNT: usize = 10;

/// Per-deck configuration, from an optional `deck.toml` in the deck
/// directory. Command-line flags override these.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Key of the scheduling algorithm to use.
    pub algorithm: Option<String>,
    /// How many cards to schedule per session.
    pub count: Option<usize>,
}

pub fn load_config(directory: &Path) -> Fallible<Config> {
    let path = directory.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = read_to_string(&path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}
